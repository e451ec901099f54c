#![no_main]
// Hashing arbitrary messages under arbitrary tags
use ciphersuite::{Error, Identifier};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&split, data)) = data.split_first() else {
        return;
    };
    let (dst, msg) = data.split_at(usize::from(split).min(data.len()));

    for id in Identifier::all() {
        let group = match id.get(dst) {
            Ok(group) => group,
            Err(Error::ZeroLengthDst | Error::ShortDst) => return,
            Err(err) => panic!("{id}: {err}"),
        };

        let element = group.hash_to_group(msg, None).unwrap();
        assert_eq!(element.encode().len(), group.element_length());
        assert_eq!(group.new_element().decode(&element.encode()).unwrap(), element);

        let scalar = group.hash_to_scalar(msg, None).unwrap();
        assert_eq!(group.new_scalar().decode(&scalar.encode()).unwrap(), scalar);
    }
});
