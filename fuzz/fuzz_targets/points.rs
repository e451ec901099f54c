#![no_main]
// Decoding arbitrary bytes as elements of every registered group
use ciphersuite::{Group, Identifier};
use libfuzzer_sys::fuzz_target;

fn test_group(group: &dyn Group, data: &[u8]) {
    let len = group.element_length();
    if data.len() < len {
        return;
    }

    let Ok(element) = group.new_element().decode(&data[..len]) else {
        return;
    };

    // Accepted encodings are canonical
    assert_eq!(element.encode(), &data[..len]);

    // Multiplying by one and zero
    let one = group.new_scalar().one();
    assert_eq!(element.mult(&one).unwrap(), element);
    assert!(element.mult(&group.new_scalar()).unwrap().is_identity());
}

fuzz_target!(|data: &[u8]| {
    for id in Identifier::all() {
        let dst = id.make_dst("fuzz", "1").unwrap();
        let group = id.get(&dst).unwrap();
        test_group(group.as_ref(), data);
    }
});
