#![no_main]
// Scalar decoding and field arithmetic for every registered group
use ciphersuite::{Group, Identifier, Scalar};
use libfuzzer_sys::fuzz_target;

fn test_field(a: Scalar, b: Scalar) {
    // Commutativity
    assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
    assert_eq!(a.mul(&b).unwrap(), b.mul(&a).unwrap());

    // Identity
    assert_eq!(a.mul(&a.one()).unwrap(), a);
    assert!(a.sub(&a).unwrap().is_zero());

    // Inverse
    if !a.is_zero() {
        assert_eq!(a.mul(&a.invert().unwrap()).unwrap(), a.one());
    }
}

fuzz_target!(|data: &[u8]| {
    for id in Identifier::all() {
        let dst = id.make_dst("fuzz", "1").unwrap();
        let group = id.get(&dst).unwrap();

        let len = group.scalar_length();
        if data.len() < 2 * len {
            continue;
        }

        let decoded = group.new_scalar().decode(&data[..len]);
        let Ok(a) = decoded else {
            continue;
        };
        assert_eq!(a.encode(), &data[..len]);

        // Second operand is hashed so that it is always in range
        let b = group.hash_to_scalar(&data[len..2 * len], None).unwrap();
        test_field(a, b);

        let _ = group.mult_bytes(&data[..len], &data[len..]);
    }
});
