//! Prime field arithmetic over big integers.
//!
//! Only used by the curve descriptor table: coordinate recovery, base point
//! encodings and the twist check on Montgomery u-coordinates.

use alloc::vec::Vec;
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Prime field `GF(p)`.
#[derive(Clone, Debug)]
pub(crate) struct Field {
    modulus: BigUint,
    byte_len: usize,
}

impl Field {
    pub(crate) fn new(modulus: BigUint) -> Self {
        let byte_len = modulus.bits().div_ceil(8) as usize;
        Self { modulus, byte_len }
    }

    /// Minimum number of bytes needed to encode an element.
    pub(crate) fn byte_len(&self) -> usize {
        self.byte_len
    }

    /// Bit length of the modulus.
    pub(crate) fn bits(&self) -> usize {
        self.modulus.bits() as usize
    }

    pub(crate) fn from_i64(&self, value: i64) -> BigUint {
        let magnitude = BigUint::from(value.unsigned_abs()) % &self.modulus;
        if value < 0 {
            self.neg(&magnitude)
        } else {
            magnitude
        }
    }

    pub(crate) fn reduce(&self, a: &BigUint) -> BigUint {
        a % &self.modulus
    }

    pub(crate) fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.modulus
    }

    pub(crate) fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + &self.modulus - (b % &self.modulus)) % &self.modulus
    }

    pub(crate) fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.modulus
    }

    pub(crate) fn square(&self, a: &BigUint) -> BigUint {
        self.mul(a, a)
    }

    pub(crate) fn neg(&self, a: &BigUint) -> BigUint {
        self.sub(&BigUint::zero(), a)
    }

    /// Multiplicative inverse, with `inv0(0) == 0`.
    pub(crate) fn inv0(&self, a: &BigUint) -> BigUint {
        a.modpow(&(&self.modulus - 2u32), &self.modulus)
    }

    pub(crate) fn div(&self, a: &BigUint, b: &BigUint) -> BigUint {
        self.mul(a, &self.inv0(b))
    }

    /// Euler's criterion. Zero counts as a square.
    pub(crate) fn is_square(&self, a: &BigUint) -> bool {
        let a = self.reduce(a);
        if a.is_zero() {
            return true;
        }
        let exp = (&self.modulus - 1u32) >> 1;
        a.modpow(&exp, &self.modulus).is_one()
    }

    /// Square root with `sgn0 == 0`, if one exists.
    ///
    /// Supports `p = 3 mod 4` and `p = 5 mod 8`, which covers every curve in
    /// the descriptor table.
    pub(crate) fn sqrt(&self, a: &BigUint) -> Option<BigUint> {
        let a = self.reduce(a);
        let p = &self.modulus;
        let residue = (p % 8u32).iter_u32_digits().next().unwrap_or(0);

        let root = if residue % 4 == 3 {
            a.modpow(&((p + 1u32) >> 2), p)
        } else {
            debug_assert_eq!(residue, 5);
            let candidate = a.modpow(&((p + 3u32) >> 3), p);
            if self.square(&candidate) == a {
                candidate
            } else {
                let sqrt_m1 = BigUint::from(2u32).modpow(&((p - 1u32) >> 2), p);
                self.mul(&candidate, &sqrt_m1)
            }
        };

        if self.square(&root) != a {
            return None;
        }

        Some(if sgn0(&root) { self.neg(&root) } else { root })
    }

    /// Decode a canonical little-endian element of exactly `byte_len` bytes.
    pub(crate) fn from_le_bytes(&self, bytes: &[u8]) -> Option<BigUint> {
        if bytes.len() != self.byte_len {
            return None;
        }
        let value = BigUint::from_bytes_le(bytes);
        (value < self.modulus).then_some(value)
    }

    /// Little-endian encoding padded to `len` bytes.
    pub(crate) fn to_le_bytes(&self, a: &BigUint, len: usize) -> Vec<u8> {
        let mut bytes = a.to_bytes_le();
        bytes.resize(len, 0);
        bytes
    }

    /// Big-endian encoding padded to `byte_len` bytes.
    pub(crate) fn to_be_bytes(&self, a: &BigUint) -> Vec<u8> {
        let bytes = a.to_bytes_be();
        let mut out = Vec::with_capacity(self.byte_len);
        out.resize(self.byte_len - bytes.len(), 0);
        out.extend_from_slice(&bytes);
        out
    }
}

/// Sign of a field element as defined by RFC 9380 §4.1 for `m = 1`.
pub(crate) fn sgn0(a: &BigUint) -> bool {
    a.bit(0)
}

/// Parse a hexadecimal literal from the descriptor table.
pub(crate) fn from_hex(hex: &str) -> BigUint {
    BigUint::parse_bytes(hex.as_bytes(), 16).expect("invalid hexadecimal curve constant")
}
