//! Scalars of every supported group.
//!
//! Groups sharing a scalar field share a variant: Curve25519, Edwards25519
//! and Ristretto255 use `Scalar25519`, Curve448 and Edwards448 use
//! `Scalar448`.

#[cfg(feature = "curve448")]
use super::Ed448Scalar;
use super::decode_scalar;
use crate::{Error, Result, hash2curve::CurveId};
use alloc::vec::Vec;
use elliptic_curve::{
    ff::{Field, PrimeField},
    rand_core::{CryptoRng, RngCore},
};

#[cfg(any(feature = "nist", feature = "secp256k1", feature = "curve448"))]
use elliptic_curve::hash2curve::ExpandMsgXmd;
#[cfg(any(feature = "nist", feature = "secp256k1"))]
use elliptic_curve::hash2curve::GroupDigest;
#[cfg(any(feature = "nist", feature = "secp256k1"))]
use sha2::Sha256;
#[cfg(any(feature = "nist", feature = "curve448"))]
use sha2::Sha512;

#[derive(Copy, Clone, Debug)]
pub(crate) enum ScalarValue {
    #[cfg(feature = "nist")]
    P256(p256::Scalar),
    #[cfg(feature = "nist")]
    P384(p384::Scalar),
    #[cfg(feature = "nist")]
    P521(p521::Scalar),
    #[cfg(feature = "secp256k1")]
    Secp256k1(k256::Scalar),
    #[cfg(any(feature = "curve25519", feature = "ristretto255"))]
    Scalar25519(curve25519_dalek::Scalar),
    #[cfg(feature = "curve448")]
    Scalar448(Ed448Scalar),
}

/// Apply `$body` to the inner scalar, keeping the variant.
macro_rules! map_scalar {
    ($value:expr, $s:ident => $body:expr) => {
        match $value {
            #[cfg(feature = "nist")]
            ScalarValue::P256($s) => ScalarValue::P256($body),
            #[cfg(feature = "nist")]
            ScalarValue::P384($s) => ScalarValue::P384($body),
            #[cfg(feature = "nist")]
            ScalarValue::P521($s) => ScalarValue::P521($body),
            #[cfg(feature = "secp256k1")]
            ScalarValue::Secp256k1($s) => ScalarValue::Secp256k1($body),
            #[cfg(any(feature = "curve25519", feature = "ristretto255"))]
            ScalarValue::Scalar25519($s) => ScalarValue::Scalar25519($body),
            #[cfg(feature = "curve448")]
            ScalarValue::Scalar448($s) => ScalarValue::Scalar448($body),
        }
    };
}

/// Evaluate `$body` with the inner scalar.
macro_rules! with_scalar {
    ($value:expr, $s:ident => $body:expr) => {
        match $value {
            #[cfg(feature = "nist")]
            ScalarValue::P256($s) => $body,
            #[cfg(feature = "nist")]
            ScalarValue::P384($s) => $body,
            #[cfg(feature = "nist")]
            ScalarValue::P521($s) => $body,
            #[cfg(feature = "secp256k1")]
            ScalarValue::Secp256k1($s) => $body,
            #[cfg(any(feature = "curve25519", feature = "ristretto255"))]
            ScalarValue::Scalar25519($s) => $body,
            #[cfg(feature = "curve448")]
            ScalarValue::Scalar448($s) => $body,
        }
    };
}

/// Combine two scalars of the same field.
macro_rules! zip_scalars {
    ($a:expr, $b:expr, |$x:ident, $y:ident| $body:expr) => {
        match ($a, $b) {
            #[cfg(feature = "nist")]
            (ScalarValue::P256($x), ScalarValue::P256($y)) => Ok(ScalarValue::P256($body)),
            #[cfg(feature = "nist")]
            (ScalarValue::P384($x), ScalarValue::P384($y)) => Ok(ScalarValue::P384($body)),
            #[cfg(feature = "nist")]
            (ScalarValue::P521($x), ScalarValue::P521($y)) => Ok(ScalarValue::P521($body)),
            #[cfg(feature = "secp256k1")]
            (ScalarValue::Secp256k1($x), ScalarValue::Secp256k1($y)) => {
                Ok(ScalarValue::Secp256k1($body))
            }
            #[cfg(any(feature = "curve25519", feature = "ristretto255"))]
            (ScalarValue::Scalar25519($x), ScalarValue::Scalar25519($y)) => {
                Ok(ScalarValue::Scalar25519($body))
            }
            #[cfg(feature = "curve448")]
            (ScalarValue::Scalar448($x), ScalarValue::Scalar448($y)) => {
                Ok(ScalarValue::Scalar448($body))
            }
            #[allow(unreachable_patterns)]
            _ => Err(Error::GroupMismatch),
        }
    };
}

fn one_like<F: Field>(_: &F) -> F {
    F::ONE
}

fn random_like<F: Field>(_: &F, rng: &mut (impl CryptoRng + RngCore)) -> F {
    F::random(rng)
}

fn decode_like<F: PrimeField>(_: &F, bytes: &[u8]) -> Result<F> {
    decode_scalar(bytes)
}

fn encode<F: PrimeField>(scalar: &F) -> Vec<u8> {
    scalar.to_repr().as_ref().to_vec()
}

fn invert<F: Field>(scalar: &F) -> Result<F> {
    Option::from(scalar.invert()).ok_or(Error::NotInvertible)
}

impl ScalarValue {
    pub(crate) fn one(&self) -> Self {
        map_scalar!(self, s => one_like(s))
    }

    pub(crate) fn random(&self, rng: &mut (impl CryptoRng + RngCore)) -> Self {
        map_scalar!(self, s => random_like(s, &mut *rng))
    }

    pub(crate) fn is_zero(&self) -> bool {
        with_scalar!(self, s => bool::from(s.is_zero()))
    }

    pub(crate) fn encode(&self) -> Vec<u8> {
        with_scalar!(self, s => encode(s))
    }

    pub(crate) fn decode(&self, bytes: &[u8]) -> Result<Self> {
        Ok(map_scalar!(self, s => decode_like(s, bytes)?))
    }

    pub(crate) fn add(&self, other: &Self) -> Result<Self> {
        zip_scalars!(self, other, |a, b| *a + *b)
    }

    pub(crate) fn sub(&self, other: &Self) -> Result<Self> {
        zip_scalars!(self, other, |a, b| *a - *b)
    }

    pub(crate) fn mul(&self, other: &Self) -> Result<Self> {
        zip_scalars!(self, other, |a, b| *a * *b)
    }

    pub(crate) fn invert(&self) -> Result<Self> {
        Ok(map_scalar!(self, s => invert(s)?))
    }

    pub(crate) fn same_field(&self, other: &Self) -> bool {
        core::mem::discriminant(self) == core::mem::discriminant(other)
    }

    /// Hash to the scalar field of `id`.
    ///
    /// Weierstrass curves and edwards448 use their backend's `hash_to_field`
    /// with the suite's expander. The 25519 field reduces 48 expanded bytes,
    /// read as a big-endian integer, modulo the group order.
    pub(crate) fn hash(id: CurveId, msg: &[u8], dst: &[u8]) -> Result<Self> {
        match id {
            #[cfg(feature = "nist")]
            CurveId::P256 => Ok(ScalarValue::P256(p256::NistP256::hash_to_scalar::<
                ExpandMsgXmd<Sha256>,
            >(&[msg], &[dst])?)),
            #[cfg(feature = "nist")]
            CurveId::P384 => Ok(ScalarValue::P384(p384::NistP384::hash_to_scalar::<
                ExpandMsgXmd<Sha512>,
            >(&[msg], &[dst])?)),
            #[cfg(feature = "nist")]
            CurveId::P521 => Ok(ScalarValue::P521(p521::NistP521::hash_to_scalar::<
                ExpandMsgXmd<Sha512>,
            >(&[msg], &[dst])?)),
            #[cfg(feature = "secp256k1")]
            CurveId::Secp256k1 => Ok(ScalarValue::Secp256k1(
                k256::Secp256k1::hash_to_scalar::<ExpandMsgXmd<Sha256>>(&[msg], &[dst])?,
            )),
            #[cfg(feature = "curve25519")]
            CurveId::Curve25519 | CurveId::Edwards25519 => {
                let uniform = id.hash().expand_message(msg, dst, 48)?;
                let mut wide = [0u8; 64];
                for (out, byte) in wide.iter_mut().zip(uniform.iter().rev()) {
                    *out = *byte;
                }
                Ok(ScalarValue::Scalar25519(
                    curve25519_dalek::Scalar::from_bytes_mod_order_wide(&wide),
                ))
            }
            #[cfg(feature = "curve448")]
            CurveId::Curve448 | CurveId::Edwards448 => Ok(ScalarValue::Scalar448(
                Ed448Scalar::hash::<ExpandMsgXmd<Sha512>>(msg, dst),
            )),
            #[allow(unreachable_patterns)]
            _ => Err(Error::UnsupportedSuite),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ScalarValue;
    use crate::Error;
    use alloc::{vec, vec::Vec};

    fn samples() -> impl Iterator<Item = ScalarValue> {
        [
            #[cfg(feature = "nist")]
            ScalarValue::P256(p256::Scalar::from(7u64)),
            #[cfg(feature = "nist")]
            ScalarValue::P384(p384::Scalar::from(7u64)),
            #[cfg(feature = "nist")]
            ScalarValue::P521(p521::Scalar::from(7u64)),
            #[cfg(feature = "secp256k1")]
            ScalarValue::Secp256k1(k256::Scalar::from(7u64)),
            #[cfg(any(feature = "curve25519", feature = "ristretto255"))]
            ScalarValue::Scalar25519(curve25519_dalek::Scalar::from(7u64)),
            #[cfg(feature = "curve448")]
            ScalarValue::Scalar448(super::Ed448Scalar::from(7u64)),
        ]
        .into_iter()
    }

    #[test]
    fn field_identities() {
        for s in samples() {
            let one = s.one();
            let zero = s.sub(&s).unwrap();
            assert!(zero.is_zero());
            assert!(!s.is_zero());
            assert_eq!(s.mul(&one).unwrap().encode(), s.encode());
            assert_eq!(s.add(&zero).unwrap().encode(), s.encode());
            assert!(s.sub(&s).unwrap().is_zero());
            assert_eq!(s.mul(&s.invert().unwrap()).unwrap().encode(), one.encode());
            assert_eq!(zero.invert().unwrap_err(), Error::NotInvertible);
        }
    }

    #[test]
    fn encoding_round_trip() {
        for s in samples() {
            let bytes = s.encode();
            assert_eq!(s.decode(&bytes).unwrap().encode(), bytes);
            assert_eq!(s.decode(&bytes[1..]).unwrap_err(), Error::Decode);
        }
    }

    #[test]
    fn non_canonical_rejected() {
        for s in samples() {
            let bytes = vec![0xff; s.encode().len()];
            assert_eq!(s.decode(&bytes).unwrap_err(), Error::Decode);
        }
    }

    #[test]
    fn mismatched_fields() {
        let scalars: Vec<_> = samples().collect();
        for (i, a) in scalars.iter().enumerate() {
            for (j, b) in scalars.iter().enumerate() {
                assert_eq!(a.same_field(b), i == j);
                if i != j {
                    assert_eq!(a.mul(b).unwrap_err(), Error::GroupMismatch);
                }
            }
        }
    }

    #[test]
    fn zero_encodes_as_zero_bytes() {
        for s in samples() {
            let zero = s.sub(&s).unwrap();
            assert!(zero.encode().iter().all(|b| *b == 0));
            assert_eq!(zero.encode().len(), s.encode().len());
        }
    }

    #[cfg(feature = "curve25519")]
    #[test]
    fn wide_reduction_matches_backend() {
        use crate::{Hash, hash2curve::CurveId};

        let dst = b"ciphersuite-scalar-tests-V1";
        let uniform = Hash::Sha512.expand_message(b"abc", dst, 48).unwrap();
        let mut wide = [0u8; 64];
        wide[..48].copy_from_slice(&uniform);
        wide[..48].reverse();
        let expected = curve25519_dalek::Scalar::from_bytes_mod_order_wide(&wide);

        let ScalarValue::Scalar25519(s) = ScalarValue::hash(CurveId::Edwards25519, b"abc", dst)
            .unwrap()
        else {
            unreachable!()
        };
        assert_eq!(s, expected);
    }
}
