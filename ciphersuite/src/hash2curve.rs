//! Groups built on RFC 9380 hash-to-curve suites.
//!
//! <https://www.rfc-editor.org/rfc/rfc9380.html>

mod suite;

pub(crate) mod curves;
pub(crate) mod field;

pub use self::suite::{CurveId, MapToCurve, Suite};

use self::curves::Curve;
use crate::{
    Element, Error, Group, Identifier, Result, Scalar,
    arithmetic::{Point, ScalarValue},
    hash::check_dst,
};
use alloc::vec::Vec;

/// [`Group`] over the curve of a random-oracle hash-to-curve suite.
///
/// Hashing to the group uses the suite's `hash_to_curve`. Hashing to a scalar
/// uses `hash_to_field` with the suite's expander, reduced modulo the group
/// order.
#[derive(Clone, Debug)]
pub struct HashToCurve {
    suite: Suite,
    curve: &'static Curve,
    dst: Vec<u8>,
}

impl HashToCurve {
    /// Bind `suite` to a domain separation tag.
    ///
    /// # Errors
    /// - [`Error::NotRandomOracle`] for `_NU_` suites
    /// - [`Error::UnsupportedSuite`] if the curve's backend feature is disabled
    /// - [`Error::ZeroLengthDst`] or [`Error::ShortDst`] for a rejected `dst`
    pub fn new(suite: Suite, dst: &[u8]) -> Result<Self> {
        if !suite.is_random_oracle() {
            return Err(Error::NotRandomOracle);
        }
        if !suite.curve().is_available() {
            return Err(Error::UnsupportedSuite);
        }
        check_dst(dst)?;

        Ok(Self {
            suite,
            curve: Curve::get(suite.curve()),
            dst: dst.to_vec(),
        })
    }

    /// Same suite bound to another domain separation tag.
    pub fn with_dst(&self, dst: &[u8]) -> Result<Self> {
        Self::new(self.suite, dst)
    }

    /// Hash-to-curve suite of this group.
    pub fn suite(&self) -> Suite {
        self.suite
    }
}

impl Group for HashToCurve {
    fn identifier(&self) -> Identifier {
        Identifier::for_curve(self.suite.curve())
    }

    fn new_scalar(&self) -> Scalar {
        Scalar::new(self.curve.base.zero_scalar())
    }

    fn new_element(&self) -> Element {
        Element::new(self.curve.base)
    }

    fn identity(&self) -> Element {
        Element::new(self.curve.base.identity())
    }

    fn base(&self) -> Element {
        Element::new(self.curve.base)
    }

    fn element_length(&self) -> usize {
        self.suite.curve().element_length()
    }

    fn hash_to_group(&self, input: &[u8], dst: Option<&[u8]>) -> Result<Element> {
        match dst {
            Some(dst) => self.with_dst(dst)?.hash_to_group(input, None),
            None => Point::hash(self.curve.id, input, &self.dst).map(Element::new),
        }
    }

    fn hash_to_scalar(&self, input: &[u8], dst: Option<&[u8]>) -> Result<Scalar> {
        match dst {
            Some(dst) => self.with_dst(dst)?.hash_to_scalar(input, None),
            None => ScalarValue::hash(self.curve.id, input, &self.dst).map(Scalar::new),
        }
    }

    fn dst(&self) -> &[u8] {
        &self.dst
    }
}

#[cfg(test)]
mod tests {
    use super::{CurveId, HashToCurve, Suite};
    use crate::{Error, Group};
    use hex_literal::hex;

    fn dst(suite: Suite) -> alloc::string::String {
        alloc::format!("QUUX-V01-CS02-with-{suite}")
    }

    fn group(suite: Suite) -> HashToCurve {
        HashToCurve::new(suite, dst(suite).as_bytes()).unwrap()
    }

    #[test]
    fn rejects_nonuniform_suites() {
        let err = HashToCurve::new(Suite::P256_XMD_SHA256_SSWU_NU, b"0123456789abcdef");
        assert_eq!(err.unwrap_err(), Error::NotRandomOracle);
    }

    #[test]
    fn rejects_empty_dst() {
        for curve in CurveId::ALL.into_iter().filter(|id| id.is_available()) {
            let suite = Suite::from(curve);
            assert_eq!(
                HashToCurve::new(suite, b"").unwrap_err(),
                Error::ZeroLengthDst
            );
            let group = group(suite);
            assert_eq!(
                group.hash_to_group(b"msg", Some(&b""[..])).unwrap_err(),
                Error::ZeroLengthDst
            );
        }
    }

    #[test]
    fn lengths_match_encodings() {
        for curve in CurveId::ALL.into_iter().filter(|id| id.is_available()) {
            let group = group(Suite::from(curve));
            assert_eq!(group.base().encode().len(), group.element_length());
            assert_eq!(group.identity().encode().len(), group.element_length());
            assert_eq!(group.new_scalar().encode().len(), group.scalar_length());
            assert!(group.identity().is_identity());
            assert!(!group.base().is_identity());
        }
    }

    #[test]
    fn per_call_dst_leaves_group_unchanged() {
        for curve in CurveId::ALL.into_iter().filter(|id| id.is_available()) {
            let suite = Suite::from(curve);
            let group = group(suite);
            let other = &b"another-protocol-V1"[..];

            let overridden = group.hash_to_group(b"msg", Some(other)).unwrap();
            assert_eq!(group.dst(), dst(suite).as_bytes());
            assert_eq!(
                overridden,
                group.with_dst(other).unwrap().hash_to_group(b"msg", None).unwrap()
            );
            assert_ne!(overridden, group.hash_to_group(b"msg", None).unwrap());
        }
    }

    #[cfg(feature = "nist")]
    #[test]
    fn p256_hash_to_curve() {
        let group = group(Suite::P256_XMD_SHA256_SSWU_RO);

        let p = group.hash_to_group(b"", None).unwrap();
        assert_eq!(
            p.encode(),
            hex!("03 2c15230b26dbc6fc9a37051158c95b79656e17a1a920b11394ca91c44247d3e4")
        );

        let p = group.hash_to_group(b"abc", None).unwrap();
        assert_eq!(
            p.encode(),
            hex!("02 0bb8b87485551aa43ed54f009230450b492fead5f1cc91658775dac4a3388a0f")
        );
    }

    #[cfg(feature = "nist")]
    #[test]
    fn p256_hash_to_scalar() {
        let group = HashToCurve::new(
            Suite::P256_XMD_SHA256_SSWU_RO,
            b"HashToScalar-VOPRF08-\x00\x00\x03",
        )
        .unwrap();
        let s = group.hash_to_scalar(&[0xa3; 32], None).unwrap();
        assert_eq!(
            s.encode(),
            hex!("c15d9e9ab36d495d9d62954db6aafe06d3edabf41600d58f9be0737af2719e97")
        );
    }

    #[cfg(feature = "secp256k1")]
    #[test]
    fn secp256k1_hash_to_curve() {
        let group = group(Suite::SECP256K1_XMD_SHA256_SSWU_RO);

        let p = group.hash_to_group(b"", None).unwrap();
        assert_eq!(
            p.encode(),
            hex!("03 c1cae290e291aee617ebaef1be6d73861479c48b841eaba9b7b5852ddfeb1346")
        );

        let p = group.hash_to_group(b"abc", None).unwrap();
        assert_eq!(
            p.encode(),
            hex!("02 3377e01eab42db296b512293120c6cee72b6ecf9f9205760bd9ff11fb3cb2c4b")
        );
    }

    #[cfg(feature = "curve25519")]
    #[test]
    fn edwards25519_hash_to_curve() {
        let group = group(Suite::EDWARDS25519_XMD_SHA512_ELL2_RO);
        let p = group.hash_to_group(b"", None).unwrap();

        // y = 09a6c856...e115dc21, x = 3c3da692...e4822fc6 (even)
        let mut expected =
            hex!("09a6c8561a0b22bef63124c588ce4c62ea83a3c899763af26d795302e115dc21");
        expected.reverse();
        assert_eq!(p.encode(), expected);
    }

    #[cfg(feature = "curve25519")]
    #[test]
    fn curve25519_hash_to_curve() {
        let group = group(Suite::CURVE25519_XMD_SHA512_ELL2_RO);

        let mut expected =
            hex!("2de3780abb67e861289f5749d16d3e217ffa722192d16bbd9d1bfb9d112b98c0");
        expected.reverse();
        assert_eq!(group.hash_to_group(b"", None).unwrap().encode(), expected);

        let mut expected =
            hex!("2b4419f1f2d48f5872de692b0aca72cc7b0a60915dd70bde432e826b6abc526d");
        expected.reverse();
        assert_eq!(group.hash_to_group(b"abc", None).unwrap().encode(), expected);
    }

    #[test]
    fn hashed_elements_decode() {
        for curve in CurveId::ALL.into_iter().filter(|id| id.is_available()) {
            let group = group(Suite::from(curve));
            for msg in [&b""[..], b"abc", b"a512_aaaaaaaaaa"] {
                let p = group.hash_to_group(msg, None).unwrap();
                let bytes = p.encode();
                assert_eq!(bytes.len(), group.element_length());
                assert_eq!(group.new_element().decode(&bytes).unwrap(), p);
            }
        }
    }
}
