//! Points of every supported group.
//!
//! Curve25519 points are held as edwards25519 points and only converted to
//! Montgomery u-coordinates when encoded. Curve448 points are held as
//! u-coordinates and multiplied with the backend's Montgomery ladder.

#[cfg(feature = "curve448")]
use super::{Ed448Point, Ed448Scalar, Mont448Point};
use super::{ScalarValue, decode_point};
#[cfg(any(feature = "curve25519", feature = "curve448"))]
use crate::hash2curve::curves::Curve;
use crate::{Error, Result, hash2curve::CurveId};
use alloc::vec::Vec;
use elliptic_curve::group::{Group, GroupEncoding};

#[cfg(any(
    feature = "nist",
    feature = "secp256k1",
    feature = "curve25519",
    feature = "curve448"
))]
use elliptic_curve::hash2curve::ExpandMsgXmd;
#[cfg(any(feature = "nist", feature = "secp256k1"))]
use elliptic_curve::hash2curve::GroupDigest;
#[cfg(any(feature = "nist", feature = "secp256k1"))]
use sha2::Sha256;
#[cfg(any(feature = "nist", feature = "curve25519", feature = "curve448"))]
use sha2::Sha512;

#[derive(Copy, Clone, Debug)]
pub(crate) enum Point {
    #[cfg(feature = "nist")]
    P256(p256::ProjectivePoint),
    #[cfg(feature = "nist")]
    P384(p384::ProjectivePoint),
    #[cfg(feature = "nist")]
    P521(p521::ProjectivePoint),
    #[cfg(feature = "secp256k1")]
    Secp256k1(k256::ProjectivePoint),
    #[cfg(feature = "curve25519")]
    Curve25519(curve25519_dalek::EdwardsPoint),
    #[cfg(feature = "curve25519")]
    Edwards25519(curve25519_dalek::EdwardsPoint),
    #[cfg(feature = "curve448")]
    Curve448(Mont448Point),
    #[cfg(feature = "curve448")]
    Edwards448(Ed448Point),
    #[cfg(feature = "ristretto255")]
    Ristretto255(curve25519_dalek::RistrettoPoint),
}

/// Apply `$body` to points of groups encoded by their backend, keeping the
/// variant. Montgomery variants are matched by the trailing `$arms`.
macro_rules! map_point {
    ($point:expr, $p:ident => $body:expr, $($arms:tt)*) => {
        match $point {
            #[cfg(feature = "nist")]
            Point::P256($p) => Point::P256($body),
            #[cfg(feature = "nist")]
            Point::P384($p) => Point::P384($body),
            #[cfg(feature = "nist")]
            Point::P521($p) => Point::P521($body),
            #[cfg(feature = "secp256k1")]
            Point::Secp256k1($p) => Point::Secp256k1($body),
            #[cfg(feature = "curve25519")]
            Point::Edwards25519($p) => Point::Edwards25519($body),
            #[cfg(feature = "curve448")]
            Point::Edwards448($p) => Point::Edwards448($body),
            #[cfg(feature = "ristretto255")]
            Point::Ristretto255($p) => Point::Ristretto255($body),
            $($arms)*
        }
    };
}

/// Evaluate `$body` with points of groups encoded by their backend.
macro_rules! with_point {
    ($point:expr, $p:ident => $body:expr, $($arms:tt)*) => {
        match $point {
            #[cfg(feature = "nist")]
            Point::P256($p) => $body,
            #[cfg(feature = "nist")]
            Point::P384($p) => $body,
            #[cfg(feature = "nist")]
            Point::P521($p) => $body,
            #[cfg(feature = "secp256k1")]
            Point::Secp256k1($p) => $body,
            #[cfg(feature = "curve25519")]
            Point::Edwards25519($p) => $body,
            #[cfg(feature = "curve448")]
            Point::Edwards448($p) => $body,
            #[cfg(feature = "ristretto255")]
            Point::Ristretto255($p) => $body,
            $($arms)*
        }
    };
}

#[cfg(feature = "curve448")]
const MONT448_IDENTITY: Mont448Point = ed448_goldilocks::MontgomeryPoint([0; 56]);

fn identity_like<G: Group>(_: &G) -> G {
    G::identity()
}

fn decode_like<G: GroupEncoding>(_: &G, bytes: &[u8]) -> Result<G> {
    decode_point(bytes)
}

impl Point {
    pub(crate) fn identity(&self) -> Self {
        map_point!(self, p => identity_like(p),
            #[cfg(feature = "curve25519")]
            Point::Curve25519(p) => Point::Curve25519(identity_like(p)),
            #[cfg(feature = "curve448")]
            Point::Curve448(_) => Point::Curve448(MONT448_IDENTITY),
        )
    }

    pub(crate) fn is_identity(&self) -> bool {
        with_point!(self, p => bool::from(p.is_identity()),
            #[cfg(feature = "curve25519")]
            Point::Curve25519(p) => bool::from(p.is_identity()),
            #[cfg(feature = "curve448")]
            Point::Curve448(u) => *u == MONT448_IDENTITY,
        )
    }

    /// Zero of the scalar field acting on this point's group.
    pub(crate) fn zero_scalar(&self) -> ScalarValue {
        use elliptic_curve::ff::Field;

        match self {
            #[cfg(feature = "nist")]
            Point::P256(_) => ScalarValue::P256(p256::Scalar::ZERO),
            #[cfg(feature = "nist")]
            Point::P384(_) => ScalarValue::P384(p384::Scalar::ZERO),
            #[cfg(feature = "nist")]
            Point::P521(_) => ScalarValue::P521(p521::Scalar::ZERO),
            #[cfg(feature = "secp256k1")]
            Point::Secp256k1(_) => ScalarValue::Secp256k1(k256::Scalar::ZERO),
            #[cfg(feature = "curve25519")]
            Point::Curve25519(_) | Point::Edwards25519(_) => {
                ScalarValue::Scalar25519(<curve25519_dalek::Scalar as Field>::ZERO)
            }
            #[cfg(feature = "curve448")]
            Point::Curve448(_) | Point::Edwards448(_) => ScalarValue::Scalar448(Ed448Scalar::ZERO),
            #[cfg(feature = "ristretto255")]
            Point::Ristretto255(_) => {
                ScalarValue::Scalar25519(<curve25519_dalek::Scalar as Field>::ZERO)
            }
        }
    }

    pub(crate) fn encode(&self) -> Vec<u8> {
        with_point!(self, p => AsRef::<[u8]>::as_ref(&p.to_bytes()).to_vec(),
            #[cfg(feature = "curve25519")]
            Point::Curve25519(p) => p.to_montgomery().to_bytes().to_vec(),
            #[cfg(feature = "curve448")]
            Point::Curve448(u) => u.0.to_vec(),
        )
    }

    /// Decode an element of the same group as `self`. Only canonical
    /// encodings of prime-order subgroup elements are accepted.
    pub(crate) fn decode(&self, bytes: &[u8]) -> Result<Self> {
        let point = map_point!(self, p => decode_like(p, bytes)?,
            #[cfg(feature = "curve25519")]
            Point::Curve25519(_) => {
                check_montgomery_u(CurveId::Curve25519, bytes)?;
                Point::from_montgomery_u(CurveId::Curve25519, bytes).ok_or(Error::Decode)?
            }
            #[cfg(feature = "curve448")]
            Point::Curve448(_) => {
                check_montgomery_u(CurveId::Curve448, bytes)?;
                Point::from_montgomery_u(CurveId::Curve448, bytes).ok_or(Error::Decode)?
            }
        );

        if !point.is_torsion_free() || point.encode() != bytes {
            return Err(Error::Decode);
        }
        Ok(point)
    }

    fn is_torsion_free(&self) -> bool {
        match self {
            #[cfg(feature = "curve25519")]
            Point::Curve25519(p) | Point::Edwards25519(p) => p.is_torsion_free(),
            #[cfg(feature = "curve448")]
            Point::Edwards448(p) => bool::from(p.is_torsion_free()),
            // (l - 1) * P = -P, which has the same u-coordinate, exactly
            // when P has order l.
            #[cfg(feature = "curve448")]
            Point::Curve448(u) => *u == MONT448_IDENTITY || &*u * &(-Ed448Scalar::ONE) == *u,
            #[allow(unreachable_patterns)]
            _ => true,
        }
    }

    pub(crate) fn mul(&self, scalar: &ScalarValue) -> Result<Self> {
        Ok(match (self, scalar) {
            #[cfg(feature = "nist")]
            (Point::P256(p), ScalarValue::P256(s)) => Point::P256(*p * *s),
            #[cfg(feature = "nist")]
            (Point::P384(p), ScalarValue::P384(s)) => Point::P384(*p * *s),
            #[cfg(feature = "nist")]
            (Point::P521(p), ScalarValue::P521(s)) => Point::P521(*p * *s),
            #[cfg(feature = "secp256k1")]
            (Point::Secp256k1(p), ScalarValue::Secp256k1(s)) => Point::Secp256k1(*p * *s),
            #[cfg(feature = "curve25519")]
            (Point::Curve25519(p), ScalarValue::Scalar25519(s)) => Point::Curve25519(p * s),
            #[cfg(feature = "curve25519")]
            (Point::Edwards25519(p), ScalarValue::Scalar25519(s)) => Point::Edwards25519(p * s),
            #[cfg(feature = "curve448")]
            (Point::Curve448(u), ScalarValue::Scalar448(s)) => Point::Curve448(u * s),
            #[cfg(feature = "curve448")]
            (Point::Edwards448(p), ScalarValue::Scalar448(s)) => Point::Edwards448(*p * *s),
            #[cfg(feature = "ristretto255")]
            (Point::Ristretto255(p), ScalarValue::Scalar25519(s)) => Point::Ristretto255(p * s),
            #[allow(unreachable_patterns)]
            _ => return Err(Error::GroupMismatch),
        })
    }

    pub(crate) fn same_group(&self, other: &Self) -> bool {
        core::mem::discriminant(self) == core::mem::discriminant(other)
    }

    /// Point of the `id` group from its encoding: SEC1 for Weierstrass
    /// curves, RFC 8032 for Edwards curves, RFC 7748 for Montgomery curves.
    ///
    /// Subgroup membership is not checked.
    pub(crate) fn from_bytes(id: CurveId, bytes: &[u8]) -> Option<Self> {
        match id {
            #[cfg(feature = "nist")]
            CurveId::P256 => decode_point(bytes).ok().map(Point::P256),
            #[cfg(feature = "nist")]
            CurveId::P384 => decode_point(bytes).ok().map(Point::P384),
            #[cfg(feature = "nist")]
            CurveId::P521 => decode_point(bytes).ok().map(Point::P521),
            #[cfg(feature = "secp256k1")]
            CurveId::Secp256k1 => decode_point(bytes).ok().map(Point::Secp256k1),
            #[cfg(feature = "curve25519")]
            CurveId::Edwards25519 => decode_point(bytes).ok().map(Point::Edwards25519),
            #[cfg(feature = "curve448")]
            CurveId::Edwards448 => decode_point(bytes).ok().map(Point::Edwards448),
            CurveId::Curve25519 | CurveId::Curve448 => Point::from_montgomery_u(id, bytes),
            #[allow(unreachable_patterns)]
            _ => None,
        }
    }

    /// `u = 0` is taken as the identity. The u-coordinate is assumed to be
    /// on the curve.
    fn from_montgomery_u(id: CurveId, bytes: &[u8]) -> Option<Self> {
        match id {
            #[cfg(feature = "curve25519")]
            CurveId::Curve25519 => {
                let u = curve25519_dalek::MontgomeryPoint(bytes.try_into().ok()?);
                if u.0 == [0; 32] {
                    return Some(Point::Curve25519(curve25519_dalek::EdwardsPoint::identity()));
                }
                u.to_edwards(0).map(Point::Curve25519)
            }
            #[cfg(feature = "curve448")]
            CurveId::Curve448 => Some(Point::Curve448(ed448_goldilocks::MontgomeryPoint(bytes.try_into().ok()?))),
            _ => None,
        }
    }

    /// Hash to the group of `id` with its random-oracle suite.
    pub(crate) fn hash(id: CurveId, msg: &[u8], dst: &[u8]) -> Result<Self> {
        match id {
            #[cfg(feature = "nist")]
            CurveId::P256 => Ok(Point::P256(p256::NistP256::hash_from_bytes::<
                ExpandMsgXmd<Sha256>,
            >(&[msg], &[dst])?)),
            #[cfg(feature = "nist")]
            CurveId::P384 => Ok(Point::P384(p384::NistP384::hash_from_bytes::<
                ExpandMsgXmd<Sha512>,
            >(&[msg], &[dst])?)),
            #[cfg(feature = "nist")]
            CurveId::P521 => Ok(Point::P521(p521::NistP521::hash_from_bytes::<
                ExpandMsgXmd<Sha512>,
            >(&[msg], &[dst])?)),
            #[cfg(feature = "secp256k1")]
            CurveId::Secp256k1 => Ok(Point::Secp256k1(k256::Secp256k1::hash_from_bytes::<
                ExpandMsgXmd<Sha256>,
            >(&[msg], &[dst])?)),
            // The rational map to edwards25519 is an isomorphism, so both
            // 25519 suites hash on the Edwards model.
            #[cfg(feature = "curve25519")]
            CurveId::Curve25519 => hash_edwards25519(msg, dst).map(Point::Curve25519),
            #[cfg(feature = "curve25519")]
            CurveId::Edwards25519 => hash_edwards25519(msg, dst).map(Point::Edwards25519),
            // The 4-isogeny back to curve448 multiplies by 4 once more than
            // the curve448 suite's cofactor clearing.
            #[cfg(feature = "curve448")]
            CurveId::Curve448 => {
                let quarter = Ed448Scalar::from(4u64).invert();
                let hashed = Ed448Point::hash::<ExpandMsgXmd<Sha512>>(msg, dst);
                Ok(Point::Curve448((hashed * quarter).to_montgomery()))
            }
            #[cfg(feature = "curve448")]
            CurveId::Edwards448 => Ok(Point::Edwards448(
                Ed448Point::hash::<ExpandMsgXmd<Sha512>>(msg, dst),
            )),
            #[allow(unreachable_patterns)]
            _ => Err(Error::UnsupportedSuite),
        }
    }
}

/// Reject u-coordinates that are not canonical or lie on the quadratic twist.
#[cfg(any(feature = "curve25519", feature = "curve448"))]
fn check_montgomery_u(id: CurveId, bytes: &[u8]) -> Result<()> {
    let curve = Curve::get(id);
    let u = curve.field.from_le_bytes(bytes).ok_or(Error::Decode)?;
    if !curve.has_point_at(&u) {
        return Err(Error::Decode);
    }
    Ok(())
}

#[cfg(feature = "curve25519")]
fn hash_edwards25519(msg: &[u8], dst: &[u8]) -> Result<curve25519_dalek::EdwardsPoint> {
    let hashed =
        curve25519_dalek_ml::edwards::EdwardsPoint::hash_to_curve::<ExpandMsgXmd<Sha512>>(msg, dst);
    curve25519_dalek::edwards::CompressedEdwardsY(hashed.compress().to_bytes())
        .decompress()
        .ok_or(Error::Hashing)
}

#[cfg(test)]
mod tests {
    use super::Point;
    use crate::{Error, hash2curve::CurveId};

    const DST: &[u8] = b"ciphersuite-point-tests-V1";

    #[cfg(feature = "curve448")]
    #[test]
    fn curve448_ladder_matches_edwards_multiplication() {
        use super::{Ed448Point, Ed448Scalar};
        use elliptic_curve::hash2curve::ExpandMsgXmd;
        use sha2::Sha512;

        let s = Ed448Scalar::from(0x5eed_u64);
        let quarter = Ed448Scalar::from(4u64).invert();
        let edwards = Ed448Point::hash::<ExpandMsgXmd<Sha512>>(b"ladder", DST) * quarter;

        let Point::Curve448(u) = Point::hash(CurveId::Curve448, b"ladder", DST).unwrap() else {
            unreachable!()
        };
        assert_eq!(u, edwards.to_montgomery());
        assert_eq!(&u * &s, (edwards * s).to_montgomery());
    }

    #[cfg(feature = "curve448")]
    #[test]
    fn curve448_rejects_low_order_points() {
        let hashed = Point::hash(CurveId::Curve448, b"input", DST).unwrap();

        // u = 1 lies on the twist, u = p - 1 has order 4
        let mut one = [0u8; 56];
        one[0] = 1;
        assert_eq!(hashed.decode(&one).unwrap_err(), Error::Decode);

        let mut minus_one = [0xff; 56];
        minus_one[0] = 0xfe;
        minus_one[28] = 0xfe;
        assert_eq!(hashed.decode(&minus_one).unwrap_err(), Error::Decode);
    }

    #[cfg(feature = "curve25519")]
    #[test]
    fn curve25519_matches_edwards25519_hash() {
        let mont = Point::hash(CurveId::Curve25519, b"input", DST).unwrap();
        let Point::Edwards25519(edwards) = Point::hash(CurveId::Edwards25519, b"input", DST).unwrap()
        else {
            unreachable!()
        };
        assert_eq!(mont.encode(), edwards.to_montgomery().to_bytes());
    }

    #[test]
    fn hashed_points_are_canonical() {
        for id in CurveId::ALL.into_iter().filter(|id| id.is_available()) {
            let point = Point::hash(id, b"canonical", DST).unwrap();
            let bytes = point.encode();
            assert_eq!(bytes.len(), id.element_length());
            assert_eq!(point.decode(&bytes).unwrap().encode(), bytes);
        }
    }
}
