//! Hash-to-curve suite identifiers.

use crate::{Error, Hash};
use core::{
    fmt::{self, Display},
    str::FromStr,
};

/// Curves reachable through [`HashToCurve`](super::HashToCurve).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum CurveId {
    /// NIST P-256
    P256,
    /// NIST P-384
    P384,
    /// NIST P-521
    P521,
    /// secp256k1
    Secp256k1,
    /// Curve25519 in Montgomery form, encoded as RFC 7748 u-coordinates.
    Curve25519,
    /// edwards25519, encoded per RFC 8032.
    Edwards25519,
    /// Curve448 in Montgomery form, encoded as RFC 7748 u-coordinates.
    Curve448,
    /// edwards448, encoded per RFC 8032.
    Edwards448,
}

/// Map from field elements to curve points.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum MapToCurve {
    /// Simplified Shallue-van de Woestijne-Ulas (RFC 9380 §6.6.2), including
    /// the 3-isogeny for secp256k1.
    Sswu,
    /// Elligator 2 (RFC 9380 §6.7.1).
    Elligator2,
}

impl CurveId {
    /// All curves in descriptor table order.
    pub const ALL: [CurveId; 8] = [
        CurveId::P256,
        CurveId::P384,
        CurveId::P521,
        CurveId::Secp256k1,
        CurveId::Curve25519,
        CurveId::Edwards25519,
        CurveId::Curve448,
        CurveId::Edwards448,
    ];

    /// Name used as the first component of suite IDs.
    pub const fn name(self) -> &'static str {
        match self {
            CurveId::P256 => "P256",
            CurveId::P384 => "P384",
            CurveId::P521 => "P521",
            CurveId::Secp256k1 => "secp256k1",
            CurveId::Curve25519 => "curve25519",
            CurveId::Edwards25519 => "edwards25519",
            CurveId::Curve448 => "curve448",
            CurveId::Edwards448 => "edwards448",
        }
    }

    /// Hash function used by `expand_message_xmd` for this curve's suites.
    pub const fn hash(self) -> Hash {
        match self {
            CurveId::P256 | CurveId::Secp256k1 => Hash::Sha256,
            _ => Hash::Sha512,
        }
    }

    /// Map from field elements to points.
    pub const fn map_to_curve(self) -> MapToCurve {
        match self {
            CurveId::P256 | CurveId::P384 | CurveId::P521 | CurveId::Secp256k1 => {
                MapToCurve::Sswu
            }
            _ => MapToCurve::Elligator2,
        }
    }

    /// Length of an encoded element in bytes.
    pub const fn element_length(self) -> usize {
        match self {
            CurveId::P256 | CurveId::Secp256k1 => 33,
            CurveId::P384 => 49,
            CurveId::P521 => 67,
            CurveId::Curve25519 | CurveId::Edwards25519 => 32,
            CurveId::Curve448 => 56,
            CurveId::Edwards448 => 57,
        }
    }

    /// Whether the backend for this curve was compiled in.
    pub const fn is_available(self) -> bool {
        match self {
            CurveId::P256 | CurveId::P384 | CurveId::P521 => cfg!(feature = "nist"),
            CurveId::Secp256k1 => cfg!(feature = "secp256k1"),
            CurveId::Curve25519 | CurveId::Edwards25519 => cfg!(feature = "curve25519"),
            CurveId::Curve448 | CurveId::Edwards448 => cfg!(feature = "curve448"),
        }
    }
}

/// Hash-to-curve suite: a curve plus the choice between hashing (`_RO_`) and
/// encoding (`_NU_`).
///
/// Only random-oracle suites can back a [`Group`](crate::Group). The
/// encoding variants exist so they can be named and rejected.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Suite {
    curve: CurveId,
    random_oracle: bool,
}

impl Suite {
    /// `P256_XMD:SHA-256_SSWU_RO_`
    pub const P256_XMD_SHA256_SSWU_RO: Self = Self::ro(CurveId::P256);
    /// `P256_XMD:SHA-256_SSWU_NU_`
    pub const P256_XMD_SHA256_SSWU_NU: Self = Self::nu(CurveId::P256);
    /// `P384_XMD:SHA-512_SSWU_RO_`
    pub const P384_XMD_SHA512_SSWU_RO: Self = Self::ro(CurveId::P384);
    /// `P384_XMD:SHA-512_SSWU_NU_`
    pub const P384_XMD_SHA512_SSWU_NU: Self = Self::nu(CurveId::P384);
    /// `P521_XMD:SHA-512_SSWU_RO_`
    pub const P521_XMD_SHA512_SSWU_RO: Self = Self::ro(CurveId::P521);
    /// `P521_XMD:SHA-512_SSWU_NU_`
    pub const P521_XMD_SHA512_SSWU_NU: Self = Self::nu(CurveId::P521);
    /// `secp256k1_XMD:SHA-256_SSWU_RO_`
    pub const SECP256K1_XMD_SHA256_SSWU_RO: Self = Self::ro(CurveId::Secp256k1);
    /// `secp256k1_XMD:SHA-256_SSWU_NU_`
    pub const SECP256K1_XMD_SHA256_SSWU_NU: Self = Self::nu(CurveId::Secp256k1);
    /// `curve25519_XMD:SHA-512_ELL2_RO_`
    pub const CURVE25519_XMD_SHA512_ELL2_RO: Self = Self::ro(CurveId::Curve25519);
    /// `curve25519_XMD:SHA-512_ELL2_NU_`
    pub const CURVE25519_XMD_SHA512_ELL2_NU: Self = Self::nu(CurveId::Curve25519);
    /// `edwards25519_XMD:SHA-512_ELL2_RO_`
    pub const EDWARDS25519_XMD_SHA512_ELL2_RO: Self = Self::ro(CurveId::Edwards25519);
    /// `edwards25519_XMD:SHA-512_ELL2_NU_`
    pub const EDWARDS25519_XMD_SHA512_ELL2_NU: Self = Self::nu(CurveId::Edwards25519);
    /// `curve448_XMD:SHA-512_ELL2_RO_`
    pub const CURVE448_XMD_SHA512_ELL2_RO: Self = Self::ro(CurveId::Curve448);
    /// `curve448_XMD:SHA-512_ELL2_NU_`
    pub const CURVE448_XMD_SHA512_ELL2_NU: Self = Self::nu(CurveId::Curve448);
    /// `edwards448_XMD:SHA-512_ELL2_RO_`
    pub const EDWARDS448_XMD_SHA512_ELL2_RO: Self = Self::ro(CurveId::Edwards448);
    /// `edwards448_XMD:SHA-512_ELL2_NU_`
    pub const EDWARDS448_XMD_SHA512_ELL2_NU: Self = Self::nu(CurveId::Edwards448);

    const fn ro(curve: CurveId) -> Self {
        Self {
            curve,
            random_oracle: true,
        }
    }

    const fn nu(curve: CurveId) -> Self {
        Self {
            curve,
            random_oracle: false,
        }
    }

    /// Curve this suite maps to.
    pub const fn curve(self) -> CurveId {
        self.curve
    }

    /// Whether this is a hash (`_RO_`) rather than an encoding (`_NU_`).
    pub const fn is_random_oracle(self) -> bool {
        self.random_oracle
    }

    /// Hash function used for message expansion.
    pub const fn hash(self) -> Hash {
        self.curve.hash()
    }

    /// Suite ID string, e.g. `P256_XMD:SHA-256_SSWU_RO_`.
    pub const fn id(self) -> &'static str {
        match (self.curve, self.random_oracle) {
            (CurveId::P256, true) => "P256_XMD:SHA-256_SSWU_RO_",
            (CurveId::P256, false) => "P256_XMD:SHA-256_SSWU_NU_",
            (CurveId::P384, true) => "P384_XMD:SHA-512_SSWU_RO_",
            (CurveId::P384, false) => "P384_XMD:SHA-512_SSWU_NU_",
            (CurveId::P521, true) => "P521_XMD:SHA-512_SSWU_RO_",
            (CurveId::P521, false) => "P521_XMD:SHA-512_SSWU_NU_",
            (CurveId::Secp256k1, true) => "secp256k1_XMD:SHA-256_SSWU_RO_",
            (CurveId::Secp256k1, false) => "secp256k1_XMD:SHA-256_SSWU_NU_",
            (CurveId::Curve25519, true) => "curve25519_XMD:SHA-512_ELL2_RO_",
            (CurveId::Curve25519, false) => "curve25519_XMD:SHA-512_ELL2_NU_",
            (CurveId::Edwards25519, true) => "edwards25519_XMD:SHA-512_ELL2_RO_",
            (CurveId::Edwards25519, false) => "edwards25519_XMD:SHA-512_ELL2_NU_",
            (CurveId::Curve448, true) => "curve448_XMD:SHA-512_ELL2_RO_",
            (CurveId::Curve448, false) => "curve448_XMD:SHA-512_ELL2_NU_",
            (CurveId::Edwards448, true) => "edwards448_XMD:SHA-512_ELL2_RO_",
            (CurveId::Edwards448, false) => "edwards448_XMD:SHA-512_ELL2_NU_",
        }
    }
}

impl From<CurveId> for Suite {
    /// Random-oracle suite of `curve`.
    fn from(curve: CurveId) -> Self {
        Self::ro(curve)
    }
}

impl Display for Suite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Suite {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        CurveId::ALL
            .iter()
            .flat_map(|&curve| [Self::ro(curve), Self::nu(curve)])
            .find(|suite| suite.id() == s)
            .ok_or(Error::UnknownSuite)
    }
}

#[cfg(test)]
mod tests {
    use super::{CurveId, MapToCurve, Suite};
    use crate::{Error, Hash};

    #[test]
    fn suite_ids_round_trip() {
        for curve in CurveId::ALL {
            for suite in [Suite::ro(curve), Suite::nu(curve)] {
                let id = suite.id();
                assert!(id.starts_with(curve.name()));
                assert!(id.contains(curve.hash().name()));
                assert_eq!(id.parse::<Suite>(), Ok(suite));
            }
        }
    }

    #[test]
    fn suite_ids_name_their_map() {
        for curve in CurveId::ALL {
            let tag = match curve.map_to_curve() {
                MapToCurve::Sswu => "_SSWU_",
                MapToCurve::Elligator2 => "_ELL2_",
            };
            assert!(Suite::ro(curve).id().contains(tag));
        }
    }

    #[test]
    fn unknown_suite() {
        assert_eq!(
            "P256_XMD:SHA-512_SSWU_RO_".parse::<Suite>(),
            Err(Error::UnknownSuite)
        );
        assert_eq!(
            "P384_XMD:SHA-384_SSWU_RO_".parse::<Suite>(),
            Err(Error::UnknownSuite)
        );
        assert_eq!(
            "ristretto255_XMD:SHA-512_R255MAP_RO_".parse::<Suite>(),
            Err(Error::UnknownSuite)
        );
    }

    #[test]
    fn nist_suites_use_matching_hash() {
        assert_eq!(Suite::P256_XMD_SHA256_SSWU_RO.hash(), Hash::Sha256);
        assert_eq!(Suite::P384_XMD_SHA512_SSWU_RO.hash(), Hash::Sha512);
        assert_eq!(Suite::P521_XMD_SHA512_SSWU_RO.hash(), Hash::Sha512);
        assert!(!Suite::P256_XMD_SHA256_SSWU_NU.is_random_oracle());
    }
}
