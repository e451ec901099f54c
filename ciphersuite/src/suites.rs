//! Registry of ciphersuites by numeric identifier.

use crate::{Error, Group, Result, hash2curve::CurveId};
use alloc::{boxed::Box, format, vec::Vec};
use core::fmt::{self, Display};

#[cfg(any(
    feature = "curve25519",
    feature = "curve448",
    feature = "nist",
    feature = "secp256k1"
))]
use crate::{HashToCurve, Suite};

/// One past the largest registered identifier.
pub const MAX_ID: u8 = 10;

/// Numeric ciphersuite identifier.
///
/// Values outside `1..MAX_ID` can be represented (e.g. when parsed off the
/// wire) but every lookup on them fails with [`Error::InvalidIdentifier`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Identifier(u8);

impl Identifier {
    /// ristretto255 with SHA-512.
    pub const RISTRETTO255_SHA512: Self = Self(1);
    /// NIST P-256 with SHA-256.
    pub const P256_SHA256: Self = Self(2);
    /// NIST P-384 with SHA-512.
    pub const P384_SHA512: Self = Self(3);
    /// NIST P-521 with SHA-512.
    pub const P521_SHA512: Self = Self(4);
    /// Curve25519 with SHA-512.
    pub const CURVE25519_SHA512: Self = Self(5);
    /// edwards25519 with SHA-512.
    pub const EDWARDS25519_SHA512: Self = Self(6);
    /// Curve448 with SHA-512.
    pub const CURVE448_SHA512: Self = Self(7);
    /// edwards448 with SHA-512.
    pub const EDWARDS448_SHA512: Self = Self(8);
    /// secp256k1 with SHA-256.
    pub const SECP256K1_SHA256: Self = Self(9);

    /// Checked constructor.
    ///
    /// # Errors
    /// [`Error::InvalidIdentifier`] outside of `1..MAX_ID`.
    pub const fn new(id: u8) -> Result<Self> {
        if id == 0 || id >= MAX_ID {
            return Err(Error::InvalidIdentifier);
        }
        Ok(Self(id))
    }

    /// Whether the identifier is in `1..MAX_ID`.
    pub const fn is_valid(self) -> bool {
        self.0 != 0 && self.0 < MAX_ID
    }

    /// Whether the ciphersuite is registered, i.e. valid and compiled in.
    pub fn available(self) -> bool {
        self.registration().is_ok()
    }

    /// Build the group bound to `dst`.
    ///
    /// # Errors
    /// - [`Error::InvalidIdentifier`] outside of `1..MAX_ID`
    /// - [`Error::UnavailableIdentifier`] if its feature is disabled
    /// - DST errors from the group constructor
    pub fn get(self, dst: &[u8]) -> Result<Box<dyn Group>> {
        (self.registration()?.constructor)(dst)
    }

    /// `"<app>-V<version>-CS<id>-<hash-to-curve suite id>"`
    pub fn make_dst(self, app: &str, version: &str) -> Result<Vec<u8>> {
        let h2c_id = self.hash_to_curve_id()?;
        Ok(format!("{app}-V{version}-CS{}-{h2c_id}", self.0).into_bytes())
    }

    /// Hash-to-curve suite ID of the ciphersuite.
    pub fn hash_to_curve_id(self) -> Result<&'static str> {
        self.registration().map(|r| r.h2c_id)
    }

    /// Registered identifiers in ascending order.
    pub fn all() -> impl Iterator<Item = Identifier> {
        REGISTRY.iter().flatten().map(|r| r.id)
    }

    /// Registered ciphersuite for the hash-to-curve `curve`.
    pub(crate) const fn for_curve(curve: CurveId) -> Self {
        match curve {
            CurveId::P256 => Self::P256_SHA256,
            CurveId::P384 => Self::P384_SHA512,
            CurveId::P521 => Self::P521_SHA512,
            CurveId::Secp256k1 => Self::SECP256K1_SHA256,
            CurveId::Curve25519 => Self::CURVE25519_SHA512,
            CurveId::Edwards25519 => Self::EDWARDS25519_SHA512,
            CurveId::Curve448 => Self::CURVE448_SHA512,
            CurveId::Edwards448 => Self::EDWARDS448_SHA512,
        }
    }

    fn registration(self) -> Result<&'static Registration> {
        if !self.is_valid() {
            return Err(Error::InvalidIdentifier);
        }
        REGISTRY[self.0 as usize]
            .as_ref()
            .ok_or(Error::UnavailableIdentifier)
    }
}

impl Default for Identifier {
    fn default() -> Self {
        Self::RISTRETTO255_SHA512
    }
}

impl From<u8> for Identifier {
    fn from(id: u8) -> Self {
        Self(id)
    }
}

impl From<Identifier> for u8 {
    fn from(id: Identifier) -> u8 {
        id.0
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.hash_to_curve_id() {
            Ok(h2c_id) => f.write_str(h2c_id),
            Err(_) => write!(f, "invalid ciphersuite identifier ({})", self.0),
        }
    }
}

type Constructor = fn(&[u8]) -> Result<Box<dyn Group>>;

#[derive(Copy, Clone)]
struct Registration {
    id: Identifier,
    h2c_id: &'static str,
    constructor: Constructor,
}

/// Define a constructor for a hash-to-curve ciphersuite.
macro_rules! hash_to_curve_constructor {
    ($name:ident, $suite:expr) => {
        fn $name(dst: &[u8]) -> Result<Box<dyn Group>> {
            Ok(Box::new(HashToCurve::new($suite, dst)?))
        }
    };
}

#[cfg(feature = "nist")]
hash_to_curve_constructor!(new_p256, Suite::P256_XMD_SHA256_SSWU_RO);
#[cfg(feature = "nist")]
hash_to_curve_constructor!(new_p384, Suite::P384_XMD_SHA512_SSWU_RO);
#[cfg(feature = "nist")]
hash_to_curve_constructor!(new_p521, Suite::P521_XMD_SHA512_SSWU_RO);
#[cfg(feature = "curve25519")]
hash_to_curve_constructor!(new_curve25519, Suite::CURVE25519_XMD_SHA512_ELL2_RO);
#[cfg(feature = "curve25519")]
hash_to_curve_constructor!(new_edwards25519, Suite::EDWARDS25519_XMD_SHA512_ELL2_RO);
#[cfg(feature = "curve448")]
hash_to_curve_constructor!(new_curve448, Suite::CURVE448_XMD_SHA512_ELL2_RO);
#[cfg(feature = "curve448")]
hash_to_curve_constructor!(new_edwards448, Suite::EDWARDS448_XMD_SHA512_ELL2_RO);
#[cfg(feature = "secp256k1")]
hash_to_curve_constructor!(new_secp256k1, Suite::SECP256K1_XMD_SHA256_SSWU_RO);

#[cfg(feature = "ristretto255")]
fn new_ristretto255(dst: &[u8]) -> Result<Box<dyn Group>> {
    Ok(Box::new(crate::Ristretto255::new(dst)?))
}

static REGISTRY: [Option<Registration>; MAX_ID as usize] = build();

#[allow(unused_mut)]
const fn build() -> [Option<Registration>; MAX_ID as usize] {
    let mut registry = [None; MAX_ID as usize];

    #[cfg(feature = "ristretto255")]
    {
        registry[1] = Some(Registration {
            id: Identifier::RISTRETTO255_SHA512,
            h2c_id: crate::ristretto::RISTRETTO255_SUITE_ID,
            constructor: new_ristretto255,
        });
    }

    #[cfg(feature = "nist")]
    {
        registry[2] = Some(Registration {
            id: Identifier::P256_SHA256,
            h2c_id: Suite::P256_XMD_SHA256_SSWU_RO.id(),
            constructor: new_p256,
        });
        registry[3] = Some(Registration {
            id: Identifier::P384_SHA512,
            h2c_id: Suite::P384_XMD_SHA512_SSWU_RO.id(),
            constructor: new_p384,
        });
        registry[4] = Some(Registration {
            id: Identifier::P521_SHA512,
            h2c_id: Suite::P521_XMD_SHA512_SSWU_RO.id(),
            constructor: new_p521,
        });
    }

    #[cfg(feature = "curve25519")]
    {
        registry[5] = Some(Registration {
            id: Identifier::CURVE25519_SHA512,
            h2c_id: Suite::CURVE25519_XMD_SHA512_ELL2_RO.id(),
            constructor: new_curve25519,
        });
        registry[6] = Some(Registration {
            id: Identifier::EDWARDS25519_SHA512,
            h2c_id: Suite::EDWARDS25519_XMD_SHA512_ELL2_RO.id(),
            constructor: new_edwards25519,
        });
    }

    #[cfg(feature = "curve448")]
    {
        registry[7] = Some(Registration {
            id: Identifier::CURVE448_SHA512,
            h2c_id: Suite::CURVE448_XMD_SHA512_ELL2_RO.id(),
            constructor: new_curve448,
        });
        registry[8] = Some(Registration {
            id: Identifier::EDWARDS448_SHA512,
            h2c_id: Suite::EDWARDS448_XMD_SHA512_ELL2_RO.id(),
            constructor: new_edwards448,
        });
    }

    #[cfg(feature = "secp256k1")]
    {
        registry[9] = Some(Registration {
            id: Identifier::SECP256K1_SHA256,
            h2c_id: Suite::SECP256K1_XMD_SHA256_SSWU_RO.id(),
            constructor: new_secp256k1,
        });
    }

    registry
}
