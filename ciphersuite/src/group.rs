//! The prime-order group contract shared by every ciphersuite.

use crate::{
    Identifier, Result,
    arithmetic::{Point, ScalarValue},
};
use alloc::vec::Vec;
use core::fmt;
use elliptic_curve::rand_core::{CryptoRng, RngCore};

/// Prime-order group with hashing into the group and its scalar field.
///
/// Implemented by [`HashToCurve`](crate::HashToCurve) and
/// [`Ristretto255`](crate::Ristretto255), and obtained through
/// [`Identifier::get`].
pub trait Group: fmt::Debug + Send + Sync {
    /// Registered ciphersuite implemented by this group.
    fn identifier(&self) -> Identifier;

    /// Zero scalar, usable as a template for [`Scalar::decode`].
    fn new_scalar(&self) -> Scalar;

    /// Element usable as a template for [`Element::decode`].
    fn new_element(&self) -> Element;

    /// Neutral element.
    fn identity(&self) -> Element;

    /// Canonical generator.
    fn base(&self) -> Element;

    /// Length of an encoded element in bytes.
    fn element_length(&self) -> usize;

    /// Length of an encoded scalar in bytes.
    fn scalar_length(&self) -> usize {
        self.new_scalar().encode().len()
    }

    /// Hash `input` to a uniformly distributed element.
    ///
    /// `dst` overrides the group's domain separation tag for this call only.
    fn hash_to_group(&self, input: &[u8], dst: Option<&[u8]>) -> Result<Element>;

    /// Hash `input` to a uniformly distributed scalar.
    ///
    /// `dst` overrides the group's domain separation tag for this call only.
    fn hash_to_scalar(&self, input: &[u8], dst: Option<&[u8]>) -> Result<Scalar>;

    /// Multiply an encoded element by an encoded scalar.
    ///
    /// # Errors
    /// [`Error::Decode`](crate::Error::Decode) if either operand is malformed.
    fn mult_bytes(&self, scalar: &[u8], element: &[u8]) -> Result<Element> {
        let scalar = self.new_scalar().decode(scalar)?;
        let element = self.new_element().decode(element)?;
        element.mult(&scalar)
    }

    /// Domain separation tag bound at construction.
    fn dst(&self) -> &[u8];
}

/// Element of a [`Group`].
#[derive(Copy, Clone)]
pub struct Element {
    pub(crate) point: Point,
}

impl Element {
    pub(crate) fn new(point: Point) -> Self {
        Self { point }
    }

    /// Decode an element of the same group as `self`.
    ///
    /// # Errors
    /// [`Error::Decode`](crate::Error::Decode) if `bytes` has the wrong
    /// length or is not the canonical encoding of a group element.
    pub fn decode(&self, bytes: &[u8]) -> Result<Element> {
        self.point.decode(bytes).map(Element::new)
    }

    /// Canonical encoding.
    pub fn encode(&self) -> Vec<u8> {
        self.point.encode()
    }

    /// Whether this is the neutral element.
    pub fn is_identity(&self) -> bool {
        self.point.is_identity()
    }

    /// Scalar multiplication.
    ///
    /// # Errors
    /// [`Error::GroupMismatch`](crate::Error::GroupMismatch) if `scalar`
    /// belongs to a different scalar field.
    pub fn mult(&self, scalar: &Scalar) -> Result<Element> {
        self.point.mul(&scalar.value).map(Element::new)
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.point.same_group(&other.point) && self.encode() == other.encode()
    }
}

impl Eq for Element {}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Element(")?;
        write_hex(f, &self.encode())?;
        f.write_str(")")
    }
}

/// Scalar of a [`Group`].
#[derive(Copy, Clone)]
pub struct Scalar {
    pub(crate) value: ScalarValue,
}

impl Scalar {
    pub(crate) fn new(value: ScalarValue) -> Self {
        Self { value }
    }

    /// Decode a scalar of the same field as `self`.
    ///
    /// # Errors
    /// [`Error::Decode`](crate::Error::Decode) if `bytes` has the wrong
    /// length or is not reduced modulo the group order.
    pub fn decode(&self, bytes: &[u8]) -> Result<Scalar> {
        self.value.decode(bytes).map(Scalar::new)
    }

    /// Canonical encoding: big-endian for Weierstrass curves, little-endian
    /// for the 25519 and 448 groups.
    pub fn encode(&self) -> Vec<u8> {
        self.value.encode()
    }

    /// Whether this is zero.
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Multiplicative identity of the same field.
    pub fn one(&self) -> Scalar {
        Scalar::new(self.value.one())
    }

    /// Uniformly random scalar of the same field.
    pub fn random(&self, rng: &mut (impl CryptoRng + RngCore)) -> Scalar {
        Scalar::new(self.value.random(rng))
    }

    /// `self + other`
    pub fn add(&self, other: &Scalar) -> Result<Scalar> {
        self.value.add(&other.value).map(Scalar::new)
    }

    /// `self - other`
    pub fn sub(&self, other: &Scalar) -> Result<Scalar> {
        self.value.sub(&other.value).map(Scalar::new)
    }

    /// `self * other`
    pub fn mul(&self, other: &Scalar) -> Result<Scalar> {
        self.value.mul(&other.value).map(Scalar::new)
    }

    /// Multiplicative inverse.
    ///
    /// # Errors
    /// [`Error::NotInvertible`](crate::Error::NotInvertible) for zero.
    pub fn invert(&self) -> Result<Scalar> {
        self.value.invert().map(Scalar::new)
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.value.same_field(&other.value) && self.encode() == other.encode()
    }
}

impl Eq for Scalar {}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Scalar(")?;
        write_hex(f, &self.encode())?;
        f.write_str(")")
    }
}

fn write_hex(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    for byte in bytes {
        write!(f, "{byte:02x}")?;
    }
    Ok(())
}
