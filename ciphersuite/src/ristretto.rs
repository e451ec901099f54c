//! ristretto255 group (RFC 9496) with `ristretto255_XMD:SHA-512_R255MAP_RO_`
//! hashing.

use crate::{
    Element, Group, Hash, Identifier, Result, Scalar,
    arithmetic::{Point, ScalarValue},
    hash::check_dst,
};
use alloc::vec::Vec;
use curve25519_dalek::{
    RistrettoPoint, Scalar as DalekScalar, constants::RISTRETTO_BASEPOINT_POINT,
    traits::Identity,
};

/// Number of uniform bytes consumed by one-way maps into the group and into
/// the scalar field.
pub const RISTRETTO_INPUT_LENGTH: usize = 64;

/// Hash-to-curve suite ID.
pub const RISTRETTO255_SUITE_ID: &str = "ristretto255_XMD:SHA-512_R255MAP_RO_";

const ELEMENT_LENGTH: usize = 32;

/// [`Group`] over ristretto255.
#[derive(Clone, Debug)]
pub struct Ristretto255 {
    dst: Vec<u8>,
}

impl Ristretto255 {
    /// Bind the group to a domain separation tag.
    ///
    /// # Errors
    /// [`Error::ZeroLengthDst`](crate::Error::ZeroLengthDst) or
    /// [`Error::ShortDst`](crate::Error::ShortDst) for a rejected `dst`.
    pub fn new(dst: &[u8]) -> Result<Self> {
        check_dst(dst)?;
        Ok(Self { dst: dst.to_vec() })
    }

    fn uniform(&self, input: &[u8]) -> Result<[u8; RISTRETTO_INPUT_LENGTH]> {
        let bytes = Hash::Sha512.expand_message(input, &self.dst, RISTRETTO_INPUT_LENGTH)?;
        let mut uniform = [0u8; RISTRETTO_INPUT_LENGTH];
        uniform.copy_from_slice(&bytes);
        Ok(uniform)
    }
}

impl Group for Ristretto255 {
    fn identifier(&self) -> Identifier {
        Identifier::RISTRETTO255_SHA512
    }

    fn new_scalar(&self) -> Scalar {
        Scalar::new(ScalarValue::Scalar25519(DalekScalar::ZERO))
    }

    fn new_element(&self) -> Element {
        self.identity()
    }

    fn identity(&self) -> Element {
        Element::new(Point::Ristretto255(RistrettoPoint::identity()))
    }

    fn base(&self) -> Element {
        Element::new(Point::Ristretto255(RISTRETTO_BASEPOINT_POINT))
    }

    fn element_length(&self) -> usize {
        ELEMENT_LENGTH
    }

    fn hash_to_group(&self, input: &[u8], dst: Option<&[u8]>) -> Result<Element> {
        if let Some(dst) = dst {
            return Self::new(dst)?.hash_to_group(input, None);
        }

        let uniform = self.uniform(input)?;
        Ok(Element::new(Point::Ristretto255(
            RistrettoPoint::from_uniform_bytes(&uniform),
        )))
    }

    fn hash_to_scalar(&self, input: &[u8], dst: Option<&[u8]>) -> Result<Scalar> {
        if let Some(dst) = dst {
            return Self::new(dst)?.hash_to_scalar(input, None);
        }

        let uniform = self.uniform(input)?;
        Ok(Scalar::new(ScalarValue::Scalar25519(
            DalekScalar::from_bytes_mod_order_wide(&uniform),
        )))
    }

    fn dst(&self) -> &[u8] {
        &self.dst
    }
}
