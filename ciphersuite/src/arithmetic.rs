//! Tagged unions over the point and scalar types of each curve backend.

pub(crate) mod point;
pub(crate) mod scalar;

pub(crate) use self::{point::Point, scalar::ScalarValue};

use crate::{Error, Result};
use elliptic_curve::{ff::PrimeField, group::GroupEncoding};

#[cfg(feature = "curve448")]
pub(crate) type Ed448Point = ed448_goldilocks::EdwardsPoint;

#[cfg(feature = "curve448")]
pub(crate) type Mont448Point = ed448_goldilocks::MontgomeryPoint;

#[cfg(feature = "curve448")]
pub(crate) type Ed448Scalar = <Ed448Point as elliptic_curve::group::Group>::Scalar;

/// Decode a fixed-width point encoding.
pub(crate) fn decode_point<G: GroupEncoding>(bytes: &[u8]) -> Result<G> {
    let mut repr = G::Repr::default();
    if repr.as_ref().len() != bytes.len() {
        return Err(Error::Decode);
    }
    repr.as_mut().copy_from_slice(bytes);
    Option::from(G::from_bytes(&repr)).ok_or(Error::Decode)
}

/// Decode a canonical scalar encoding.
pub(crate) fn decode_scalar<F: PrimeField>(bytes: &[u8]) -> Result<F> {
    let mut repr = F::Repr::default();
    if repr.as_ref().len() != bytes.len() {
        return Err(Error::Decode);
    }
    repr.as_mut().copy_from_slice(bytes);
    Option::from(F::from_repr(repr)).ok_or(Error::Decode)
}
