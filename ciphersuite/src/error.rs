//! Error type.

use core::fmt::{self, Display};

/// Result type with the `ciphersuite` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Ciphersuite errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// Identifier outside of `1..MAX_ID`.
    InvalidIdentifier,

    /// Identifier is in range but its ciphersuite was compiled out.
    UnavailableIdentifier,

    /// Hash-to-curve suite whose curve backend was compiled out.
    UnsupportedSuite,

    /// Unrecognized hash-to-curve suite ID.
    UnknownSuite,

    /// Encode-to-curve (`_NU_`) suite used where a random oracle is required.
    NotRandomOracle,

    /// Empty domain separation tag.
    ZeroLengthDst,

    /// Domain separation tag shorter than
    /// [`DST_RECOMMENDED_MIN_LENGTH`](crate::DST_RECOMMENDED_MIN_LENGTH).
    ShortDst,

    /// Malformed scalar or element encoding.
    Decode,

    /// Operands belong to different groups.
    GroupMismatch,

    /// Inversion of the zero scalar.
    NotInvertible,

    /// `expand_message` or hash-to-curve failure.
    Hashing,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::InvalidIdentifier => "invalid ciphersuite identifier",
            Error::UnavailableIdentifier => "ciphersuite unavailable",
            Error::UnsupportedSuite => "hash-to-curve suite not supported by enabled features",
            Error::UnknownSuite => "unknown hash-to-curve suite",
            Error::NotRandomOracle => "hash-to-curve suite is not a random oracle",
            Error::ZeroLengthDst => "zero-length domain separation tag",
            Error::ShortDst => "domain separation tag is shorter than recommended",
            Error::Decode => "invalid encoding",
            Error::GroupMismatch => "operands belong to different groups",
            Error::NotInvertible => "scalar is not invertible",
            Error::Hashing => "hash-to-curve error",
        })
    }
}

impl core::error::Error for Error {}

impl From<elliptic_curve::Error> for Error {
    fn from(_: elliptic_curve::Error) -> Error {
        Error::Hashing
    }
}
