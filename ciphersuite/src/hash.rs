//! Message expansion and domain separation tags.
//!
//! <https://www.rfc-editor.org/rfc/rfc9380.html#name-expand_message_xmd>

use crate::{Error, Result};
use alloc::{vec, vec::Vec};
use core::fmt::{self, Display};
use elliptic_curve::hash2curve::{ExpandMsg, ExpandMsgXmd, Expander};
use sha2::{Sha256, Sha512};

/// Recommended minimum length of a domain separation tag in bytes.
///
/// Only enforced with the `strict-dst` feature. Empty tags are always
/// rejected.
pub const DST_RECOMMENDED_MIN_LENGTH: usize = 16;

/// Hash function used by `expand_message_xmd`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Hash {
    /// SHA-256
    Sha256,

    /// SHA-512
    Sha512,
}

impl Hash {
    /// Name of the hash function as it appears in suite IDs.
    pub const fn name(self) -> &'static str {
        match self {
            Hash::Sha256 => "SHA-256",
            Hash::Sha512 => "SHA-512",
        }
    }

    /// Digest size in bytes.
    pub const fn output_size(self) -> usize {
        match self {
            Hash::Sha256 => 32,
            Hash::Sha512 => 64,
        }
    }

    /// Expand `msg` into `len` uniformly random bytes under `dst`.
    ///
    /// # Errors
    /// - `len` is zero or larger than `255 * output_size()`
    pub fn expand_message(self, msg: &[u8], dst: &[u8], len: usize) -> Result<Vec<u8>> {
        match self {
            Hash::Sha256 => expand::<ExpandMsgXmd<Sha256>>(msg, dst, len),
            Hash::Sha512 => expand::<ExpandMsgXmd<Sha512>>(msg, dst, len),
        }
    }
}

impl Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn expand<X>(msg: &[u8], dst: &[u8], len: usize) -> Result<Vec<u8>>
where
    X: for<'a> ExpandMsg<'a>,
{
    let dsts = [dst];
    let mut expander = X::expand_message(&[msg], &dsts, len)?;
    let mut out = vec![0u8; len];
    expander.fill_bytes(&mut out);
    Ok(out)
}

/// Check a domain separation tag before binding it to a group.
pub(crate) fn check_dst(dst: &[u8]) -> Result<()> {
    if dst.is_empty() {
        return Err(Error::ZeroLengthDst);
    }

    if cfg!(feature = "strict-dst") && dst.len() < DST_RECOMMENDED_MIN_LENGTH {
        return Err(Error::ShortDst);
    }

    Ok(())
}
