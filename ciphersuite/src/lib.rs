#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::unwrap_used,
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! ## Choosing a group
//!
//! Protocols are generic over [`Group`] and receive a `Box<dyn Group>` from
//! [`Identifier::get`]. The concrete adapters, [`HashToCurve`] and
//! [`Ristretto255`], can also be constructed directly.
//!
//! ## Domain separation
//!
//! Every group is bound to a DST at construction. The hashing operations take
//! an optional per-call DST which is used for that call only: the group it is
//! called on keeps its original DST.

extern crate alloc;

#[cfg(not(any(
    feature = "curve25519",
    feature = "curve448",
    feature = "nist",
    feature = "ristretto255",
    feature = "secp256k1"
)))]
compile_error!(
    "at least one of the `curve25519`, `curve448`, `nist`, `ristretto255` or `secp256k1` features must be enabled"
);

mod arithmetic;
mod error;
mod group;
mod hash;
mod suites;

pub mod hash2curve;

#[cfg(feature = "ristretto255")]
pub mod ristretto;

pub use crate::{
    error::{Error, Result},
    group::{Element, Group, Scalar},
    hash::{DST_RECOMMENDED_MIN_LENGTH, Hash},
    hash2curve::{CurveId, HashToCurve, Suite},
    suites::{Identifier, MAX_ID},
};

#[cfg(feature = "ristretto255")]
pub use crate::ristretto::Ristretto255;

pub use elliptic_curve::{self, rand_core};
