//! Error types surfaced by the preparation pipeline and the CSN codec.
//!
//! All errors are plain values. Nothing in this crate panics on bad input;
//! callers decide whether to reject, substitute, or retry.
#![allow(clippy::module_name_repetitions)]
mod csn;
mod prep;

pub use csn::{CsnField, InvalidCsn};
pub use prep::PrepareError;

pub(crate) use csn::{BadHexFieldSnafu, BadSeparatorSnafu, BadTimestampSnafu, WrongLengthSnafu};
pub(crate) use prep::{InvalidCharacterSnafu, InvalidUtf8Snafu};
