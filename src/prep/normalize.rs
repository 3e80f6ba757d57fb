//! The RFC 4518 normalize and prohibit steps.

use alloc::string::String;

use unicode_normalization::UnicodeNormalization;

use super::classify;
use crate::error::{InvalidCharacterSnafu, PrepareError};

/// Applies Unicode Normalization Form KC to `mapped` and verifies that no
/// prohibited code point remains.
///
/// NFKC is idempotent, so running a prepared value through the pipeline
/// again is a no-op.
///
/// # Errors
///
/// [`PrepareError::InvalidCharacter`] naming the first prohibited code
/// point encountered.
pub fn normalize(mapped: &str) -> Result<String, PrepareError> {
    let composed: String = mapped.nfkc().collect();

    if let Some(offender) = composed
        .chars()
        .find(|&character| classify::is_prohibited(character as u32))
    {
        return InvalidCharacterSnafu {
            code_point: offender as u32,
        }
        .fail();
    }

    Ok(composed)
}
