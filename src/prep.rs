//! RFC 4518 string preparation.
//!
//! Directory comparisons never operate on raw octets. Every attribute value
//! and every assertion value is first reduced to a canonical form, and only
//! the canonical forms are compared byte for byte. This module implements
//! the six preparation steps of RFC 4518:
//!
//! 1. **Transcode** — the input octets must be well-formed UTF-8.
//! 2. **Map** — case folding and character elimination ([`map::map`]).
//! 3. **Normalize** — Unicode NFKC ([`normalize::normalize`]).
//! 4. **Prohibit** — reject values holding prohibited code points.
//! 5. **Check bidi** — a no-op: RFC 4518 ignores bidirectional categories.
//! 6. **Insignificant character handling** — whitespace shaping selected by
//!    the assertion type ([`insignificant`]).
//!
//! Preparation is referentially transparent. Identical `(input,
//! assertion_type, case_policy)` triples always produce identical outputs,
//! with no hidden state beyond read-only lookup tables published once.

pub mod classify;
pub mod insignificant;
pub mod map;
pub mod normalize;

mod tables;

use alloc::string::String;

use crate::error::{InvalidUtf8Snafu, PrepareError};

/// The shape of the value being prepared, as declared by the matching rule
/// evaluating it.
///
/// Whole values and the three substring fragments differ only in how
/// insignificant spaces are handled at the fragment boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssertionType {
    /// A whole attribute value, or the assertion value of an equality or
    /// ordering match.
    AttributeValue,
    /// The fragment before the first `*` of a substring assertion.
    SubstringInitial,
    /// A fragment between two `*`s of a substring assertion.
    SubstringAny,
    /// The fragment after the last `*` of a substring assertion.
    SubstringFinal,
}

/// Whether the mapping step folds case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CasePolicy {
    /// Preserve case distinctions.
    CaseSensitive,
    /// Fold every code point listed in RFC 3454 table B.2 to its
    /// case-insensitive form.
    CaseInsensitive,
}

/// Prepares a directory string value for comparison.
///
/// The output is the canonical form of `input` under the given assertion
/// type and case policy; two values are equivalent exactly when their
/// canonical forms are byte-identical.
///
/// # Errors
///
/// [`PrepareError::InvalidUtf8`] if `input` is not well-formed UTF-8, and
/// [`PrepareError::InvalidCharacter`] if a prohibited code point survives
/// mapping and normalization.
pub fn prepare(
    input: &[u8],
    assertion_type: AssertionType,
    case_policy: CasePolicy,
) -> Result<String, PrepareError> {
    let prepared = transcode_map_normalize(input, case_policy)?;

    Ok(match assertion_type {
        AssertionType::AttributeValue => insignificant::attribute_value(&prepared),
        AssertionType::SubstringInitial => insignificant::substring_initial(&prepared),
        AssertionType::SubstringAny => insignificant::substring_any(&prepared),
        AssertionType::SubstringFinal => insignificant::substring_final(&prepared),
    })
}

/// Prepares a numeric string value for comparison.
///
/// Numeric strings carry no significant spaces at all, so every SPACE is
/// removed rather than shaped.
///
/// # Errors
///
/// Same as [`prepare`].
pub fn prepare_numeric(input: &[u8], case_policy: CasePolicy) -> Result<String, PrepareError> {
    let prepared = transcode_map_normalize(input, case_policy)?;
    Ok(insignificant::numeric(&prepared))
}

/// Prepares a telephone number value for comparison.
///
/// Telephone numbers carry neither significant spaces nor significant
/// hyphens; both are removed rather than shaped.
///
/// # Errors
///
/// Same as [`prepare`].
pub fn prepare_telephone(input: &[u8], case_policy: CasePolicy) -> Result<String, PrepareError> {
    let prepared = transcode_map_normalize(input, case_policy)?;
    Ok(insignificant::telephone(&prepared))
}

/// Runs steps 1 through 5: transcode, map, normalize, prohibit, check bidi.
fn transcode_map_normalize(input: &[u8], case_policy: CasePolicy) -> Result<String, PrepareError> {
    let transcoded = transcode(input)?;
    let mapped = map::map(transcoded, case_policy);
    let normalized = normalize::normalize(&mapped)?;
    check_bidi(&normalized);
    Ok(normalized)
}

/// Step 1. The directory speaks UTF-8 on the wire; anything else is refused
/// at this boundary rather than patched up with U+FFFD.
fn transcode(input: &[u8]) -> Result<&str, PrepareError> {
    core::str::from_utf8(input).map_err(|error| {
        InvalidUtf8Snafu {
            offset: error.valid_up_to(),
        }
        .build()
    })
}

/// Step 5. RFC 4518 section 2.5: bidirectional characters are ignored, so
/// the step accepts every string. The deprecated bidi controls themselves
/// are already gone, eliminated by the map step or rejected as prohibited.
fn check_bidi(_prepared: &str) {}
