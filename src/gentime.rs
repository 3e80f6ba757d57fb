//! Generalized time normalization.
//!
//! Directory attributes such as `createTimestamp` carry RFC 4517
//! GeneralizedTime values: `YYYYMMDDHH[MM[SS]][.f][Z|±hhmm]`. Equality over
//! them is equality of instants, so values are canonicalized to
//! millisecond-precision Zulu form before comparison.
//!
//! Unlike the CSN codec, this normalizer validates the calendar strictly;
//! a February 31st is rejected rather than rolled over.

use alloc::{format, string::String};

use chrono::{DateTime, NaiveDate, Utc};
use snafu::{OptionExt, Snafu, ensure};

/// An error returned for values that are not valid generalized times.
#[derive(Snafu, Debug, Clone, PartialEq, Eq)]
#[snafu(display("not a valid generalized time"))]
pub struct InvalidGeneralizedTime;

/// The historical "permanently locked account" sentinel. It predates the
/// directory's own schema checks and is passed through untouched so that
/// entries carrying it keep comparing equal to themselves.
const LOCKED_ACCOUNT: &str = "000001010000Z";

/// Canonicalizes a generalized time value to `YYYYMMDDHHMMSS.mmmZ` UTC.
///
/// Accepts hour, minute, and second precision, an optional fraction of the
/// smallest given unit (`.` or `,` separated), and a mandatory zone of `Z`
/// or `±hh[mm]`.
///
/// # Errors
///
/// [`InvalidGeneralizedTime`] if the value does not parse or names an
/// impossible calendar date.
pub fn normalize_generalized_time(value: &str) -> Result<String, InvalidGeneralizedTime> {
    if value == LOCKED_ACCOUNT {
        return Ok(String::from(LOCKED_ACCOUNT));
    }

    let digits = value
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    ensure!(
        digits == 10 || digits == 12 || digits == 14,
        InvalidGeneralizedTimeSnafu
    );

    let bytes = value.as_bytes();
    let year = decimal(&bytes[0..4])?;
    let month = decimal(&bytes[4..6])?;
    let day = decimal(&bytes[6..8])?;
    let hour = decimal(&bytes[8..10])?;
    let minute = if digits >= 12 { decimal(&bytes[10..12])? } else { 0 };
    let second = if digits == 14 { decimal(&bytes[12..14])? } else { 0 };

    let timestamp = NaiveDate::from_ymd_opt(year as i32, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .context(InvalidGeneralizedTimeSnafu)?;

    // The fraction scales with the smallest unit actually present.
    let unit_millis: u64 = match digits {
        10 => 3_600_000,
        12 => 60_000,
        _ => 1_000,
    };
    let (fraction_millis, rest) = fraction(&value[digits..], unit_millis)?;

    let offset_seconds = zone(rest)?;

    let utc_millis =
        timestamp.and_utc().timestamp_millis() + fraction_millis as i64 - offset_seconds * 1000;
    let canonical = DateTime::<Utc>::from_timestamp_millis(utc_millis)
        .context(InvalidGeneralizedTimeSnafu)?;

    Ok(format!(
        "{}.{:03}Z",
        canonical.format("%Y%m%d%H%M%S"),
        utc_millis.rem_euclid(1000),
    ))
}

/// Parses an optional `.f` / `,f` fraction; returns its value in
/// milliseconds of the given unit plus the unconsumed tail.
fn fraction(rest: &str, unit_millis: u64) -> Result<(u64, &str), InvalidGeneralizedTime> {
    let Some(tail) = rest.strip_prefix(['.', ',']) else {
        return Ok((0, rest));
    };

    let digits = tail.bytes().take_while(u8::is_ascii_digit).count();
    ensure!((1..=9).contains(&digits), InvalidGeneralizedTimeSnafu);

    let value: u64 = tail[..digits]
        .parse()
        .ok()
        .context(InvalidGeneralizedTimeSnafu)?;
    let scale = 10u64.pow(digits as u32);

    Ok((value * unit_millis / scale, &tail[digits..]))
}

/// Parses the mandatory zone designator: `Z` or `±hh[mm]`. Returns the
/// offset east of UTC in seconds.
fn zone(rest: &str) -> Result<i64, InvalidGeneralizedTime> {
    if rest == "Z" {
        return Ok(0);
    }

    let mut bytes = rest.bytes();
    let sign = match bytes.next() {
        Some(b'+') => 1,
        Some(b'-') => -1,
        _ => return InvalidGeneralizedTimeSnafu.fail(),
    };

    let digits = &rest.as_bytes()[1..];
    let (hours, minutes) = match digits.len() {
        2 => (decimal(digits)?, 0),
        4 => (decimal(&digits[0..2])?, decimal(&digits[2..4])?),
        _ => return InvalidGeneralizedTimeSnafu.fail(),
    };
    ensure!(hours <= 23 && minutes <= 59, InvalidGeneralizedTimeSnafu);

    Ok(sign * (i64::from(hours) * 3600 + i64::from(minutes) * 60))
}

fn decimal(digits: &[u8]) -> Result<u32, InvalidGeneralizedTime> {
    digits
        .iter()
        .try_fold(0u32, |value, &digit| {
            digit
                .is_ascii_digit()
                .then(|| value * 10 + u32::from(digit - b'0'))
        })
        .context(InvalidGeneralizedTimeSnafu)
}
