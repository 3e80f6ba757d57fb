//! Change sequence numbers.
//!
//! A CSN is the 40-character replication ordering key
//! `YYYYMMDDHHMMSS.uuuuuuZ#cccccc#rrr#oooooo`: a UTC timestamp with a
//! microsecond fraction, a change count, the originating replica's
//! identifier, and a per-operation counter, the last three as fixed-width
//! lowercase hexadecimal. The `Z` closes the timestamp by construction; it
//! is not a time zone marker, because a CSN timestamp is always UTC.
//!
//! CSNs are immutable values with a total order, so two replicas agree on
//! the sequence of writes by comparing CSNs alone.

use alloc::{boxed::Box, format, string::String, vec::Vec};

use chrono::{DateTime, Days, NaiveDate, Utc};
use once_cell::race::OnceBox;
use snafu::{OptionExt, ensure};

use crate::error::{
    BadHexFieldSnafu, BadSeparatorSnafu, BadTimestampSnafu, CsnField, InvalidCsn, WrongLengthSnafu,
};

/// Offsets of the literal separators inside the 40-character form.
const SEPARATORS: [(usize, u8); 5] = [(14, b'.'), (21, b'Z'), (22, b'#'), (29, b'#'), (33, b'#')];

/// A change sequence number.
///
/// Equality, ordering, and hashing cover the `(timestamp, change_count,
/// replica_id, operation_number)` tuple; the memoized text is carried
/// alongside but never compared. A CSN parsed from text remembers that
/// text, so parsing and re-rendering round-trips bit for bit even when the
/// microsecond fraction is finer than the stored millisecond timestamp.
pub struct Csn {
    /// Milliseconds since the Unix epoch, UTC.
    timestamp: i64,
    /// 24-bit change counter.
    change_count: u32,
    /// 12-bit identifier of the originating replica.
    replica_id: u16,
    /// 24-bit operation counter.
    operation_number: u32,
    cached_text: OnceBox<String>,
}

impl Csn {
    /// Builds a CSN from its components, for values received in already
    /// deserialized form.
    ///
    /// `timestamp` is milliseconds since the Unix epoch and must render
    /// within a four-digit year. The counter fields are truncated to their
    /// wire widths: 24 bits for the counters, 12 bits for the replica.
    pub fn new(timestamp: i64, change_count: u32, replica_id: u16, operation_number: u32) -> Self {
        Self {
            timestamp,
            change_count: change_count & 0x00FF_FFFF,
            replica_id: replica_id & 0x0FFF,
            operation_number: operation_number & 0x00FF_FFFF,
            cached_text: OnceBox::new(),
        }
    }

    /// Parses the canonical 40-character form.
    ///
    /// Day values 30 and 31 are accepted for every month; a day past the
    /// end of its month rolls over into the next one when the timestamp is
    /// computed. That leniency matches what directories have historically
    /// emitted and accepted.
    ///
    /// # Errors
    ///
    /// [`InvalidCsn`] describing the first field that failed.
    pub fn parse(text: &str) -> Result<Self, InvalidCsn> {
        let raw = RawCsn::scan(text)?;

        let csn = Self {
            timestamp: raw.timestamp_millis()?,
            change_count: raw.change_count,
            replica_id: raw.replica_id,
            operation_number: raw.operation_number,
            cached_text: OnceBox::new(),
        };
        let _ = csn.cached_text.set(Box::new(String::from(text)));

        Ok(csn)
    }

    /// Checks the canonical form without allocating, for pre-acceptance
    /// filtering. Accepts exactly the strings [`Csn::parse`] accepts.
    pub fn is_valid(text: &str) -> bool {
        RawCsn::scan(text).is_ok()
    }

    /// Milliseconds since the Unix epoch, UTC.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// The 24-bit change counter.
    pub fn change_count(&self) -> u32 {
        self.change_count
    }

    /// The 12-bit identifier of the originating replica.
    pub fn replica_id(&self) -> u16 {
        self.replica_id
    }

    /// The 24-bit operation counter.
    pub fn operation_number(&self) -> u32 {
        self.operation_number
    }

    /// The 40-character textual form, memoized on first use.
    pub fn text(&self) -> &str {
        self.cached_text
            .get_or_init(|| Box::new(self.render()))
    }

    /// The UTF-8 octets of the textual form.
    pub fn bytes(&self) -> Vec<u8> {
        self.text().as_bytes().to_vec()
    }

    fn render(&self) -> String {
        let seconds = self.timestamp.div_euclid(1000);
        let micros = self.timestamp.rem_euclid(1000) * 1000;
        let timestamp =
            DateTime::<Utc>::from_timestamp(seconds, 0).unwrap_or(DateTime::UNIX_EPOCH);

        format!(
            "{}.{micros:06}Z#{:06x}#{:03x}#{:06x}",
            timestamp.format("%Y%m%d%H%M%S"),
            self.change_count,
            self.replica_id,
            self.operation_number,
        )
    }

    fn key(&self) -> (i64, u32, u16, u32) {
        (
            self.timestamp,
            self.change_count,
            self.replica_id,
            self.operation_number,
        )
    }
}

impl core::fmt::Display for Csn {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.text())
    }
}

impl core::fmt::Debug for Csn {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Csn")
            .field("timestamp", &self.timestamp)
            .field("change_count", &self.change_count)
            .field("replica_id", &self.replica_id)
            .field("operation_number", &self.operation_number)
            .finish()
    }
}

impl Clone for Csn {
    fn clone(&self) -> Self {
        let cached_text = OnceBox::new();
        if let Some(text) = self.cached_text.get() {
            let _ = cached_text.set(Box::new(text.clone()));
        }
        Self {
            timestamp: self.timestamp,
            change_count: self.change_count,
            replica_id: self.replica_id,
            operation_number: self.operation_number,
            cached_text,
        }
    }
}

impl PartialEq for Csn {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Csn {}

impl PartialOrd for Csn {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Csn {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.key().cmp(&other.key())
    }
}

impl core::hash::Hash for Csn {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

/// The syntactically validated fields of a CSN, before date arithmetic.
struct RawCsn {
    year: u32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    micros: u32,
    change_count: u32,
    replica_id: u16,
    operation_number: u32,
}

impl RawCsn {
    fn scan(text: &str) -> Result<Self, InvalidCsn> {
        let bytes = text.as_bytes();
        ensure!(
            bytes.len() == 40,
            WrongLengthSnafu {
                length: bytes.len()
            }
        );

        for (position, expected) in SEPARATORS {
            ensure!(bytes[position] == expected, BadSeparatorSnafu { position });
        }

        let year = decimal(&bytes[0..4]).context(BadTimestampSnafu)?;
        let month = decimal(&bytes[4..6])
            .filter(|month| (1..=12).contains(month))
            .context(BadTimestampSnafu)?;
        // Days 30 and 31 pass for every month; the overflow is resolved
        // arithmetically when the timestamp is computed.
        let day = decimal(&bytes[6..8])
            .filter(|day| (1..=31).contains(day))
            .context(BadTimestampSnafu)?;
        let hour = decimal(&bytes[8..10])
            .filter(|hour| *hour <= 23)
            .context(BadTimestampSnafu)?;
        let minute = decimal(&bytes[10..12])
            .filter(|minute| *minute <= 59)
            .context(BadTimestampSnafu)?;
        let second = decimal(&bytes[12..14])
            .filter(|second| *second <= 59)
            .context(BadTimestampSnafu)?;
        let micros = decimal(&bytes[15..21]).context(BadTimestampSnafu)?;

        let change_count = hexadecimal(&bytes[23..29]).context(BadHexFieldSnafu {
            field: CsnField::ChangeCount,
        })?;
        let replica_id = hexadecimal(&bytes[30..33]).context(BadHexFieldSnafu {
            field: CsnField::ReplicaId,
        })?;
        let operation_number = hexadecimal(&bytes[34..40]).context(BadHexFieldSnafu {
            field: CsnField::OperationNumber,
        })?;

        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            micros,
            change_count,
            replica_id: replica_id as u16,
            operation_number,
        })
    }

    /// Converts the timestamp fields to milliseconds since the Unix epoch.
    ///
    /// Out-of-range days are added onto the first of the month, so
    /// February 31st lands in early March, the lenient behavior of the
    /// date formatters this codec stays wire-compatible with.
    fn timestamp_millis(&self) -> Result<i64, InvalidCsn> {
        let timestamp = NaiveDate::from_ymd_opt(self.year as i32, self.month, 1)
            .and_then(|first| first.checked_add_days(Days::new(u64::from(self.day - 1))))
            .and_then(|date| date.and_hms_opt(self.hour, self.minute, self.second))
            .context(BadTimestampSnafu)?;

        Ok(timestamp.and_utc().timestamp_millis() + i64::from(self.micros / 1000))
    }
}

fn decimal(digits: &[u8]) -> Option<u32> {
    digits.iter().try_fold(0u32, |value, &digit| {
        digit
            .is_ascii_digit()
            .then(|| value * 10 + u32::from(digit - b'0'))
    })
}

fn hexadecimal(digits: &[u8]) -> Option<u32> {
    digits.iter().try_fold(0u32, |value, &digit| {
        (digit as char)
            .to_digit(16)
            .map(|nibble| (value << 4) | nibble)
    })
}
