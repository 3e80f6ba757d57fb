use snafu::Snafu;

/// Identifies the fixed-width hexadecimal field of a CSN that failed to
/// parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CsnField {
    /// The six-digit change count following the timestamp.
    ChangeCount,
    /// The three-digit replica identifier.
    ReplicaId,
    /// The six-digit per-operation counter.
    OperationNumber,
}

impl core::fmt::Display for CsnField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::ChangeCount => "change count",
            Self::ReplicaId => "replica id",
            Self::OperationNumber => "operation number",
        })
    }
}

/// An error returned when the textual form of a CSN is rejected.
#[derive(Snafu, Debug, Clone, PartialEq, Eq, Hash)]
#[snafu(visibility(pub(crate)))]
pub enum InvalidCsn {
    /// A CSN is exactly 40 characters.
    #[snafu(display("CSN is {length} characters long, expected exactly 40"))]
    WrongLength {
        /// Length of the rejected input, in bytes.
        length: usize,
    },
    /// One of the literal `.`, `Z`, or `#` separators is missing or wrong.
    #[snafu(display("wrong separator at position {position}"))]
    BadSeparator {
        /// Zero-based offset of the rejected separator.
        position: usize,
    },
    /// The leading 14-digit timestamp or its microsecond fraction is not
    /// syntactically valid.
    #[snafu(display("timestamp portion is not a valid generalized time"))]
    BadTimestamp,
    /// A counter field contains characters outside `[0-9a-fA-F]`.
    #[snafu(display("{field} field is not fixed-width hexadecimal"))]
    BadHexField {
        /// Which of the three counter fields was rejected.
        field: CsnField,
    },
}
