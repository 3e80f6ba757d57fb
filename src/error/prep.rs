use snafu::Snafu;

/// An error returned when a value cannot be prepared for comparison.
#[derive(Snafu, Debug, Clone, PartialEq, Eq, Hash)]
#[snafu(visibility(pub(crate)))]
pub enum PrepareError {
    /// A prohibited code point remained after mapping and normalization.
    #[snafu(display("prohibited character U+{code_point:04X} in prepared value"))]
    InvalidCharacter {
        /// The offending Unicode scalar value.
        code_point: u32,
    },
    /// The input octets are not well-formed UTF-8.
    #[snafu(display("input is not valid UTF-8 at byte offset {offset}"))]
    InvalidUtf8 {
        /// Offset of the first byte that is not part of a valid sequence.
        offset: usize,
    },
}
