//! Color parsing errors.

/// Error returned when a hex color string cannot be parsed.
///
/// Raised by [`parse_hex`](crate::catalog::parse_hex) and the
/// [`hex`](crate::Styler::hex)/[`bg_hex`](crate::Styler::bg_hex) accessors when
/// the input, after stripping an optional leading `#`, is not exactly 3 or 6
/// hexadecimal digits. The offending input is carried for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid hex color format: {input:?}")]
pub struct ColorFormatError {
    /// The original input that failed to parse.
    pub input: String,
}

impl ColorFormatError {
    pub(crate) fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}
