//! Truecolor pair construction and hex color parsing.

use crate::error::ColorFormatError;
use crate::pair::StylePair;

use super::codes::sgr;

/// Which color channel a truecolor pair targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorLayer {
    Foreground,
    Background,
}

/// Builds a 24-bit RGB style pair for the given layer.
///
/// Each channel is clamped independently: `NaN` becomes 0, fractional values
/// floor, and anything outside `[0, 255]` saturates. The close sequence resets
/// only the targeted layer (39 for foreground, 49 for background).
///
/// # Example
///
/// ```rust
/// use tinct::catalog::{truecolor, ColorLayer};
///
/// let orange = truecolor(ColorLayer::Foreground, 255, 136, 0);
/// assert_eq!(orange.open, "\x1b[38;2;255;136;0m");
/// assert_eq!(orange.close, "\x1b[39m");
///
/// // Out-of-range and fractional channels clamp rather than fail
/// let clamped = truecolor(ColorLayer::Background, -5, 300, 2.9);
/// assert_eq!(clamped.open, "\x1b[48;2;0;255;2m");
/// ```
pub fn truecolor(
    layer: ColorLayer,
    r: impl Into<f64>,
    g: impl Into<f64>,
    b: impl Into<f64>,
) -> StylePair {
    let (r, g, b) = (
        clamp_channel(r.into()),
        clamp_channel(g.into()),
        clamp_channel(b.into()),
    );
    match layer {
        ColorLayer::Foreground => StylePair::new(format!("\x1b[38;2;{r};{g};{b}m"), sgr(39)),
        ColorLayer::Background => StylePair::new(format!("\x1b[48;2;{r};{g};{b}m"), sgr(49)),
    }
}

/// Clamps a channel value into a byte: NaN to 0, fractions floored,
/// saturating at the ends of [0, 255].
fn clamp_channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    let floored = value.floor();
    if floored <= 0.0 {
        0
    } else if floored >= 255.0 {
        255
    } else {
        floored as u8
    }
}

/// Parses a hex color string into its RGB byte channels.
///
/// Accepts an optional leading `#`, then either 3 or 6 hexadecimal digits
/// (case-insensitive). The 3-digit form duplicates each digit, so `"abc"`
/// parses as `"aabbcc"`.
///
/// # Errors
///
/// Returns [`ColorFormatError`] (carrying the original input) when the digit
/// count is neither 3 nor 6 or any character is not a hex digit.
///
/// # Example
///
/// ```rust
/// use tinct::catalog::parse_hex;
///
/// assert_eq!(parse_hex("#ff8800").unwrap(), (255, 136, 0));
/// assert_eq!(parse_hex("fff").unwrap(), (255, 255, 255));
/// assert!(parse_hex("#1234").is_err());
/// ```
pub fn parse_hex(input: &str) -> Result<(u8, u8, u8), ColorFormatError> {
    let digits = input.strip_prefix('#').unwrap_or(input);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorFormatError::new(input));
    }

    let full: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return Err(ColorFormatError::new(input)),
    };

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&full[range], 16).map_err(|_| ColorFormatError::new(input))
    };
    Ok((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truecolor_foreground_sequence() {
        let pair = truecolor(ColorLayer::Foreground, 12, 34, 56);
        assert_eq!(pair.open, "\x1b[38;2;12;34;56m");
        assert_eq!(pair.close, "\x1b[39m");
    }

    #[test]
    fn test_truecolor_background_sequence() {
        let pair = truecolor(ColorLayer::Background, 12, 34, 56);
        assert_eq!(pair.open, "\x1b[48;2;12;34;56m");
        assert_eq!(pair.close, "\x1b[49m");
    }

    #[test]
    fn test_channel_clamping() {
        let pair = truecolor(ColorLayer::Foreground, -5, 300, 2.9);
        assert_eq!(pair.open, "\x1b[38;2;0;255;2m");
    }

    #[test]
    fn test_channel_nan_clamps_to_zero() {
        let pair = truecolor(ColorLayer::Foreground, f64::NAN, f64::NAN, 128);
        assert_eq!(pair.open, "\x1b[38;2;0;0;128m");
    }

    #[test]
    fn test_parse_hex_six_digits() {
        assert_eq!(parse_hex("#ffffff").unwrap(), (255, 255, 255));
        assert_eq!(parse_hex("000000").unwrap(), (0, 0, 0));
        assert_eq!(parse_hex("#FF8800").unwrap(), (255, 136, 0));
    }

    #[test]
    fn test_parse_hex_three_digit_duplication() {
        assert_eq!(parse_hex("#fff").unwrap(), parse_hex("#ffffff").unwrap());
        assert_eq!(parse_hex("abc").unwrap(), parse_hex("aabbcc").unwrap());
    }

    #[test]
    fn test_parse_hex_rejects_bad_lengths() {
        for bad in ["", "#", "1", "12", "1234", "12345", "1234567"] {
            let err = parse_hex(bad).unwrap_err();
            assert_eq!(err.input, bad);
        }
    }

    #[test]
    fn test_parse_hex_rejects_non_hex_characters() {
        assert!(parse_hex("12g").is_err());
        assert!(parse_hex("#zzzzzz").is_err());
        assert!(parse_hex("#ff ff0").is_err());
    }
}
