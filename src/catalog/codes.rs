//! The fixed SGR code table behind the built-in style names.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::pair::StylePair;

/// Every built-in style name with its SGR open and close parameters.
///
/// Foreground colors open in 30–37 (bright 90–97) and close with 39;
/// backgrounds open in 40–47 (bright 100–107) and close with 49. Modifiers
/// carry their own close codes, except `reset` which closes with 0 as well.
/// `gray`/`grey` alias the bright-black foreground, `bg_gray`/`bg_grey` the
/// bright-black background.
pub(crate) const BUILTIN_CODES: &[(&str, u8, u8)] = &[
    // Modifiers
    ("reset", 0, 0),
    ("bold", 1, 22),
    ("dim", 2, 22),
    ("italic", 3, 23),
    ("underline", 4, 24),
    ("inverse", 7, 27),
    ("hidden", 8, 28),
    ("strikethrough", 9, 29),
    // Foreground colors
    ("black", 30, 39),
    ("red", 31, 39),
    ("green", 32, 39),
    ("yellow", 33, 39),
    ("blue", 34, 39),
    ("magenta", 35, 39),
    ("cyan", 36, 39),
    ("white", 37, 39),
    // Bright foreground colors
    ("black_bright", 90, 39),
    ("red_bright", 91, 39),
    ("green_bright", 92, 39),
    ("yellow_bright", 93, 39),
    ("blue_bright", 94, 39),
    ("magenta_bright", 95, 39),
    ("cyan_bright", 96, 39),
    ("white_bright", 97, 39),
    // Background colors
    ("bg_black", 40, 49),
    ("bg_red", 41, 49),
    ("bg_green", 42, 49),
    ("bg_yellow", 43, 49),
    ("bg_blue", 44, 49),
    ("bg_magenta", 45, 49),
    ("bg_cyan", 46, 49),
    ("bg_white", 47, 49),
    // Bright background colors
    ("bg_black_bright", 100, 49),
    ("bg_red_bright", 101, 49),
    ("bg_green_bright", 102, 49),
    ("bg_yellow_bright", 103, 49),
    ("bg_blue_bright", 104, 49),
    ("bg_magenta_bright", 105, 49),
    ("bg_cyan_bright", 106, 49),
    ("bg_white_bright", 107, 49),
    // Gray aliases (bright black)
    ("gray", 90, 39),
    ("grey", 90, 39),
    ("bg_gray", 100, 49),
    ("bg_grey", 100, 49),
];

/// Formats a single-parameter SGR sequence.
pub(crate) fn sgr(code: u8) -> String {
    format!("\x1b[{code}m")
}

/// Name-keyed lookup table over [`BUILTIN_CODES`], built on first use.
pub(crate) static BUILTINS: Lazy<HashMap<&'static str, StylePair>> = Lazy::new(|| {
    BUILTIN_CODES
        .iter()
        .map(|&(name, open, close)| (name, StylePair::new(sgr(open), sgr(close))))
        .collect()
});

/// Returns every built-in style name paired with its escape sequences.
///
/// This is the table each new [`Styler`](crate::Styler) root seeds its
/// registry from. Iteration order matches the catalog's declaration order.
///
/// # Example
///
/// ```rust
/// let styles: Vec<_> = tinct::catalog::builtin_styles().collect();
/// assert!(styles.iter().any(|(name, _)| *name == "bg_red_bright"));
/// assert_eq!(styles.len(), 44);
/// ```
pub fn builtin_styles() -> impl Iterator<Item = (&'static str, StylePair)> {
    BUILTIN_CODES
        .iter()
        .filter_map(|&(name, _, _)| BUILTINS.get(name).map(|pair| (name, pair.clone())))
}
