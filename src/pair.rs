//! The open/close escape-sequence pair every style reduces to.

use serde::{Deserialize, Serialize};

/// An open/close pair of escape-sequence fragments defining one visual effect.
///
/// A pair is just two strings: the sequence that switches the effect on and the
/// sequence that switches it off. The compositor treats both as opaque bytes,
/// so pairs loaded from theme files or registered by plugins work identically
/// to the built-ins.
///
/// # Example
///
/// ```rust
/// use tinct::StylePair;
///
/// let red = StylePair::new("\x1b[31m", "\x1b[39m");
/// assert_eq!(red.open, "\x1b[31m");
/// assert_eq!(red.close, "\x1b[39m");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StylePair {
    /// Escape sequence that enables the effect.
    pub open: String,
    /// Escape sequence that disables the effect.
    pub close: String,
}

impl StylePair {
    /// Creates a pair from the two raw sequences.
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }
}
