//! The built-in style catalog: named SGR pairs and truecolor construction.
//!
//! This module provides:
//!
//! - The fixed table of named styles (16 foreground colors, 16 background
//!   colors, 8 modifiers, and the `gray`/`grey` aliases) used to seed each
//!   registry
//! - [`truecolor`]: 24-bit RGB pair construction with channel clamping
//! - [`parse_hex`]: hex color string parsing
//!
//! The catalog is pure data plus pure functions; it performs no terminal
//! capability detection and never suppresses escape sequences.

mod codes;
mod color;

pub use codes::builtin_styles;
pub use color::{parse_hex, truecolor, ColorLayer};
