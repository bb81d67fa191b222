//! Fluent ANSI terminal styling with nesting-safe composition.
//!
//! `tinct` renders values into strings wrapped with SGR escape sequences.
//! Styles are chosen through a chainable [`Styler`]; each chaining call
//! returns a new immutable value, so chains can be stored, branched, and
//! reused. Rendered fragments can be nested inside other renders: the
//! compositor reopens an outer style after any embedded close of the same
//! style family, so inner fragments never truncate their surroundings.
//!
//! # Quick start
//!
//! ```rust
//! use tinct::Styler;
//!
//! let flu = Styler::new();
//!
//! // Chain built-in styles, then render.
//! let out = flu.red().bold().paint("error");
//! assert_eq!(out, "\x1b[31m\x1b[1merror\x1b[22m\x1b[39m");
//!
//! // Truecolor and hex accessors.
//! let peach = flu.hex("#ffcba4").unwrap().paint("peach");
//! let sky = flu.bg_rgb(135, 206, 235).paint("sky");
//! # let _ = (peach, sky);
//! ```
//!
//! # Runtime extension
//!
//! Every root owns a mutable style registry, shared by all chains built from
//! it. Plugins can register static pairs or argument-taking factories at any
//! point; resolution happens at access time, so existing chains see new
//! registrations immediately:
//!
//! ```rust
//! use tinct::Styler;
//!
//! let flu = Styler::new();
//! let chain = flu.bold();
//!
//! flu.register_style("banner", "\x1b[7m", "\x1b[27m");
//! assert_eq!(chain.style("banner").paint("hi"), "\x1b[1m\x1b[7mhi\x1b[27m\x1b[22m");
//! ```
//!
//! # What this crate does not do
//!
//! No capability detection: escape sequences are always emitted, and deciding
//! whether the target understands them is the caller's responsibility.

pub mod catalog;
pub mod compose;
mod error;
mod pair;
pub mod registry;
mod styler;

pub use error::ColorFormatError;
pub use pair::StylePair;
pub use registry::{FactoryArg, Registry, Resolved, StyleDef, StyleFactory};
pub use styler::Styler;

/// Renders heterogeneous values through a styler, space-joined.
///
/// The variadic front for [`Styler::paint_all`]: every argument only needs to
/// implement [`Display`](std::fmt::Display).
///
/// # Example
///
/// ```rust
/// use tinct::{paint, Styler};
///
/// let flu = Styler::new();
/// let out = paint!(flu.red(), "a", 1, true);
/// assert_eq!(out, "\x1b[31ma 1 true\x1b[39m");
/// ```
#[macro_export]
macro_rules! paint {
    ($styler:expr $(, $arg:expr)* $(,)?) => {
        $styler.paint_all(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}
