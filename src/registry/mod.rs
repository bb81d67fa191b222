//! Runtime-mutable registry of named styles and dynamic style factories.
//!
//! Each [`Styler`](crate::Styler) root owns one registry, seeded from the
//! built-in catalog. Registration is total: any pair of strings is accepted as
//! a style, any factory is accepted as-is, and re-registering a name simply
//! overwrites the previous entry of either kind. Resolution happens at
//! property-access time, so a registration is immediately visible to every
//! chain sharing the root, including chains built before the registration.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::catalog::{builtin_styles, truecolor, ColorLayer};
use crate::pair::StylePair;

/// An opaque argument value passed to a dynamic style factory.
///
/// The registry performs no validation of factory arguments; built-in
/// factories clamp or parse their own inputs, and plugin factories are
/// expected to do the same.
#[derive(Debug, Clone, PartialEq)]
pub enum FactoryArg {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
}

impl FactoryArg {
    /// Numeric view of the argument: `Int` and `Float` convert, other kinds
    /// are `None`, so factories can tell a non-numeric argument from zero.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FactoryArg::Int(v) => Some(*v as f64),
            FactoryArg::Float(v) => Some(*v),
            FactoryArg::Str(_) | FactoryArg::Bool(_) => None,
        }
    }

    /// String view of the argument, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FactoryArg::Str(v) => Some(v),
            _ => None,
        }
    }
}

impl From<i64> for FactoryArg {
    fn from(v: i64) -> Self {
        FactoryArg::Int(v)
    }
}

impl From<i32> for FactoryArg {
    fn from(v: i32) -> Self {
        FactoryArg::Int(i64::from(v))
    }
}

impl From<f64> for FactoryArg {
    fn from(v: f64) -> Self {
        FactoryArg::Float(v)
    }
}

impl From<&str> for FactoryArg {
    fn from(v: &str) -> Self {
        FactoryArg::Str(v.to_string())
    }
}

impl From<String> for FactoryArg {
    fn from(v: String) -> Self {
        FactoryArg::Str(v)
    }
}

impl From<bool> for FactoryArg {
    fn from(v: bool) -> Self {
        FactoryArg::Bool(v)
    }
}

/// A dynamic style factory: arguments in, [`StylePair`] out.
pub type StyleFactory = Arc<dyn Fn(&[FactoryArg]) -> StylePair + Send + Sync>;

/// A bulk-extension entry: either a static pair or a dynamic factory.
///
/// This is the "callable or not" discrimination of [`Registry::extend`]; a
/// `Static` entry registers like [`Registry::register`], a `Dynamic` entry
/// like [`Registry::register_dynamic`].
#[derive(Clone)]
pub enum StyleDef {
    Static(StylePair),
    Dynamic(StyleFactory),
}

impl From<StylePair> for StyleDef {
    fn from(pair: StylePair) -> Self {
        StyleDef::Static(pair)
    }
}

impl fmt::Debug for StyleDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleDef::Static(pair) => f.debug_tuple("Static").field(pair).finish(),
            StyleDef::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// The result of a name lookup: a ready pair or a factory awaiting arguments.
#[derive(Clone)]
pub enum Resolved {
    Pair(StylePair),
    Factory(StyleFactory),
}

/// Mutable table of named styles and dynamic style factories.
///
/// Static pairs and factories live in separate maps; lookup checks the static
/// map first, and registering a name under one kind evicts it from the other,
/// so a name never resolves ambiguously. Last registration wins.
#[derive(Clone, Default)]
pub struct Registry {
    statics: HashMap<String, StylePair>,
    dynamics: HashMap<String, StyleFactory>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry seeded with every built-in catalog style plus the
    /// `rgb` and `bg_rgb` truecolor factories.
    ///
    /// The factories are total: missing or non-numeric channel arguments
    /// read as 0, everything else clamps like
    /// [`truecolor`](crate::catalog::truecolor).
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for (name, pair) in builtin_styles() {
            registry.statics.insert(name.to_string(), pair);
        }
        registry.register_dynamic("rgb", |args: &[FactoryArg]| {
            truecolor(
                ColorLayer::Foreground,
                channel(args, 0),
                channel(args, 1),
                channel(args, 2),
            )
        });
        registry.register_dynamic("bg_rgb", |args: &[FactoryArg]| {
            truecolor(
                ColorLayer::Background,
                channel(args, 0),
                channel(args, 1),
                channel(args, 2),
            )
        });
        registry
    }

    /// Inserts or overwrites a static style under `name`.
    ///
    /// The pair's content is not validated; any two strings are accepted.
    pub fn register(&mut self, name: impl Into<String>, pair: StylePair) {
        let name = name.into();
        self.dynamics.remove(&name);
        self.statics.insert(name, pair);
    }

    /// Inserts or overwrites a static style from two raw sequences.
    pub fn register_style(
        &mut self,
        name: impl Into<String>,
        open: impl Into<String>,
        close: impl Into<String>,
    ) {
        self.register(name, StylePair::new(open, close));
    }

    /// Inserts or overwrites a dynamic style factory under `name`.
    pub fn register_dynamic<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn(&[FactoryArg]) -> StylePair + Send + Sync + 'static,
    {
        let name = name.into();
        self.statics.remove(&name);
        self.dynamics.insert(name, Arc::new(factory));
    }

    /// Bulk registration; equivalent to repeated single registrations.
    pub fn extend(&mut self, defs: impl IntoIterator<Item = (String, StyleDef)>) {
        for (name, def) in defs {
            match def {
                StyleDef::Static(pair) => self.register(name, pair),
                StyleDef::Dynamic(factory) => {
                    self.statics.remove(&name);
                    self.dynamics.insert(name, factory);
                }
            }
        }
    }

    /// Looks up a name, checking static styles before dynamic factories.
    pub fn resolve(&self, name: &str) -> Option<Resolved> {
        if let Some(pair) = self.statics.get(name) {
            return Some(Resolved::Pair(pair.clone()));
        }
        self.dynamics.get(name).cloned().map(Resolved::Factory)
    }

    /// Returns the static pair registered under `name`, if any.
    pub fn pair(&self, name: &str) -> Option<StylePair> {
        self.statics.get(name).cloned()
    }

    /// Returns the dynamic factory registered under `name`, if any.
    pub fn factory(&self, name: &str) -> Option<StyleFactory> {
        self.dynamics.get(name).cloned()
    }

    /// Returns true if `name` resolves to either kind of style.
    pub fn has(&self, name: &str) -> bool {
        self.statics.contains_key(name) || self.dynamics.contains_key(name)
    }

    /// Number of registered names across both kinds.
    pub fn len(&self) -> usize {
        self.statics.len() + self.dynamics.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.statics.is_empty() && self.dynamics.is_empty()
    }

    /// Iterates over every registered name, static entries first.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.statics
            .keys()
            .chain(self.dynamics.keys())
            .map(|s| s.as_str())
    }
}

/// Channel value for the seeded truecolor factories; absent or non-numeric
/// arguments read as 0.
fn channel(args: &[FactoryArg], index: usize) -> f64 {
    args.get(index).and_then(FactoryArg::as_f64).unwrap_or(0.0)
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("statics", &self.statics.len())
            .field("dynamics", &self.dynamics.len())
            .finish()
    }
}
