//! The fluent builder: chainable style accumulation and rendering.

mod builtin;

use std::fmt;
use std::sync::{Arc, Mutex};

use crate::catalog::{parse_hex, truecolor, ColorLayer};
use crate::compose::{compose, join_display};
use crate::error::ColorFormatError;
use crate::pair::StylePair;
use crate::registry::{FactoryArg, Registry, StyleDef};

/// A chainable terminal styler.
///
/// A `Styler` is an immutable snapshot of an ordered style chain plus a handle
/// to its root's registry. Every chaining call returns a new value with one
/// more pair appended; the receiver is never mutated, so chains can be stored
/// and branched freely.
///
/// # Example
///
/// ```rust
/// use tinct::Styler;
///
/// let flu = Styler::new();
/// let warn = flu.yellow().bold();
///
/// assert_eq!(warn.paint("careful"), "\x1b[33m\x1b[1mcareful\x1b[22m\x1b[39m");
/// // `warn` is untouched by further chaining:
/// let loud = warn.underline();
/// assert_eq!(warn.pairs().len(), 2);
/// assert_eq!(loud.pairs().len(), 3);
/// ```
///
/// # Nesting
///
/// Rendered fragments can be embedded in other renders; the compositor
/// reopens an outer style after any inner close of the same style family:
///
/// ```rust
/// use tinct::Styler;
///
/// let flu = Styler::new();
/// let inner = flu.green().paint("go");
/// let out = flu.red().paint(format!("stop {inner} stop"));
/// assert!(out.contains("\x1b[39m\x1b[31m stop"));
/// ```
#[derive(Debug, Clone)]
pub struct Styler {
    registry: Arc<Mutex<Registry>>,
    chain: Vec<StylePair>,
}

impl Styler {
    /// Creates a root styler with its own catalog-seeded registry.
    ///
    /// Independent roots have independent registries; registrations on one
    /// are never visible from another.
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry::with_builtins())),
            chain: Vec::new(),
        }
    }

    /// Returns a new styler with `pair` appended to the chain.
    ///
    /// This is the raw extension step every named accessor reduces to; it is
    /// public so ad-hoc pairs can be chained without registration.
    pub fn with_pair(&self, pair: StylePair) -> Self {
        let mut chain = self.chain.clone();
        chain.push(pair);
        Self {
            registry: Arc::clone(&self.registry),
            chain,
        }
    }

    /// The accumulated style pairs, in chain order (outermost first).
    pub fn pairs(&self) -> &[StylePair] {
        &self.chain
    }

    /// Resolves `name` against the registry and appends its pair.
    ///
    /// Unknown names (and names registered as dynamic factories, which need
    /// arguments) are a silent no-op: the returned styler is an unchanged
    /// copy. Use [`try_style`](Self::try_style) to observe the miss.
    ///
    /// Resolution happens here, at access time, so styles registered after
    /// this styler was created are found too.
    pub fn style(&self, name: &str) -> Self {
        self.try_style(name).unwrap_or_else(|| self.clone())
    }

    /// Like [`style`](Self::style), but `None` when `name` does not resolve
    /// to a static style.
    pub fn try_style(&self, name: &str) -> Option<Self> {
        let pair = self.lock_registry().pair(name)?;
        Some(self.with_pair(pair))
    }

    /// Invokes the dynamic factory registered under `name` and appends the
    /// produced pair. Unknown names are a silent no-op.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tinct::{FactoryArg, StylePair, Styler};
    ///
    /// let flu = Styler::new();
    /// flu.register_dynamic("ansi256", |args: &[FactoryArg]| {
    ///     let index = args.first().and_then(|a| a.as_f64()).unwrap_or(0.0) as u8;
    ///     StylePair::new(format!("\x1b[38;5;{index}m"), "\x1b[39m")
    /// });
    ///
    /// let out = flu.dynamic("ansi256", &[199.into()]).paint("pink");
    /// assert_eq!(out, "\x1b[38;5;199mpink\x1b[39m");
    /// ```
    pub fn dynamic(&self, name: &str, args: &[FactoryArg]) -> Self {
        match self.lock_registry().factory(name) {
            Some(factory) => self.with_pair(factory(args)),
            None => self.clone(),
        }
    }

    /// Appends a 24-bit foreground color. Channels clamp (NaN to 0,
    /// fractions floor, saturate to `[0, 255]`) rather than fail.
    ///
    /// Routes through the `rgb` factory seeded into every root's registry,
    /// so re-registering `"rgb"` changes what this method produces, just as
    /// re-registering a static name changes its chain method.
    pub fn rgb(&self, r: impl Into<f64>, g: impl Into<f64>, b: impl Into<f64>) -> Self {
        self.dynamic(
            "rgb",
            &[
                FactoryArg::Float(r.into()),
                FactoryArg::Float(g.into()),
                FactoryArg::Float(b.into()),
            ],
        )
    }

    /// Background counterpart of [`rgb`](Self::rgb), via the `bg_rgb`
    /// factory.
    pub fn bg_rgb(&self, r: impl Into<f64>, g: impl Into<f64>, b: impl Into<f64>) -> Self {
        self.dynamic(
            "bg_rgb",
            &[
                FactoryArg::Float(r.into()),
                FactoryArg::Float(g.into()),
                FactoryArg::Float(b.into()),
            ],
        )
    }

    /// Appends a foreground color parsed from a hex string (`"#fff"`,
    /// `"ff8800"`, ...).
    ///
    /// Unlike [`rgb`](Self::rgb), this accessor is fallible, so it cannot be
    /// expressed as a registered factory (factories return a pair, never an
    /// error) and builds the truecolor pair directly.
    ///
    /// # Errors
    ///
    /// Returns [`ColorFormatError`] when the input is not a valid 3- or
    /// 6-digit hex color; the error is propagated, never swallowed.
    pub fn hex(&self, input: &str) -> Result<Self, ColorFormatError> {
        let (r, g, b) = parse_hex(input)?;
        Ok(self.with_pair(truecolor(ColorLayer::Foreground, r, g, b)))
    }

    /// Background counterpart of [`hex`](Self::hex).
    pub fn bg_hex(&self, input: &str) -> Result<Self, ColorFormatError> {
        let (r, g, b) = parse_hex(input)?;
        Ok(self.with_pair(truecolor(ColorLayer::Background, r, g, b)))
    }

    /// Renders one value through the accumulated chain.
    pub fn paint(&self, value: impl fmt::Display) -> String {
        compose(&self.chain, &value.to_string())
    }

    /// Renders several values, space-joined in their natural string form.
    ///
    /// The [`paint!`](crate::paint) macro is the variadic front for this.
    pub fn paint_all(&self, parts: &[&dyn fmt::Display]) -> String {
        compose(&self.chain, &join_display(parts))
    }

    /// Registers a static style on the shared registry.
    ///
    /// Available at any point in a chain, not only at the root, and
    /// immediately visible to every styler sharing this root.
    pub fn register_style(
        &self,
        name: impl Into<String>,
        open: impl Into<String>,
        close: impl Into<String>,
    ) -> &Self {
        self.lock_registry().register_style(name, open, close);
        self
    }

    /// Registers a dynamic style factory on the shared registry.
    pub fn register_dynamic<F>(&self, name: impl Into<String>, factory: F) -> &Self
    where
        F: Fn(&[FactoryArg]) -> StylePair + Send + Sync + 'static,
    {
        self.lock_registry().register_dynamic(name, factory);
        self
    }

    /// Bulk-registers a mix of static and dynamic definitions.
    pub fn extend(&self, defs: impl IntoIterator<Item = (String, StyleDef)>) -> &Self {
        self.lock_registry().extend(defs);
        self
    }

    fn lock_registry(&self) -> std::sync::MutexGuard<'_, Registry> {
        // A poisoned lock still holds a valid registry; keep going.
        match self.registry.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Default for Styler {
    fn default() -> Self {
        Self::new()
    }
}

/// Implicit string coercion: a styler formatted without being invoked writes
/// its open sequences in chain order followed by the close sequences in
/// reverse, with no body text. This keeps concatenation contexts working:
/// `format!("{bold}")` yields `"\x1b[1m\x1b[22m"`.
impl fmt::Display for Styler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pair in &self.chain {
            f.write_str(&pair.open)?;
        }
        for pair in self.chain.iter().rev() {
            f.write_str(&pair.close)?;
        }
        Ok(())
    }
}
