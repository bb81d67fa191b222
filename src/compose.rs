//! Style composition: applying an ordered pair chain to a text body.
//!
//! ANSI styling is not hierarchical: a close code terminates its style family
//! for good, so naively wrapping text that already contains an inner styled
//! fragment lets the inner close silently end the outer style as well. The
//! compositor repairs this by reopening a style immediately after every
//! embedded occurrence of that style's own close sequence before wrapping.

use std::fmt::Display;

use crate::pair::StylePair;

/// Joins call arguments with single spaces using their natural string form.
///
/// # Example
///
/// ```rust
/// use tinct::compose::join_display;
///
/// let joined = join_display(&[&"a", &1, &true]);
/// assert_eq!(joined, "a 1 true");
/// ```
pub fn join_display(parts: &[&dyn Display]) -> String {
    let mut out = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&part.to_string());
    }
    out
}

/// Applies the accumulated pair chain to `text`, first-chained outermost.
///
/// The fold runs from the innermost (last-chained) pair outward. Before each
/// wrap, every literal occurrence of that pair's close sequence already in the
/// output is replaced with `close + open`, so an inner fragment that closed
/// the same style family no longer truncates the wrap being applied.
///
/// An empty chain or empty text returns the text unchanged; no escape
/// sequences are emitted for nothing.
///
/// The close-sequence scan is a literal string match. Styles that share a
/// close sequence (all foreground colors close with the same code) therefore
/// reopen each other at a foreign close; callers composing same-family styles
/// get the reopened outer style from that point on, which is the behavior the
/// nesting repair exists to produce.
pub fn compose(pairs: &[StylePair], text: &str) -> String {
    if pairs.is_empty() || text.is_empty() {
        return text.to_string();
    }

    let mut out = text.to_string();
    for pair in pairs.iter().rev() {
        if out.contains(&pair.close) {
            let reopen = format!("{}{}", pair.close, pair.open);
            out = out.replace(&pair.close, &reopen);
        }
        out = format!("{}{}{}", pair.open, out, pair.close);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn red() -> StylePair {
        StylePair::new("\x1b[31m", "\x1b[39m")
    }

    fn bold() -> StylePair {
        StylePair::new("\x1b[1m", "\x1b[22m")
    }

    fn bg_blue() -> StylePair {
        StylePair::new("\x1b[44m", "\x1b[49m")
    }

    #[test]
    fn test_single_pair_wraps_text() {
        assert_eq!(compose(&[red()], "hi"), "\x1b[31mhi\x1b[39m");
    }

    #[test]
    fn test_empty_chain_returns_text_unchanged() {
        assert_eq!(compose(&[], "plain"), "plain");
    }

    #[test]
    fn test_empty_text_emits_no_sequences() {
        assert_eq!(compose(&[red(), bold()], ""), "");
    }

    #[test]
    fn test_chain_order_first_is_outermost() {
        let out = compose(&[red(), bold()], "hi");
        assert_eq!(out, "\x1b[31m\x1b[1mhi\x1b[22m\x1b[39m");
    }

    #[test]
    fn test_duplicate_pairs_all_applied() {
        let out = compose(&[bold(), bold()], "hi");
        // The outer wrap reopens itself at the inner close before wrapping.
        assert_eq!(out, "\x1b[1m\x1b[1mhi\x1b[22m\x1b[1m\x1b[22m");
    }

    #[test]
    fn test_nested_different_family_left_untouched() {
        // A bold fragment inside a background wrap: bold's bytes pass through,
        // the background pair wraps exactly once.
        let inner = compose(&[bold()], "mid");
        let text = format!("pre {inner} post");
        let out = compose(&[bg_blue()], &text);
        assert_eq!(out, format!("\x1b[44mpre {inner} post\x1b[49m"));
    }

    #[test]
    fn test_reopen_inserted_at_embedded_close() {
        // Inner red fragment closes the foreground family; wrapping in red
        // again must reopen at that close.
        let inner = compose(&[red()], "inner");
        let text = format!("a {inner} b");
        let out = compose(&[red()], &text);
        assert_eq!(
            out,
            "\x1b[31ma \x1b[31minner\x1b[39m\x1b[31m b\x1b[39m"
        );
    }

    #[test]
    fn test_shared_close_sequence_reopens_outer_style() {
        // Green closes with the same code as red; the literal scan reopens
        // the outer red at green's close.
        let green = StylePair::new("\x1b[32m", "\x1b[39m");
        let inner = compose(&[green], "go");
        let out = compose(&[red()], &format!("stop {inner} stop"));
        assert_eq!(
            out,
            "\x1b[31mstop \x1b[32mgo\x1b[39m\x1b[31m stop\x1b[39m"
        );
    }

    #[test]
    fn test_join_display_mixed_types() {
        assert_eq!(join_display(&[&"a", &1, &true]), "a 1 true");
    }

    #[test]
    fn test_join_display_single_and_empty() {
        assert_eq!(join_display(&[&"only"]), "only");
        assert_eq!(join_display(&[]), "");
    }

    proptest! {
        // Stripping the single wrap recovers the body whenever the body does
        // not already contain the close sequence.
        #[test]
        fn test_round_trip_strip_recovers_body(body in "[a-zA-Z0-9 .,!-]{0,64}") {
            let pair = red();
            prop_assume!(!body.contains(&pair.close));
            let out = compose(std::slice::from_ref(&pair), &body);
            if body.is_empty() {
                prop_assert_eq!(out, body);
            } else {
                let stripped = out
                    .strip_prefix(&pair.open)
                    .and_then(|rest| rest.strip_suffix(&pair.close))
                    .expect("wrapped output must carry the pair at both ends");
                prop_assert_eq!(stripped, body);
            }
        }
    }
}
