//! Chain methods for the built-in style names.
//!
//! Each method resolves its own name through the shared registry, so
//! re-registering a built-in name changes what the method produces, on
//! existing chains included.

use super::Styler;

macro_rules! builtin_methods {
    ($($method:ident),* $(,)?) => {
        impl Styler {
            $(
                #[doc = concat!(
                    "Appends the `", stringify!($method),
                    "` style and returns the extended chain."
                )]
                pub fn $method(&self) -> Styler {
                    self.style(stringify!($method))
                }
            )*
        }
    };
}

builtin_methods!(
    // Modifiers
    reset,
    bold,
    dim,
    italic,
    underline,
    inverse,
    hidden,
    strikethrough,
    // Foreground colors
    black,
    red,
    green,
    yellow,
    blue,
    magenta,
    cyan,
    white,
    black_bright,
    red_bright,
    green_bright,
    yellow_bright,
    blue_bright,
    magenta_bright,
    cyan_bright,
    white_bright,
    // Background colors
    bg_black,
    bg_red,
    bg_green,
    bg_yellow,
    bg_blue,
    bg_magenta,
    bg_cyan,
    bg_white,
    bg_black_bright,
    bg_red_bright,
    bg_green_bright,
    bg_yellow_bright,
    bg_blue_bright,
    bg_magenta_bright,
    bg_cyan_bright,
    bg_white_bright,
    // Aliases
    gray,
    grey,
    bg_gray,
    bg_grey,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_styles;

    #[test]
    fn test_every_builtin_name_resolves_from_a_fresh_root() {
        let flu = Styler::new();
        for (name, pair) in builtin_styles() {
            let out = flu.style(name).paint("x");
            assert_eq!(out, format!("{}x{}", pair.open, pair.close), "style {name}");
        }
    }

    #[test]
    fn test_methods_match_registry_resolution() {
        let flu = Styler::new();
        assert_eq!(flu.cyan().pairs(), flu.style("cyan").pairs());
        assert_eq!(
            flu.bg_magenta_bright().pairs(),
            flu.style("bg_magenta_bright").pairs()
        );
        assert_eq!(flu.strikethrough().pairs(), flu.style("strikethrough").pairs());
    }

    #[test]
    fn test_modifier_close_codes() {
        let flu = Styler::new();
        assert_eq!(flu.dim().paint("x"), "\x1b[2mx\x1b[22m");
        assert_eq!(flu.italic().paint("x"), "\x1b[3mx\x1b[23m");
        assert_eq!(flu.inverse().paint("x"), "\x1b[7mx\x1b[27m");
        assert_eq!(flu.reset().paint("x"), "\x1b[0mx\x1b[0m");
    }
}
