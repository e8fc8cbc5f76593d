//! String-level color helpers: hex detection, hex ⇄ `rgb()/rgba()`
//! conversion, alpha application and color validation.
//!
//! Two failure policies coexist.  Parsers that feed numeric
//! channels to callers ([`hex_to_rgb`], [`color_to_rgb_values`],
//! [`add_color_alpha`]) return [`SwatchError::UnsupportedColor`]; the
//! formatting and predicate helpers never fail and degrade to zeros,
//! pass-through values or `false` instead.

use regex::Regex;
use std::sync::LazyLock;
use swatch_core::{Result, SwatchError};

use crate::named::is_named_color;

/// `#` followed by a run of 3–6 hex digits, anywhere in the input.
static HEX_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[a-fA-F0-9]{3,6}").unwrap());

static HEX_SHORT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^#?([0-9a-f])([0-9a-f])([0-9a-f])$").unwrap());

static HEX_FULL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^#?([0-9a-f]{2})([0-9a-f]{2})([0-9a-f]{2})$").unwrap());

/// Greedy: first `(` to last `)`.
static PAREN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\((.+)\)").unwrap());

static LEADING_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?").unwrap()
});

const NUM: &str = r"[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:e[+-]?[0-9]+)?";

static HEX_COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap()
});

static RGB_FN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^rgba?\(\s*{NUM}%?\s*,\s*{NUM}%?\s*,\s*{NUM}%?\s*(?:,\s*{NUM}%?\s*)?\)$"
    ))
    .unwrap()
});

static HSL_FN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^hsla?\(\s*{NUM}(?:deg)?\s*,\s*{NUM}%\s*,\s*{NUM}%\s*(?:,\s*{NUM}%?\s*)?\)$"
    ))
    .unwrap()
});

/// Alpha used by [`hex_to_rgba`].
pub const OPAQUE: f64 = 1.0;

/// `true` if `input` contains `#` followed by 3 to 6 hex digits.
///
/// This is a containment test: `"foo #fff bar"` matches, and so do 4 or 5
/// digit runs even though they are not valid color lengths.
pub fn is_hex(input: &str) -> bool {
    HEX_RUN_RE.is_match(input)
}

/// Convert `#rgb` / `#rrggbb` to `rgba(R, G,B,1)`.
pub fn hex_to_rgba(hex: &str) -> String {
    hex_to_rgba_with_alpha(hex, OPAQUE)
}

/// Convert `#rgb` / `#rrggbb` to `rgba(R, G,B,alpha)`.
///
/// The output spacing is fixed byte-for-byte: `"rgba(255, 255,255,1)"`.
/// Inputs of any other length, and digit pairs that aren't hex, produce
/// `0` channels rather than an error.  `alpha` is not clamped.
pub fn hex_to_rgba_with_alpha(hex: &str, alpha: f64) -> String {
    let pair = |hi: char, lo: char| -> u32 {
        match (hi.to_digit(16), lo.to_digit(16)) {
            (Some(h), Some(l)) => h * 16 + l,
            _ => 0,
        }
    };

    let chars: Vec<char> = hex.chars().collect();
    let (r, g, b) = match chars.as_slice() {
        // #RGB
        [_, r, g, b] => (pair(*r, *r), pair(*g, *g), pair(*b, *b)),
        // #RRGGBB
        [_, r1, r2, g1, g2, b1, b2] => (pair(*r1, *r2), pair(*g1, *g2), pair(*b1, *b2)),
        _ => (0, 0, 0),
    };

    let alpha = positive_zero(alpha);
    format!("rgba({r}, {g},{b},{alpha})")
}

/// Parse a hex color (`#` optional, 3 or 6 digits, any case) into channels.
pub fn hex_to_rgb(color: &str) -> Result<[u8; 3]> {
    let full = match HEX_SHORT_RE.captures(color) {
        Some(c) => format!("{0}{0}{1}{1}{2}{2}", &c[1], &c[2], &c[3]),
        None => color.to_string(),
    };

    let unsupported = || {
        tracing::debug!("rejecting hex color '{color}'");
        SwatchError::unsupported(color)
    };

    let caps = HEX_FULL_RE.captures(&full).ok_or_else(unsupported)?;
    let channel = |i: usize| u8::from_str_radix(&caps[i], 16).map_err(|_| unsupported());

    Ok([channel(1)?, channel(2)?, channel(3)?])
}

/// Numeric channels of a hex or `rgb()`/`rgba()` color.
///
/// Hex input yields exactly three values.  Functional input yields one value
/// per comma-separated argument, so `rgba(...)` includes its alpha.  The
/// function name is matched case-insensitively on the first four
/// characters of `color`; spaces anywhere are ignored.
pub fn color_to_rgb_values(color: &str) -> Result<Vec<f64>> {
    if color.starts_with('#') {
        return hex_to_rgb(color).map(|rgb| rgb.into_iter().map(f64::from).collect());
    }

    let compact: String = color.chars().filter(|&c| c != ' ').collect();
    let prefix: String = color.chars().take(4).collect();

    let args = PAREN_RE.captures(&compact).map(|c| c.get(1).map_or("", |m| m.as_str()));
    let args = match args {
        Some(args) if prefix.to_ascii_lowercase().starts_with("rgb") => args,
        _ => {
            tracing::debug!("rejecting functional color '{color}'");
            return Err(SwatchError::unsupported(color));
        }
    };

    args.split(',')
        .map(|part| {
            leading_number(part).ok_or_else(|| {
                tracing::debug!("rejecting non-numeric component '{part}' in '{color}'");
                SwatchError::unsupported(color)
            })
        })
        .collect()
}

/// Parse the numeric prefix of `text` (`"0.5"` → 0.5, `"10px"` → 10).
fn leading_number(text: &str) -> Option<f64> {
    LEADING_NUMBER_RE
        .find(text.trim())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .map(positive_zero)
}

/// Fold `-0.0` into `0.0`; `Display` would otherwise print `-0`.
fn positive_zero(v: f64) -> f64 {
    v + 0.0
}

/// Apply `alpha` (clamped to `[0, 1]`) to a hex or `rgb()` color.
///
/// Anything that neither starts with `#` nor mentions `rgb`/`RGB` (named
/// colors, `inherit`, gradients) is returned unchanged.
pub fn add_color_alpha(color: &str, alpha: f64) -> Result<String> {
    if !(color.starts_with('#') || color.contains("rgb") || color.contains("RGB")) {
        return Ok(color.to_string());
    }

    let values = color_to_rgb_values(color)?;
    let [r, g, b] = match values.as_slice() {
        [r, g, b, ..] => [*r, *g, *b],
        _ => {
            tracing::debug!("rejecting '{color}': fewer than three channels");
            return Err(SwatchError::unsupported(color));
        }
    };
    let alpha = positive_zero(alpha.clamp(0.0, 1.0));

    Ok(format!("rgba({r}, {g}, {b}, {alpha})"))
}

/// `true` if `candidate` is a color a CSS engine would accept.
///
/// Validates against a fixed grammar: hex with 3, 6 or 8 digits,
/// comma-separated `rgb()`/`rgba()`/`hsl()`/`hsla()`, and the CSS named
/// colors.  Function names and keywords are case-insensitive.
pub fn is_color(candidate: &str) -> bool {
    let candidate = candidate.trim();
    if candidate.is_empty() {
        return false;
    }

    HEX_COLOR_RE.is_match(candidate)
        || RGB_FN_RE.is_match(candidate)
        || HSL_FN_RE.is_match(candidate)
        || is_named_color(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_hex_contains_run() {
        assert!(is_hex("#abc"));
        assert!(is_hex("#a1b2c3"));
        assert!(is_hex("foo #fff bar"));
        assert!(is_hex("#ABCDEF"));
        assert!(!is_hex("abc"));
        assert!(!is_hex("#ab"));
        assert!(!is_hex("#xyz"));
    }

    #[test]
    fn is_hex_accepts_four_and_five_digit_runs() {
        assert!(is_hex("#abcd"));
        assert!(is_hex("#abcde"));
    }

    #[test]
    fn hex_to_rgba_shorthand() {
        assert_eq!(hex_to_rgba("#fff"), "rgba(255, 255,255,1)");
        assert_eq!(hex_to_rgba("#abc"), "rgba(170, 187,204,1)");
    }

    #[test]
    fn hex_to_rgba_full_with_alpha() {
        assert_eq!(hex_to_rgba_with_alpha("#000000", 0.5), "rgba(0, 0,0,0.5)");
        assert_eq!(hex_to_rgba_with_alpha("#FF8000", 0.25), "rgba(255, 128,0,0.25)");
    }

    #[test]
    fn hex_to_rgba_bad_length_is_zeroes() {
        assert_eq!(hex_to_rgba("#ffff"), "rgba(0, 0,0,1)");
        assert_eq!(hex_to_rgba(""), "rgba(0, 0,0,1)");
    }

    #[test]
    fn hex_to_rgba_bad_digits_are_zero() {
        assert_eq!(hex_to_rgba("#zzffff"), "rgba(0, 255,255,1)");
    }

    #[test]
    fn hex_to_rgba_does_not_clamp_alpha() {
        assert_eq!(hex_to_rgba_with_alpha("#fff", 2.0), "rgba(255, 255,255,2)");
    }

    #[test]
    fn hex_to_rgb_forms() {
        assert_eq!(hex_to_rgb("#ff0000").unwrap(), [255, 0, 0]);
        assert_eq!(hex_to_rgb("00FF00").unwrap(), [0, 255, 0]);
        assert_eq!(hex_to_rgb("#0aF").unwrap(), [0, 170, 255]);
        assert_eq!(hex_to_rgb("abc").unwrap(), [170, 187, 204]);
    }

    #[test]
    fn hex_to_rgb_rejects_other_lengths() {
        for bad in ["#abcd", "#12345", "#1234567", "#ggg", ""] {
            let err = hex_to_rgb(bad).unwrap_err();
            assert!(
                matches!(&err, SwatchError::UnsupportedColor { input } if input == bad),
                "{bad}"
            );
        }
    }

    #[test]
    fn rgb_values_from_hex() {
        assert_eq!(color_to_rgb_values("#ff0000").unwrap(), vec![255.0, 0.0, 0.0]);
        assert_eq!(color_to_rgb_values("#fff").unwrap(), vec![255.0, 255.0, 255.0]);
    }

    #[test]
    fn rgb_values_from_functional() {
        assert_eq!(color_to_rgb_values("rgb(1,2,3)").unwrap(), vec![1.0, 2.0, 3.0]);
        assert_eq!(
            color_to_rgb_values("rgba(10, 20, 30, 0.5)").unwrap(),
            vec![10.0, 20.0, 30.0, 0.5]
        );
    }

    #[test]
    fn rgb_prefix_is_case_insensitive() {
        assert_eq!(color_to_rgb_values("RGB(4, 5, 6)").unwrap(), vec![4.0, 5.0, 6.0]);
        assert_eq!(color_to_rgb_values("Rgba(4,5,6,1)").unwrap().len(), 4);
    }

    #[test]
    fn rgb_values_take_numeric_prefix() {
        assert_eq!(color_to_rgb_values("rgb(10px,2.5e1,.5)").unwrap(), vec![10.0, 25.0, 0.5]);
    }

    #[test]
    fn rgb_values_reject_unsupported() {
        for bad in ["blue", "hsl(0, 100%, 50%)", "rgb", "rgb()", " rgb(1,2,3)", "rgb(a,b,c)"] {
            assert!(
                matches!(color_to_rgb_values(bad), Err(SwatchError::UnsupportedColor { .. })),
                "{bad}"
            );
        }
    }

    #[test]
    fn rgb_values_hex_round_trip() {
        for hex in ["#000000", "#ffffff", "#123abc", "#7F7F7F", "#0070f3"] {
            let first = color_to_rgb_values(hex).unwrap();
            let encoded = format!("rgb({},{},{})", first[0], first[1], first[2]);
            assert_eq!(color_to_rgb_values(&encoded).unwrap(), first, "{hex}");
        }
    }

    #[test]
    fn add_alpha_to_hex() {
        assert_eq!(add_color_alpha("#ff0000", 0.3).unwrap(), "rgba(255, 0, 0, 0.3)");
        assert_eq!(add_color_alpha("#ff0000", 5.0).unwrap(), "rgba(255, 0, 0, 1)");
        assert_eq!(add_color_alpha("#ff0000", -1.0).unwrap(), "rgba(255, 0, 0, 0)");
    }

    #[test]
    fn add_alpha_replaces_existing_alpha() {
        assert_eq!(
            add_color_alpha("rgba(1, 2, 3, 0.9)", 0.2).unwrap(),
            "rgba(1, 2, 3, 0.2)"
        );
        assert_eq!(add_color_alpha("RGB(1,2,3)", 1.0).unwrap(), "rgba(1, 2, 3, 1)");
    }

    #[test]
    fn negative_zero_prints_as_zero() {
        assert_eq!(add_color_alpha("#ff0000", -0.0).unwrap(), "rgba(255, 0, 0, 0)");
        assert_eq!(
            add_color_alpha("rgb(-0, 1, 2)", 0.5).unwrap(),
            "rgba(0, 1, 2, 0.5)"
        );
        assert_eq!(hex_to_rgba_with_alpha("#fff", -0.0), "rgba(255, 255,255,0)");
        let values = color_to_rgb_values("rgb(-0,1,2)").unwrap();
        assert!(values[0].is_sign_positive());
    }

    #[test]
    fn add_alpha_passes_through_named() {
        assert_eq!(add_color_alpha("blue", 0.5).unwrap(), "blue");
        assert_eq!(add_color_alpha("inherit", 0.5).unwrap(), "inherit");
    }

    #[test]
    fn add_alpha_errors_on_malformed_rgb() {
        assert!(add_color_alpha("#12", 0.5).is_err());
        assert!(add_color_alpha("xrgb", 0.5).is_err());
        assert!(add_color_alpha("rgb(1,2)", 0.5).is_err());
    }

    #[test]
    fn is_color_accepts_grammar() {
        for ok in [
            "#fff",
            "#a1b2c3",
            "#a1b2c3d4",
            "rgb(1, 2, 3)",
            "rgba(1,2,3,0.5)",
            "rgb(100%, 0%, 0%)",
            "hsl(120, 50%, 50%)",
            "HSLA(120deg, 50%, 50%, .3)",
            "red",
            "RebeccaPurple",
            "transparent",
            "  teal ",
        ] {
            assert!(is_color(ok), "{ok}");
        }
    }

    #[test]
    fn is_color_rejects_garbage() {
        for bad in ["", "#ff", "#abcd", "rgb(1,2)", "hsl(1,2,3)", "notacolor", "inherit", "primary"] {
            assert!(!is_color(bad), "{bad}");
        }
    }
}
