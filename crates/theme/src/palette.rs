use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use swatch_config::PaletteConfig;
use swatch_core::SwatchError;

/// Fallback returned by [`get_normal_color`] when nothing else resolves.
pub const DEFAULT_COLOR: &str = "inherit";

/// Semantic role tokens a component may use instead of a literal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalColor {
    Default,
    Primary,
    Secondary,
    Success,
    Warning,
    Error,
    Gradient,
}

impl NormalColor {
    pub const ALL: [Self; 7] = [
        Self::Default,
        Self::Primary,
        Self::Secondary,
        Self::Success,
        Self::Warning,
        Self::Error,
        Self::Gradient,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Gradient => "gradient",
        }
    }

    /// Exact, case-sensitive token lookup.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == token)
    }
}

impl FromStr for NormalColor {
    type Err = SwatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| SwatchError::UnknownToken(s.to_string()))
    }
}

impl fmt::Display for NormalColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Concrete color string for every palette-backed role.  Read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub primary:   String,
    pub secondary: String,
    pub success:   String,
    pub warning:   String,
    pub error:     String,
    pub gradient:  String,
}

impl Palette {
    pub fn from_config(cfg: &PaletteConfig) -> Self {
        Self {
            primary:   cfg.primary.clone(),
            secondary: cfg.secondary.clone(),
            success:   cfg.success.clone(),
            warning:   cfg.warning.clone(),
            error:     cfg.error.clone(),
            gradient:  cfg.gradient.clone(),
        }
    }

    /// Palette entry for `role`.  `Default` has no palette slot.
    pub fn get(&self, role: NormalColor) -> Option<&str> {
        let value = match role {
            NormalColor::Default => return None,
            NormalColor::Primary => &self.primary,
            NormalColor::Secondary => &self.secondary,
            NormalColor::Success => &self.success,
            NormalColor::Warning => &self.warning,
            NormalColor::Error => &self.error,
            NormalColor::Gradient => &self.gradient,
        };
        Some(value.as_str())
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_config(&PaletteConfig::default())
    }
}

/// Resolve a semantic token against `palette`.
///
/// `"default"` maps to `default_color`, palette roles map to their entry.
/// Unknown tokens (raw CSS values such as `"#fff"`) pass through unchanged;
/// a missing or empty `color` yields `default_color`.  An empty lookup
/// entry counts as not found.
pub fn get_normal_color<'a>(
    color: Option<&'a str>,
    palette: &'a Palette,
    default_color: &'a str,
) -> &'a str {
    let color = color.filter(|c| !c.is_empty());

    let entry = color
        .and_then(NormalColor::from_token)
        .and_then(|role| match role {
            NormalColor::Default => Some(default_color),
            role => palette.get(role),
        })
        .filter(|entry| !entry.is_empty());

    entry.or(color).unwrap_or(default_color)
}

/// `true` iff `color` is exactly one of the semantic role tokens.
pub fn is_normal_color(color: &str) -> bool {
    NormalColor::from_token(color).is_some()
}
