use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `swatch.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwatchConfig {
    /// Theme / palette settings.
    pub theme: ThemeConfig,
}

/// Theme configuration: the fallback color plus the semantic palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Returned when a token resolves to nothing (CSS keyword or literal color).
    pub default_color: String,
    pub palette: PaletteConfig,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default_color: "inherit".to_string(),
            palette: PaletteConfig::default(),
        }
    }
}

/// Concrete colors for each semantic role.
///
/// Entries are kept as raw strings; `gradient` is usually a CSS gradient
/// expression rather than a plain color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub primary:   String,
    pub secondary: String,
    pub success:   String,
    pub warning:   String,
    pub error:     String,
    pub gradient:  String,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            primary:   "#0070F3".to_string(),
            secondary: "#7928CA".to_string(),
            success:   "#17C964".to_string(),
            warning:   "#F5A524".to_string(),
            error:     "#F21361".to_string(),
            gradient:  "linear-gradient(112deg, #06B7DB -63.59%, #FF4ECD -20.3%, #0072F5 70.33%)"
                .to_string(),
        }
    }
}
