pub mod colors;
pub mod named;
pub mod palette;

pub use colors::{
    add_color_alpha, color_to_rgb_values, hex_to_rgb, hex_to_rgba, hex_to_rgba_with_alpha,
    is_color, is_hex,
};
pub use named::is_named_color;
pub use palette::{get_normal_color, is_normal_color, NormalColor, Palette, DEFAULT_COLOR};

use swatch_config::ThemeConfig;

/// Compiled theme derived from [`ThemeConfig`].
///
/// Calling [`Theme::from_config`] is infallible — palette entries that don't
/// look like colors are logged and kept as-is, and an empty default color
/// falls back to [`DEFAULT_COLOR`].
#[derive(Debug, Clone)]
pub struct Theme {
    pub palette:       Palette,
    /// Returned for the `default` token and for missing colors.
    pub default_color: String,
}

impl Theme {
    /// Build a [`Theme`] from the config file's `[theme]` section.
    pub fn from_config(cfg: &ThemeConfig) -> Self {
        let palette = Palette::from_config(&cfg.palette);

        // `gradient` holds CSS gradient expressions, which aren't colors.
        for role in NormalColor::ALL {
            if matches!(role, NormalColor::Default | NormalColor::Gradient) {
                continue;
            }
            if let Some(value) = palette.get(role) {
                if !is_color(value) {
                    tracing::warn!("palette '{role}' = '{value}' is not a recognised color");
                }
            }
        }

        let default_color = if cfg.default_color.is_empty() {
            DEFAULT_COLOR.to_string()
        } else {
            cfg.default_color.clone()
        };

        Self {
            palette,
            default_color,
        }
    }

    /// Resolve a semantic token (or pass a literal color through).
    pub fn resolve<'a>(&'a self, color: Option<&'a str>) -> &'a str {
        get_normal_color(color, &self.palette, &self.default_color)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}
