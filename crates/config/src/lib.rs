pub mod schema;

pub use schema::{PaletteConfig, SwatchConfig, ThemeConfig};

use std::path::{Path, PathBuf};
use swatch_core::{Result, SwatchError};

/// Read the palette config at `path`.
///
/// A missing file is not an error: the stock palette is returned so token
/// resolution keeps working without any setup.
pub fn load(path: impl AsRef<Path>) -> Result<SwatchConfig> {
    let path = path.as_ref();
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(
                "No palette config at '{}'; resolving tokens against the stock palette.",
                path.display()
            );
            return Ok(SwatchConfig::default());
        }
        Err(e) => {
            return Err(SwatchError::Config(format!(
                "cannot read palette config '{}': {e}",
                path.display()
            )))
        }
    };

    let config: SwatchConfig = toml::from_str(&raw).map_err(|e| {
        SwatchError::Config(format!("invalid palette config '{}': {e}", path.display()))
    })?;
    tracing::debug!("loaded palette config from '{}'", path.display());
    Ok(config)
}

/// `swatch/swatch.toml` under `$XDG_CONFIG_HOME`, else `$HOME/.config`,
/// else `./.config`.
pub fn default_path() -> PathBuf {
    let config_home = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
        .unwrap_or_else(|| PathBuf::from(".config"));
    config_home.join("swatch").join("swatch.toml")
}
