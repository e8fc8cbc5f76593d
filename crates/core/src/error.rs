use thiserror::Error;

/// Top-level error type shared by every swatch crate.
#[derive(Debug, Error)]
pub enum SwatchError {
    /// A string could not be read as hex or functional `rgb()`/`rgba()`.
    #[error("unsupported color '{input}': only RGB, RGBA and HEX colors are supported")]
    UnsupportedColor { input: String },

    /// A string that is not one of the semantic role tokens.
    #[error("unknown color token '{0}'")]
    UnknownToken(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl SwatchError {
    pub fn unsupported(input: impl Into<String>) -> Self {
        Self::UnsupportedColor {
            input: input.into(),
        }
    }
}

pub type Result<T, E = SwatchError> = std::result::Result<T, E>;
