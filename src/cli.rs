//! CLI argument definitions using clap derive macros.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inspect, convert and resolve theme color strings
#[derive(Parser)]
#[command(name = "swatch", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file holding the palette (default: $XDG_CONFIG_HOME/swatch/swatch.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Does the input contain a `#` hex run?
    IsHex { input: String },
    /// Is the input a valid CSS color?
    IsColor { input: String },
    /// Is the input a semantic token (primary, success, ...)?
    IsNormal { input: String },
    /// Convert `#rgb`/`#rrggbb` to `rgba(...)`
    ToRgba {
        hex: String,
        #[arg(short, long, default_value_t = 1.0, allow_negative_numbers = true)]
        alpha: f64,
    },
    /// Print the numeric channels of a hex or rgb()/rgba() color
    Rgb { color: String },
    /// Apply an alpha (clamped to 0..=1) to a hex or rgb() color
    Alpha {
        color: String,
        #[arg(allow_negative_numbers = true)]
        alpha: f64,
    },
    /// Resolve a semantic token against the configured palette
    Resolve {
        token: Option<String>,
        /// Override the configured default color
        #[arg(short, long)]
        default: Option<String>,
    },
}
