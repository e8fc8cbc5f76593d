//! swatch — color-string helpers for component theming.
//!
//! Run with:  `RUST_LOG=debug swatch rgb "rgba(1, 2, 3, 0.5)"`

mod cli;

use anyhow::Result;
use clap::Parser;
use swatch_theme::{
    add_color_alpha, color_to_rgb_values, get_normal_color, hex_to_rgba_with_alpha, is_color,
    is_hex, is_normal_color, Theme,
};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};

fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: warn).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!("swatch v{} starting", env!("CARGO_PKG_VERSION"));

    println!("{}", run(&cli)?);
    Ok(())
}

fn run(cli: &Cli) -> Result<String> {
    let out = match &cli.command {
        Command::IsHex { input } => is_hex(input).to_string(),
        Command::IsColor { input } => is_color(input).to_string(),
        Command::IsNormal { input } => is_normal_color(input).to_string(),
        Command::ToRgba { hex, alpha } => hex_to_rgba_with_alpha(hex, *alpha),
        Command::Rgb { color } => color_to_rgb_values(color)?
            .iter()
            .map(f64::to_string)
            .collect::<Vec<_>>()
            .join(","),
        Command::Alpha { color, alpha } => add_color_alpha(color, *alpha)?,
        Command::Resolve { token, default } => {
            let theme = load_theme(cli)?;
            let default_color = default.as_deref().unwrap_or(&theme.default_color);
            get_normal_color(token.as_deref(), &theme.palette, default_color).to_string()
        }
    };
    Ok(out)
}

fn load_theme(cli: &Cli) -> Result<Theme> {
    let path = cli.config.clone().unwrap_or_else(swatch_config::default_path);
    let config = swatch_config::load(&path)?;
    Ok(Theme::from_config(&config.theme))
}
