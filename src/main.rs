// src/main.rs
use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;

use raster_lzw::cli::Cli;
use raster_lzw::recompress;

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let output = recompress(&cli.input)
        .with_context(|| format!("Failed to recompress {}", cli.input.display()))?;

    println!("Processing complete: {}", output.display());
    Ok(())
}
