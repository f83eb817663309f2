use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "raster-lzw")]
#[command(about = "Rewrite a single-band raster with LZW compression and an internal nodata mask")]
#[command(version)]
pub struct Cli {
    /// Source raster; the output is written next to it as <name>_lzw.tif
    #[arg(value_name = "FILE")]
    pub input: PathBuf,
}
