// src/recompress.rs
use log::info;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::io::{read_masked_band, write_masked_raster, WriteOptions};
use crate::processing::{lzw_profile, mask_bytes_from_validity};

pub const OUTPUT_SUFFIX: &str = "_lzw.tif";

/// Number of trailing characters replaced by [`OUTPUT_SUFFIX`].
const SOURCE_EXTENSION_CHARS: usize = 4;

/// Output path for `source`: the last four characters are dropped and `_lzw.tif` appended.
///
/// The dropped characters are assumed to be `.tif` but this is not checked,
/// so `scene.tiff` gives `scene._lzw.tif` and `scene.gz` gives `scen_lzw.tif`.
pub fn lzw_output_path(source: &str) -> String {
    let keep = source.chars().count().saturating_sub(SOURCE_EXTENSION_CHARS);
    let stem: String = source.chars().take(keep).collect();
    format!("{stem}{OUTPUT_SUFFIX}")
}

/// Writes an LZW-compressed copy of band 1 of `source` next to it, with the
/// validity mask stored inside the new file. Returns the output path.
pub fn recompress(source: &Path) -> Result<PathBuf> {
    recompress_with_options(source, WriteOptions::default())
}

pub fn recompress_with_options(source: &Path, options: WriteOptions) -> Result<PathBuf> {
    let output = PathBuf::from(lzw_output_path(&source.to_string_lossy()));

    let (band, profile) = read_masked_band(source)?;
    let (width, height) = band.shape();
    let (pixels, validity) = band.into_parts();

    let mask = mask_bytes_from_validity(&validity);
    let out_profile = lzw_profile(&profile);

    write_masked_raster(&output, &out_profile, pixels, mask, options)?;
    info!(
        "Wrote {}x{} raster to {}",
        width,
        height,
        output.display()
    );

    Ok(output)
}
