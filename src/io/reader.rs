// src/io/reader.rs
use gdal::Dataset;
use log::{debug, info, warn};
use std::path::Path;

use super::profile::RasterProfile;
use crate::error::{RecompressError, Result};
use crate::processing::mask::validity_from_mask_bytes;
use crate::utils::gdal_ext::TypedBuffer;

/// Pixels of one band plus a per-pixel validity flag of the same shape.
pub struct MaskedBand {
    pixels: TypedBuffer,
    validity: Vec<bool>,
}

impl MaskedBand {
    pub fn new(pixels: TypedBuffer, validity: Vec<bool>) -> Result<Self> {
        if pixels.len() != validity.len() {
            return Err(RecompressError::ShapeMismatch {
                expected: pixels.len(),
                actual: validity.len(),
            });
        }
        Ok(Self { pixels, validity })
    }

    pub fn validity(&self) -> &[bool] {
        &self.validity
    }

    /// (width, height)
    pub fn shape(&self) -> (usize, usize) {
        self.pixels.shape()
    }

    pub fn valid_count(&self) -> usize {
        self.validity.iter().filter(|&&v| v).count()
    }

    pub fn into_parts(self) -> (TypedBuffer, Vec<bool>) {
        (self.pixels, self.validity)
    }
}

/// Reads band 1 of `path` with its validity mask, along with the raster profile.
///
/// The dataset handle is dropped before returning.
pub fn read_masked_band(path: &Path) -> Result<(MaskedBand, RasterProfile)> {
    info!("Opening input raster: {}", path.display());
    let dataset = Dataset::open(path).map_err(|source| RecompressError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    if (dataset.raster_count() as usize) < 1 {
        return Err(RecompressError::MissingBand {
            path: path.to_path_buf(),
            band: 1,
        });
    }

    let profile = RasterProfile::from_dataset(&dataset)?;
    if profile.count > 1 {
        warn!(
            "{} has {} bands, only band 1 is kept",
            path.display(),
            profile.count
        );
    }
    debug!("Input profile: {}", profile.to_json());

    let band = dataset.rasterband(1)?;
    let pixels = TypedBuffer::read_band(&band)?;

    let flags = band.mask_flags()?;
    debug!(
        "Mask flags: all_valid={} per_dataset={} nodata={} alpha={}",
        flags.is_all_valid(),
        flags.is_per_dataset(),
        flags.is_nodata(),
        flags.is_alpha()
    );

    let size = band.size();
    let mask = band
        .open_mask_band()?
        .read_as::<u8>((0, 0), size, size, None)?;
    let validity = validity_from_mask_bytes(mask.data());

    let masked = MaskedBand::new(pixels, validity)?;
    debug!(
        "Read {}x{} pixels, {} valid",
        size.0,
        size.1,
        masked.valid_count()
    );

    Ok((masked, profile))
}
