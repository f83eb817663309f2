// src/io/writer.rs
use gdal::raster::{Buffer, GdalType, RasterCreationOptions};
use gdal::{Driver, DriverManager};
use log::{debug, info};
use std::path::Path;

use super::profile::RasterProfile;
use crate::error::{RecompressError, Result};
use crate::utils::config_guard::ConfigOptionGuard;
use crate::utils::gdal_ext::TypedBuffer;

/// GDAL option that decides whether GeoTIFF masks go inside the file or into a `.msk` sidecar.
pub const INTERNAL_MASK_OPTION: &str = "GDAL_TIFF_INTERNAL_MASK";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    /// Store the mask inside the output file instead of a sidecar.
    pub internal_mask: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            internal_mask: true,
        }
    }
}

/// Creates `output_path` from `profile`, writes `pixels` to band 1 and `mask`
/// (0 = invalid, 255 = valid) as the dataset mask.
///
/// The mask storage option is only in effect for this call and is restored on
/// every exit path. The output handle is closed before the option is restored.
pub fn write_masked_raster(
    output_path: &Path,
    profile: &RasterProfile,
    pixels: TypedBuffer,
    mask: Vec<u8>,
    options: WriteOptions,
) -> Result<()> {
    let expected = profile.width * profile.height;
    if pixels.shape() != (profile.width, profile.height) {
        return Err(RecompressError::ShapeMismatch {
            expected,
            actual: pixels.len(),
        });
    }
    if mask.len() != expected {
        return Err(RecompressError::ShapeMismatch {
            expected,
            actual: mask.len(),
        });
    }

    let _mask_option = ConfigOptionGuard::set(
        INTERNAL_MASK_OPTION,
        if options.internal_mask { "YES" } else { "NO" },
    )?;

    let driver = DriverManager::get_driver_by_name(&profile.driver)?;
    let creation_options = profile.raster_creation_options();
    debug!(
        "Writing {} pixels, creation options: {:?}",
        pixels.data_type().name(),
        profile.creation_options()
    );

    info!("Creating output raster: {}", output_path.display());
    match pixels {
        TypedBuffer::U8(buf) => write_band(&driver, output_path, profile, &creation_options, buf, mask),
        TypedBuffer::U16(buf) => write_band(&driver, output_path, profile, &creation_options, buf, mask),
        TypedBuffer::I16(buf) => write_band(&driver, output_path, profile, &creation_options, buf, mask),
        TypedBuffer::U32(buf) => write_band(&driver, output_path, profile, &creation_options, buf, mask),
        TypedBuffer::I32(buf) => write_band(&driver, output_path, profile, &creation_options, buf, mask),
        TypedBuffer::F32(buf) => write_band(&driver, output_path, profile, &creation_options, buf, mask),
        TypedBuffer::F64(buf) => write_band(&driver, output_path, profile, &creation_options, buf, mask),
    }
}

fn write_band<T: GdalType + Copy>(
    driver: &Driver,
    output_path: &Path,
    profile: &RasterProfile,
    creation_options: &RasterCreationOptions,
    mut pixels: Buffer<T>,
    mask: Vec<u8>,
) -> Result<()> {
    let size = (profile.width, profile.height);

    let mut out_ds = driver
        .create_with_band_type_with_options::<T, _>(
            output_path,
            profile.width,
            profile.height,
            1,
            creation_options,
        )
        .map_err(|source| RecompressError::Create {
            path: output_path.to_path_buf(),
            source,
        })?;

    if !profile.projection.is_empty() {
        out_ds.set_projection(&profile.projection)?;
    }
    if let Some(geo_transform) = &profile.geo_transform {
        out_ds.set_geo_transform(geo_transform)?;
    }

    {
        let mut band = out_ds.rasterband(1)?;
        if let Some(nodata) = profile.nodata {
            band.set_no_data_value(Some(nodata))?;
        }

        band.write((0, 0), size, &mut pixels)?;

        // Per-dataset mask, the only kind GeoTIFF can store internally.
        band.create_mask_band(true)?;
        let mut mask_band = band.open_mask_band()?;
        let mut mask_buffer = Buffer::new(size, mask);
        mask_band.write((0, 0), size, &mut mask_buffer)?;
    }

    out_ds.flush_cache()?;
    debug!("Flushed {}", output_path.display());

    Ok(())
}
