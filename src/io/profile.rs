// src/io/profile.rs
use gdal::raster::RasterCreationOptions;
use gdal::{Dataset, Metadata};
use serde::Serialize;

use crate::error::Result;

/// Geometry, pixel type and encoding settings of a raster.
///
/// The output of a recompression is created from one of these, so anything
/// recorded here is carried over from the source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RasterProfile {
    pub driver: String,
    pub width: usize,
    pub height: usize,
    pub count: usize,
    /// GDAL type name, e.g. `Byte` or `Float32`.
    pub data_type: String,
    /// WKT, empty when the raster has no CRS.
    pub projection: String,
    pub geo_transform: Option<[f64; 6]>,
    pub nodata: Option<f64>,
    /// Lower-case compression name as GDAL reports it, `None` when uncompressed.
    pub compress: Option<String>,
    pub tiled: bool,
    pub block_size: (usize, usize),
}

impl RasterProfile {
    pub fn from_dataset(dataset: &Dataset) -> Result<Self> {
        let (width, height) = dataset.raster_size();
        let band = dataset.rasterband(1)?;
        let block_size = band.block_size();

        Ok(Self {
            driver: dataset.driver().short_name(),
            width,
            height,
            count: dataset.raster_count() as usize,
            data_type: band.band_type().name(),
            projection: dataset.projection(),
            geo_transform: dataset.geo_transform().ok(),
            nodata: band.no_data_value(),
            compress: dataset
                .metadata_item("COMPRESSION", "IMAGE_STRUCTURE")
                .map(|c| c.to_lowercase()),
            tiled: block_size.0 < width,
            block_size,
        })
    }

    /// Copy of this profile with only the compression replaced.
    pub fn with_compression(&self, compress: &str) -> Self {
        Self {
            compress: Some(compress.to_string()),
            ..self.clone()
        }
    }

    pub fn creation_options(&self) -> Vec<String> {
        let mut options = Vec::new();

        if let Some(compress) = &self.compress {
            options.push(format!("COMPRESS={}", compress.to_uppercase()));
        }

        if self.tiled {
            options.push("TILED=YES".to_string());
            options.push(format!("BLOCKXSIZE={}", self.block_size.0));
        }
        // Strip height for striped files, tile height otherwise.
        options.push(format!("BLOCKYSIZE={}", self.block_size.1));

        options
    }

    pub fn raster_creation_options(&self) -> RasterCreationOptions {
        let options = self.creation_options();
        RasterCreationOptions::from_iter(options.iter().map(String::as_str))
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| format!("<unserializable profile: {e}>"))
    }
}
