// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecompressError {
    #[error("cannot open raster {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: gdal::errors::GdalError,
    },

    #[error("raster {} has no band {band}", path.display())]
    MissingBand { path: PathBuf, band: usize },

    #[error("cannot create raster {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: gdal::errors::GdalError,
    },

    #[error("unsupported pixel data type: {0}")]
    UnsupportedDataType(String),

    #[error("buffer shape mismatch: expected {expected} elements, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error(transparent)]
    Gdal(#[from] gdal::errors::GdalError),
}

pub type Result<T> = std::result::Result<T, RecompressError>;
