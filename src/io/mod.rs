// src/io/mod.rs
pub mod profile;
pub mod reader;
pub mod writer;

pub use profile::RasterProfile;
pub use reader::{read_masked_band, MaskedBand};
pub use writer::{write_masked_raster, WriteOptions};
