// src/utils/mod.rs
pub mod config_guard;
pub mod gdal_ext;

pub use config_guard::ConfigOptionGuard;
pub use gdal_ext::TypedBuffer;
