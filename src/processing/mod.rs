// src/processing/mod.rs
pub mod mask;
pub mod profile;

// Re-export main components
pub use mask::{mask_bytes_from_validity, validity_from_mask_bytes};
pub use profile::lzw_profile;
