// src/lib.rs
pub mod cli;
pub mod error;
pub mod io;
pub mod processing;
pub mod recompress;
pub mod utils;

pub use error::{RecompressError, Result};
pub use recompress::{lzw_output_path, recompress, recompress_with_options};

// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
