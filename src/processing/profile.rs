// src/processing/profile.rs
use crate::io::profile::RasterProfile;

pub const LZW: &str = "lzw";

/// Output profile for a recompression: the source profile with LZW compression.
///
/// Already-LZW profiles come back unchanged.
pub fn lzw_profile(source: &RasterProfile) -> RasterProfile {
    source.with_compression(LZW)
}
