// src/processing/mask.rs
use rayon::prelude::*;

pub const MASK_VALID: u8 = 255;
pub const MASK_INVALID: u8 = 0;

/// Encodes a validity mask as GDAL mask bytes: 255 where valid, 0 elsewhere.
pub fn mask_bytes_from_validity(validity: &[bool]) -> Vec<u8> {
    let mut mask = vec![MASK_INVALID; validity.len()];

    mask.par_iter_mut()
        .zip(validity.par_iter())
        .for_each(|(byte, &valid)| {
            if valid {
                *byte = MASK_VALID;
            }
        });

    mask
}

/// Decodes GDAL mask bytes; any non-zero value counts as valid.
pub fn validity_from_mask_bytes(mask: &[u8]) -> Vec<bool> {
    mask.par_iter().map(|&byte| byte != MASK_INVALID).collect()
}
