// src/utils/config_guard.rs
use gdal::config;
use log::{debug, warn};

use crate::error::Result;

/// Sets a thread-local GDAL configuration option for the lifetime of the guard.
///
/// The value held before the guard was created is put back on drop, or the
/// option is cleared if it was unset. Options set this way only affect GDAL
/// calls made from the current thread.
pub struct ConfigOptionGuard {
    key: String,
    previous: Option<String>,
}

impl ConfigOptionGuard {
    pub fn set(key: &str, value: &str) -> Result<Self> {
        let previous = current_value(key)?;
        config::set_thread_local_config_option(key, value)?;
        debug!("GDAL config {}={} (was {:?})", key, value, previous);

        Ok(Self {
            key: key.to_string(),
            previous,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Drop for ConfigOptionGuard {
    fn drop(&mut self) {
        let restored = match &self.previous {
            Some(value) => config::set_thread_local_config_option(&self.key, value),
            None => config::clear_thread_local_config_option(&self.key),
        };

        if let Err(e) = restored {
            warn!("Failed to restore GDAL config option {}: {}", self.key, e);
        }
    }
}

/// Thread-local value of a GDAL option, `None` when unset.
pub fn current_value(key: &str) -> Result<Option<String>> {
    let value = config::get_thread_local_config_option(key, "")?;
    Ok(if value.is_empty() { None } else { Some(value) })
}
