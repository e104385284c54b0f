//! Configuration model for the logvol driver.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Directory layout the driver operates on.
///
/// The defaults point at the fixed host paths the kubelet deployment uses;
/// tests substitute temporary directories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverConfig {
    /// Plugin data directory (parent of all state the plugin writes).
    pub plugin_data_dir: PathBuf,
    /// Base directory under which per-pod log volumes are created.
    pub log_base_dir: PathBuf,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            plugin_data_dir: PathBuf::from(crate::constants::PLUGIN_DATA_DIR),
            log_base_dir: PathBuf::from(crate::constants::LOG_VOLUME_BASE_DIR),
        }
    }
}
