//! `logvol init` — initialize the plugin.

use logvol_driver::driver::LogVolumeDriver;

/// Executes the `init` operation.
///
/// Ensures the host directory layout exists and reports the plugin's
/// capabilities to the kubelet.
///
/// # Errors
///
/// Returns an error only when the envelope cannot be written to stdout.
pub fn execute(driver: &LogVolumeDriver) -> anyhow::Result<()> {
    crate::output::emit(&driver.init())
}
