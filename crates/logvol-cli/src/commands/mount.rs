//! `logvol mount` — bind-mount a per-pod log directory.

use clap::Args;
use logvol_driver::driver::LogVolumeDriver;

/// Arguments for the `mount` operation.
#[derive(Args, Debug)]
pub struct MountArgs {
    /// Container mount path followed by the kubelet options blob.
    ///
    /// Collected without an arity constraint: argument-count validation is
    /// the driver's responsibility so a shortfall still produces a
    /// `Failure` envelope with exit code zero.
    #[arg(value_name = "ARGS", num_args = 0.., allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Executes the `mount` operation.
///
/// # Errors
///
/// Returns an error only when the envelope cannot be written to stdout.
pub fn execute(driver: &LogVolumeDriver, args: &MountArgs) -> anyhow::Result<()> {
    crate::output::emit(&driver.mount(&args.args))
}
