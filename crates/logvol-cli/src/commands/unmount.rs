//! `logvol unmount` — undo a container's log bind mount.

use clap::Args;
use logvol_driver::driver::LogVolumeDriver;

/// Arguments for the `unmount` operation.
#[derive(Args, Debug)]
pub struct UnmountArgs {
    /// Container mount path to unmount.
    ///
    /// Collected without an arity constraint; see `MountArgs`.
    #[arg(value_name = "ARGS", num_args = 0.., allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Executes the `unmount` operation.
///
/// # Errors
///
/// Returns an error only when the envelope cannot be written to stdout.
pub fn execute(driver: &LogVolumeDriver, args: &UnmountArgs) -> anyhow::Result<()> {
    crate::output::emit(&driver.unmount(&args.args))
}
