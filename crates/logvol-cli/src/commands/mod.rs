//! CLI command definitions and dispatch.

pub mod init;
pub mod mount;
pub mod unmount;

use clap::{Parser, Subcommand};
use logvol_common::types::DriverResponse;
use logvol_driver::backend::shell::ShellBackend;
use logvol_driver::driver::LogVolumeDriver;
use logvol_driver::logsink::TracingSink;

/// logvol — FlexVolume plugin provisioning per-pod log directories.
#[derive(Parser, Debug)]
#[command(name = "logvol", version, about, long_about = None)]
pub struct Cli {
    /// Operation requested by the kubelet.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Operations the kubelet may invoke.
///
/// Anything outside the implemented set (probe calls such as `attach`,
/// `detach`, or `waitforattach`) is captured by the external-subcommand
/// variant and answered with a `Not supported` envelope, keeping the exit
/// code zero as the invocation contract requires.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize the plugin and report its capabilities.
    Init,
    /// Bind-mount a per-pod log directory onto a container path.
    Mount(mount::MountArgs),
    /// Undo the bind mount at a container path.
    Unmount(unmount::UnmountArgs),
    /// Any other operation the kubelet probes.
    #[command(external_subcommand)]
    Other(Vec<String>),
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error only when the response envelope cannot be written to
/// standard output; operation failures are reported inside the envelope.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let driver = LogVolumeDriver::new(Box::new(TracingSink), Box::new(ShellBackend::new()));

    match cli.command {
        Some(Command::Init) => init::execute(&driver),
        Some(Command::Mount(args)) => mount::execute(&driver, &args),
        Some(Command::Unmount(args)) => unmount::execute(&driver, &args),
        Some(Command::Other(raw)) => {
            let operation = raw.first().map_or("", String::as_str);
            crate::output::emit(&DriverResponse::not_supported(operation))
        }
        None => crate::output::emit(&DriverResponse::failure("no operation specified")),
    }
}
