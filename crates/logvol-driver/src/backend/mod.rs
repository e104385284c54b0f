//! Mount backend abstraction over the external mount/unmount tools.

pub mod shell;

use std::path::Path;

/// Result of one external tool invocation.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// Exit code of the tool (`-1` when terminated by a signal).
    pub exit_code: i32,
    /// Combined standard output and standard error text.
    pub output: String,
}

impl ToolOutput {
    /// Returns whether the tool exited zero.
    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Backend that executes the privileged bind-mount and unmount primitives.
///
/// Implementors run the operation synchronously to completion and report the
/// exit status plus captured output; an `Err` means the tool could not be
/// launched at all. Outcome classification is left to the caller.
pub trait MountBackend: Send + Sync {
    /// Bind-mounts `host_path` onto `container_path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying tool cannot be spawned.
    fn bind_mount(&self, host_path: &Path, container_path: &Path) -> std::io::Result<ToolOutput>;

    /// Removes the mount at `container_path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying tool cannot be spawned.
    fn unmount(&self, container_path: &Path) -> std::io::Result<ToolOutput>;
}
