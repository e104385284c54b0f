//! Production mount backend shelling out to the system mount tools.

use std::path::Path;
use std::process::Command;

use logvol_common::constants::{MOUNT_TOOL, UNMOUNT_TOOL};

use super::{MountBackend, ToolOutput};

/// Backend invoking `mount -o bind <host> <container>` and
/// `umount <container>` as child processes.
///
/// The tool names are fields so tests can point them at harmless
/// executables; production uses the system defaults.
#[derive(Debug, Clone)]
pub struct ShellBackend {
    mount_tool: String,
    unmount_tool: String,
}

impl ShellBackend {
    /// Creates a backend using the system `mount`/`umount` tools.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mount_tool: MOUNT_TOOL.into(),
            unmount_tool: UNMOUNT_TOOL.into(),
        }
    }

    /// Creates a backend with explicit tool names.
    #[must_use]
    pub fn with_tools(mount_tool: impl Into<String>, unmount_tool: impl Into<String>) -> Self {
        Self {
            mount_tool: mount_tool.into(),
            unmount_tool: unmount_tool.into(),
        }
    }

    fn run(program: &str, args: &[&std::ffi::OsStr]) -> std::io::Result<ToolOutput> {
        let output = Command::new(program).args(args).output()?;
        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(ToolOutput {
            exit_code: output.status.code().unwrap_or(-1),
            output: combined,
        })
    }
}

impl Default for ShellBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MountBackend for ShellBackend {
    fn bind_mount(&self, host_path: &Path, container_path: &Path) -> std::io::Result<ToolOutput> {
        tracing::debug!(
            host = %host_path.display(),
            container = %container_path.display(),
            "running bind mount tool"
        );
        Self::run(
            &self.mount_tool,
            &[
                "-o".as_ref(),
                "bind".as_ref(),
                host_path.as_os_str(),
                container_path.as_os_str(),
            ],
        )
    }

    fn unmount(&self, container_path: &Path) -> std::io::Result<ToolOutput> {
        tracing::debug!(container = %container_path.display(), "running unmount tool");
        Self::run(&self.unmount_tool, &[container_path.as_os_str()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn succeeding_tool_yields_zero_exit_and_captured_output() {
        let backend = ShellBackend::with_tools("echo", "echo");
        let out = backend
            .bind_mount(Path::new("/host"), Path::new("/container"))
            .expect("echo should spawn");
        assert!(out.success());
        assert!(out.output.contains("/host"));
        assert!(out.output.contains("/container"));
    }

    #[test]
    fn failing_tool_yields_non_zero_exit() {
        let backend = ShellBackend::with_tools("false", "false");
        let out = backend
            .unmount(Path::new("/container"))
            .expect("false should spawn");
        assert!(!out.success());
    }

    #[test]
    fn missing_tool_is_a_spawn_error() {
        let backend = ShellBackend::with_tools("logvol-no-such-tool", "logvol-no-such-tool");
        let err = backend.unmount(Path::new("/container"));
        assert!(err.is_err());
    }
}
