//! Outcome classification for mount backend invocations.
//!
//! Turns a backend's raw [`ToolOutput`] into the error taxonomy the
//! lifecycle driver reports. The two paths deliberately differ: a failed
//! bind mount gets a descriptive wrapper carrying both paths and the
//! captured output, while a failed unmount propagates the tool's raw output
//! text unchanged inside the container-path wrap.

use std::path::Path;

use logvol_common::error::{DriverError, Result};

use crate::backend::MountBackend;

/// Bind-mounts `host_path` onto `container_path` through the backend.
///
/// # Errors
///
/// Returns [`DriverError::Mount`] when the tool exits non-zero or cannot be
/// launched; the captured output is embedded in the error. Success is silent.
pub fn bind_mount(
    backend: &dyn MountBackend,
    host_path: &Path,
    container_path: &Path,
) -> Result<()> {
    match backend.bind_mount(host_path, container_path) {
        Ok(out) if out.success() => Ok(()),
        Ok(out) => Err(DriverError::Mount {
            host_path: host_path.to_path_buf(),
            container_path: container_path.to_path_buf(),
            detail: format!("exit status {}", out.exit_code),
            output: out.output,
        }),
        Err(spawn) => Err(DriverError::Mount {
            host_path: host_path.to_path_buf(),
            container_path: container_path.to_path_buf(),
            detail: format!("failed to run mount tool: {spawn}"),
            output: String::new(),
        }),
    }
}

/// Removes the mount at `container_path` through the backend.
///
/// # Errors
///
/// Returns [`DriverError::Unmount`] when the tool exits non-zero or cannot
/// be launched; the tool's combined output becomes the error text verbatim.
pub fn unmount(backend: &dyn MountBackend, container_path: &Path) -> Result<()> {
    match backend.unmount(container_path) {
        Ok(out) if out.success() => Ok(()),
        Ok(out) => Err(DriverError::Unmount {
            container_path: container_path.to_path_buf(),
            output: out.output,
        }),
        Err(spawn) => Err(DriverError::Unmount {
            container_path: container_path.to_path_buf(),
            output: format!("failed to run unmount tool: {spawn}"),
        }),
    }
}
