//! Unified error types for the logvol workspace.
//!
//! Every failure a lifecycle operation can hit maps to exactly one variant
//! here; the variant's message is what ends up in the `Failure` response the
//! kubelet reads.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum DriverError {
    /// An operation was invoked with fewer positional arguments than it needs.
    #[error("invalid args num, {args:?}")]
    InvalidArgs {
        /// The arguments that were actually supplied.
        args: Vec<String>,
    },

    /// The kubelet options blob could not be decoded.
    #[error("decode mount options failed: {source}")]
    MalformedOptions {
        /// Underlying JSON decode error.
        #[from]
        source: serde_json::Error,
    },

    /// A decoded options blob is missing a required field.
    #[error("mount option {field} is required and must be non-empty")]
    Validation {
        /// Name of the missing or empty field.
        field: &'static str,
    },

    /// A create-if-absent directory operation failed.
    #[error("create directory {path} failed, {source}")]
    DirectoryCreation {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The external bind-mount tool exited non-zero or could not be run.
    #[error(
        "run bind mount command failed, host path {host_path}, container path {container_path}, {detail}, output: {output}"
    )]
    Mount {
        /// Host-side directory that was being bind-mounted.
        host_path: PathBuf,
        /// Container path the mount was targeting.
        container_path: PathBuf,
        /// Exit status or spawn failure description.
        detail: String,
        /// Combined stdout and stderr captured from the tool.
        output: String,
    },

    /// The external unmount tool exited non-zero or could not be run.
    ///
    /// The message wraps the container path around the tool's raw combined
    /// output; the output text itself is propagated unchanged.
    #[error("unmount container path {container_path} failed, {output}")]
    Unmount {
        /// Container path the unmount was targeting.
        container_path: PathBuf,
        /// Combined stdout and stderr captured from the tool.
        output: String,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, DriverError>;
