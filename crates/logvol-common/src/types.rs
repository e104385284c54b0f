//! Response envelope types written to standard output for the kubelet.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Terminal status of a plugin invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DriverStatus {
    /// The operation completed fully.
    Success,
    /// The operation failed; `message` carries the cause.
    Failure,
    /// The operation is not implemented by this plugin.
    #[serde(rename = "Not supported")]
    NotSupported,
}

impl fmt::Display for DriverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "Success"),
            Self::Failure => write!(f, "Failure"),
            Self::NotSupported => write!(f, "Not supported"),
        }
    }
}

/// Response envelope common to every operation.
///
/// Exactly one of these (possibly extended, see [`InitResponse`]) is written
/// to standard output per invocation; the process exit code stays zero and
/// the kubelet reads `status` to decide success or failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverResponse {
    /// Outcome of the operation.
    pub status: DriverStatus,
    /// Human-readable result or failure cause.
    pub message: String,
}

impl DriverResponse {
    /// Builds the success envelope.
    #[must_use]
    pub fn success() -> Self {
        Self {
            status: DriverStatus::Success,
            message: "Success".into(),
        }
    }

    /// Builds a failure envelope from any displayable cause.
    #[must_use]
    pub fn failure(cause: impl fmt::Display) -> Self {
        Self {
            status: DriverStatus::Failure,
            message: cause.to_string(),
        }
    }

    /// Builds the envelope answering an operation this plugin does not implement.
    #[must_use]
    pub fn not_supported(operation: &str) -> Self {
        Self {
            status: DriverStatus::NotSupported,
            message: format!("operation {operation} is not supported"),
        }
    }
}

/// Capability descriptor reported by `init`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// Whether the plugin performs remote attach/detach. Always `false`:
    /// this plugin only bind-mounts host directories.
    pub attach: bool,
}

/// Response envelope for the `init` operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitResponse {
    /// Common status and message fields, flattened into the envelope.
    #[serde(flatten)]
    pub response: DriverResponse,
    /// Capabilities advertised to the kubelet.
    pub capabilities: Capabilities,
}

impl InitResponse {
    /// Builds the successful init envelope advertising no attach support.
    #[must_use]
    pub fn success() -> Self {
        Self {
            response: DriverResponse::success(),
            capabilities: Capabilities { attach: false },
        }
    }

    /// Builds a failed init envelope from any displayable cause.
    #[must_use]
    pub fn failure(cause: impl fmt::Display) -> Self {
        Self {
            response: DriverResponse::failure(cause),
            capabilities: Capabilities { attach: false },
        }
    }
}
