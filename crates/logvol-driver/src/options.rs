//! Decoding and validation of the kubelet-supplied mount options blob.

use logvol_common::error::{DriverError, Result};
use serde::{Deserialize, Serialize};

/// Mount options passed by the kubelet as a single JSON argument.
///
/// The kubelet sends additional `kubernetes.io/...` metadata keys
/// (`fsType`, `pvOrVolumeName`, `readwrite`, `serviceAccount.name`, ...);
/// only the fields below are consumed, the rest are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeOptions {
    /// Requested filesystem format. Required and must be non-empty.
    #[serde(default)]
    pub format: String,
    /// Name of the pod the volume belongs to.
    #[serde(default, rename = "kubernetes.io/pod.name")]
    pub pod_name: String,
    /// Namespace of the pod.
    #[serde(default, rename = "kubernetes.io/pod.namespace")]
    pub pod_namespace: String,
    /// Unique identifier of the pod.
    #[serde(default, rename = "kubernetes.io/pod.uid")]
    pub pod_uid: String,
}

/// Decodes and validates the raw options argument.
///
/// # Errors
///
/// Returns [`DriverError::MalformedOptions`] when the blob is not valid JSON
/// and [`DriverError::Validation`] when `format` is missing or empty. The
/// pod identity fields are passed through unvalidated and default to the
/// empty string when absent.
pub fn parse_options(raw: &str) -> Result<VolumeOptions> {
    let opts: VolumeOptions = serde_json::from_str(raw)?;
    if opts.format.is_empty() {
        return Err(DriverError::Validation { field: "format" });
    }
    Ok(opts)
}
