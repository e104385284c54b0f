//! Host-side log directory derivation from pod identity.

use std::path::{Path, PathBuf};

use logvol_common::constants::POD_ID_SEPARATOR;

/// Derives the host directory for a pod's log volume.
///
/// Joins `<pod_name>_<pod_namespace>_<pod_uid>` under `base_dir`. Pure and
/// deterministic: identical inputs always yield the identical path.
///
/// Identity fields are not escaped, so a `_` inside one of them can make two
/// distinct triples canonicalize to the same directory name. Uniqueness
/// rests on the kubelet supplying a unique uid.
#[must_use]
pub fn derive_host_path(
    base_dir: &Path,
    pod_name: &str,
    pod_namespace: &str,
    pod_uid: &str,
) -> PathBuf {
    base_dir.join(format!(
        "{pod_name}{POD_ID_SEPARATOR}{pod_namespace}{POD_ID_SEPARATOR}{pod_uid}"
    ))
}
