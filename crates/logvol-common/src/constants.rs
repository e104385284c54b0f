//! System-wide constants and default paths.

/// Plugin data directory holding everything logvol writes on the host.
pub const PLUGIN_DATA_DIR: &str = "/var/lib/app";

/// Base directory under which per-pod log volumes are created.
pub const LOG_VOLUME_BASE_DIR: &str = "/var/lib/app/log-volumes";

/// External tool invoked to create bind mounts.
pub const MOUNT_TOOL: &str = "mount";

/// External tool invoked to remove mounts.
pub const UNMOUNT_TOOL: &str = "umount";

/// Separator joining pod name, namespace, and uid in a volume directory name.
pub const POD_ID_SEPARATOR: &str = "_";

/// Application name used in CLI output and diagnostics.
pub const APP_NAME: &str = "logvol";

/// Binary name for the CLI.
pub const BIN_NAME: &str = "logvol";
