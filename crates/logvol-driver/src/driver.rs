//! Lifecycle driver: the `init`, `mount`, and `unmount` operations.
//!
//! Each operation runs in a fresh single-shot process, attempts its steps
//! exactly once, and always produces a response envelope; the kubelet
//! retries by re-invoking the plugin.

use std::path::Path;

use logvol_common::config::DriverConfig;
use logvol_common::error::{DriverError, Result};
use logvol_common::types::{DriverResponse, InitResponse};

use crate::backend::MountBackend;
use crate::executor;
use crate::hostpath::derive_host_path;
use crate::logsink::LogSink;
use crate::options::parse_options;

/// Creates a directory and any missing parents, succeeding when it already
/// exists.
///
/// # Errors
///
/// Returns [`DriverError::DirectoryCreation`] when the filesystem refuses
/// the creation (for example permission denied, or a file in the way).
pub fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|source| DriverError::DirectoryCreation {
        path: path.to_path_buf(),
        source,
    })
}

fn check_args_len(args: &[String], expected: usize) -> Result<()> {
    if args.len() < expected {
        return Err(DriverError::InvalidArgs {
            args: args.to_vec(),
        });
    }
    Ok(())
}

/// FlexVolume lifecycle driver for per-pod log volumes.
///
/// Holds no state between invocations; everything persistent lives in the
/// filesystem under [`DriverConfig::log_base_dir`].
pub struct LogVolumeDriver {
    config: DriverConfig,
    log: Box<dyn LogSink>,
    backend: Box<dyn MountBackend>,
}

impl LogVolumeDriver {
    /// Creates a driver over the default host directory layout.
    #[must_use]
    pub fn new(log: Box<dyn LogSink>, backend: Box<dyn MountBackend>) -> Self {
        Self::with_config(DriverConfig::default(), log, backend)
    }

    /// Creates a driver over an explicit directory layout.
    #[must_use]
    pub fn with_config(
        config: DriverConfig,
        log: Box<dyn LogSink>,
        backend: Box<dyn MountBackend>,
    ) -> Self {
        Self {
            config,
            log,
            backend,
        }
    }

    /// Handles the `init` operation.
    ///
    /// Ensures the plugin data directory and the log-volume base directory
    /// exist, then advertises the plugin's capabilities. Pre-existing
    /// directories are not errors; a creation failure is returned in the
    /// envelope without being logged separately.
    pub fn init(&self) -> InitResponse {
        match self.ensure_base_dirs() {
            Ok(()) => InitResponse::success(),
            Err(err) => InitResponse::failure(err),
        }
    }

    /// Handles the `mount` operation.
    ///
    /// Expects `args` to carry the container mount path followed by the
    /// kubelet's options blob. Parses and validates the options, materializes
    /// the per-pod host directory, and bind-mounts it onto the container
    /// path. The first failing step short-circuits, is reported to the log
    /// sink, and becomes the `Failure` envelope.
    pub fn mount(&self, args: &[String]) -> DriverResponse {
        self.log.debug(&format!("mount args: {args:?}"));
        match self.mount_inner(args) {
            Ok(()) => DriverResponse::success(),
            Err(err) => {
                self.log.error(&err.to_string());
                DriverResponse::failure(err)
            }
        }
    }

    /// Handles the `unmount` operation.
    ///
    /// Expects `args` to carry the container mount path. Undoes the bind
    /// mount only; the host-side log directory and its contents are left
    /// intact so logs survive container restarts.
    pub fn unmount(&self, args: &[String]) -> DriverResponse {
        self.log.debug(&format!("unmount args: {args:?}"));
        match self.unmount_inner(args) {
            Ok(()) => DriverResponse::success(),
            Err(err) => {
                self.log.error(&err.to_string());
                DriverResponse::failure(err)
            }
        }
    }

    fn mount_inner(&self, args: &[String]) -> Result<()> {
        check_args_len(args, 2)?;
        let container_path = Path::new(&args[0]);
        let opts = parse_options(&args[1])?;

        self.ensure_base_dirs()?;

        let host_path = derive_host_path(
            &self.config.log_base_dir,
            &opts.pod_name,
            &opts.pod_namespace,
            &opts.pod_uid,
        );
        ensure_dir(&host_path)?;

        executor::bind_mount(self.backend.as_ref(), &host_path, container_path)
    }

    fn unmount_inner(&self, args: &[String]) -> Result<()> {
        check_args_len(args, 1)?;
        let container_path = Path::new(&args[0]);
        executor::unmount(self.backend.as_ref(), container_path)
    }

    fn ensure_base_dirs(&self) -> Result<()> {
        ensure_dir(&self.config.plugin_data_dir)?;
        ensure_dir(&self.config.log_base_dir)
    }
}
