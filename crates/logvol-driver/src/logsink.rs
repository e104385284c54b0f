//! Diagnostic sink capability injected into the lifecycle driver.
//!
//! Failure paths of `mount`/`unmount` are reported here for operator
//! visibility, independently of the response envelope the kubelet reads.

/// Leveled diagnostic sink. Never fails, returns nothing.
pub trait LogSink: Send + Sync {
    /// Records a debug-level line.
    fn debug(&self, msg: &str);
    /// Records an error-level line.
    fn error(&self, msg: &str);
}

/// Production sink forwarding to the `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }
}
