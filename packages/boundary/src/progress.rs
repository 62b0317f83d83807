//! Progress reporting for batch boundary work.
//!
//! The audit reports through [`ProgressCallback`] so it stays independent
//! of how progress is rendered. The CLI plugs in `indicatif` bars; tests
//! and the HTTP server use [`NullProgress`].

/// Receives progress updates from a batch operation.
pub trait ProgressCallback: Send + Sync {
    /// Sets the number of records that will be processed.
    fn set_total(&self, total: u64);

    /// Advances by `delta` records.
    fn inc(&self, delta: u64);

    /// Replaces the status message.
    fn set_message(&self, msg: String);

    /// Marks the operation complete.
    fn finish(&self, msg: String);
}

/// Ignores every update.
pub struct NullProgress;

impl ProgressCallback for NullProgress {
    fn set_total(&self, _total: u64) {}
    fn inc(&self, _delta: u64) {}
    fn set_message(&self, _msg: String) {}
    fn finish(&self, _msg: String) {}
}
