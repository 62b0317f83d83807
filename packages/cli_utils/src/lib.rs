#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Terminal plumbing for the sector map CLI.
//!
//! [`AuditProgress`] drives an `indicatif` bar from the boundary audit, and
//! [`init_logger`] routes `log` output through `indicatif-log-bridge` so
//! log lines print above the bar instead of through it.

use indicatif::{ProgressBar, ProgressStyle};
use sector_map_boundary::progress::ProgressCallback;

pub use indicatif::MultiProgress;

const AUDIT_TEMPLATE: &str = "{msg:<24} {wide_bar:.green/dim} {pos}/{len} records";

/// Record counter for the boundary audit.
pub struct AuditProgress {
    bar: ProgressBar,
}

impl AuditProgress {
    /// Adds an empty bar to `multi`; the audit sets its length.
    #[must_use]
    pub fn new(multi: &MultiProgress, message: &str) -> Self {
        let style = ProgressStyle::with_template(AUDIT_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ");
        let bar = ProgressBar::new(0)
            .with_style(style)
            .with_message(message.to_string());

        Self {
            bar: multi.add(bar),
        }
    }
}

impl ProgressCallback for AuditProgress {
    fn set_total(&self, total: u64) {
        self.bar.set_length(total);
    }

    fn inc(&self, delta: u64) {
        self.bar.inc(delta);
    }

    fn set_message(&self, msg: String) {
        self.bar.set_message(msg);
    }

    fn finish(&self, msg: String) {
        self.bar.finish_with_message(msg);
    }
}

/// Installs `pretty_env_logger` (filtered by `RUST_LOG`) behind
/// `indicatif-log-bridge` and returns the [`MultiProgress`] every bar must
/// join.
///
/// A second call keeps the first logger.
#[must_use]
pub fn init_logger() -> MultiProgress {
    let multi = MultiProgress::new();
    let logger = pretty_env_logger::formatted_timed_builder()
        .parse_env("RUST_LOG")
        .build();
    let max_level = logger.filter();

    if indicatif_log_bridge::LogWrapper::new(multi.clone(), logger)
        .try_init()
        .is_ok()
    {
        log::set_max_level(max_level);
    }

    multi
}

#[cfg(test)]
mod tests {
    use super::*;
    use indicatif::ProgressDrawTarget;

    #[test]
    fn audit_progress_tracks_records() {
        let multi = MultiProgress::with_draw_target(ProgressDrawTarget::hidden());
        let progress = AuditProgress::new(&multi, "Auditing");

        progress.set_total(3);
        progress.inc(1);
        progress.inc(1);
        assert_eq!(progress.bar.length(), Some(3));
        assert_eq!(progress.bar.position(), 2);

        progress.finish("done".to_string());
        assert!(progress.bar.is_finished());
        assert_eq!(progress.bar.message(), "done");
    }
}
