//! Batch audit of stored boundaries.
//!
//! Runs every stored sector, subsector, and cuadrante boundary through the
//! normalizer and tallies the outcomes, so legacy records without a usable
//! shape can be found and fixed before anyone opens them on a map.

use std::collections::BTreeMap;

use sector_map_boundary_models::{StoredBoundary, SubdivisionLevel};
use serde::Serialize;

use crate::input::BoundaryInput;
use crate::normalize::normalize;
use crate::progress::ProgressCallback;

/// Counts for one subdivision level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelCounts {
    /// Records seen.
    pub total: u64,
    /// Records with a usable boundary.
    pub with_boundary: u64,
}

/// A record without a usable boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditIssue {
    /// Backend identifier.
    pub id: String,
    /// Hierarchy level.
    pub level: SubdivisionLevel,
    /// Display name, if stored.
    pub name: Option<String>,
    /// Outcome label (see [`crate::NoBoundary::kind`]).
    pub reason: &'static str,
    /// Human-readable detail.
    pub detail: String,
}

/// Result of auditing a batch of stored boundaries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    /// Records seen.
    pub total: u64,
    /// Records with a usable boundary.
    pub with_boundary: u64,
    /// Records without one, counted by outcome label.
    pub by_reason: BTreeMap<&'static str, u64>,
    /// Per-level counts.
    pub by_level: BTreeMap<SubdivisionLevel, LevelCounts>,
    /// Every record without a usable boundary, in input order.
    pub issues: Vec<AuditIssue>,
}

impl AuditReport {
    /// Records without a usable boundary.
    #[must_use]
    pub const fn without_boundary(&self) -> u64 {
        self.total - self.with_boundary
    }
}

/// Normalizes every record and tallies the outcomes.
#[must_use]
pub fn audit_boundaries(
    records: &[StoredBoundary],
    progress: &dyn ProgressCallback,
) -> AuditReport {
    progress.set_total(records.len() as u64);
    progress.set_message("Auditing boundaries".to_string());

    let mut report = AuditReport::default();

    for record in records {
        let level = report.by_level.entry(record.level).or_default();
        level.total += 1;
        report.total += 1;

        match normalize(BoundaryInput::from_value(&record.boundary)) {
            Ok(_) => {
                level.with_boundary += 1;
                report.with_boundary += 1;
            }
            Err(reason) => {
                log::debug!(
                    "{} {} has no usable boundary: {reason}",
                    record.level,
                    record.id
                );
                *report.by_reason.entry(reason.kind()).or_default() += 1;
                report.issues.push(AuditIssue {
                    id: record.id.clone(),
                    level: record.level,
                    name: record.name.clone(),
                    reason: reason.kind(),
                    detail: reason.to_string(),
                });
            }
        }

        progress.inc(1);
    }

    progress.finish(format!(
        "Audited {} boundaries ({} without a usable shape)",
        report.total,
        report.without_boundary()
    ));

    report
}
