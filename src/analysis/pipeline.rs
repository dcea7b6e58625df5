// src/analysis/pipeline.rs
//
// One-way pipeline: raw detections → normalized detections →
// per-item risk records → aggregate report. No feedback loop, no
// shared state between stages, O(number of detections).

use super::classifier::{classify, RiskRecord};
use super::normalizer::normalize;
use super::report::{aggregate, Report};
use crate::detector::DetectionSource;
use crate::error::DetectionSourceError;
use crate::types::RawDetection;
use chrono::{DateTime, Utc};

/// Full analysis of one detector output set. Pure: re-running on the
/// same input with the same timestamp yields an identical report.
pub fn analyze(raw: &[RawDetection], generated_at: DateTime<Utc>) -> Report {
    let normalized = normalize(raw);
    let records: Vec<RiskRecord> = normalized
        .iter()
        .map(|d| classify(d.area, d.confidence))
        .collect();
    aggregate(normalized, records, generated_at)
}

/// Same pipeline fed through the injected detector seam. A missing or
/// unreadable detection source is the only hard failure; everything
/// downstream recovers per entry.
pub fn analyze_source(
    source: &mut dyn DetectionSource,
    generated_at: DateTime<Utc>,
) -> Result<Report, DetectionSourceError> {
    let raw = source.detections()?;
    Ok(analyze(&raw, generated_at))
}
