// src/analysis/report.rs
//
// Road-level aggregation. The overall verdict is a count-based
// cascade over the number of surviving detections, independent of
// their individual tiers: six LOW potholes rate EXTREME overall while
// one EXTREME pothole alone rates MODERATE. Deliberately coarse; the
// existing behavior is reproduced as-is for report compatibility.

use super::classifier::RiskRecord;
use super::normalizer::NormalizedDetection;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OverallRisk {
    Clear,
    Moderate,
    High,
    Extreme,
}

impl OverallRisk {
    pub fn from_count(n: usize) -> Self {
        if n > 5 {
            OverallRisk::Extreme
        } else if n > 2 {
            OverallRisk::High
        } else if n > 0 {
            OverallRisk::Moderate
        } else {
            OverallRisk::Clear
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OverallRisk::Clear => "CLEAR",
            OverallRisk::Moderate => "MODERATE",
            OverallRisk::High => "HIGH",
            OverallRisk::Extreme => "EXTREME",
        }
    }
}

impl std::fmt::Display for OverallRisk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    pub detection: NormalizedDetection,
    pub risk: RiskRecord,
}

/// Format-agnostic road-damage report; external renderers (HTML, PDF,
/// plain JSON) consume it field-by-field. Immutable after
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub overall_risk: OverallRisk,
    pub detection_count: usize,
    /// Ordered by detection id ascending.
    pub detections: Vec<ReportEntry>,
}

/// Pure reduction over parallel detection/record sequences. The
/// caller supplies the timestamp; the core never reads the clock, so
/// aggregation stays deterministically testable. An empty set is not
/// an error: it yields a valid CLEAR report.
pub fn aggregate(
    detections: Vec<NormalizedDetection>,
    records: Vec<RiskRecord>,
    generated_at: DateTime<Utc>,
) -> Report {
    debug_assert_eq!(detections.len(), records.len());
    let detections: Vec<ReportEntry> = detections
        .into_iter()
        .zip(records)
        .map(|(detection, risk)| ReportEntry { detection, risk })
        .collect();

    Report {
        generated_at,
        overall_risk: OverallRisk::from_count(detections.len()),
        detection_count: detections.len(),
        detections,
    }
}
