// src/analysis/mod.rs
//
// Road-damage analysis pipeline modules.
//
// Signal flow:
//   Detector output → normalizer → classifier ─┐
//                                              ├→ report::aggregate → Report
//   Caller-supplied timestamp ─────────────────┘
//
// Every stage is a pure function of its input; the caller owns the
// clock and the detector. Orchestrated by pipeline::analyze.

pub mod classifier;
pub mod normalizer;
pub mod pipeline;
pub mod report;

// Re-exports for ergonomic access from main.rs
pub use classifier::{classify, CostBand, RepairUrgency, RiskRecord, RiskTier};
pub use normalizer::{normalize, NormalizedDetection};
pub use pipeline::{analyze, analyze_source};
pub use report::{aggregate, OverallRisk, Report, ReportEntry};
