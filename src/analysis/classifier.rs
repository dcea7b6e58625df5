// src/analysis/classifier.rs
//
// Per-detection risk classification. The tiering is an ordered
// threshold cascade over pixel area, evaluated top-down, first match
// wins, with strict `>` comparisons:
//
// ┌──────────────────────────────────────────────────────────────────┐
// │  area > 15000 → EXTREME  95%  IMMEDIATE (24h)   15 000 – 50 000  │
// │  area > 10000 → HIGH     80%  URGENT (48h)       8 000 – 20 000  │
// │  area >  5000 → MEDIUM   60%  PRIORITY (1 week)  3 000 – 10 000  │
// │  otherwise    → LOW      30%  SCHEDULED (2 wks)  1 000 –  5 000  │
// └──────────────────────────────────────────────────────────────────┘
//
// area == 15000 is HIGH, not EXTREME; the boundary semantics must be
// preserved for compatibility with existing reports.
//
// Thresholds, severities, cost bands, and impact narratives are data
// (TIER_TABLE), not branching code, so they can be retuned without
// touching control flow.

use serde::Serialize;

/// Detections below this confidence get a low-confidence qualifier
/// and a capped severity; the tier itself may be a false positive.
const LOW_CONFIDENCE_THRESHOLD: f32 = 0.6;
const LOW_CONFIDENCE_SEVERITY: u8 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
    Extreme,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "LOW",
            RiskTier::Medium => "MEDIUM",
            RiskTier::High => "HIGH",
            RiskTier::Extreme => "EXTREME",
        }
    }

    pub fn display_label(&self) -> &'static str {
        match self {
            RiskTier::Low => "LOW RISK",
            RiskTier::Medium => "MEDIUM RISK",
            RiskTier::High => "HIGH RISK",
            RiskTier::Extreme => "EXTREME RISK",
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RepairUrgency {
    Scheduled,
    Priority,
    Urgent,
    Immediate,
}

impl RepairUrgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepairUrgency::Scheduled => "SCHEDULED",
            RepairUrgency::Priority => "PRIORITY",
            RepairUrgency::Urgent => "URGENT",
            RepairUrgency::Immediate => "IMMEDIATE",
        }
    }

    /// Human label with the repair time window, as rendered in reports.
    pub fn display_label(&self) -> &'static str {
        match self {
            RepairUrgency::Scheduled => "SCHEDULED (Within 2 weeks)",
            RepairUrgency::Priority => "PRIORITY (Within 1 week)",
            RepairUrgency::Urgent => "URGENT (Within 48 hours)",
            RepairUrgency::Immediate => "IMMEDIATE (Within 24 hours)",
        }
    }
}

/// Currency-agnostic repair cost estimate, in relative units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CostBand {
    pub low: u32,
    pub high: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskRecord {
    pub tier: RiskTier,
    pub low_confidence: bool,
    /// Tier label plus low-confidence qualifier, ready for renderers.
    pub label: String,
    pub severity_percent: u8,
    pub urgency: RepairUrgency,
    pub cost: CostBand,
    /// Ordered vehicle-damage consequences for this tier.
    pub impact: Vec<String>,
}

// ============================================================================
// TIER TABLE
// ============================================================================

struct TierSpec {
    min_area_exclusive: u64,
    tier: RiskTier,
    severity_percent: u8,
    urgency: RepairUrgency,
    cost: CostBand,
    impact: &'static [&'static str],
}

const TIER_TABLE: [TierSpec; 4] = [
    TierSpec {
        min_area_exclusive: 15_000,
        tier: RiskTier::Extreme,
        severity_percent: 95,
        urgency: RepairUrgency::Immediate,
        cost: CostBand {
            low: 15_000,
            high: 50_000,
        },
        impact: &[
            "Vehicle damage guaranteed",
            "Tire bursts likely",
            "Suspension destruction",
            "High accident risk",
            "Immediate repair required",
        ],
    },
    TierSpec {
        min_area_exclusive: 10_000,
        tier: RiskTier::High,
        severity_percent: 80,
        urgency: RepairUrgency::Urgent,
        cost: CostBand {
            low: 8_000,
            high: 20_000,
        },
        impact: &[
            "Significant vehicle damage",
            "Tire damage probable",
            "Suspension stress",
            "Accident risk",
            "Urgent repair needed",
        ],
    },
    TierSpec {
        min_area_exclusive: 5_000,
        tier: RiskTier::Medium,
        severity_percent: 60,
        urgency: RepairUrgency::Priority,
        cost: CostBand {
            low: 3_000,
            high: 10_000,
        },
        impact: &[
            "Moderate vehicle wear",
            "Wheel alignment issues",
            "Uncomfortable ride",
            "Repair recommended",
        ],
    },
    TierSpec {
        min_area_exclusive: 0,
        tier: RiskTier::Low,
        severity_percent: 30,
        urgency: RepairUrgency::Scheduled,
        cost: CostBand {
            low: 1_000,
            high: 5_000,
        },
        impact: &[
            "Minor vehicle wear",
            "Reduced ride quality",
            "Maintenance suggested",
        ],
    },
];

// ============================================================================
// CLASSIFICATION
// ============================================================================

/// Pure function of (area, confidence): identical inputs always yield
/// an identical record.
pub fn classify(area: u64, confidence: f32) -> RiskRecord {
    let spec = TIER_TABLE
        .iter()
        .find(|s| area > s.min_area_exclusive)
        .unwrap_or(&TIER_TABLE[3]);

    let low_confidence = confidence < LOW_CONFIDENCE_THRESHOLD;

    // Low detector confidence caps the displayed severity even for
    // large areas; urgency and cost keep the area tier's values.
    let severity_percent = if low_confidence {
        LOW_CONFIDENCE_SEVERITY
    } else {
        spec.severity_percent
    };

    let label = if low_confidence {
        format!("{} (Low Confidence)", spec.tier.display_label())
    } else {
        spec.tier.display_label().to_string()
    };

    RiskRecord {
        tier: spec.tier,
        low_confidence,
        label,
        severity_percent,
        urgency: spec.urgency,
        cost: spec.cost,
        impact: spec.impact.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_cascade() {
        assert_eq!(classify(15_001, 0.9).tier, RiskTier::Extreme);
        assert_eq!(classify(12_000, 0.9).tier, RiskTier::High);
        assert_eq!(classify(7_500, 0.9).tier, RiskTier::Medium);
        assert_eq!(classify(2_448, 0.9).tier, RiskTier::Low);
        assert_eq!(classify(1, 0.9).tier, RiskTier::Low);
    }

    #[test]
    fn test_strict_boundaries() {
        // Thresholds are strict `>`: the boundary value falls into the
        // band below.
        assert_eq!(classify(15_000, 0.9).tier, RiskTier::High);
        assert_eq!(classify(15_001, 0.9).tier, RiskTier::Extreme);
        assert_eq!(classify(10_000, 0.9).tier, RiskTier::Medium);
        assert_eq!(classify(5_000, 0.9).tier, RiskTier::Low);
    }

    #[test]
    fn test_tier_fields_come_from_table() {
        let r = classify(20_000, 0.9);
        assert_eq!(r.severity_percent, 95);
        assert_eq!(r.urgency, RepairUrgency::Immediate);
        assert_eq!(r.cost, CostBand { low: 15_000, high: 50_000 });
        assert_eq!(r.impact.len(), 5);
        assert_eq!(r.label, "EXTREME RISK");

        let r = classify(2_448, 0.9224);
        assert_eq!(r.severity_percent, 30);
        assert_eq!(r.urgency, RepairUrgency::Scheduled);
        assert_eq!(r.cost, CostBand { low: 1_000, high: 5_000 });
    }

    #[test]
    fn test_low_confidence_caps_severity_only() {
        let r = classify(20_000, 0.59);
        assert_eq!(r.tier, RiskTier::Extreme);
        assert!(r.low_confidence);
        assert_eq!(r.severity_percent, 25);
        assert_eq!(r.label, "EXTREME RISK (Low Confidence)");
        // Urgency and cost stay on the area tier's values.
        assert_eq!(r.urgency, RepairUrgency::Immediate);
        assert_eq!(r.cost, CostBand { low: 15_000, high: 50_000 });
    }

    #[test]
    fn test_confidence_boundary_is_strict_less_than() {
        assert!(!classify(1_000, 0.6).low_confidence);
        assert!(classify(1_000, 0.599).low_confidence);
        assert_eq!(classify(1_000, 0.6).severity_percent, 30);
    }

    #[test]
    fn test_classification_is_deterministic() {
        assert_eq!(classify(16_000, 0.4), classify(16_000, 0.4));
        assert_eq!(classify(7_500, 0.85), classify(7_500, 0.85));
    }
}
