// src/analysis/normalizer.rs
//
// Turns raw detector rectangles into validated geometry. Coordinates
// are reordered if the detector emitted them inverted, and degenerate
// boxes (coincident or inverted points) are clamped so a detection is
// never zero-sized.

use crate::types::RawDetection;
use serde::Serialize;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedDetection {
    /// 1-based, assigned in detector output order among survivors.
    pub id: u32,
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
    pub width: u32,
    pub height: u32,
    pub area: u64,
    pub confidence: f32,
    pub confidence_percent: String,
    pub location: String,
}

impl NormalizedDetection {
    fn from_raw(id: u32, raw: &RawDetection) -> Self {
        let (x1, x2) = ordered(raw.x1, raw.x2);
        let (y1, y2) = ordered(raw.y1, raw.y2);

        // Invariant: width ≥ 1, height ≥ 1, area ≥ 1.
        let width = (x2 - x1).max(1) as u32;
        let height = (y2 - y1).max(1) as u32;
        let area = width as u64 * height as u64;

        Self {
            id,
            x1,
            y1,
            x2,
            y2,
            width,
            height,
            area,
            confidence: raw.confidence,
            confidence_percent: format!("{:.2}%", raw.confidence * 100.0),
            location: format!("X:{}-{}, Y:{}-{}", x1, x2, y1, y2),
        }
    }
}

fn ordered(a: f32, b: f32) -> (i32, i32) {
    let a = a.round() as i32;
    let b = b.round() as i32;
    (a.min(b), a.max(b))
}

/// Pure function of its input: preserves detector order, skips
/// malformed entries with a warning, and assigns ids by 1-based
/// position among the surviving detections.
pub fn normalize(raw: &[RawDetection]) -> Vec<NormalizedDetection> {
    let mut out = Vec::with_capacity(raw.len());
    for (idx, det) in raw.iter().enumerate() {
        if !det.is_well_formed() {
            warn!(
                "Skipping malformed detection #{} (confidence={})",
                idx + 1,
                det.confidence
            );
            continue;
        }
        let id = out.len() as u32 + 1;
        let normalized = NormalizedDetection::from_raw(id, det);
        if normalized.width == 1 || normalized.height == 1 {
            debug!("Clamped degenerate box for detection #{}", id);
        }
        out.push(normalized);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(x1: f32, y1: f32, x2: f32, y2: f32, conf: f32) -> RawDetection {
        RawDetection {
            x1,
            y1,
            x2,
            y2,
            confidence: conf,
        }
    }

    #[test]
    fn test_derives_geometry_in_order() {
        let dets = normalize(&[
            raw(10.0, 10.0, 112.0, 34.0, 0.9224),
            raw(50.0, 50.0, 124.0, 79.0, 0.8998),
        ]);
        assert_eq!(dets.len(), 2);
        assert_eq!(dets[0].id, 1);
        assert_eq!(dets[0].width, 102);
        assert_eq!(dets[0].height, 24);
        assert_eq!(dets[0].area, 2448);
        assert_eq!(dets[0].confidence_percent, "92.24%");
        assert_eq!(dets[0].location, "X:10-112, Y:10-34");
        assert_eq!(dets[1].id, 2);
        assert_eq!(dets[1].area, 2146);
    }

    #[test]
    fn test_inverted_coordinates_are_reordered() {
        let dets = normalize(&[raw(112.0, 34.0, 10.0, 10.0, 0.8)]);
        assert_eq!(dets[0].x1, 10);
        assert_eq!(dets[0].x2, 112);
        assert_eq!(dets[0].width, 102);
        assert_eq!(dets[0].height, 24);
        assert_eq!(dets[0].location, "X:10-112, Y:10-34");
    }

    #[test]
    fn test_degenerate_boxes_clamp_to_one() {
        // Coincident points: zero extent in both axes.
        let dets = normalize(&[raw(50.0, 50.0, 50.0, 50.0, 0.7)]);
        assert_eq!(dets[0].width, 1);
        assert_eq!(dets[0].height, 1);
        assert_eq!(dets[0].area, 1);

        // Zero height only.
        let dets = normalize(&[raw(10.0, 20.0, 40.0, 20.0, 0.7)]);
        assert_eq!(dets[0].width, 30);
        assert_eq!(dets[0].height, 1);
        assert_eq!(dets[0].area, 30);
    }

    #[test]
    fn test_malformed_entries_are_skipped_and_ids_compact() {
        let dets = normalize(&[
            raw(0.0, 0.0, 10.0, 10.0, 0.9),
            raw(0.0, 0.0, 10.0, 10.0, f32::NAN),
            raw(0.0, 0.0, 10.0, 10.0, 1.5),
            raw(f32::INFINITY, 0.0, 10.0, 10.0, 0.9),
            raw(20.0, 20.0, 30.0, 30.0, 0.8),
        ]);
        assert_eq!(dets.len(), 2);
        assert_eq!(dets[0].id, 1);
        assert_eq!(dets[1].id, 2);
        assert_eq!(dets[1].x1, 20);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(normalize(&[]).is_empty());
    }
}
