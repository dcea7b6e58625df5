// src/detector.rs
//
// Boundary to the external pothole detector. The analysis core never
// loads or runs a model; it consumes detector output through the
// DetectionSource trait so the pipeline stays testable without any
// real detector. StoredDetections replays detector output that was
// dumped to JSON offline.

use crate::error::DetectionSourceError;
use crate::types::RawDetection;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

pub trait DetectionSource {
    fn detections(&mut self) -> Result<Vec<RawDetection>, DetectionSourceError>;
}

/// Replays detector output from a JSON dump: an array of objects with
/// x1/y1/x2/y2/confidence fields, in detector output order.
pub struct StoredDetections {
    detections: Vec<RawDetection>,
}

impl StoredDetections {
    pub fn load(path: &Path, confidence_threshold: f32) -> Result<Self, DetectionSourceError> {
        let contents = fs::read_to_string(path).map_err(|source| DetectionSourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let entries: Vec<Value> =
            serde_json::from_str(&contents).map_err(|source| DetectionSourceError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let detections = parse_entries(entries, confidence_threshold);
        debug!(
            "Loaded {} stored detection(s) from {}",
            detections.len(),
            path.display()
        );
        Ok(Self { detections })
    }
}

impl DetectionSource for StoredDetections {
    fn detections(&mut self) -> Result<Vec<RawDetection>, DetectionSourceError> {
        Ok(self.detections.clone())
    }
}

/// Entries that don't deserialize (missing fields, wrong types) are
/// skipped with a warning, never fatal. The confidence threshold
/// mirrors the one the detector itself applies at predict time.
fn parse_entries(entries: Vec<Value>, confidence_threshold: f32) -> Vec<RawDetection> {
    let mut detections = Vec::with_capacity(entries.len());
    for (idx, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<RawDetection>(entry) {
            Ok(det) if det.confidence >= confidence_threshold => detections.push(det),
            Ok(det) => {
                debug!(
                    "Dropped detection #{} below detector threshold ({:.2} < {:.2})",
                    idx + 1,
                    det.confidence,
                    confidence_threshold
                );
            }
            Err(e) => {
                warn!("Skipping malformed detection entry #{}: {}", idx + 1, e);
            }
        }
    }
    detections
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_skips_malformed_entries() {
        let entries = vec![
            json!({"x1": 10.0, "y1": 10.0, "x2": 112.0, "y2": 34.0, "confidence": 0.92}),
            json!({"x1": 50.0, "y1": 50.0}), // missing fields
            json!("not an object"),
            json!({"x1": 50.0, "y1": 50.0, "x2": 124.0, "y2": 79.0, "confidence": 0.89}),
        ];
        let dets = parse_entries(entries, 0.5);
        assert_eq!(dets.len(), 2);
        assert_eq!(dets[0].x2, 112.0);
        assert_eq!(dets[1].y2, 79.0);
    }

    #[test]
    fn test_parse_applies_detector_threshold() {
        let entries = vec![
            json!({"x1": 0.0, "y1": 0.0, "x2": 10.0, "y2": 10.0, "confidence": 0.49}),
            json!({"x1": 0.0, "y1": 0.0, "x2": 10.0, "y2": 10.0, "confidence": 0.50}),
        ];
        let dets = parse_entries(entries, 0.5);
        assert_eq!(dets.len(), 1);
        assert_eq!(dets[0].confidence, 0.50);
    }
}
