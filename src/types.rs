use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub detector: DetectorConfig,
    pub io: IoConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Detections below this confidence are dropped at the detector
    /// boundary, before normalization.
    pub confidence_threshold: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IoConfig {
    pub input_dir: String,
    pub output_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// One candidate damaged-surface region as reported by the external
/// detector: bounding rectangle in image pixel coordinates plus a
/// confidence score. Coordinates are not guaranteed to be ordered
/// (x1 < x2 is expected but not required).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RawDetection {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub confidence: f32,
}

impl RawDetection {
    /// A detection is usable when all coordinates are finite and the
    /// confidence is a real score in [0, 1]. Anything else is skipped
    /// by the normalizer with a warning.
    pub fn is_well_formed(&self) -> bool {
        self.x1.is_finite()
            && self.y1.is_finite()
            && self.x2.is_finite()
            && self.y2.is_finite()
            && self.confidence.is_finite()
            && (0.0..=1.0).contains(&self.confidence)
    }
}
