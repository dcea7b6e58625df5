// src/error.rs
//
// Only failures that prevent producing a report at all surface here.
// Per-detection problems (malformed entries, degenerate boxes) are
// recovered inline by the detection source and the normalizer.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DetectionSourceError {
    #[error("failed to read detection dump {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("detection dump {path} is not a JSON detection list")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
