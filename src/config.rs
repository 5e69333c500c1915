//! Detector configuration
//!
//! Loaded from an optional JSON file; every field has a default.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use crate::error::DetectError;
use crate::DEFAULT_THRESHOLD;

/// Which originality strategy to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmenterMode {
    /// Dictionary segmenter when compiled in, sentence overlap otherwise
    #[default]
    Auto,
    /// Ask for the dictionary segmenter; falls back silently if unavailable
    Dictionary,
    /// Always sentence overlap
    Simple,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Transition-word threshold. Accepted for compatibility, not used in scoring.
    #[serde(default = "default_threshold")]
    pub threshold: i64,
    #[serde(default)]
    pub segmenter: SegmenterMode,
}

fn default_threshold() -> i64 { DEFAULT_THRESHOLD }

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            segmenter: SegmenterMode::Auto,
        }
    }
}

impl DetectorConfig {
    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DetectError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| DetectError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| DetectError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn with_threshold(mut self, threshold: i64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_segmenter(mut self, segmenter: SegmenterMode) -> Self {
        self.segmenter = segmenter;
        self
    }
}
