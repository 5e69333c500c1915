//! Output of a single sub-detector

use serde::{Deserialize, Serialize};
use crate::types::Dimension;

/// Score and evidence for one dimension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Dimension label (词汇AI化, 句式AI化, ...)
    pub dimension: String,
    /// 0-100, higher = more AI-flavored
    pub score: f64,
    /// Human-readable explanation
    pub details: String,
    /// Matched words / patterns
    pub items: Vec<String>,
}

impl DetectionResult {
    pub fn new(dimension: Dimension, score: f64, details: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            dimension: dimension.label().to_string(),
            score,
            details: details.into(),
            items,
        }
    }
}
