//! AiDetector: runs the five dimensions and aggregates them
//!
//! Stateless per call. Pattern tables and the segmentation strategy are
//! injected at construction and only read afterwards.

use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;
use crate::config::DetectorConfig;
use crate::core::patterns::PatternTables;
use crate::core::segmenter::Segmentation;
use crate::core::{expression, hierarchy, originality, structure, vocabulary};
use crate::error::DetectError;
use crate::types::{AIDetectionReport, DetectionResult};
use crate::DEFAULT_THRESHOLD;

#[derive(Debug, Clone)]
pub struct AiDetector {
    threshold: i64,
    tables: Arc<PatternTables>,
    segmentation: Segmentation,
}

impl Default for AiDetector {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl AiDetector {
    /// Detector with built-in tables and the best available segmentation.
    ///
    /// `threshold` is kept for compatibility and does not affect scoring.
    pub fn new(threshold: i64) -> Self {
        Self::with_parts(threshold, PatternTables::builtin(), Segmentation::default())
    }

    pub fn from_config(config: &DetectorConfig) -> Self {
        Self::with_parts(
            config.threshold,
            PatternTables::builtin(),
            Segmentation::select(config.segmenter),
        )
    }

    pub fn with_parts(threshold: i64, tables: Arc<PatternTables>, segmentation: Segmentation) -> Self {
        Self { threshold, tables, segmentation }
    }

    pub fn threshold(&self) -> i64 {
        self.threshold
    }

    pub fn segmentation(&self) -> &Segmentation {
        &self.segmentation
    }

    pub fn tables(&self) -> &PatternTables {
        &self.tables
    }

    pub fn detect_vocabulary(&self, text: &str) -> DetectionResult {
        vocabulary::detect(&self.tables, text)
    }

    pub fn detect_structure(&self, text: &str) -> DetectionResult {
        structure::detect(&self.tables, text)
    }

    pub fn detect_hierarchy(&self, text: &str) -> DetectionResult {
        hierarchy::detect(&self.tables, text)
    }

    pub fn detect_expression(&self, text: &str) -> DetectionResult {
        expression::detect(&self.tables, text)
    }

    pub fn detect_originality(&self, text: &str) -> DetectionResult {
        originality::detect(&self.segmentation, text)
    }

    /// Full detection
    pub fn detect(&self, text: &str) -> AIDetectionReport {
        let report = AIDetectionReport::from_results([
            self.detect_vocabulary(text),
            self.detect_structure(text),
            self.detect_hierarchy(text),
            self.detect_expression(text),
            self.detect_originality(text),
        ]);

        debug!(
            chars = text.chars().count(),
            vocabulary = report.vocabulary_score,
            structure = report.structure_score,
            hierarchy = report.hierarchy_score,
            expression = report.expression_score,
            originality = report.originality_score,
            total = report.total_score,
            "detect.complete"
        );
        report
    }

    /// Read a UTF-8 file and detect its content
    pub fn detect_file(&self, path: impl AsRef<Path>) -> Result<AIDetectionReport, DetectError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| DetectError::from_io(path, e))?;
        debug!(path = %path.display(), bytes = text.len(), "detect.file_read");
        Ok(self.detect(&text))
    }
}

/// Total score of `text` with a default detector
pub fn detect_score(text: &str) -> f64 {
    AiDetector::default().detect(text).total_score
}
