//! aiflavor: heuristic AI-flavor (AI味) detector for Chinese prose
//!
//! Five independent dimensions are scored 0-100 and combined by fixed weights:
//! text → {vocabulary, structure, hierarchy, expression, originality} → report

pub mod config;
pub mod core;
pub mod error;
pub mod types;

pub use crate::config::{DetectorConfig, SegmenterMode};
pub use crate::core::{detect_score, format_report, AiDetector, FormatOptions, PatternTables};
pub use crate::error::DetectError;
pub use crate::types::{AIDetectionReport, DetectionResult, Dimension, FlavorLevel};

// =============================================================================
// AGGREGATION WEIGHTS - sum = 1.0, expression dominates
// =============================================================================

/// Vocabulary (transition words) weight
pub const WEIGHT_VOCABULARY: f64 = 0.20;
/// Structure (templated sentences) weight
pub const WEIGHT_STRUCTURE: f64 = 0.10;
/// Hierarchy (over-segmented headings) weight
pub const WEIGHT_HIERARCHY: f64 = 0.10;
/// Expression (mechanical connectors) weight - HIGHEST
pub const WEIGHT_EXPRESSION: f64 = 0.50;
/// Originality (repetition) weight
pub const WEIGHT_ORIGINALITY: f64 = 0.10;

// =============================================================================
// LEVEL THRESHOLDS
// =============================================================================

/// total_score at or above this is 中 (medium)
pub const LEVEL_MEDIUM_THRESHOLD: f64 = 40.0;

/// total_score at or above this is 高 (high); the CLI exits 1 from here on
pub const LEVEL_HIGH_THRESHOLD: f64 = 60.0;

// =============================================================================
// PER-DIMENSION SCORING CONSTANTS
// =============================================================================

/// Points per templated sentence match
pub const STRUCTURE_POINTS_PER_MATCH: f64 = 12.0;

/// Points per mechanical connector match
pub const EXPRESSION_POINTS_PER_MATCH: f64 = 15.0;

/// Score forced by the 首先…其次…最后/总之 sequence
pub const EXPRESSION_OVERRIDE_SCORE: f64 = 100.0;

/// Default (inert) transition-word threshold
pub const DEFAULT_THRESHOLD: i64 = 5;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
