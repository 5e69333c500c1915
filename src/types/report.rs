//! Aggregate report and its serialized form

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::types::{DetectionResult, Dimension, FlavorLevel};
use crate::LEVEL_HIGH_THRESHOLD;

/// Result of a full detection run
#[derive(Debug, Clone, PartialEq)]
pub struct AIDetectionReport {
    /// Weighted sum of the five dimension scores
    pub total_score: f64,
    pub vocabulary_score: f64,
    pub structure_score: f64,
    pub hierarchy_score: f64,
    pub expression_score: f64,
    pub originality_score: f64,
    /// Order: vocabulary, structure, hierarchy, expression, originality
    pub results: Vec<DetectionResult>,
}

impl AIDetectionReport {
    /// Aggregate five results given in `Dimension::ALL` order
    pub fn from_results(results: [DetectionResult; 5]) -> Self {
        let scores: [f64; 5] = std::array::from_fn(|i| results[i].score);
        let total_score: f64 = Dimension::ALL
            .iter()
            .zip(scores.iter())
            .map(|(d, s)| s * d.weight())
            .sum();

        Self {
            total_score,
            vocabulary_score: scores[0],
            structure_score: scores[1],
            hierarchy_score: scores[2],
            expression_score: scores[3],
            originality_score: scores[4],
            results: results.into(),
        }
    }

    /// Score of a single dimension
    pub fn score_of(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Vocabulary => self.vocabulary_score,
            Dimension::Structure => self.structure_score,
            Dimension::Hierarchy => self.hierarchy_score,
            Dimension::Expression => self.expression_score,
            Dimension::Originality => self.originality_score,
        }
    }

    /// Result of a single dimension
    pub fn result_of(&self, dimension: Dimension) -> Option<&DetectionResult> {
        self.results.iter().find(|r| r.dimension == dimension.label())
    }

    pub fn level(&self) -> FlavorLevel {
        FlavorLevel::from_score(self.total_score)
    }

    /// True when the CLI should signal failure
    pub fn is_high(&self) -> bool {
        self.total_score >= LEVEL_HIGH_THRESHOLD
    }

    /// Build the serialized form; every float is rounded to 2 decimals
    pub fn to_serialized(&self) -> SerializedReport {
        let mut scores = Map::new();
        let mut weights = Map::new();
        for d in Dimension::ALL {
            scores.insert(d.label().to_string(), Value::from(round2(self.score_of(d))));
            weights.insert(d.label().to_string(), Value::from(d.display_weight()));
        }

        SerializedReport {
            total_score: round2(self.total_score),
            scores,
            weights,
            details: self
                .results
                .iter()
                .map(|r| DetectionResult {
                    dimension: r.dimension.clone(),
                    score: round2(r.score),
                    details: r.details.clone(),
                    items: r.items.clone(),
                })
                .collect(),
        }
    }

    /// Pretty JSON of `to_serialized`
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.to_serialized())
    }
}

/// Machine-readable report
///
/// `weights` is informational. Aggregation always uses `Dimension::weight`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedReport {
    pub total_score: f64,
    /// label -> score, in dimension order
    pub scores: Map<String, Value>,
    /// label -> "<n>%"
    pub weights: Map<String, Value>,
    pub details: Vec<DetectionResult>,
}

/// Round to 2 decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
