//! Expression dimension: mechanical connectors
//!
//! The 首先…其次…最后/总之 sequence anywhere in the text forces the maximum
//! score. Otherwise connector matches accumulate.

use crate::core::patterns::{count_matches, PatternTables};
use crate::types::{DetectionResult, Dimension};
use crate::{EXPRESSION_OVERRIDE_SCORE, EXPRESSION_POINTS_PER_MATCH};

pub fn detect(tables: &PatternTables, text: &str) -> DetectionResult {
    let counts: Vec<usize> = tables
        .mechanical_connectors
        .iter()
        .map(|re| count_matches(re, text))
        .collect();
    let matched_patterns = counts.iter().filter(|c| **c > 0).count();
    let total: usize = counts.iter().sum();

    if tables.connector_sequence.is_match(text) {
        let items = std::iter::once("连续过渡词序列x1（满分）".to_string())
            .chain((1..=total).map(|n| format!("机械连接{}", n)))
            .collect();
        return DetectionResult::new(
            Dimension::Expression,
            EXPRESSION_OVERRIDE_SCORE,
            format!(
                "connector sequence 首先+其次+最后/总之 found, score forced to maximum ({} mechanical matches)",
                total
            ),
            items,
        );
    }

    let score = (total as f64 * EXPRESSION_POINTS_PER_MATCH).min(100.0);
    DetectionResult::new(
        Dimension::Expression,
        score,
        format!("found {} mechanical connectors", total),
        (1..=matched_patterns).map(|n| format!("模式{}", n)).collect(),
    )
}
