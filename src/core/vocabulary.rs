//! Vocabulary dimension: transition / filler word frequency
//!
//! The tier curve is non-monotonic: a moderate count (2-3) scores highest,
//! both sparse and saturated use score lower.

use crate::core::patterns::PatternTables;
use crate::types::{DetectionResult, Dimension};

/// Score a total transition-word count
pub fn tier_score(total_count: usize) -> f64 {
    match total_count {
        0 | 1 => total_count as f64 * 30.0,
        2 => 80.0,
        3 => 60.0,
        4 => 40.0,
        _ => 20.0,
    }
}

pub fn detect(tables: &PatternTables, text: &str) -> DetectionResult {
    let found: Vec<(&str, usize)> = tables
        .transition_words
        .iter()
        .map(|word| (word.as_str(), text.matches(word.as_str()).count()))
        .filter(|(_, count)| *count > 0)
        .collect();

    let total_count: usize = found.iter().map(|(_, count)| count).sum();

    DetectionResult::new(
        Dimension::Vocabulary,
        tier_score(total_count),
        format!("found {} transition words", total_count),
        found.iter().map(|(word, count)| format!("{}x{}", word, count)).collect(),
    )
}
