//! Originality dimension: repetition
//!
//! Tokenized mode measures lexical diversity over segmenter output.
//! Sentence-overlap mode compares the first and last sentences when no
//! segmenter is available.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use crate::core::segmenter::{Segmentation, Segmenter};
use crate::types::{DetectionResult, Dimension};

lazy_static! {
    static ref RE_WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Diversity at or above this is considered human-like
const DIVERSITY_PIVOT: f64 = 0.6;
/// Shortest token kept for diversity
const MIN_TOKEN_CHARS: usize = 2;
/// Repeated tokens listed as evidence
const MAX_LISTED_TOKENS: usize = 10;

/// Shorter (whitespace stripped) input is not scored
const MIN_CLEAN_CHARS: usize = 10;
/// Shorter sentences are ignored
const MIN_SENTENCE_CHARS: usize = 5;
/// Sentences sampled from each end
const SAMPLE_SENTENCES: usize = 3;
/// Score when nothing repeats, or nothing can be compared
const BASELINE_SCORE: f64 = 20.0;

const TOO_SHORT: &str = "content too short";

pub fn detect(segmentation: &Segmentation, text: &str) -> DetectionResult {
    match segmentation {
        Segmentation::Dictionary(seg) => detect_tokenized(seg.as_ref(), text),
        Segmentation::SentenceOverlap => detect_sentence_overlap(text),
    }
}

/// Score from lexical diversity
pub fn diversity_score(diversity: f64) -> f64 {
    let score = if diversity >= DIVERSITY_PIVOT {
        (1.0 - diversity) * 80.0
    } else {
        50.0 + (DIVERSITY_PIVOT - diversity) * 100.0
    };
    score.clamp(0.0, 100.0)
}

pub fn detect_tokenized(segmenter: &dyn Segmenter, text: &str) -> DetectionResult {
    let tokens: Vec<&str> = segmenter
        .segment(text)
        .into_iter()
        .map(str::trim)
        .filter(|t| t.chars().count() >= MIN_TOKEN_CHARS)
        .collect();

    if tokens.is_empty() {
        return DetectionResult::new(
            Dimension::Originality,
            0.0,
            format!("{}, cannot evaluate", TOO_SHORT),
            Vec::new(),
        );
    }

    // Counts in first-occurrence order
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for &token in &tokens {
        let count = counts.entry(token).or_insert(0);
        if *count == 0 {
            order.push(token);
        }
        *count += 1;
    }

    let total = tokens.len();
    let unique = order.len();
    let diversity = unique as f64 / total as f64;

    let items = order
        .iter()
        .filter(|t| counts[*t] >= 2)
        .take(MAX_LISTED_TOKENS)
        .map(|t| format!("{}x{}", t, counts[t]))
        .collect();

    DetectionResult::new(
        Dimension::Originality,
        diversity_score(diversity),
        format!("total tokens: {}, unique: {}, diversity: {:.2}", total, unique, diversity),
        items,
    )
}

pub fn detect_sentence_overlap(text: &str) -> DetectionResult {
    let clean = RE_WHITESPACE.replace_all(text, "");

    if clean.chars().count() < MIN_CLEAN_CHARS {
        return DetectionResult::new(
            Dimension::Originality,
            0.0,
            format!("{}, cannot evaluate", TOO_SHORT),
            Vec::new(),
        );
    }

    let sentences: Vec<&str> = clean
        .split(['。', '！', '？', '\n'])
        .filter(|s| s.chars().count() >= MIN_SENTENCE_CHARS)
        .collect();

    // Non-empty input with no usable sentence scores the baseline, not 0
    if sentences.is_empty() {
        return DetectionResult::new(Dimension::Originality, BASELINE_SCORE, TOO_SHORT, Vec::new());
    }

    let sample = SAMPLE_SENTENCES.min(sentences.len() / 2);
    let score = if sample > 0 {
        let front: HashSet<&str> = sentences[..sample].iter().copied().collect();
        let back: HashSet<&str> = sentences[sentences.len() - sample..].iter().copied().collect();
        let overlap = front.intersection(&back).count();
        if overlap > 0 {
            (overlap as f64 * 30.0).min(80.0)
        } else {
            BASELINE_SCORE
        }
    } else {
        BASELINE_SCORE
    };

    DetectionResult::new(
        Dimension::Originality,
        score,
        format!("sentences: {}", sentences.len()),
        Vec::new(),
    )
}
