//! Pattern tables: transition words, sentence templates, connectors, titles
//!
//! Compiled once per process and shared read-only between detectors.

use lazy_static::lazy_static;
use regex::Regex;
use std::sync::Arc;
use crate::error::DetectError;

// =============================================================================
// Transition / filler words (vocabulary)
// =============================================================================

pub const TRANSITION_WORDS: &[&str] = &[
    "首先", "其次", "最后", "总之",
    "需要注意的是", "值得注意的是",
    "总的来说", "整体来看",
    "除此之外", "另外", "同时",
    "一方面", "另一方面", "总的来看",
    "由此可见", "总之可见",
    // conclusions
    "综上所述", "总而言之", "综上",
    // emphasis
    "需要指出的是", "必须说明的是", "必须指出的是",
];

// =============================================================================
// Templated sentence frames (structure): (regex, label)
// =============================================================================

pub const SENTENCE_PATTERNS: &[(&str, &str)] = &[
    (r"[\x{4e00}-\x{9fa5}]+的优势在于", "xxx的优势在于"),
    (r"为了[\x{4e00}-\x{9fa5}]+，我们需要", "为了xxx，我们需要"),
    (r"通过[\x{4e00}-\x{9fa5}]+，可以实现", "通过xxx，可以实现"),
    (r"[\x{4e00}-\x{9fa5}]+的重要性", "xxx的重要性"),
    (r"[\x{4e00}-\x{9fa5}]+的特点是", "xxx的特点是"),
    (r"[\x{4e00}-\x{9fa5}]+的关键是", "xxx的关键是"),
    (r"[\x{4e00}-\x{9fa5}]+能够", "xxx能够"),
    (r"[\x{4e00}-\x{9fa5}]+可以", "xxx可以"),
];

// =============================================================================
// Mechanical connectors (expression), dot matches newline
// =============================================================================

pub const CONNECTOR_SEQUENCE: &str = r"(?s)首先.*?其次.*?(?:最后|总之)";

pub const MECHANICAL_CONNECTORS: &[&str] = &[
    r"(?s)首先[\s，,]+.*?然后[\s，,]+.*?最后",
    r"(?s)第一[\s，,]+.*?第二[\s，,]+.*?第三",
    r"(?s)第一[\s，,]+.*?第二[\s，,]+.*?第三[\s，,]+.*?第四",
    r"(?s)一是[\s，,]+.*?二是[\s，,]+.*?三是",
    r"(?s)一方面[\s，,]+.*?另一方面",
    r"(?s)第一[\x{4e00}-\x{9fa5}]{1,20}[，,\s]{0,3}第二[\x{4e00}-\x{9fa5}]{1,20}[，,\s]{0,3}第三[\x{4e00}-\x{9fa5}]{1,20}",
    CONNECTOR_SEQUENCE,
];

// =============================================================================
// Heading lines (hierarchy), matched against a trimmed line
// =============================================================================

pub const TITLE_PATTERNS: &[&str] = &[
    // markdown
    r"^#{1,6}\s+",
    // 第X章 一 / 标题 二
    r"^[\x{4e00}-\x{9fa5}]{1,10}[\x{3000}\s]{1,5}[一二三四五六七八九十]+[\x{3000}\s]?",
    // 标题、 / 标题.
    r"^[\x{4e00}-\x{9fa5}]{1,10}[\.、]\s*",
];

lazy_static! {
    static ref BUILTIN_TABLES: Arc<PatternTables> = Arc::new(
        PatternTables::compile(&PatternSource::builtin()).unwrap()
    );
}

/// Uncompiled pattern tables
#[derive(Debug, Clone)]
pub struct PatternSource<'a> {
    pub transition_words: &'a [&'a str],
    pub sentence_patterns: &'a [(&'a str, &'a str)],
    pub connector_sequence: &'a str,
    pub mechanical_connectors: &'a [&'a str],
    pub title_patterns: &'a [&'a str],
}

impl PatternSource<'static> {
    pub fn builtin() -> Self {
        Self {
            transition_words: TRANSITION_WORDS,
            sentence_patterns: SENTENCE_PATTERNS,
            connector_sequence: CONNECTOR_SEQUENCE,
            mechanical_connectors: MECHANICAL_CONNECTORS,
            title_patterns: TITLE_PATTERNS,
        }
    }
}

/// A templated sentence frame with its display label
#[derive(Debug, Clone)]
pub struct SentencePattern {
    pub regex: Regex,
    pub label: String,
}

/// Compiled, immutable pattern tables
#[derive(Debug, Clone)]
pub struct PatternTables {
    pub transition_words: Vec<String>,
    pub sentence_patterns: Vec<SentencePattern>,
    /// 首先…其次…最后/总之 override
    pub connector_sequence: Regex,
    pub mechanical_connectors: Vec<Regex>,
    pub title_patterns: Vec<Regex>,
}

impl PatternTables {
    /// Shared built-in tables
    pub fn builtin() -> Arc<PatternTables> {
        Arc::clone(&BUILTIN_TABLES)
    }

    /// Compile a set of tables, reporting the first invalid regex
    pub fn compile(source: &PatternSource<'_>) -> Result<Self, DetectError> {
        let sentence_patterns = source
            .sentence_patterns
            .iter()
            .map(|(pattern, label)| {
                Ok(SentencePattern {
                    regex: compile_one(pattern)?,
                    label: (*label).to_string(),
                })
            })
            .collect::<Result<Vec<_>, DetectError>>()?;

        Ok(Self {
            transition_words: source.transition_words.iter().map(|w| (*w).to_string()).collect(),
            sentence_patterns,
            connector_sequence: compile_one(source.connector_sequence)?,
            mechanical_connectors: compile_all(source.mechanical_connectors)?,
            title_patterns: compile_all(source.title_patterns)?,
        })
    }

    /// True if the trimmed line is a heading
    pub fn is_title(&self, trimmed_line: &str) -> bool {
        self.title_patterns.iter().any(|re| re.is_match(trimmed_line))
    }
}

fn compile_one(pattern: &str) -> Result<Regex, DetectError> {
    Regex::new(pattern).map_err(|source| DetectError::Pattern {
        pattern: pattern.to_string(),
        source,
    })
}

fn compile_all(patterns: &[&str]) -> Result<Vec<Regex>, DetectError> {
    patterns.iter().map(|p| compile_one(p)).collect()
}

/// Count regex matches in text
pub(crate) fn count_matches(regex: &Regex, text: &str) -> usize {
    regex.find_iter(text).count()
}
