//! Hierarchy dimension: over-segmented headings
//!
//! Two signals: runs of headings with little or nothing between them, and
//! headings followed by at most one line of content.

use crate::core::patterns::PatternTables;
use crate::types::{DetectionResult, Dimension};

/// Titles further apart than this break a run
const MAX_RUN_GAP: usize = 2;
/// Titles with at most this many non-blank content lines count as short
const SHORT_CONTENT_LINES: usize = 1;
/// Evidence list cap
const MAX_LISTED_TITLES: usize = 10;
/// Titles longer than this are truncated in evidence
const TITLE_DISPLAY_CHARS: usize = 30;

/// A heading line and its position
#[derive(Debug, Clone, PartialEq)]
pub struct Title<'a> {
    pub line: usize,
    pub text: &'a str,
}

/// Find heading lines. Line numbers index `text.split('\n')`.
pub fn find_titles<'a>(tables: &PatternTables, lines: &[&'a str]) -> Vec<Title<'a>> {
    lines
        .iter()
        .enumerate()
        .filter_map(|(line, &raw)| {
            let text = raw.trim();
            tables.is_title(text).then_some(Title { line, text })
        })
        .collect()
}

/// Longest run of titles whose line numbers are at most `MAX_RUN_GAP` apart
pub fn max_continuous(titles: &[Title<'_>]) -> usize {
    let mut current = 1;
    let mut longest = 1;
    for pair in titles.windows(2) {
        if pair[1].line - pair[0].line <= MAX_RUN_GAP {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 1;
        }
    }
    longest
}

/// Titles followed by at most one non-blank line before the next title
pub fn short_content_count(titles: &[Title<'_>], lines: &[&str]) -> usize {
    titles
        .iter()
        .enumerate()
        .filter(|(i, title)| {
            let next = titles.get(i + 1).map_or(lines.len(), |t| t.line);
            let non_blank = lines[title.line + 1..next]
                .iter()
                .filter(|l| !l.trim().is_empty())
                .count();
            non_blank <= SHORT_CONTENT_LINES
        })
        .count()
}

pub fn detect(tables: &PatternTables, text: &str) -> DetectionResult {
    let lines: Vec<&str> = text.split('\n').collect();
    let titles = find_titles(tables, &lines);

    let max_continuous = max_continuous(&titles);
    let short_count = short_content_count(&titles, &lines);

    let run_penalty = max_continuous.saturating_sub(2) * 20;
    let score = ((run_penalty + short_count * 10) as f64).min(100.0);

    let items = titles
        .iter()
        .take(MAX_LISTED_TITLES)
        .map(|t| {
            if t.text.chars().count() > TITLE_DISPLAY_CHARS {
                let head: String = t.text.chars().take(TITLE_DISPLAY_CHARS).collect();
                format!("标题行: {}...", head)
            } else {
                t.text.to_string()
            }
        })
        .collect();

    DetectionResult::new(
        Dimension::Hierarchy,
        score,
        format!(
            "continuous titles: {}, short-content titles: {}",
            max_continuous, short_count
        ),
        items,
    )
}
