//! Human-readable report rendering

use colored::Colorize;
use crate::types::{AIDetectionReport, Dimension};

const RULE_WIDTH: usize = 50;
/// Items shown per dimension in verbose mode
const MAX_SHOWN_ITEMS: usize = 5;

/// How to render a report
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Include per-dimension details and evidence
    pub verbose: bool,
    /// Color the level line and scores
    pub color: bool,
}

impl FormatOptions {
    pub fn plain(verbose: bool) -> Self {
        Self { verbose, color: false }
    }
}

/// Render a report as text
pub fn format_report(report: &AIDetectionReport, options: FormatOptions) -> String {
    let level = report.level();
    let rule = "=".repeat(RULE_WIDTH);
    let mut lines = Vec::new();

    lines.push(rule.clone());
    lines.push(if options.color { "AI味检测报告".bold().to_string() } else { "AI味检测报告".to_string() });
    lines.push(rule.clone());

    let summary = format!("总体AI味: {:.1}/100 ({}AI味)", report.total_score, level.label());
    lines.push(if options.color { level.paint(&summary).to_string() } else { summary });
    lines.push(String::new());

    lines.push("各维度得分:".to_string());
    for d in Dimension::ALL {
        lines.push(format!(
            "  {}: {:.1}/100 (权重{})",
            d.label(),
            report.score_of(d),
            d.display_weight()
        ));
    }

    if options.verbose {
        lines.push(String::new());
        lines.push("详细检测结果:".to_string());
        for result in &report.results {
            lines.push(String::new());
            lines.push(format!("[{}] 得分: {:.1}", result.dimension, result.score));
            lines.push(format!("  说明: {}", result.details));
            if !result.items.is_empty() {
                let mut items = result.items.iter().take(MAX_SHOWN_ITEMS).cloned().collect::<Vec<_>>().join(", ");
                if result.items.len() > MAX_SHOWN_ITEMS {
                    items.push_str(&format!(" ... (+{}项)", result.items.len() - MAX_SHOWN_ITEMS));
                }
                lines.push(format!("  项目: {}", items));
            }
        }
    }

    lines.push(rule);
    lines.join("\n")
}

impl AIDetectionReport {
    /// Plain text, no colors
    pub fn to_parseable_string(&self, verbose: bool) -> String {
        format_report(self, FormatOptions::plain(verbose))
    }

    /// Colored text for terminals
    pub fn to_terminal_string(&self, verbose: bool) -> String {
        format_report(self, FormatOptions { verbose, color: true })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DetectionResult;

    fn report_with(items: usize, expression: f64) -> AIDetectionReport {
        let results = Dimension::ALL.map(|d| {
            let score = if d == Dimension::Expression { expression } else { 0.0 };
            let items = (1..=items).map(|i| format!("item{}", i)).collect();
            DetectionResult::new(d, score, "why", items)
        });
        AIDetectionReport::from_results(results)
    }

    #[test]
    fn test_summary_line_and_level() {
        let text = format_report(&report_with(0, 100.0), FormatOptions::plain(false));
        assert!(text.contains("总体AI味: 50.0/100 (中AI味)"), "{}", text);
        assert!(text.contains("  表达AI化: 100.0/100 (权重50%)"));
        assert!(!text.contains("详细检测结果"));
    }

    #[test]
    fn test_low_level() {
        let text = format_report(&report_with(0, 0.0), FormatOptions::plain(false));
        assert!(text.contains("(低AI味)"));
    }

    #[test]
    fn test_verbose_truncates_items() {
        let text = format_report(&report_with(7, 0.0), FormatOptions::plain(true));
        assert!(text.contains("详细检测结果:"));
        assert!(text.contains("  项目: item1, item2, item3, item4, item5 ... (+2项)"));
        assert!(!text.contains("item6"));
    }

    #[test]
    fn test_verbose_without_items() {
        let text = format_report(&report_with(0, 0.0), FormatOptions::plain(true));
        assert!(text.contains("  说明: why"));
        assert!(!text.contains("项目:"));
    }

    #[test]
    fn test_plain_has_no_ansi() {
        let text = report_with(3, 100.0).to_parseable_string(true);
        assert!(!text.contains('\x1b'));
        assert!(text.starts_with(&"=".repeat(RULE_WIDTH)));
    }
}
