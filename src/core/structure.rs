//! Structure dimension: templated sentence frames

use crate::core::patterns::{count_matches, PatternTables};
use crate::types::{DetectionResult, Dimension};
use crate::STRUCTURE_POINTS_PER_MATCH;

pub fn detect(tables: &PatternTables, text: &str) -> DetectionResult {
    let found: Vec<(&str, usize)> = tables
        .sentence_patterns
        .iter()
        .map(|p| (p.label.as_str(), count_matches(&p.regex, text)))
        .filter(|(_, count)| *count > 0)
        .collect();

    let total: usize = found.iter().map(|(_, count)| count).sum();
    let score = (total as f64 * STRUCTURE_POINTS_PER_MATCH).min(100.0);

    DetectionResult::new(
        Dimension::Structure,
        score,
        format!("found {} templated sentences", total),
        found.iter().map(|(label, count)| format!("{}x{}", label, count)).collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(text: &str) -> DetectionResult {
        detect(&PatternTables::builtin(), text)
    }

    #[test]
    fn test_no_templates() {
        let result = run("今天是个好日子。我们去公园玩。");
        assert_eq!(result.score, 0.0);
        assert!(result.items.is_empty());
    }

    #[test]
    fn test_single_template() {
        let result = run("这个项目的优势在于创新性强。");
        assert_eq!(result.score, 12.0);
        assert_eq!(result.items, vec!["xxx的优势在于x1"]);
    }

    #[test]
    fn test_several_templates_accumulate() {
        let text = "人工智能的优势在于效率高、成本低。\n\
                    为了实现目标，我们需要制定详细的计划。\n\
                    通过学习新技术，可以提升竞争力。\n\
                    数据分析的重要性在于决策支持。\n\
                    团队协作的特点是资源共享。";
        let result = run(text);
        assert_eq!(result.score, 48.0);
        assert!(result.details.contains('4'));
    }

    #[test]
    fn test_score_capped_at_100() {
        let text = "学习可以。工作可以。休息可以。写作可以。阅读可以。\
                    跑步可以。唱歌可以。画画可以。做饭可以。";
        let result = run(text);
        assert_eq!(result.score, 100.0);
    }
}
