//! Integration tests for the detector
//!
//! Tests the full path: text → five dimensions → weighted report

use std::sync::Arc;
use aiflavor::core::{PatternSource, PatternTables, Segmentation, Segmenter};
use aiflavor::{
    AiDetector, DetectorConfig, Dimension, FlavorLevel, SegmenterMode,
    WEIGHT_EXPRESSION, WEIGHT_HIERARCHY, WEIGHT_ORIGINALITY, WEIGHT_STRUCTURE, WEIGHT_VOCABULARY,
};

const SCENARIO_A: &str = "首先，我们要明确目标。其次，需要制定详细的计划。最后，进行总结。";

const HUMAN_TEXT: &str = "
    今天天气真好，阳光明媚。我和家人一起去公园野餐。
    孩子们在草地上奔跑玩耍，笑声回荡在空气中。
    我们带来了美味的三明治和水果，大家吃得很开心。
    这是一个美好的周末，我感到幸福满足。
";

fn simple_detector() -> AiDetector {
    AiDetector::from_config(&DetectorConfig::default().with_segmenter(SegmenterMode::Simple))
}

fn weighted_sum(report: &aiflavor::AIDetectionReport) -> f64 {
    report.vocabulary_score * WEIGHT_VOCABULARY
        + report.structure_score * WEIGHT_STRUCTURE
        + report.hierarchy_score * WEIGHT_HIERARCHY
        + report.expression_score * WEIGHT_EXPRESSION
        + report.originality_score * WEIGHT_ORIGINALITY
}

// =============================================================================
// SCENARIO A: transition-word sequence (high)
// =============================================================================

#[test]
fn test_scenario_a_sequence_dominates() {
    let detector = AiDetector::default();
    let report = detector.detect(SCENARIO_A);

    assert_eq!(report.vocabulary_score, 60.0);
    assert_eq!(report.expression_score, 100.0);
    assert!(report.total_score >= 55.0, "total {}", report.total_score);
    assert!((report.total_score - weighted_sum(&report)).abs() < 1e-5);
}

#[test]
fn test_scenario_a_exact_in_sentence_mode() {
    let report = simple_detector().detect(SCENARIO_A);
    // 60×0.2 + 0 + 0 + 100×0.5 + 20×0.1
    assert!((report.total_score - 64.0).abs() < 1e-9, "total {}", report.total_score);
    assert_eq!(report.level(), FlavorLevel::High);
    assert!(report.is_high());
}

// =============================================================================
// SCENARIO B: human narrative (low)
// =============================================================================

#[test]
fn test_scenario_b_human_text_low() {
    let report = AiDetector::default().detect(HUMAN_TEXT);
    assert_eq!(report.vocabulary_score, 0.0);
    assert_eq!(report.structure_score, 0.0);
    assert_eq!(report.hierarchy_score, 0.0);
    assert_eq!(report.expression_score, 0.0);
    assert!(report.total_score < 40.0, "total {}", report.total_score);
    assert_eq!(report.level(), FlavorLevel::Low);
    assert!(!report.is_high());
}

// =============================================================================
// SCENARIO C: too short, no segmenter
// =============================================================================

#[test]
fn test_scenario_c_short_text_without_segmenter() {
    let report = simple_detector().detect("短文本 测试");
    let originality = report.result_of(Dimension::Originality).unwrap();
    assert_eq!(originality.score, 0.0);
    assert!(originality.details.contains("too short"), "{}", originality.details);
}

// =============================================================================
// Degenerate input
// =============================================================================

#[test]
fn test_empty_and_whitespace_input() {
    let detector = AiDetector::default();
    for text in ["", "   \n\t  ", "\n\n\n"] {
        let report = detector.detect(text);
        assert!(report.total_score >= 0.0);
        assert_eq!(report.results.len(), 5);
    }
}

#[test]
fn test_scores_within_range_for_mixed_text() {
    let text = "
        首先，我们要明确目标。
        其次，需要制定详细的计划。
        第三，要分配足够的资源。
        除此之外，还要考虑风险因素。
        总之，这些都是关键要点。

        人工智能的优势在于效率高。
        为了实现目标，我们需要不断努力。
        通过持续改进，可以提升质量。

        首先收集数据，然后进行分析，最后得出结论。
        第一明确目标，第二制定计划，第三执行任务。
    ";
    let report = AiDetector::default().detect(text);
    for d in Dimension::ALL {
        let score = report.score_of(d);
        assert!((0.0..=100.0).contains(&score), "{} = {}", d, score);
    }
    assert_eq!(report.expression_score, 100.0);
    assert_eq!(report.vocabulary_score, 20.0);
    assert!(report.total_score > 10.0);
}

// =============================================================================
// Dimension contracts through the detector
// =============================================================================

#[test]
fn test_vocabulary_tiers() {
    let detector = simple_detector();
    assert_eq!(detector.detect_vocabulary("首先做这个，另外做那个。").score, 80.0);
    assert_eq!(detector.detect_vocabulary("首先，其次，最后").score, 60.0);
    assert_eq!(detector.detect_vocabulary("首先，其次，最后，另外").score, 40.0);
    assert_eq!(detector.detect_vocabulary("首先，其次，最后，另外，同时").score, 20.0);
}

#[test]
fn test_expression_override_ignores_other_signals() {
    let detector = simple_detector();
    let text = "第一，明确目标。第二，制定计划。第三，执行任务。\n首先看数据，其次看趋势，总之要谨慎。";
    let result = detector.detect_expression(text);
    assert_eq!(result.score, 100.0);
}

#[test]
fn test_structure_linear_accumulation() {
    let detector = simple_detector();
    assert_eq!(detector.detect_structure("今天是个好日子。").score, 0.0);
    assert_eq!(detector.detect_structure("团队协作的特点是资源共享。").score, 12.0);
    assert_eq!(
        detector.detect_structure("团队协作的特点是资源共享。项目成功的关键是沟通。").score,
        24.0
    );
}

#[test]
fn test_determinism() {
    let detector = AiDetector::default();
    let r1 = detector.detect(SCENARIO_A);
    let r2 = detector.detect(SCENARIO_A);
    assert_eq!(r1, r2);
}

#[test]
fn test_detect_score_matches_report() {
    let total = aiflavor::detect_score(HUMAN_TEXT);
    let report = AiDetector::default().detect(HUMAN_TEXT);
    assert!((total - report.total_score).abs() < 1e-12);
}

// =============================================================================
// Injected tables and segmenters
// =============================================================================

#[test]
fn test_custom_tables_are_isolated() {
    let custom = PatternTables::compile(&PatternSource {
        transition_words: &["其实"],
        ..PatternSource::builtin()
    })
    .unwrap();
    let custom = AiDetector::with_parts(5, Arc::new(custom), Segmentation::SentenceOverlap);
    let builtin = simple_detector();

    let text = "其实，首先我们应该想一想。";
    assert_eq!(custom.detect_vocabulary(text).items, vec!["其实x1"]);
    assert_eq!(builtin.detect_vocabulary(text).items, vec!["首先x1"]);
}

/// Splits on whitespace only
struct WhitespaceSegmenter;

impl Segmenter for WhitespaceSegmenter {
    fn name(&self) -> &'static str {
        "whitespace"
    }

    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split_whitespace().collect()
    }
}

#[test]
fn test_tokenized_mode_with_injected_segmenter() {
    let detector = AiDetector::with_parts(
        5,
        PatternTables::builtin(),
        Segmentation::Dictionary(Arc::new(WhitespaceSegmenter)),
    );
    assert!(detector.segmentation().is_dictionary());

    let repetitive = detector.detect_originality("重要 重要 重要 重要 需要");
    // diversity 0.4 → 50 + 20
    assert!((repetitive.score - 70.0).abs() < 1e-9, "got {}", repetitive.score);
    assert_eq!(repetitive.items, vec!["重要x4"]);

    let empty = detector.detect_originality("短 的 了");
    assert_eq!(empty.score, 0.0);
    assert!(empty.details.contains("too short"));
}

#[test]
fn test_threshold_does_not_change_scores() {
    let low = AiDetector::new(1).detect(SCENARIO_A);
    let high = AiDetector::new(100).detect(SCENARIO_A);
    assert_eq!(low, high);
}
