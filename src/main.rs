//! aiflavor CLI
//!
//! Usage:
//!   aiflavor --text "待检测文本"                 # Score a string
//!   aiflavor --file article.md --verbose         # Score a file, with details
//!   aiflavor --file article.md --json            # JSON output
//!   aiflavor --demo                              # Built-in sample texts
//!
//! Exit code is 0 when the total score is below 60, 1 otherwise (or on error).

use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use aiflavor::{AIDetectionReport, AiDetector, DetectError, DetectorConfig, SegmenterMode, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "aiflavor",
    version = VERSION,
    about = "AI味检测 - Estimate how AI-generated a piece of Chinese prose sounds",
    long_about = "Scores text on five dimensions and combines them into a 0-100 total.\n\n\
                  Dimensions (weight):\n  \
                  词汇AI化   (20%) transition / filler words\n  \
                  句式AI化   (10%) templated sentence frames\n  \
                  结构AI化   (10%) over-segmented headings\n  \
                  表达AI化   (50%) mechanical connectors\n  \
                  内容原创度 (10%) repetition\n\n\
                  Levels: 低 < 40 <= 中 < 60 <= 高\n\
                  Exit code 1 when the total is 60 or higher."
)]
struct Args {
    /// Text to evaluate
    #[arg(short, long)]
    text: Option<String>,

    /// File to evaluate (UTF-8); takes precedence over --text
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Show per-dimension details
    #[arg(short, long)]
    verbose: bool,

    /// Output as JSON
    #[arg(short, long)]
    json: bool,

    /// Transition-word threshold (accepted for compatibility, does not change scores)
    #[arg(long)]
    threshold: Option<i64>,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Force sentence-overlap originality even when a segmenter is available
    #[arg(long)]
    simple: bool,

    /// Run the built-in sample texts
    #[arg(long)]
    demo: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Default log directive when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

/// Built-in samples for --demo
const DEMO_CASES: &[(&str, &str)] = &[
    (
        "高AI味文本",
        "首先，我们要明确项目目标。其次，需要制定详细的计划。\n\
         第三，要分配足够的资源。除此之外，还要考虑潜在的风险。\n\n\
         # 第一章\n\n# 第二章\n\n# 第三章\n\n\
         人工智能的优势在于效率高、成本低。为了实现目标，我们需要不断努力。\n\
         通过持续改进，可以提升产品质量。数据分析的重要性在于支持决策。\n\n\
         首先收集数据，然后进行分析，最后得出结论。\n\
         第一明确目标，第二制定计划，第三执行任务。\n\
         第四总结经验，第五持续改进。\n\n\
         总体来说，这些都是关键因素。整体来看，任务很重要。",
    ),
    (
        "低AI味文本（人类写作）",
        "今天天气真好，阳光明媚。我和家人一起去公园野餐。\n\
         孩子们在草地上奔跑玩耍，笑声回荡在空气中。\n\
         我们带来了美味的三明治和新鲜的水果，大家吃得很开心。\n\
         野餐垫铺在草坪上，我们一边享受美食，一边欣赏周围的风景。\n\
         这是一个美好的周末，我感到幸福满足。",
    ),
];

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args.log_level);

    if args.no_color {
        colored::control::set_override(false);
    }

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("错误: {}", e);
            return ExitCode::from(1);
        }
    };
    let detector = AiDetector::from_config(&config);
    info!(
        threshold = detector.threshold(),
        segmentation = detector.segmentation().name(),
        "detector.ready"
    );

    if args.demo {
        run_demo(&detector, &args);
        return ExitCode::SUCCESS;
    }

    let report = if let Some(ref path) = args.file {
        match detector.detect_file(path) {
            Ok(report) => report,
            Err(e) => {
                eprintln!("错误: {}", e);
                return ExitCode::from(1);
            }
        }
    } else if let Some(ref text) = args.text {
        detector.detect(text)
    } else {
        let _ = Args::command().print_help();
        return ExitCode::from(1);
    };

    if let Err(e) = print_report(&report, &args) {
        eprintln!("错误: {}", e);
        return ExitCode::from(1);
    }

    debug!(total = report.total_score, high = report.is_high(), "exit");
    if report.is_high() {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}

/// Logs go to stderr; stdout carries the report
fn init_logging(default_directive: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(layer)
        .init();
}

/// Config file first, then explicit flags
fn build_config(args: &Args) -> Result<DetectorConfig, DetectError> {
    let mut config = match args.config {
        Some(ref path) => DetectorConfig::load(path)?,
        None => DetectorConfig::default(),
    };
    if let Some(threshold) = args.threshold {
        config = config.with_threshold(threshold);
    }
    if args.simple {
        config = config.with_segmenter(SegmenterMode::Simple);
    }
    Ok(config)
}

fn print_report(report: &AIDetectionReport, args: &Args) -> Result<(), serde_json::Error> {
    if args.json {
        println!("{}", report.to_json_pretty()?);
    } else if args.no_color {
        println!("{}", report.to_parseable_string(args.verbose));
    } else {
        println!("{}", report.to_terminal_string(args.verbose));
    }
    Ok(())
}

fn run_demo(detector: &AiDetector, args: &Args) {
    for (name, text) in DEMO_CASES {
        let report = detector.detect(text);
        println!();
        println!("{}", "=".repeat(50));
        println!("测试: {}", name);
        println!("{}", "=".repeat(50));

        if args.json {
            match report.to_json_pretty() {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("错误: {}", e),
            }
        } else if args.no_color {
            println!("{}", report.to_parseable_string(args.verbose));
        } else {
            println!("{}", report.to_terminal_string(args.verbose));
        }
    }
}
