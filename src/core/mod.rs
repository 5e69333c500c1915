//! Core modules for aiflavor

pub mod patterns;
pub mod segmenter;
pub mod vocabulary;
pub mod structure;
pub mod hierarchy;
pub mod expression;
pub mod originality;
pub mod detector;
pub mod format;

pub use patterns::{PatternSource, PatternTables, SentencePattern};
pub use segmenter::{dictionary_available, Segmentation, Segmenter};
pub use detector::{detect_score, AiDetector};
pub use format::{format_report, FormatOptions};
