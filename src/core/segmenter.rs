//! Word segmentation strategy for the originality dimension
//!
//! Chosen once when a detector is built. With the `jieba` feature the
//! dictionary segmenter is available; without it originality falls back
//! to sentence overlap.

use std::fmt;
use std::sync::Arc;
use tracing::debug;
use crate::config::SegmenterMode;

/// Splits text into word-like tokens
pub trait Segmenter: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Tokens in text order
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// Originality strategy
#[derive(Clone)]
pub enum Segmentation {
    /// Token diversity over a dictionary segmenter
    Dictionary(Arc<dyn Segmenter>),
    /// Front/back sentence overlap, no segmenter needed
    SentenceOverlap,
}

impl Segmentation {
    /// Pick the strategy for `mode` from what this build provides
    pub fn select(mode: SegmenterMode) -> Self {
        let selected = match mode {
            SegmenterMode::Simple => Segmentation::SentenceOverlap,
            SegmenterMode::Auto | SegmenterMode::Dictionary => match dictionary_segmenter() {
                Some(seg) => Segmentation::Dictionary(seg),
                None => {
                    if mode == SegmenterMode::Dictionary {
                        debug!("dictionary segmenter not compiled in, using sentence overlap");
                    }
                    Segmentation::SentenceOverlap
                }
            },
        };
        debug!(mode = ?mode, strategy = selected.name(), "segmentation.selected");
        selected
    }

    pub fn name(&self) -> &'static str {
        match self {
            Segmentation::Dictionary(seg) => seg.name(),
            Segmentation::SentenceOverlap => "sentence-overlap",
        }
    }

    pub fn is_dictionary(&self) -> bool {
        matches!(self, Segmentation::Dictionary(_))
    }
}

impl Default for Segmentation {
    fn default() -> Self {
        Segmentation::select(SegmenterMode::Auto)
    }
}

impl fmt::Debug for Segmentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Segmentation({})", self.name())
    }
}

/// True when this build carries a dictionary segmenter
pub fn dictionary_available() -> bool {
    cfg!(feature = "jieba")
}

#[cfg(feature = "jieba")]
fn dictionary_segmenter() -> Option<Arc<dyn Segmenter>> {
    let segmenter: Arc<dyn Segmenter> = Arc::new(jieba::JiebaSegmenter);
    Some(segmenter)
}

#[cfg(not(feature = "jieba"))]
fn dictionary_segmenter() -> Option<Arc<dyn Segmenter>> {
    None
}

#[cfg(feature = "jieba")]
mod jieba {
    use jieba_rs::Jieba;
    use lazy_static::lazy_static;
    use super::Segmenter;

    lazy_static! {
        // Loading the default dictionary is expensive; do it once.
        static ref JIEBA: Jieba = Jieba::new();
    }

    /// jieba accurate mode with HMM for unknown words
    #[derive(Debug, Default)]
    pub struct JiebaSegmenter;

    impl Segmenter for JiebaSegmenter {
        fn name(&self) -> &'static str {
            "jieba"
        }

        fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
            JIEBA.cut(text, true)
        }
    }
}
