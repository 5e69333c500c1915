//! Qualitative AI-flavor level

use colored::{ColoredString, Colorize};
use serde::{Deserialize, Serialize};
use crate::{LEVEL_HIGH_THRESHOLD, LEVEL_MEDIUM_THRESHOLD};

/// Bucket of a total score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlavorLevel {
    /// total < 40
    Low,
    /// 40 <= total < 60
    Medium,
    /// total >= 60
    High,
}

impl FlavorLevel {
    pub fn from_score(total_score: f64) -> Self {
        if total_score >= LEVEL_HIGH_THRESHOLD {
            FlavorLevel::High
        } else if total_score >= LEVEL_MEDIUM_THRESHOLD {
            FlavorLevel::Medium
        } else {
            FlavorLevel::Low
        }
    }

    /// 低 / 中 / 高
    pub fn label(&self) -> &'static str {
        match self {
            FlavorLevel::Low => "低",
            FlavorLevel::Medium => "中",
            FlavorLevel::High => "高",
        }
    }

    /// Paint `text` in the level's color
    pub fn paint(&self, text: &str) -> ColoredString {
        match self {
            FlavorLevel::Low => text.green(),
            FlavorLevel::Medium => text.yellow(),
            FlavorLevel::High => text.red().bold(),
        }
    }
}

impl std::fmt::Display for FlavorLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
