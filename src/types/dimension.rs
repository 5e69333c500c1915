//! The five scoring dimensions

use serde::{Deserialize, Serialize};
use crate::{
    WEIGHT_VOCABULARY, WEIGHT_STRUCTURE, WEIGHT_HIERARCHY,
    WEIGHT_EXPRESSION, WEIGHT_ORIGINALITY,
};

/// One independent scoring axis of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// Transition / filler words (词汇AI化)
    Vocabulary,
    /// Templated sentence frames (句式AI化)
    Structure,
    /// Over-segmented headings (结构AI化)
    Hierarchy,
    /// Mechanical connectors (表达AI化)
    Expression,
    /// Repetition (内容原创度)
    Originality,
}

impl Dimension {
    /// Report order
    pub const ALL: [Dimension; 5] = [
        Dimension::Vocabulary,
        Dimension::Structure,
        Dimension::Hierarchy,
        Dimension::Expression,
        Dimension::Originality,
    ];

    /// Label used in results, JSON keys and the text report
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Vocabulary => "词汇AI化",
            Dimension::Structure => "句式AI化",
            Dimension::Hierarchy => "结构AI化",
            Dimension::Expression => "表达AI化",
            Dimension::Originality => "内容原创度",
        }
    }

    /// Live aggregation weight
    pub fn weight(&self) -> f64 {
        match self {
            Dimension::Vocabulary => WEIGHT_VOCABULARY,
            Dimension::Structure => WEIGHT_STRUCTURE,
            Dimension::Hierarchy => WEIGHT_HIERARCHY,
            Dimension::Expression => WEIGHT_EXPRESSION,
            Dimension::Originality => WEIGHT_ORIGINALITY,
        }
    }

    /// Informational weight shown in reports. Never read back into scoring.
    pub fn display_weight(&self) -> &'static str {
        match self {
            Dimension::Vocabulary => "20%",
            Dimension::Structure => "10%",
            Dimension::Hierarchy => "10%",
            Dimension::Expression => "50%",
            Dimension::Originality => "10%",
        }
    }

    /// Look up a dimension by its label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.label() == label)
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
