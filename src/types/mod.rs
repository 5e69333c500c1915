//! Core types for aiflavor

mod dimension;
mod level;
mod report;
mod result;

pub use dimension::Dimension;
pub use level::FlavorLevel;
pub use report::{round2, AIDetectionReport, SerializedReport};
pub use result::DetectionResult;
