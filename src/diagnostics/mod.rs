//! Diagnostics returned alongside every conversion.
//!
//! `ConversionReport` is what the renderer hands back: sizes, counts, the
//! spanning-tree outcome for tree modes and a `TimingBreakdown` of each stage.

pub mod report;
pub mod timing;

pub use report::ConversionReport;
pub use timing::{StageTiming, TimingBreakdown};
