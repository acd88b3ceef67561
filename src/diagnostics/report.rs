use super::TimingBreakdown;
use crate::mst::MstSummary;
use crate::pipeline::Mode;
use serde::Serialize;
use std::path::PathBuf;

/// Summary of one conversion, returned by
/// [`LowPolyRenderer::convert`](crate::LowPolyRenderer::convert).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionReport {
    pub mode: Mode,
    pub width: usize,
    pub height: usize,
    /// Points fed into the subdivision or spanning tree; lattice points for
    /// the grid modes.
    pub point_count: usize,
    /// Polygons or polylines written to the document.
    pub shape_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mst: Option<MstSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    pub timings: TimingBreakdown,
}

impl ConversionReport {
    /// One-line human readable summary for tool output.
    pub fn summary_line(&self) -> String {
        let mut line = format!(
            "{} {}x{} points={} shapes={} total_ms={:.3}",
            self.mode,
            self.width,
            self.height,
            self.point_count,
            self.shape_count,
            self.timings.total_ms
        );
        if let Some(mst) = &self.mst {
            line.push_str(&format!(
                " mst={}/{}{}",
                mst.visited,
                mst.total,
                if mst.complete { "" } else { " (partial)" }
            ));
        }
        line
    }
}
