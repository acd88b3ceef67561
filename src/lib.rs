#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod color;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod pipeline;
pub mod svg;
pub mod types;

// Geometry and sampling building blocks.
pub mod edges;
pub mod grid;
pub mod mst;
pub mod sampling;
pub mod subdivision;

// --- High-level re-exports -------------------------------------------------

// Main entry point: renderer + parameters.
pub use crate::pipeline::{output_file_name, render_svg, LowPolyRenderer, Mode, RenderParams, Rendering};
pub use crate::types::{Point, Rgb, ShapeRecord};

pub use crate::diagnostics::ConversionReport;
pub use crate::error::{LowPolyError, Result};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use lowpoly::prelude::*;
///
/// # fn main() -> lowpoly::Result<()> {
/// let (w, h) = (64usize, 48usize);
/// let rgb = vec![128u8; w * h * 3];
/// let img = ImageRgb8::new(w, h, &rgb)?;
///
/// let params = RenderParams {
///     mode: Mode::TriGrid,
///     grid_size: 8,
///     ..Default::default()
/// };
/// let rendering = LowPolyRenderer::new(params)?.render(&img)?;
/// println!("shapes={}", rendering.shape_count());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageRgb8;
    pub use crate::{LowPolyRenderer, Mode, RenderParams, Rendering};
}

// --- Stage-level API (for tools & advanced users) ---------------------------

pub mod stages {
    pub use crate::color::{associate_colors, region_color, SampleWindow};
    pub use crate::grid::{produce_grid, tessellate_grid, CellShape, Grid};
    pub use crate::mst::{euclidean_mst, AdjacencyGraph, Edge, MstSummary, SpanningTree};
    pub use crate::sampling::{add_frame_points, density_sample, gradient_sample, PointRng};
    pub use crate::subdivision::{build_subdivision, Subdivision, SubdivisionBackend};
    pub use crate::svg::{
        build_document, header, render_lines, render_polygons, write_document, SvgStyle,
    };

    pub use crate::diagnostics::{StageTiming, TimingBreakdown};
}
