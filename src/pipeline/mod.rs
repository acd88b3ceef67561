//! End-to-end conversion from an RGB buffer to a low-poly SVG document.
//!
//! [`LowPolyRenderer`] holds one immutable [`RenderParams`] value and runs the
//! stages for the selected [`Mode`]:
//!
//! - Delaunay / Voronoi: gradient or greyscale-density sampling, optional
//!   frame pins, planar subdivision, triangles or clamped Voronoi cells.
//! - Tri-Grid / Square-Grid: skewed lattice tessellated into triangles or quads.
//! - Voronoi-Grid: lattice points fed to the subdivision, rendered as cells.
//! - Ortho-Tree / Random-Tree: Euclidean MST over the lattice or a sampled
//!   point set, drawn as polylines colored at each edge midpoint.
//!
//! Every conversion owns its random generator; nothing is shared between calls.
//!
//! ```no_run
//! use lowpoly::image::io::load_rgb_image;
//! use lowpoly::{LowPolyRenderer, Mode, RenderParams};
//! use std::path::Path;
//!
//! # fn main() -> lowpoly::Result<()> {
//! let input = Path::new("photo.png");
//! let image = load_rgb_image(input)?;
//! let renderer = LowPolyRenderer::new(RenderParams::with_mode(Mode::Voronoi))?;
//! let report = renderer.convert(&image.as_view(), input, Path::new("out"))?;
//! println!("{}", report.summary_line());
//! # Ok(())
//! # }
//! ```

pub mod params;

pub use params::{output_file_name, Mode, RenderParams};

use crate::color::associate_colors;
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{ConversionReport, TimingBreakdown};
use crate::error::Result;
use crate::grid::{produce_grid, tessellate_grid, CellShape};
use crate::image::ImageRgb8;
use crate::mst::{euclidean_mst, SpanningTree};
use crate::sampling::{add_frame_points, density_sample, gradient_sample, PointRng};
use crate::subdivision::build_subdivision;
use crate::svg::{self, SvgStyle};
use crate::types::{flatten_points, Point, ShapeRecord};
use log::{debug, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Colored shapes produced by one conversion, before serialization.
#[derive(Clone, Debug)]
pub struct Rendering {
    pub mode: Mode,
    pub width: usize,
    pub height: usize,
    pub point_count: usize,
    /// Filled regions (every mode except the trees).
    pub polygons: Vec<ShapeRecord>,
    /// Tree edges as two-point polylines.
    pub lines: Vec<ShapeRecord>,
    pub tree: Option<SpanningTree>,
    pub timings: TimingBreakdown,
}

impl Rendering {
    pub fn shape_count(&self) -> usize {
        self.polygons.len() + self.lines.len()
    }

    /// Serialize into a complete SVG document.
    pub fn to_svg(&self, style: SvgStyle) -> String {
        svg::render_document(
            self.width,
            self.height,
            self.polygon_slice(),
            self.line_slice(),
            style,
        )
    }

    pub fn report(&self, output: Option<PathBuf>) -> ConversionReport {
        ConversionReport {
            mode: self.mode,
            width: self.width,
            height: self.height,
            point_count: self.point_count,
            shape_count: self.shape_count(),
            mst: self.tree.as_ref().map(SpanningTree::summary),
            output,
            timings: self.timings.clone(),
        }
    }

    fn polygon_slice(&self) -> Option<&[ShapeRecord]> {
        (!self.mode.is_tree()).then_some(self.polygons.as_slice())
    }

    fn line_slice(&self) -> Option<&[ShapeRecord]> {
        self.mode.is_tree().then_some(self.lines.as_slice())
    }
}

/// Low-poly converter for a fixed parameter set.
#[derive(Clone, Debug)]
pub struct LowPolyRenderer {
    params: RenderParams,
}

impl LowPolyRenderer {
    pub fn new(params: RenderParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &RenderParams {
        &self.params
    }

    pub fn style(&self) -> SvgStyle {
        SvgStyle {
            outline_only: self.params.outline_only,
            line_thickness: self.params.line_thickness,
        }
    }

    /// Run every stage up to color association, without touching the disk.
    pub fn render(&self, image: &ImageRgb8<'_>) -> Result<Rendering> {
        image.validate()?;
        let total_start = Instant::now();
        let (w, h) = (image.w, image.h);
        let p = &self.params;
        let mut rng = PointRng::new(p.seed);
        let mut timings = TimingBreakdown::default();
        debug!("render: mode={} {}x{}", p.mode, w, h);

        let mut tree = None;
        let (point_count, shapes) = match p.mode {
            Mode::Delaunay | Mode::Voronoi => {
                let mut points = timings.time("sample", || self.sample_points(image, &mut rng));
                if p.pin_frame {
                    add_frame_points(&mut points, w, h, p.density, &mut rng);
                }
                let sub = timings.time("subdivision", || build_subdivision(w, h, &points))?;
                let shapes = if p.mode == Mode::Delaunay {
                    sub.triangles().iter().map(|t| flatten_points(t)).collect()
                } else {
                    sub.voronoi_faces()
                };
                (points.len(), shapes)
            }
            Mode::TriGrid | Mode::SquareGrid => {
                let shape = p.mode.cell_shape().unwrap_or(CellShape::Triangles);
                timings.time("grid", || {
                    let grid = produce_grid(w, h, p.grid_size, p.skew_opt());
                    let cells: Vec<Vec<f64>> = tessellate_grid(&grid, shape)
                        .iter()
                        .map(|cell| flatten_points(cell))
                        .collect();
                    (grid.points().count(), cells)
                })
            }
            Mode::VoronoiGrid => {
                let points = timings.time("grid", || self.lattice_points(w, h));
                let sub = timings.time("subdivision", || build_subdivision(w, h, &points))?;
                (points.len(), sub.voronoi_faces())
            }
            Mode::OrthoTree | Mode::RandomTree => {
                let points = timings.time("sample", || {
                    let sampled = if p.mode == Mode::RandomTree {
                        self.sample_points(image, &mut rng)
                    } else {
                        Vec::new()
                    };
                    if sampled.is_empty() {
                        if p.mode == Mode::RandomTree {
                            warn!("random tree: empty sample, falling back to the lattice");
                        }
                        self.lattice_points(w, h)
                    } else {
                        sampled
                    }
                });
                let sub = timings.time("subdivision", || build_subdivision(w, h, &points))?;
                let spanning = timings.time("mst", || euclidean_mst(&points, &sub));
                let lines: Vec<Vec<f64>> = spanning
                    .edges()
                    .iter()
                    .map(|e| {
                        let (a, b) = e.endpoints();
                        flatten_points(&[a, b])
                    })
                    .collect();
                tree = Some(spanning);
                (points.len(), lines)
            }
        };
        debug!("render: {} points -> {} shapes", point_count, shapes.len());

        let colored = timings.time("color", || associate_colors(image, shapes, p.sample_window));
        let (polygons, lines) = if p.mode.is_tree() {
            (Vec::new(), colored)
        } else {
            (colored, Vec::new())
        };
        timings.total_ms = elapsed_ms(total_start);

        Ok(Rendering {
            mode: p.mode,
            width: w,
            height: h,
            point_count,
            polygons,
            lines,
            tree,
            timings,
        })
    }

    /// Render `image` and write `<out_dir>/<output_file_name(input)>`.
    ///
    /// `input` is only used for naming. Nothing is written when rendering fails.
    pub fn convert(
        &self,
        image: &ImageRgb8<'_>,
        input: &Path,
        out_dir: &Path,
    ) -> Result<ConversionReport> {
        let total_start = Instant::now();
        let mut rendering = self.render(image)?;
        let path = out_dir.join(output_file_name(input, &self.params));
        let svg_start = Instant::now();
        svg::write_document(
            &path,
            rendering.width,
            rendering.height,
            rendering.polygon_slice(),
            rendering.line_slice(),
            self.style(),
        )?;
        rendering.timings.push("svg", elapsed_ms(svg_start));
        rendering.timings.total_ms = elapsed_ms(total_start);
        debug!("convert: wrote {}", path.display());
        Ok(rendering.report(Some(path)))
    }

    fn sample_points(&self, image: &ImageRgb8<'_>, rng: &mut PointRng) -> Vec<Point> {
        let p = &self.params;
        let points = if p.grey_weighted {
            density_sample(image, p.grey_retain_percent, rng)
        } else {
            gradient_sample(image, p.threshold, p.density, rng)
        };
        if points.is_empty() {
            warn!(
                "sampling produced no points (threshold={}, density={}, grey_weighted={})",
                p.threshold, p.density, p.grey_weighted
            );
        }
        points
    }

    fn lattice_points(&self, width: usize, height: usize) -> Vec<Point> {
        produce_grid(width, height, self.params.grid_size, self.params.skew_opt()).into_points()
    }
}

/// Convert with `params` and return the SVG document as a string.
pub fn render_svg(image: &ImageRgb8<'_>, params: RenderParams) -> Result<String> {
    let renderer = LowPolyRenderer::new(params)?;
    Ok(renderer.render(image)?.to_svg(renderer.style()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LowPolyError;
    use crate::image::io::RgbImageU8;

    fn seeded(mode: Mode) -> RenderParams {
        RenderParams {
            seed: Some(11),
            ..RenderParams::with_mode(mode)
        }
    }

    #[test]
    fn empty_view_is_rejected() {
        let view = ImageRgb8 {
            w: 0,
            h: 0,
            stride: 0,
            data: &[],
        };
        let renderer = LowPolyRenderer::new(RenderParams::default()).unwrap();
        assert!(matches!(renderer.render(&view), Err(LowPolyError::EmptyImage)));
    }

    #[test]
    fn undersized_view_is_rejected_before_sampling() {
        let data = [7u8; 30];
        let view = ImageRgb8 {
            w: 10,
            h: 10,
            stride: 30,
            data: &data,
        };
        let params = RenderParams {
            density: 100,
            threshold: 0,
            ..seeded(Mode::Delaunay)
        };
        let renderer = LowPolyRenderer::new(params).unwrap();
        assert!(matches!(
            renderer.render(&view),
            Err(LowPolyError::BufferSize {
                expected: 300,
                actual: 30
            })
        ));
    }

    #[test]
    fn invalid_params_are_rejected_up_front() {
        let params = RenderParams {
            grid_size: 0,
            ..RenderParams::default()
        };
        assert!(LowPolyRenderer::new(params).is_err());
    }

    #[test]
    fn square_grid_counts_cells() {
        let img = RgbImageU8::filled(20, 20, [1, 2, 3]).unwrap();
        let params = RenderParams {
            grid_size: 5,
            ..seeded(Mode::SquareGrid)
        };
        let r = LowPolyRenderer::new(params).unwrap().render(&img.as_view()).unwrap();
        assert_eq!(r.point_count, 16);
        assert_eq!(r.polygons.len(), 9);
        assert!(r.lines.is_empty());
        assert!(r.tree.is_none());
        assert!(r.polygons.iter().all(|s| s.vertex_count() == 4));
    }

    #[test]
    fn ortho_tree_spans_the_lattice() {
        let img = RgbImageU8::filled(20, 20, [9, 9, 9]).unwrap();
        let params = RenderParams {
            grid_size: 5,
            ..seeded(Mode::OrthoTree)
        };
        let r = LowPolyRenderer::new(params).unwrap().render(&img.as_view()).unwrap();
        let tree = r.tree.as_ref().unwrap();
        assert!(tree.is_complete());
        assert_eq!(r.lines.len(), 15);
        assert!(r.polygons.is_empty());
        // lattice neighbours are 5 px apart
        assert!((tree.total_weight() - 75.0).abs() < 1e-9);
        assert!(r.lines.iter().all(|l| l.coords.len() == 4));
    }

    #[test]
    fn random_tree_falls_back_to_the_lattice() {
        // flat image: no gradient reaches the threshold
        let img = RgbImageU8::filled(20, 20, [50, 50, 50]).unwrap();
        let params = RenderParams {
            grid_size: 10,
            threshold: 200,
            ..seeded(Mode::RandomTree)
        };
        let r = LowPolyRenderer::new(params).unwrap().render(&img.as_view()).unwrap();
        assert_eq!(r.point_count, 4);
        assert_eq!(r.lines.len(), 3);
    }

    #[test]
    fn timings_cover_each_stage() {
        let img = RgbImageU8::filled(12, 12, [0, 0, 0]).unwrap();
        let params = RenderParams {
            density: 100,
            threshold: 0,
            ..seeded(Mode::Voronoi)
        };
        let r = LowPolyRenderer::new(params).unwrap().render(&img.as_view()).unwrap();
        for label in ["sample", "subdivision", "color"] {
            assert!(r.timings.stage(label).is_some(), "missing {label}");
        }
        assert!(r.timings.total_ms >= 0.0);
    }
}
