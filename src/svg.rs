//! SVG serialization of colored shapes.
//!
//! Elements are built with the `svg` crate: a root `<svg>` carrying
//! `viewBox="0 0 W H"` and a centimetre size of `W/100 × H/100`, one
//! `<polygon>` per region and one `<polyline>` per tree edge. The XML
//! declaration and DOCTYPE precede the root as a fixed prologue.
use crate::error::{LowPolyError, Result};
use crate::image::io::ensure_parent_dir;
use crate::types::ShapeRecord;
use ::svg::node::element::{Description, Polygon, Polyline};
use ::svg::node::Text;
use ::svg::Document;
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// XML declaration and SVG 1.1 DOCTYPE written before the root element.
pub const PROLOGUE: &str = concat!(
    "<?xml version=\"1.0\" standalone=\"no\"?>\n",
    "<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\" ",
    "\"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">\n",
);

/// Fill used for every polygon in outline mode.
pub const OUTLINE_FILL: &str = "rgb(254,254,254)";
/// Stroke used for every polygon in outline mode.
pub const OUTLINE_STROKE: &str = "rgb(1,1,1)";

/// Rendering switches for [`render_document`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SvgStyle {
    /// Replace fills with a uniform near-white and stroke polygon outlines.
    pub outline_only: bool,
    /// Stroke width of polylines.
    pub line_thickness: u32,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            outline_only: false,
            line_thickness: 1,
        }
    }
}

fn fmt_coord(out: &mut String, v: f64) {
    if v.fract() == 0.0 {
        let _ = write!(out, "{}", v as i64);
    } else {
        let s = format!("{v:.2}");
        out.push_str(s.trim_end_matches('0').trim_end_matches('.'));
    }
}

fn points_attr(coords: &[f64]) -> String {
    let mut out = String::with_capacity(coords.len() * 4);
    for (i, &v) in coords.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        fmt_coord(&mut out, v);
    }
    out
}

fn rgb_attr(shape: &ShapeRecord) -> String {
    let [r, g, b] = shape.color.0;
    format!("rgb({r},{g},{b})")
}

/// Root `<svg>` element with size, view box and description, no shapes yet.
pub fn header(width: usize, height: usize) -> Document {
    Document::new()
        .set("xmlns", "http://www.w3.org/2000/svg")
        .set("version", "1.1")
        .set("width", format!("{}cm", width as f64 / 100.0))
        .set("height", format!("{}cm", height as f64 / 100.0))
        .set("viewBox", format!("0 0 {width} {height}"))
        .add(Description::new().add(Text::new("lowpoly")))
}

/// One `<polygon>` element per shape, in input order.
pub fn render_polygons(shapes: &[ShapeRecord], outline_only: bool) -> Vec<Polygon> {
    shapes
        .iter()
        .map(|shape| {
            let polygon = Polygon::new().set("points", points_attr(&shape.coords));
            if outline_only {
                polygon
                    .set("fill", OUTLINE_FILL)
                    .set("stroke", OUTLINE_STROKE)
                    .set("stroke-width", "1")
            } else {
                polygon.set("fill", rgb_attr(shape))
            }
        })
        .collect()
}

/// One `<polyline>` element per shape, stroked with the shape color.
pub fn render_lines(shapes: &[ShapeRecord], thickness: u32) -> Vec<Polyline> {
    shapes
        .iter()
        .map(|shape| {
            Polyline::new()
                .set("fill", "none")
                .set("stroke", rgb_attr(shape))
                .set("stroke-width", thickness.to_string())
                .set("points", points_attr(&shape.coords))
        })
        .collect()
}

/// Root element holding every polygon, then every polyline.
pub fn build_document(
    width: usize,
    height: usize,
    polygons: Option<&[ShapeRecord]>,
    lines: Option<&[ShapeRecord]>,
    style: SvgStyle,
) -> Document {
    let mut doc = header(width, height);
    if let Some(polygons) = polygons {
        for el in render_polygons(polygons, style.outline_only) {
            doc = doc.add(el);
        }
    }
    if let Some(lines) = lines {
        for el in render_lines(lines, style.line_thickness) {
            doc = doc.add(el);
        }
    }
    doc
}

/// Prologue and serialized document as one string.
pub fn render_document(
    width: usize,
    height: usize,
    polygons: Option<&[ShapeRecord]>,
    lines: Option<&[ShapeRecord]>,
    style: SvgStyle,
) -> String {
    let doc = build_document(width, height, polygons, lines, style);
    format!("{PROLOGUE}{doc}\n")
}

/// Render and write the document to `path`.
pub fn write_document(
    path: &Path,
    width: usize,
    height: usize,
    polygons: Option<&[ShapeRecord]>,
    lines: Option<&[ShapeRecord]>,
    style: SvgStyle,
) -> Result<()> {
    let doc = build_document(width, height, polygons, lines, style);
    ensure_parent_dir(path)?;
    let io_err = |source: std::io::Error| LowPolyError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut out = BufWriter::new(File::create(path).map_err(io_err)?);
    out.write_all(PROLOGUE.as_bytes()).map_err(io_err)?;
    ::svg::write(&mut out, &doc).map_err(io_err)?;
    out.write_all(b"\n").map_err(io_err)?;
    out.flush().map_err(io_err)
}
