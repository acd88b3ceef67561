//! Conversion parameters and output naming.
//!
//! Defaults mirror the desktop front end: density 2, threshold 100, grid
//! spacing 10, no skew and every toggle off.

use crate::color::SampleWindow;
use crate::error::{LowPolyError, Result};
use crate::grid::CellShape;
use crate::sampling::DEFAULT_RETAIN_PERCENT;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Rendering style of a conversion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Delaunay,
    Voronoi,
    TriGrid,
    SquareGrid,
    VoronoiGrid,
    OrthoTree,
    RandomTree,
}

impl Mode {
    pub const ALL: [Mode; 7] = [
        Mode::Delaunay,
        Mode::Voronoi,
        Mode::TriGrid,
        Mode::SquareGrid,
        Mode::VoronoiGrid,
        Mode::OrthoTree,
        Mode::RandomTree,
    ];

    /// Display name as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Mode::Delaunay => "Delaunay",
            Mode::Voronoi => "Voronoi",
            Mode::TriGrid => "Tri-Grid",
            Mode::SquareGrid => "Square-Grid",
            Mode::VoronoiGrid => "Voronoi-Grid",
            Mode::OrthoTree => "Ortho-Tree",
            Mode::RandomTree => "Random-Tree",
        }
    }

    /// Tag used in output file names.
    pub fn tag(self) -> &'static str {
        match self {
            Mode::Delaunay => "delaunay",
            Mode::Voronoi => "voronoi",
            Mode::TriGrid | Mode::SquareGrid | Mode::VoronoiGrid => "grid",
            Mode::OrthoTree | Mode::RandomTree => "tree",
        }
    }

    /// Output is polylines (spanning tree) rather than filled polygons.
    pub fn is_tree(self) -> bool {
        matches!(self, Mode::OrthoTree | Mode::RandomTree)
    }

    /// Lattice cell shape for the tessellated grid modes.
    pub fn cell_shape(self) -> Option<CellShape> {
        match self {
            Mode::TriGrid => Some(CellShape::Triangles),
            Mode::SquareGrid => Some(CellShape::Quads),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for Mode {
    type Err = LowPolyError;

    fn from_str(s: &str) -> Result<Self> {
        let key = normalize(s.trim());
        Mode::ALL
            .into_iter()
            .find(|m| normalize(m.name()) == key)
            .ok_or_else(|| LowPolyError::UnknownMode(s.to_string()))
    }
}

impl Serialize for Mode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Mode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// One immutable configuration value per conversion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderParams {
    pub mode: Mode,
    /// Percentage of gradient candidates kept; also scales frame pins.
    pub density: u32,
    /// Minimum edge strength (0..=255) for a gradient candidate.
    pub threshold: u32,
    /// Lattice spacing in pixels for grid and ortho-tree modes.
    pub grid_size: usize,
    /// Odd-row x shift in pixels; 0 disables skew.
    pub skew: usize,
    /// Pin the image border with extra points (Delaunay/Voronoi).
    pub pin_frame: bool,
    /// Draw uniform near-white polygons with black outlines.
    pub outline_only: bool,
    /// Sample by greyscale density instead of gradient strength.
    pub grey_weighted: bool,
    pub grey_retain_percent: u32,
    pub sample_window: SampleWindow,
    pub line_thickness: u32,
    /// Fixed RNG seed; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            mode: Mode::Delaunay,
            density: 2,
            threshold: 100,
            grid_size: 10,
            skew: 0,
            pin_frame: false,
            outline_only: false,
            grey_weighted: false,
            grey_retain_percent: DEFAULT_RETAIN_PERCENT,
            sample_window: SampleWindow::Centroid,
            line_thickness: 1,
            seed: None,
        }
    }
}

impl RenderParams {
    pub fn with_mode(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.density == 0 {
            return Err(LowPolyError::InvalidParameter(
                "density must be positive".into(),
            ));
        }
        if self.grid_size == 0 {
            return Err(LowPolyError::InvalidParameter(
                "grid_size must be positive".into(),
            ));
        }
        if self.line_thickness == 0 {
            return Err(LowPolyError::InvalidParameter(
                "line_thickness must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Skew as passed to the lattice generator.
    pub fn skew_opt(&self) -> Option<usize> {
        (self.skew > 0).then_some(self.skew)
    }
}

/// Output file name `<base>_<tag>_<param1>[_<param2>].svg` for `input`.
///
/// `<base>` is the file name up to its first dot.
pub fn output_file_name(input: &Path, params: &RenderParams) -> String {
    let base = input
        .file_name()
        .map(|s| s.to_string_lossy())
        .and_then(|name| name.split('.').next().map(str::to_owned))
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| "output".to_string());
    let tag = params.mode.tag();
    let suffix = match params.mode {
        Mode::Delaunay | Mode::Voronoi | Mode::RandomTree => {
            format!("{}_{}", params.density, params.threshold)
        }
        Mode::TriGrid | Mode::SquareGrid => {
            let sides = params.mode.cell_shape().map_or(0, CellShape::sides);
            format!("{sides}_{}", params.skew)
        }
        Mode::VoronoiGrid => format!("voronoi_{}", params.skew),
        Mode::OrthoTree => params.grid_size.to_string(),
    };
    format!("{base}_{tag}_{suffix}.svg")
}
