//! Planar subdivision: Delaunay triangulation and its Voronoi dual.
//!
//! The triangulation engine sits behind [`SubdivisionBackend`]; the default
//! [`SpadeBackend`] uses the `spade` crate. Whatever the engine, the result
//! is normalised into a [`Subdivision`] holding the distinct sites, the
//! triangles as site-index triples and the Delaunay adjacency. Voronoi cells
//! are derived from that adjacency, so they do not depend on the engine.
//!
//! Coordinates are integer pixel positions; only sites inside the closed
//! rectangle `[0, width] × [0, height]` are inserted.

mod spade_backend;
pub mod voronoi;

pub use spade_backend::SpadeBackend;

use crate::error::Result;
use crate::types::{Bounds, Point};

/// A Delaunay engine producing a normalised [`Subdivision`].
pub trait SubdivisionBackend {
    fn compute(&self, bounds: Bounds, points: &[Point]) -> Result<Subdivision>;
}

/// Delaunay triangulation of a point set inside a bounding rectangle.
#[derive(Clone, Debug)]
pub struct Subdivision {
    bounds: Bounds,
    sites: Vec<Point>,
    triangles: Vec<[usize; 3]>,
    neighbors: Vec<Vec<usize>>,
}

impl Subdivision {
    /// Assemble from engine output. Triangle and neighbour entries index `sites`.
    pub fn from_parts(
        bounds: Bounds,
        sites: Vec<Point>,
        triangles: Vec<[usize; 3]>,
        neighbors: Vec<Vec<usize>>,
    ) -> Self {
        debug_assert_eq!(sites.len(), neighbors.len());
        Self {
            bounds,
            sites,
            triangles,
            neighbors,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Distinct inserted sites.
    pub fn sites(&self) -> &[Point] {
        &self.sites
    }

    pub fn neighbors(&self, site: usize) -> &[usize] {
        &self.neighbors[site]
    }

    /// Triangles whose three vertices all lie inside the bounds.
    pub fn triangles(&self) -> Vec<[Point; 3]> {
        self.triangles
            .iter()
            .map(|&[a, b, c]| [self.sites[a], self.sites[b], self.sites[c]])
            .filter(|tri| tri.iter().all(|p| self.bounds.contains_point(*p)))
            .collect()
    }

    /// One closed cell per site as `[x0, y0, x1, y1, ...]`, every coordinate
    /// clamped into `[0, width) × [0, height)`.
    pub fn voronoi_faces(&self) -> Vec<Vec<f64>> {
        voronoi::cells(self)
    }
}

/// Insert every point inside `[0, width] × [0, height]` with the default engine.
pub fn build_subdivision(width: usize, height: usize, points: &[Point]) -> Result<Subdivision> {
    SpadeBackend.compute(Bounds::new(width, height), points)
}
