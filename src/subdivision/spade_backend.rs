use super::{Subdivision, SubdivisionBackend};
use crate::error::{LowPolyError, Result};
use crate::types::{Bounds, Point};
use log::debug;
use spade::{DelaunayTriangulation, Point2, Triangulation};
use std::collections::HashMap;

/// Incremental Delaunay triangulation backed by `spade`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpadeBackend;

fn to_point(p: Point2<f64>) -> Point {
    Point::new(p.x.round() as i32, p.y.round() as i32)
}

impl SubdivisionBackend for SpadeBackend {
    fn compute(&self, bounds: Bounds, points: &[Point]) -> Result<Subdivision> {
        let mut tri: DelaunayTriangulation<Point2<f64>> = DelaunayTriangulation::new();
        let mut skipped = 0usize;
        for p in points {
            if !bounds.contains_point(*p) {
                skipped += 1;
                continue;
            }
            tri.insert(Point2::new(p.x as f64, p.y as f64))
                .map_err(|e| LowPolyError::Triangulation(format!("{e:?} at {p:?}")))?;
        }

        let sites: Vec<Point> = tri.vertices().map(|v| to_point(v.position())).collect();
        let index: HashMap<Point, usize> = sites.iter().enumerate().map(|(i, p)| (*p, i)).collect();
        let lookup = |p: Point2<f64>| index.get(&to_point(p)).copied();

        let mut triangles = Vec::with_capacity(tri.num_inner_faces());
        for face in tri.inner_faces() {
            let [a, b, c] = face.vertices();
            if let (Some(a), Some(b), Some(c)) =
                (lookup(a.position()), lookup(b.position()), lookup(c.position()))
            {
                triangles.push([a, b, c]);
            }
        }

        let mut neighbors = vec![Vec::new(); sites.len()];
        for edge in tri.undirected_edges() {
            let [u, v] = edge.vertices();
            if let (Some(u), Some(v)) = (lookup(u.position()), lookup(v.position())) {
                neighbors[u].push(v);
                neighbors[v].push(u);
            }
        }

        debug!(
            "SpadeBackend::compute input={} skipped={} sites={} triangles={}",
            points.len(),
            skipped,
            sites.len(),
            triangles.len()
        );
        Ok(Subdivision::from_parts(bounds, sites, triangles, neighbors))
    }
}
