use super::Grid;
use crate::types::Point;

/// Polygon shape emitted per lattice cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellShape {
    /// Two triangles with the diagonal alternating by row parity.
    Triangles,
    /// One quadrilateral.
    Quads,
}

impl CellShape {
    pub fn sides(self) -> u32 {
        match self {
            CellShape::Triangles => 3,
            CellShape::Quads => 4,
        }
    }
}

/// Split every lattice cell into polygons.
///
/// For a cell with corners `pt1 = (i, j)`, `pt2 = (i, j+1)`, `pt3 = (i+1, j)`,
/// `pt4 = (i+1, j+1)`:
/// - quads are `(pt1, pt2, pt4, pt3)`;
/// - even rows give `(pt1, pt2, pt3)` and `(pt2, pt3, pt4)`;
/// - odd rows give `(pt1, pt3, pt4)` and `(pt1, pt2, pt4)`.
pub fn tessellate_grid(grid: &Grid, shape: CellShape) -> Vec<Vec<Point>> {
    let mut polygons = Vec::new();
    for (i, pair) in grid.rows.windows(2).enumerate() {
        let (upper, lower) = (&pair[0], &pair[1]);
        let cols = upper.len().min(lower.len());
        for j in 0..cols.saturating_sub(1) {
            let pt1 = upper[j];
            let pt2 = upper[j + 1];
            let pt3 = lower[j];
            let pt4 = lower[j + 1];
            match shape {
                CellShape::Quads => polygons.push(vec![pt1, pt2, pt4, pt3]),
                CellShape::Triangles if i % 2 == 0 => {
                    polygons.push(vec![pt1, pt2, pt3]);
                    polygons.push(vec![pt2, pt3, pt4]);
                }
                CellShape::Triangles => {
                    polygons.push(vec![pt1, pt3, pt4]);
                    polygons.push(vec![pt1, pt2, pt4]);
                }
            }
        }
    }
    polygons
}
