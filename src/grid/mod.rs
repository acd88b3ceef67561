//! Regular point lattices and their tessellation.
//!
//! - [`produce_grid`]: rows of evenly spaced points with optional skew of
//!   odd rows (two-phase: shift, then trim row pairs to a common length).
//! - [`tessellate_grid`]: quads or alternating-diagonal triangles per cell.

pub mod lattice;
pub mod tessellate;

pub use lattice::{produce_grid, Grid};
pub use tessellate::{tessellate_grid, CellShape};
