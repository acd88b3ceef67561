//! Euclidean minimum spanning trees over a sparse proximity graph.
//!
//! The graph holds only the sides of Delaunay triangles (the EMST is a
//! subgraph of the Delaunay triangulation), never all pairs. Prim's algorithm
//! grows the tree from the first input point. A disconnected graph is a
//! regular outcome: [`SpanningTree::Partial`] carries the forest built so far.

pub mod graph;
pub mod prim;

pub use graph::{AdjacencyGraph, Edge};
pub use prim::{euclidean_mst, prim, MstSummary, SpanningTree};
