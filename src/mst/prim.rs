use super::graph::{AdjacencyGraph, Edge};
use crate::subdivision::Subdivision;
use crate::types::Point;
use log::{debug, warn};
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

/// Outcome of Prim's algorithm on the proximity graph.
#[derive(Clone, Debug, PartialEq)]
pub enum SpanningTree {
    /// Every one of the `total` vertices was reached; `total - 1` edges,
    /// none for an empty graph.
    Complete { edges: Vec<Edge>, total: usize },
    /// The frontier emptied first: the graph is disconnected and `edges`
    /// span only the `visited` vertices reachable from the start.
    Partial {
        edges: Vec<Edge>,
        visited: usize,
        total: usize,
    },
}

impl SpanningTree {
    pub fn edges(&self) -> &[Edge] {
        match self {
            SpanningTree::Complete { edges, .. } => edges,
            SpanningTree::Partial { edges, .. } => edges,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, SpanningTree::Complete { .. })
    }

    pub fn total_weight(&self) -> f64 {
        self.edges().iter().map(Edge::weight).sum()
    }

    pub fn summary(&self) -> MstSummary {
        let edges = self.edges().len();
        match self {
            SpanningTree::Complete { total, .. } => MstSummary {
                complete: true,
                visited: *total,
                total: *total,
                edges,
            },
            SpanningTree::Partial { visited, total, .. } => MstSummary {
                complete: false,
                visited: *visited,
                total: *total,
                edges,
            },
        }
    }
}

/// Serializable digest of a [`SpanningTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MstSummary {
    pub complete: bool,
    pub visited: usize,
    pub total: usize,
    pub edges: usize,
}

/// Prim's algorithm from `start` with a min-heap keyed by edge length.
///
/// Ties resolve by the lexicographic order of the endpoints.
pub fn prim(graph: &AdjacencyGraph, start: Point) -> SpanningTree {
    let total = graph.vertex_count();
    if total == 0 {
        return SpanningTree::Complete {
            edges: Vec::new(),
            total: 0,
        };
    }
    if !graph.contains(start) {
        warn!("prim: start {:?} is not a graph vertex", start);
        return SpanningTree::Partial {
            edges: Vec::new(),
            visited: 0,
            total,
        };
    }

    let mut visited: HashSet<Point> = HashSet::with_capacity(total);
    visited.insert(start);
    let mut queued: HashSet<Edge> = HashSet::new();
    let mut heap: BinaryHeap<Reverse<Edge>> = BinaryHeap::new();
    let mut tree: Vec<Edge> = Vec::with_capacity(total - 1);

    for edge in graph.edges_of(start) {
        if queued.insert(*edge) {
            heap.push(Reverse(*edge));
        }
    }

    while visited.len() < total {
        let Some(Reverse(edge)) = heap.pop() else {
            warn!(
                "prim: frontier exhausted after {}/{} vertices, graph is disconnected",
                visited.len(),
                total
            );
            return SpanningTree::Partial {
                edges: tree,
                visited: visited.len(),
                total,
            };
        };
        let (u, v) = edge.endpoints();
        let next = match (visited.contains(&u), visited.contains(&v)) {
            (true, false) => v,
            (false, true) => u,
            _ => continue,
        };
        tree.push(edge);
        visited.insert(next);
        for e in graph.edges_of(next) {
            if !visited.contains(&e.other(next)) && queued.insert(*e) {
                heap.push(Reverse(*e));
            }
        }
    }

    debug!("prim: spanning tree over {} vertices", total);
    SpanningTree::Complete { edges: tree, total }
}

/// Euclidean minimum spanning tree over the triangulation edges of `points`,
/// grown from the first point of the sequence.
pub fn euclidean_mst(points: &[Point], subdivision: &Subdivision) -> SpanningTree {
    let Some(&start) = points.first() else {
        return SpanningTree::Complete {
            edges: Vec::new(),
            total: 0,
        };
    };
    let graph = AdjacencyGraph::from_triangulation(points, subdivision);
    debug!(
        "euclidean_mst: vertices={} edges={}",
        graph.vertex_count(),
        graph.edge_count()
    );
    prim(&graph, start)
}
