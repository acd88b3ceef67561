use crate::subdivision::Subdivision;
use crate::types::Point;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// Undirected weighted edge with value identity.
///
/// Endpoints are stored as `(min, max)` under the lexicographic point order,
/// so `Edge::new(a, b) == Edge::new(b, a)`. The squared length is kept
/// exactly; [`Edge::weight`] is its square root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    u: Point,
    v: Point,
    dist_sq: i64,
}

impl Edge {
    pub fn new(a: Point, b: Point) -> Self {
        let (u, v) = if a <= b { (a, b) } else { (b, a) };
        Self {
            u,
            v,
            dist_sq: u.dist_sq(v),
        }
    }

    pub fn endpoints(&self) -> (Point, Point) {
        (self.u, self.v)
    }

    /// Euclidean length.
    pub fn weight(&self) -> f64 {
        (self.dist_sq as f64).sqrt()
    }

    pub fn dist_sq(&self) -> i64 {
        self.dist_sq
    }

    /// The endpoint opposite `p`; `p` must be one of the endpoints.
    pub fn other(&self, p: Point) -> Point {
        if p == self.u {
            self.v
        } else {
            self.u
        }
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dist_sq
            .cmp(&other.dist_sq)
            .then(self.u.cmp(&other.u))
            .then(self.v.cmp(&other.v))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sparse proximity graph: every point mapped to its incident edges.
#[derive(Clone, Debug, Default)]
pub struct AdjacencyGraph {
    adj: HashMap<Point, HashSet<Edge>>,
}

impl AdjacencyGraph {
    /// Vertices are the distinct `points`; edges are the sides of the
    /// subdivision's triangles. Points absent from the triangulation stay
    /// isolated.
    pub fn from_triangulation(points: &[Point], subdivision: &Subdivision) -> Self {
        let mut graph = Self::default();
        for &p in points {
            graph.adj.entry(p).or_default();
        }
        for [a, b, c] in subdivision.triangles() {
            graph.add_edge(Edge::new(a, b));
            graph.add_edge(Edge::new(a, c));
            graph.add_edge(Edge::new(b, c));
        }
        graph
    }

    pub fn add_edge(&mut self, edge: Edge) {
        let (u, v) = edge.endpoints();
        self.adj.entry(u).or_default().insert(edge);
        self.adj.entry(v).or_default().insert(edge);
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adj.values().map(HashSet::len).sum::<usize>() / 2
    }

    pub fn contains(&self, p: Point) -> bool {
        self.adj.contains_key(&p)
    }

    pub fn edges_of(&self, p: Point) -> impl Iterator<Item = &Edge> {
        self.adj.get(&p).into_iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subdivision::build_subdivision;

    #[test]
    fn edge_identity_ignores_direction() {
        let a = Point::new(3, 4);
        let b = Point::new(0, 0);
        let e1 = Edge::new(a, b);
        let e2 = Edge::new(b, a);
        assert_eq!(e1, e2);
        assert_eq!(e1.endpoints(), (b, a));
        assert_eq!(e1.weight(), 5.0);
        assert_eq!(e1.other(a), b);
        let set: HashSet<Edge> = [e1, e2].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn edges_order_by_length_first() {
        let short = Edge::new(Point::new(9, 9), Point::new(9, 10));
        let long = Edge::new(Point::new(0, 0), Point::new(0, 2));
        assert!(short < long);
    }

    #[test]
    fn graph_holds_triangle_sides_only() {
        let pts = vec![
            Point::new(0, 0),
            Point::new(10, 0),
            Point::new(0, 10),
            Point::new(10, 10),
        ];
        let sub = build_subdivision(10, 10, &pts).unwrap();
        let graph = AdjacencyGraph::from_triangulation(&pts, &sub);
        assert_eq!(graph.vertex_count(), 4);
        // two triangles sharing one diagonal
        assert_eq!(graph.edge_count(), 5);
        for p in &pts {
            assert!(graph.edges_of(*p).count() >= 2);
        }
    }
}
