use serde::{Deserialize, Serialize};

/// Integer pixel position. Ordering is lexicographic on `(x, y)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Clamp into `[0, width) × [0, height)`.
    pub fn clamped(self, width: usize, height: usize) -> Self {
        let max_x = width.saturating_sub(1) as i32;
        let max_y = height.saturating_sub(1) as i32;
        Self {
            x: self.x.clamp(0, max_x),
            y: self.y.clamp(0, max_y),
        }
    }

    pub fn dist_sq(self, other: Point) -> i64 {
        let dx = (self.x - other.x) as i64;
        let dy = (self.y - other.y) as i64;
        dx * dx + dy * dy
    }
}

/// 8-bit RGB triple in R, G, B order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    pub fn r(&self) -> u8 {
        self.0[0]
    }
    pub fn g(&self) -> u8 {
        self.0[1]
    }
    pub fn b(&self) -> u8 {
        self.0[2]
    }
}

/// Image rectangle `[0, width] × [0, height]` used to gate geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Bounds {
    pub width: usize,
    pub height: usize,
}

impl Bounds {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Inclusive containment test on both upper edges.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= 0.0 && y >= 0.0 && x <= self.width as f64 && y <= self.height as f64
    }

    pub fn contains_point(&self, p: Point) -> bool {
        self.contains(p.x as f64, p.y as f64)
    }
}

/// A colored polygon or polyline with flattened `[x0, y0, x1, y1, ...]` coordinates.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShapeRecord {
    pub color: Rgb,
    pub coords: Vec<f64>,
}

impl ShapeRecord {
    pub fn new(color: Rgb, coords: Vec<f64>) -> Self {
        Self { color, coords }
    }

    pub fn vertex_count(&self) -> usize {
        self.coords.len() / 2
    }
}

/// Flatten integer points into an `[x0, y0, x1, y1, ...]` coordinate list.
pub fn flatten_points(points: &[Point]) -> Vec<f64> {
    points
        .iter()
        .flat_map(|p| [p.x as f64, p.y as f64])
        .collect()
}
