use super::PointRng;
use crate::types::Point;

/// Pin the image border so the subdivision tiles the whole rectangle.
///
/// Appends `n = len(points) * cull_percent / 400` random positions on the top
/// and bottom edges, `n` on the left and right edges, then the four corners
/// `(0,0), (0,h-1), (w-1,0), (w-1,h-1)`.
pub fn add_frame_points(
    points: &mut Vec<Point>,
    width: usize,
    height: usize,
    cull_percent: u32,
    rng: &mut PointRng,
) {
    if width == 0 || height == 0 {
        return;
    }
    let (max_x, max_y) = (width as i32 - 1, height as i32 - 1);
    let n = (points.len() as u64 * cull_percent as u64 / 400) as usize;
    points.reserve(4 * n + 4);
    for _ in 0..n {
        let x = rng.below(width) as i32;
        points.push(Point::new(x, 0));
        points.push(Point::new(x, max_y));
    }
    for _ in 0..n {
        let y = rng.below(height) as i32;
        points.push(Point::new(0, y));
        points.push(Point::new(max_x, y));
    }
    points.extend([
        Point::new(0, 0),
        Point::new(0, max_y),
        Point::new(max_x, 0),
        Point::new(max_x, max_y),
    ]);
}
