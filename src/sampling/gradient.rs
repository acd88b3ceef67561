use super::PointRng;
use crate::edges::{edge_strength, sobel_gradients};
use crate::image::{GrayU8, ImageF32, ImageRgb8, ImageView};
use crate::types::Point;
use log::debug;

/// Edge-strength map of an RGB view (greyscale → Sobel → 8-bit OR).
pub fn edge_strength_map(image: &ImageRgb8<'_>) -> GrayU8 {
    let gray = ImageF32::from_luma(image);
    edge_strength(&sobel_gradients(&gray))
}

/// Every pixel whose strength is at least `threshold`, in row-major order.
pub fn gradient_candidates(strength: &GrayU8, threshold: u32) -> Vec<Point> {
    let mut out = Vec::new();
    for (y, row) in strength.rows().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            if v as u32 >= threshold {
                out.push(Point::new(x as i32, y as i32));
            }
        }
    }
    out
}

/// Gradient-threshold sampling.
///
/// Draws `floor(len(candidates) * sample_percent / 100)` points with
/// replacement from the pixels whose edge strength reaches `threshold`.
/// An empty candidate set or a zero percentage gives an empty result.
pub fn gradient_sample(
    image: &ImageRgb8<'_>,
    threshold: u32,
    sample_percent: u32,
    rng: &mut PointRng,
) -> Vec<Point> {
    let strength = edge_strength_map(image);
    let candidates = gradient_candidates(&strength, threshold);
    let count = (candidates.len() as u64 * sample_percent as u64 / 100) as usize;
    debug!(
        "gradient_sample threshold={} percent={} candidates={} drawn={}",
        threshold,
        sample_percent,
        candidates.len(),
        count
    );
    rng.sample_with_replacement(&candidates, count)
}
