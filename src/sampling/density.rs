use super::PointRng;
use crate::grid::produce_grid;
use crate::image::{GrayU8, ImageRgb8};
use crate::types::Point;
use log::debug;

/// Width of one greyscale band.
pub const BAND_WIDTH: u32 = 5;
/// Bands cover `[0, 255)` in steps of [`BAND_WIDTH`]; luma 255 falls in none.
pub const BAND_COUNT: usize = 51;
/// Default share of each band kept before the retention curve is applied.
pub const DEFAULT_RETAIN_PERCENT: u32 = 85;

/// Fraction of a band retained: `1 - (tanh(low * 6 / 255 - 3) + 1) / 2`.
///
/// Close to 1 for dark bands, close to 0 for bright ones.
pub fn band_retention_ratio(low: u32) -> f64 {
    let a = low as f64 * 6.0 / 255.0 - 3.0;
    1.0 - (a.tanh() + 1.0) / 2.0
}

/// Lattice spacing used by density sampling: `floor(min(w, h) / 100)`, at least 1.
pub fn density_spacing(width: usize, height: usize) -> usize {
    (width.min(height) / 100).max(1)
}

/// Greyscale-density sampling: dark regions receive more points.
///
/// Lattice points are bucketed by luma band, jittered by up to half the
/// lattice spacing, then each band contributes
/// `floor(retain_percent / 100 * band_size * ratio(low))` draws with replacement.
pub fn density_sample(image: &ImageRgb8<'_>, retain_percent: u32, rng: &mut PointRng) -> Vec<Point> {
    let gray = GrayU8::from_luma(image);
    let (w, h) = (image.w, image.h);
    let dist = density_spacing(w, h);
    let half = (dist / 2) as i32;
    let lattice = produce_grid(w, h, dist, None);

    let mut bands: Vec<Vec<Point>> = vec![Vec::new(); BAND_COUNT];
    for p in lattice.points() {
        let luma = gray.get(p.x as usize, p.y as usize) as usize;
        let band = luma / BAND_WIDTH as usize;
        let Some(bucket) = bands.get_mut(band) else {
            continue;
        };
        let jittered = Point::new(p.x + rng.offset(half), p.y + rng.offset(half));
        bucket.push(jittered.clamped(w, h));
    }

    let mut out = Vec::new();
    for (idx, bucket) in bands.iter().enumerate() {
        if bucket.is_empty() {
            continue;
        }
        let low = idx as u32 * BAND_WIDTH;
        let ratio = band_retention_ratio(low);
        let count = (retain_percent as f64 / 100.0 * bucket.len() as f64 * ratio).floor() as usize;
        out.extend(rng.sample_with_replacement(bucket, count));
    }
    debug!(
        "density_sample dist={} lattice={} retained={}",
        dist,
        bands.iter().map(Vec::len).sum::<usize>(),
        out.len()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::io::RgbImageU8;

    #[test]
    fn retention_curve_is_monotone_and_centred() {
        assert!(band_retention_ratio(0) > 0.99);
        assert!(band_retention_ratio(250) < 0.01);
        assert!((band_retention_ratio(0) + band_retention_ratio(255) - 1.0).abs() < 1e-9);
        let mut prev = f64::INFINITY;
        for low in (0..255).step_by(5) {
            let r = band_retention_ratio(low);
            assert!(r < prev);
            prev = r;
        }
    }

    #[test]
    fn spacing_has_a_floor_of_one() {
        assert_eq!(density_spacing(50, 80), 1);
        assert_eq!(density_spacing(640, 480), 4);
    }

    #[test]
    fn dark_images_keep_more_points_than_bright_ones() {
        let dark = RgbImageU8::filled(40, 40, [0, 0, 0]).unwrap();
        let bright = RgbImageU8::filled(40, 40, [240, 240, 240]).unwrap();
        let mut rng = PointRng::seeded(5);
        let dark_pts = density_sample(&dark.as_view(), DEFAULT_RETAIN_PERCENT, &mut rng);
        let bright_pts = density_sample(&bright.as_view(), DEFAULT_RETAIN_PERCENT, &mut rng);
        // 1600 lattice points, ratio(0) ≈ 0.9975
        assert_eq!(dark_pts.len(), (0.85 * 1600.0 * band_retention_ratio(0)).floor() as usize);
        assert!(bright_pts.len() < dark_pts.len() / 20);
    }

    #[test]
    fn white_pixels_fall_outside_every_band() {
        let white = RgbImageU8::filled(20, 20, [255, 255, 255]).unwrap();
        let mut rng = PointRng::seeded(9);
        assert!(density_sample(&white.as_view(), 100, &mut rng).is_empty());
    }

    #[test]
    fn jittered_points_stay_in_bounds() {
        let img = RgbImageU8::filled(300, 220, [30, 30, 30]).unwrap();
        let mut rng = PointRng::seeded(13);
        let pts = density_sample(&img.as_view(), 100, &mut rng);
        assert!(!pts.is_empty());
        assert!(pts
            .iter()
            .all(|p| (0..300).contains(&p.x) && (0..220).contains(&p.y)));
    }
}
