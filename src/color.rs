//! Region color sampling.
//!
//! A region's color is read at the unweighted centroid of its vertices
//! (arithmetic mean of the x and of the y coordinates, not area-weighted).
//! Optionally a rectangular window around the centroid is reduced to a
//! per-channel root-mean-square, which tracks perceived brightness better than
//! a plain mean. All reads are clamped into the buffer.
use crate::image::ImageRgb8;
use crate::types::{Rgb, ShapeRecord};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// How many pixels contribute to a region color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum SampleWindow {
    /// Single pixel at the centroid.
    #[default]
    Centroid,
    /// Fixed `width × height` window centred on the centroid.
    Fixed { width: u32, height: u32 },
    /// Window sized to each shape's axis-aligned bounding box.
    BoundingBox,
}

impl SampleWindow {
    /// Window size for a given shape, `None` for single-pixel sampling.
    pub fn mask_for(&self, coords: &[f64]) -> Option<(u32, u32)> {
        match *self {
            SampleWindow::Centroid => None,
            SampleWindow::Fixed { width, height } => Some((width, height)),
            SampleWindow::BoundingBox => Some(bounding_size(coords)),
        }
    }
}

/// Unweighted mean of the x and y coordinates; the origin for an empty list.
pub fn centroid(coords: &[f64]) -> (f64, f64) {
    let n = coords.len() / 2;
    if n == 0 {
        return (0.0, 0.0);
    }
    let (sx, sy) = coords
        .chunks_exact(2)
        .fold((0.0, 0.0), |(sx, sy), xy| (sx + xy[0], sy + xy[1]));
    (sx / n as f64, sy / n as f64)
}

/// Axis-aligned extent `(max_x - min_x, max_y - min_y)`, rounded down.
pub fn bounding_size(coords: &[f64]) -> (u32, u32) {
    let mut min = (f64::INFINITY, f64::INFINITY);
    let mut max = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for xy in coords.chunks_exact(2) {
        min = (min.0.min(xy[0]), min.1.min(xy[1]));
        max = (max.0.max(xy[0]), max.1.max(xy[1]));
    }
    if !min.0.is_finite() {
        return (0, 0);
    }
    ((max.0 - min.0) as u32, (max.1 - min.1) as u32)
}

/// Color of the region described by flattened `coords`.
///
/// Without a `mask` this is the pixel under the centroid. With a mask
/// `(mx, my)` each channel is the RMS over columns
/// `[cx - mx/2, cx + mx/2)` and rows `[cy - my/2, cy + my/2)`, every index
/// clamped to `[0, dim - 1]`. An empty window falls back to the centroid pixel.
pub fn region_color(image: &ImageRgb8<'_>, coords: &[f64], mask: Option<(u32, u32)>) -> Rgb {
    let (cx, cy) = centroid(coords);
    let (cx, cy) = (cx.floor() as i64, cy.floor() as i64);
    let base = image.get_clamped(cx, cy);

    let Some((mx, my)) = mask else {
        return Rgb(base);
    };
    let (half_x, half_y) = ((mx / 2) as i64, (my / 2) as i64);
    if half_x == 0 || half_y == 0 {
        return Rgb(base);
    }

    let mut sum_sq = [0u64; 3];
    let mut count = 0u64;
    for y in (cy - half_y)..(cy + half_y) {
        for x in (cx - half_x)..(cx + half_x) {
            let px = image.get_clamped(x, y);
            for (acc, &c) in sum_sq.iter_mut().zip(px.iter()) {
                *acc += c as u64 * c as u64;
            }
            count += 1;
        }
    }
    let rms = |s: u64| ((s as f64 / count as f64).sqrt().floor()).min(255.0) as u8;
    Rgb([rms(sum_sq[0]), rms(sum_sq[1]), rms(sum_sq[2])])
}

/// Pair every shape with its sampled color, preserving input order.
pub fn associate_colors(
    image: &ImageRgb8<'_>,
    shapes: Vec<Vec<f64>>,
    window: SampleWindow,
) -> Vec<ShapeRecord> {
    shapes
        .into_par_iter()
        .map(|coords| {
            let color = region_color(image, &coords, window.mask_for(&coords));
            ShapeRecord::new(color, coords)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::io::RgbImageU8;

    fn gradient_image(w: usize, h: usize) -> RgbImageU8 {
        let mut data = Vec::with_capacity(w * h * 3);
        for y in 0..h {
            for x in 0..w {
                data.extend_from_slice(&[(x * 10) as u8, (y * 10) as u8, 7]);
            }
        }
        RgbImageU8::new(w, h, data).unwrap()
    }

    #[test]
    fn centroid_is_the_unweighted_vertex_mean() {
        // a heavily skewed quad: area centroid would differ
        let coords = [0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 10.0, 1.0];
        assert_eq!(centroid(&coords), (3.0, 0.5));
        assert_eq!(centroid(&[]), (0.0, 0.0));
    }

    #[test]
    fn single_pixel_sample_reads_the_centroid() {
        let img = gradient_image(10, 10);
        let tri = [2.0, 2.0, 8.0, 2.0, 2.0, 8.0];
        assert_eq!(region_color(&img.as_view(), &tri, None), Rgb::new(40, 40, 7));
    }

    #[test]
    fn rms_window_uses_root_mean_square() {
        // two columns: 0 and 200 -> rms = sqrt(200^2 / 2) = 141.42
        let mut data = Vec::new();
        for _y in 0..4 {
            data.extend_from_slice(&[0, 0, 0, 200, 200, 200, 0, 0, 0, 200, 200, 200]);
        }
        let img = RgbImageU8::new(4, 4, data).unwrap();
        let coords = [1.0, 1.0, 3.0, 3.0];
        let c = region_color(&img.as_view(), &coords, Some((2, 2)));
        assert_eq!(c, Rgb::new(141, 141, 141));
    }

    #[test]
    fn window_reads_are_clamped_at_the_border() {
        let img = RgbImageU8::filled(5, 5, [9, 8, 7]).unwrap();
        let corner = [4.0, 4.0, 4.0, 4.0];
        let c = region_color(&img.as_view(), &corner, Some((20, 20)));
        assert_eq!(c, Rgb::new(9, 8, 7));
        let outside = [-30.0, 50.0];
        assert_eq!(region_color(&img.as_view(), &outside, None), Rgb::new(9, 8, 7));
    }

    #[test]
    fn bounding_window_tracks_shape_extent() {
        assert_eq!(bounding_size(&[1.0, 2.0, 9.5, 4.0, 3.0, 12.0]), (8, 10));
        assert_eq!(bounding_size(&[]), (0, 0));
        assert_eq!(
            SampleWindow::BoundingBox.mask_for(&[0.0, 0.0, 4.0, 6.0]),
            Some((4, 6))
        );
        assert_eq!(SampleWindow::Centroid.mask_for(&[0.0, 0.0]), None);
    }

    #[test]
    fn association_keeps_input_order() {
        let img = gradient_image(10, 10);
        let shapes = vec![vec![1.0, 1.0], vec![5.0, 3.0], vec![9.0, 9.0]];
        let records = associate_colors(&img.as_view(), shapes.clone(), SampleWindow::Centroid);
        assert_eq!(records.len(), 3);
        for (rec, coords) in records.iter().zip(&shapes) {
            assert_eq!(&rec.coords, coords);
        }
        assert_eq!(records[1].color, Rgb::new(50, 30, 7));
    }
}
