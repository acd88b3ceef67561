//! Owned single-channel f32 plane in row-major layout.
//!
//! Greyscale values keep the 0–255 scale of the source samples so that
//! derivative magnitudes match the 8-bit range the edge map is built on.
use super::{luma_u8, ImageRgb8, ImageView, ImageViewMut};

#[derive(Clone, Debug)]
pub struct ImageF32 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Backing storage in row-major order, `w * h` values
    pub data: Vec<f32>,
}

impl ImageF32 {
    /// Zero-initialized plane of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0.0; w * h],
        }
    }

    /// Greyscale plane (BT.601 luma, 0–255) of an RGB view.
    pub fn from_luma(rgb: &ImageRgb8<'_>) -> Self {
        let mut out = Self::new(rgb.w, rgb.h);
        for y in 0..rgb.h {
            let row = out.row_mut(y);
            for (x, v) in row.iter_mut().enumerate() {
                *v = luma_u8(rgb.get(x, y)) as f32;
            }
        }
        out
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.w + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        let i = y * self.w + x;
        self.data[i] = v;
    }
}

impl ImageView for ImageF32 {
    type Pixel = f32;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[f32] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}

impl ImageViewMut for ImageF32 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let start = y * self.w;
        &mut self.data[start..start + self.w]
    }
}
