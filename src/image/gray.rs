use super::{luma_u8, ImageRgb8, ImageView, ImageViewMut};

/// Owned 8-bit single-channel plane (edge strength or greyscale).
#[derive(Clone, Debug)]
pub struct GrayU8 {
    pub w: usize,
    pub h: usize,
    pub data: Vec<u8>,
}

impl GrayU8 {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0; w * h],
        }
    }

    /// 8-bit BT.601 luma of an RGB view.
    pub fn from_luma(rgb: &ImageRgb8<'_>) -> Self {
        let mut out = Self::new(rgb.w, rgb.h);
        for y in 0..rgb.h {
            for (x, v) in out.row_mut(y).iter_mut().enumerate() {
                *v = luma_u8(rgb.get(x, y));
            }
        }
        out
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.w + x]
    }
}

impl ImageView for GrayU8 {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}

impl ImageViewMut for GrayU8 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.w;
        &mut self.data[start..start + self.w]
    }
}
