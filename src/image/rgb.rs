use crate::error::{LowPolyError, Result};

/// Read-only view over interleaved 8-bit RGB samples.
///
/// `stride` counts bytes between the starts of consecutive rows and is at
/// least `3 * w`.
#[derive(Clone, Copy, Debug)]
pub struct ImageRgb8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize,
    pub data: &'a [u8],
}

impl<'a> ImageRgb8<'a> {
    /// Tightly packed view; rejects empty or undersized buffers.
    pub fn new(w: usize, h: usize, data: &'a [u8]) -> Result<Self> {
        let view = Self {
            w,
            h,
            stride: w * 3,
            data,
        };
        view.validate()?;
        Ok(view)
    }

    /// Check that every pixel `(x, y)` with `x < w`, `y < h` is addressable:
    /// `stride >= 3 * w` and `data` reaches the end of the last row.
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(LowPolyError::EmptyImage);
        }
        let row_bytes = self.w * 3;
        if self.stride < row_bytes {
            return Err(LowPolyError::InvalidParameter(format!(
                "stride {} shorter than a row of {} bytes",
                self.stride, row_bytes
            )));
        }
        let expected = (self.h - 1) * self.stride + row_bytes;
        if self.data.len() < expected {
            return Err(LowPolyError::BufferSize {
                expected,
                actual: self.data.len(),
            });
        }
        Ok(())
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u8; 3] {
        let i = y * self.stride + x * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Pixel at `(x, y)` with both coordinates clamped into the image.
    #[inline]
    pub fn get_clamped(&self, x: i64, y: i64) -> [u8; 3] {
        let cx = x.clamp(0, self.w as i64 - 1) as usize;
        let cy = y.clamp(0, self.h as i64 - 1) as usize;
        self.get(cx, cy)
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }
}
