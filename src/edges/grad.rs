//! Sobel gradients and the 8-bit edge-strength map.
//!
//! - Convolves the 3×3 Sobel pair with reflect-101 borders (`-1 → 1`,
//!   `n → n - 2`), so derivatives across the image border vanish.
//! - Each derivative is mapped to 8 bits as `min(|g|, 255)`; the strength of
//!   a pixel is the bitwise OR of the two mapped derivatives.
//!
//! Complexity: O(W·H) per pass.
use crate::image::{GrayU8, ImageF32, ImageView, ImageViewMut};

type Kernel3 = [[f32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Per-pixel horizontal and vertical derivatives.
#[derive(Clone, Debug)]
pub struct Grad {
    /// Horizontal derivative (convolution with kernel X)
    pub gx: ImageF32,
    /// Vertical derivative (convolution with kernel Y)
    pub gy: ImageF32,
}

/// Indices of `i - 1, i, i + 1` mirrored about the border pixel.
#[inline]
fn reflect101(i: usize, n: usize) -> [usize; 3] {
    if n == 1 {
        return [0, 0, 0];
    }
    let prev = if i == 0 { 1 } else { i - 1 };
    let next = if i + 1 == n { n - 2 } else { i + 1 };
    [prev, i, next]
}

fn gradients_with_kernels(l: &ImageF32, kernel_x: &Kernel3, kernel_y: &Kernel3) -> Grad {
    let w = l.w;
    let h = l.h;
    let mut gx = ImageF32::new(w, h);
    let mut gy = ImageF32::new(w, h);

    if w == 0 || h == 0 {
        return Grad { gx, gy };
    }

    for y in 0..h {
        let y_idx = reflect101(y, h);
        let rows = [l.row(y_idx[0]), l.row(y_idx[1]), l.row(y_idx[2])];
        let out_gx = gx.row_mut(y);
        for x in 0..w {
            let x_idx = reflect101(x, w);
            let mut sum = 0.0;
            for (ky, yy_row) in rows.iter().enumerate() {
                let k = &kernel_x[ky];
                sum += yy_row[x_idx[0]] * k[0] + yy_row[x_idx[1]] * k[1] + yy_row[x_idx[2]] * k[2];
            }
            out_gx[x] = sum;
        }
        let out_gy = gy.row_mut(y);
        for x in 0..w {
            let x_idx = reflect101(x, w);
            let mut sum = 0.0;
            for (ky, yy_row) in rows.iter().enumerate() {
                let k = &kernel_y[ky];
                sum += yy_row[x_idx[0]] * k[0] + yy_row[x_idx[1]] * k[1] + yy_row[x_idx[2]] * k[2];
            }
            out_gy[x] = sum;
        }
    }

    Grad { gx, gy }
}

/// Compute Sobel gradients on a single-channel float image.
pub fn sobel_gradients(l: &ImageF32) -> Grad {
    gradients_with_kernels(l, &SOBEL_KERNEL_X, &SOBEL_KERNEL_Y)
}

#[inline]
fn saturate_abs(v: f32) -> u8 {
    v.abs().round().min(255.0) as u8
}

/// Edge strength `sat8(|gx|) | sat8(|gy|)` per pixel.
pub fn edge_strength(grad: &Grad) -> GrayU8 {
    let (w, h) = (grad.gx.w, grad.gx.h);
    let mut out = GrayU8::new(w, h);
    for y in 0..h {
        let gx = grad.gx.row(y);
        let gy = grad.gy.row(y);
        for (x, v) in out.row_mut(y).iter_mut().enumerate() {
            *v = saturate_abs(gx[x]) | saturate_abs(gy[x]);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step_image(width: usize, height: usize, split_x: usize) -> ImageF32 {
        let mut img = ImageF32::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let v = if x < split_x { 0.0 } else { 100.0 };
                img.set(x, y, v);
            }
        }
        img
    }

    #[test]
    fn flat_image_has_zero_strength() {
        let mut img = ImageF32::new(8, 8);
        img.data.iter_mut().for_each(|v| *v = 77.0);
        let strength = edge_strength(&sobel_gradients(&img));
        assert!(strength.data.iter().all(|&v| v == 0));
    }

    #[test]
    fn vertical_step_saturates_next_to_the_edge() {
        let img = step_image(8, 8, 4);
        let grad = sobel_gradients(&img);
        // 4 * 100 at the step, saturated to 255
        assert_eq!(grad.gx.get(3, 4), 400.0);
        assert_eq!(grad.gy.get(3, 4), 0.0);
        let strength = edge_strength(&grad);
        assert_eq!(strength.get(3, 4), 255);
        assert_eq!(strength.get(4, 4), 255);
        assert_eq!(strength.get(0, 4), 0);
        assert_eq!(strength.get(7, 4), 0);
    }

    #[test]
    fn border_derivatives_use_reflect_101() {
        let mut img = ImageF32::new(5, 3);
        for y in 0..3 {
            for x in 0..5 {
                img.set(x, y, 10.0 * x as f32);
            }
        }
        let grad = sobel_gradients(&img);
        // interior ramp: (1 + 2 + 1) * 20
        assert_eq!(grad.gx.get(2, 1), 80.0);
        // mirrored neighbours cancel on the outermost columns
        assert_eq!(grad.gx.get(0, 1), 0.0);
        assert_eq!(grad.gx.get(4, 0), 0.0);
        assert_eq!(grad.gy.get(2, 0), 0.0);
        assert_eq!(reflect101(0, 4), [1, 0, 1]);
        assert_eq!(reflect101(3, 4), [2, 3, 2]);
        assert_eq!(reflect101(0, 1), [0, 0, 0]);
    }

    #[test]
    fn empty_plane_yields_empty_gradients() {
        let grad = sobel_gradients(&ImageF32::new(0, 0));
        assert!(grad.gx.data.is_empty());
        assert!(edge_strength(&grad).data.is_empty());
    }
}
