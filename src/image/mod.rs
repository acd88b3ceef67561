//! Image containers used by the pipeline.
//!
//! - [`ImageRgb8`]: borrowed, read-only 3-channel view handed to the core.
//! - [`ImageF32`]: owned single-channel float plane (greyscale, gradients).
//! - [`GrayU8`]: owned single-channel 8-bit plane (edge strength, luma).
//! - [`io`]: decoding from disk and text/JSON writers.
pub mod f32;
pub mod gray;
pub mod io;
pub mod rgb;
pub mod traits;

pub use self::f32::ImageF32;
pub use self::gray::GrayU8;
pub use self::rgb::ImageRgb8;
pub use self::traits::{ImageView, ImageViewMut, Rows};

/// ITU-R BT.601 luma, rounded, as used by common RGB→grey conversions.
#[inline]
pub fn luma_u8(px: [u8; 3]) -> u8 {
    let [r, g, b] = px;
    let y = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
    y.round().clamp(0.0, 255.0) as u8
}
