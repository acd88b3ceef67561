//! Edge-feature signal used by the gradient point sampler.
//!
//! - Sobel derivatives on a greyscale plane with reflect-101 borders.
//! - An 8-bit edge-strength map combining both derivatives.

pub mod grad;

pub use grad::{edge_strength, sobel_gradients, Grad};
