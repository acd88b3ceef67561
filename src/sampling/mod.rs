//! Point sampling from a pixel buffer.
//!
//! - [`gradient_sample`]: draw from pixels whose Sobel edge strength reaches
//!   a threshold.
//! - [`density_sample`]: jittered lattice thinned per greyscale band so that
//!   dark areas end up denser.
//! - [`add_frame_points`]: pin the image border and corners.
//!
//! All draws are with replacement; duplicates are expected and harmless for
//! the subdivision builder.

pub mod density;
pub mod frame;
pub mod gradient;
mod rng;

pub use density::{band_retention_ratio, density_sample, DEFAULT_RETAIN_PERCENT};
pub use frame::add_frame_points;
pub use gradient::{edge_strength_map, gradient_candidates, gradient_sample};
pub use rng::PointRng;
