//! Pixel array transforms: smoothing, rotation and residue subtraction

pub mod gaussian;
pub mod residue;
pub mod rotate;

pub use gaussian::{gaussian_filter, gaussian_kernel, DEFAULT_SIGMA};
pub use residue::subtract;
pub use rotate::{rotate, DEFAULT_ANGLE};
