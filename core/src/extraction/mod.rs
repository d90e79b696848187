pub mod pixels;
pub mod position;
pub mod tags;

pub use pixels::{extract_pixel_array, extract_sample_format};
pub use position::extract_image_position;
pub use tags::*;
