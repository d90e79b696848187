//! Core type definitions for DICOM residue computation
//!
//! - [`ImagePosition`]: Image Position Patient coordinates, compared exactly
//! - [`SampleFormat`]: Bit depth and signedness of stored pixel samples
//! - [`PixelArray`]: Stored pixel values as an N-dimensional array

mod pixels;
mod position;

pub use pixels::{PixelArray, SampleFormat};
pub use position::ImagePosition;
