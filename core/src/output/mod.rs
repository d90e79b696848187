//! Residue image output

pub mod png;

pub use png::{read_residue_png, write_residue_png};
