pub mod cli;
pub mod error;
pub mod extraction;
pub mod output;
pub mod pipeline;
pub mod processing;
pub mod record;
pub mod types;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::{ResidueError, Result};
pub use pipeline::{run, RunOutcome};
pub use record::{check_position, FilteredImageRecord, HasPosition, ImageRecord, RotatedImageRecord};
pub use types::*;
