use crate::error::{ResidueError, Result};
use crate::output::write_residue_png;
use crate::processing::subtract;
use crate::record::{check_position, FilteredImageRecord};
use crate::types::ImagePosition;
use log::{debug, info, warn};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the output subdirectory created under the input directory
pub const OUTPUT_DIR: &str = "residues";

/// File name of the raw pixel difference
pub const UNFILTERED_RESIDUE: &str = "unfiltered_residue.png";

/// File name of the smoothed pixel difference
pub const FILTERED_RESIDUE: &str = "filtered_residue.png";

/// Number of images compared in one run
pub const IMAGE_COUNT: usize = 2;

/// How a run ended
///
/// Only `ResiduesWritten` produces files. Errors such as unreadable
/// files are returned as [`ResidueError`] instead.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// More than two `.dcm` files were found
    TooManyImages { found: usize },

    /// Both images report the same Image Position Patient
    SamePosition { position: ImagePosition },

    /// Both residue images were written
    ResiduesWritten { unfiltered: PathBuf, filtered: PathBuf },
}

impl RunOutcome {
    /// Checks if the run produced output files
    pub fn is_written(&self) -> bool {
        matches!(self, RunOutcome::ResiduesWritten { .. })
    }
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunOutcome::TooManyImages { .. } => write!(f, "Incorrect number of images. Aborting."),
            RunOutcome::SamePosition { .. } => {
                write!(f, "The DICOM files appear to be the same. Aborting.")
            }
            RunOutcome::ResiduesWritten { unfiltered, .. } => {
                let dir = unfiltered.parent().unwrap_or(unfiltered);
                write!(f, "Residue images written to {}", dir.display())
            }
        }
    }
}

/// Lists the `.dcm` files of a directory, sorted by path
///
/// The extension match is case-insensitive. Subdirectories are ignored.
pub fn collect_dicom_files(directory: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() {
            if let Some(ext) = path.extension() {
                if ext.eq_ignore_ascii_case("dcm") {
                    files.push(path);
                }
            }
        }
    }

    files.sort();
    Ok(files)
}

/// Runs the residue workflow on a directory
///
/// 1. Collect `.dcm` files; more than two ends with `TooManyImages`
/// 2. Load both files with Gaussian smoothing (sigma 3)
/// 3. Identical positions end with `SamePosition`
/// 4. Write raw and smoothed differences to `<directory>/residues`
///
/// # Errors
///
/// Returns `NotEnoughImages` for fewer than two files; read, decode,
/// shape and I/O failures are passed through.
pub fn run(directory: &Path) -> Result<RunOutcome> {
    info!("Processing directory: {}", directory.display());

    let files = collect_dicom_files(directory)?;
    info!("Found {} DICOM files", files.len());

    if files.len() > IMAGE_COUNT {
        info!(
            "Expected {} DICOM files, found {}",
            IMAGE_COUNT,
            files.len()
        );
        return Ok(RunOutcome::TooManyImages { found: files.len() });
    }

    let (first, second) = match files.as_slice() {
        [first, second] => (first, second),
        _ => return Err(ResidueError::NotEnoughImages { found: files.len() }),
    };

    let first = FilteredImageRecord::open(first)?;
    let second = FilteredImageRecord::open(second)?;

    compare_records(directory, &first, &second)
}

/// Compares two loaded records and writes their residues
///
/// The output bit depth follows the first record's sample format.
pub fn compare_records(
    directory: &Path,
    first: &FilteredImageRecord,
    second: &FilteredImageRecord,
) -> Result<RunOutcome> {
    if check_position(first, second) {
        info!(
            "{} and {} share position {}",
            first.record.file_path.display(),
            second.record.file_path.display(),
            first.record.position
        );
        return Ok(RunOutcome::SamePosition {
            position: first.record.position,
        });
    }

    let unfiltered_residue = subtract(&first.record.pixels.data, &second.record.pixels.data)?;
    let filtered_residue = subtract(&first.smoothed, &second.smoothed)?;

    let output_dir = directory.join(OUTPUT_DIR);
    if !output_dir.is_dir() {
        debug!("Creating output directory {}", output_dir.display());
        fs::create_dir(&output_dir)?;
    }

    let format = first.record.pixels.format;
    let unfiltered = output_dir.join(UNFILTERED_RESIDUE);
    let filtered = output_dir.join(FILTERED_RESIDUE);
    write_residue_png(&unfiltered, &unfiltered_residue, format)?;
    // The unfiltered residue stays on disk if this write fails
    if let Err(e) = write_residue_png(&filtered, &filtered_residue, format) {
        warn!(
            "Failed to write {}, {} was already written",
            filtered.display(),
            unfiltered.display()
        );
        return Err(e);
    }
    info!("Wrote {} and {}", unfiltered.display(), filtered.display());

    Ok(RunOutcome::ResiduesWritten {
        unfiltered,
        filtered,
    })
}
