//! Image records loaded from DICOM files
//!
//! [`ImageRecord`] holds what is read from one file. The filtered and
//! rotated variants own an `ImageRecord` and attach one derived pixel
//! array each.

mod filter;
mod rotate;

pub use filter::FilteredImageRecord;
pub use rotate::RotatedImageRecord;

use crate::error::Result;
use crate::extraction::{extract_image_position, extract_pixel_array};
use crate::types::{ImagePosition, PixelArray};
use dicom_object::{open_file, DefaultDicomObject};
use log::debug;
use std::path::PathBuf;

/// Pixel data and Image Position Patient of one DICOM file
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRecord {
    /// Path to the DICOM file
    pub file_path: PathBuf,

    /// Stored pixel values
    pub pixels: PixelArray,

    /// Image Position Patient
    pub position: ImagePosition,
}

impl ImageRecord {
    /// Reads a record from a DICOM file path
    ///
    /// # Errors
    ///
    /// - `DicomError` if the file cannot be read as DICOM
    /// - `TagNotFound` if Image Position Patient or Pixel Data is absent
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let obj = open_file(&path)?;
        Self::from_dicom(path, &obj)
    }

    /// Creates a record from an already-opened DICOM object
    pub fn from_dicom(path: PathBuf, obj: &DefaultDicomObject) -> Result<Self> {
        let position = extract_image_position(obj)?;
        let pixels = extract_pixel_array(obj)?;
        debug!(
            "Loaded {}: position {}, shape {:?}",
            path.display(),
            position,
            pixels.shape()
        );

        Ok(Self {
            file_path: path,
            pixels,
            position,
        })
    }
}

/// Anything that carries an Image Position Patient
pub trait HasPosition {
    fn position(&self) -> &ImagePosition;
}

impl HasPosition for ImageRecord {
    fn position(&self) -> &ImagePosition {
        &self.position
    }
}

impl HasPosition for FilteredImageRecord {
    fn position(&self) -> &ImagePosition {
        &self.record.position
    }
}

impl HasPosition for RotatedImageRecord {
    fn position(&self) -> &ImagePosition {
        &self.record.position
    }
}

/// Returns `true` if both records share the exact same position
pub fn check_position<A, B>(a: &A, b: &B) -> bool
where
    A: HasPosition + ?Sized,
    B: HasPosition + ?Sized,
{
    a.position() == b.position()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResidueError;
    use crate::test_utils::{image_object, write_image, write_object};
    use crate::types::SampleFormat;
    use ndarray::array;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_open_reads_pixels_and_position() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a.dcm");
        write_image(&path, Some([0.0, -10.5, 5.0]), &[2, 2], &[1, 2, 3, 4]);

        let record = ImageRecord::open(&path).unwrap();
        assert_eq!(record.file_path, path);
        assert_eq!(record.position, ImagePosition::new(0.0, -10.5, 5.0));
        assert_eq!(record.pixels.data, array![[1, 2], [3, 4]].into_dyn());
    }

    #[test]
    fn test_open_missing_position() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a.dcm");
        write_object(
            &path,
            image_object(None, &[1, 1], &[0], SampleFormat::unsigned16()),
        );

        let err = ImageRecord::open(&path).unwrap_err();
        assert!(matches!(err, ResidueError::TagNotFound(_)));
    }

    #[test]
    fn test_open_not_dicom() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a.dcm");
        fs::write(&path, b"This is not a DICOM file").unwrap();

        let err = ImageRecord::open(&path).unwrap_err();
        assert!(matches!(err, ResidueError::DicomError(_)));
    }

    #[test]
    fn test_check_position() {
        let temp_dir = TempDir::new().unwrap();
        let a = temp_dir.path().join("a.dcm");
        let b = temp_dir.path().join("b.dcm");
        let c = temp_dir.path().join("c.dcm");
        write_image(&a, Some([0.0, 0.0, 0.0]), &[1, 1], &[0]);
        write_image(&b, Some([0.0, 0.0, 0.0]), &[1, 1], &[9]);
        write_image(&c, Some([0.0, 0.0, 5.0]), &[1, 1], &[0]);

        let a = ImageRecord::open(a).unwrap();
        let b = FilteredImageRecord::open(b).unwrap();
        let c = RotatedImageRecord::open(c).unwrap();

        assert!(check_position(&a, &b));
        assert!(!check_position(&a, &c));
        assert!(!check_position(&b, &c));
    }
}
