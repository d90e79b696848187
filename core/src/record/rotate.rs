use super::ImageRecord;
use crate::error::Result;
use crate::processing::{rotate, DEFAULT_ANGLE};
use ndarray::ArrayD;
use std::path::PathBuf;

/// An [`ImageRecord`] with a rotated copy of its pixels
#[derive(Debug, Clone, PartialEq)]
pub struct RotatedImageRecord {
    pub record: ImageRecord,

    /// Rotation angle in degrees
    pub angle: f64,

    /// Rotated pixel values
    pub rotated: ArrayD<i32>,
}

impl RotatedImageRecord {
    /// Reads and rotates a DICOM file by 180 degrees
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::open_with_angle(path, DEFAULT_ANGLE)
    }

    /// Reads and rotates a DICOM file by `angle` degrees
    pub fn open_with_angle(path: impl Into<PathBuf>, angle: f64) -> Result<Self> {
        Self::from_record(ImageRecord::open(path)?, angle)
    }

    /// Rotates an already loaded record
    pub fn from_record(record: ImageRecord, angle: f64) -> Result<Self> {
        let rotated = rotate(&record.pixels.data, angle)?;
        Ok(Self {
            record,
            angle,
            rotated,
        })
    }
}
