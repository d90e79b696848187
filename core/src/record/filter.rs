use super::ImageRecord;
use crate::error::Result;
use crate::processing::{gaussian_filter, DEFAULT_SIGMA};
use ndarray::ArrayD;
use std::path::PathBuf;

/// An [`ImageRecord`] with a Gaussian-smoothed copy of its pixels
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredImageRecord {
    pub record: ImageRecord,

    /// Smoothing parameter the record was built with
    pub sigma: f64,

    /// Smoothed pixel values, same shape as `record.pixels`
    pub smoothed: ArrayD<i32>,
}

impl FilteredImageRecord {
    /// Reads and smooths a DICOM file with the default sigma of 3
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::open_with_sigma(path, DEFAULT_SIGMA)
    }

    /// Reads and smooths a DICOM file with the given sigma
    ///
    /// Sigma is not range-checked; see [`gaussian_filter`].
    pub fn open_with_sigma(path: impl Into<PathBuf>, sigma: f64) -> Result<Self> {
        Self::from_record(ImageRecord::open(path)?, sigma)
    }

    /// Smooths an already loaded record
    pub fn from_record(record: ImageRecord, sigma: f64) -> Result<Self> {
        let smoothed = gaussian_filter(&record.pixels.data, sigma)?;
        Ok(Self {
            record,
            sigma,
            smoothed,
        })
    }
}
