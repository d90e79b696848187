use thiserror::Error;

/// Result type for dcmresidue operations
pub type Result<T> = std::result::Result<T, ResidueError>;

/// Error types for dcmresidue operations
///
/// The "too many images" and "same position" conditions are not errors;
/// they are reported through [`crate::pipeline::RunOutcome`].
#[derive(Error, Debug)]
pub enum ResidueError {
    /// DICOM reading error
    #[error("DICOM error: {0}")]
    DicomError(String),

    /// Tag not found in DICOM file
    #[error("Tag not found: {0}")]
    TagNotFound(String),

    /// Invalid tag value or parameter
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Pixel data missing or undecodable
    #[error("Pixel data error: {0}")]
    PixelDataError(String),

    /// Residue operands do not share a shape
    #[error("Shape mismatch: {left:?} vs {right:?}")]
    ShapeMismatch { left: Vec<usize>, right: Vec<usize> },

    /// Fewer than two DICOM files in the input directory
    #[error("Expected 2 DICOM files, found {found}")]
    NotEnoughImages { found: usize },

    /// Pixel layout the PNG writer cannot represent
    #[error("Unsupported sample format: {0}")]
    UnsupportedSampleFormat(String),

    /// PNG encoding/decoding error
    #[error("Image error: {0}")]
    ImageError(#[from] image::ImageError),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

// Convert dicom-object errors
impl From<dicom_object::ReadError> for ResidueError {
    fn from(e: dicom_object::ReadError) -> Self {
        ResidueError::DicomError(format!("{}", e))
    }
}

impl From<dicom_core::value::ConvertValueError> for ResidueError {
    fn from(e: dicom_core::value::ConvertValueError) -> Self {
        ResidueError::InvalidValue(format!("{}", e))
    }
}

impl From<dicom_pixeldata::Error> for ResidueError {
    fn from(e: dicom_pixeldata::Error) -> Self {
        ResidueError::PixelDataError(format!("{}", e))
    }
}

impl From<ndarray::ShapeError> for ResidueError {
    fn from(e: ndarray::ShapeError) -> Self {
        ResidueError::PixelDataError(format!("{}", e))
    }
}
