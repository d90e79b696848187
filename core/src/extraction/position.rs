use crate::error::{ResidueError, Result};
use crate::types::ImagePosition;
use dicom_object::InMemDicomObject;

use super::tags::{get_f64_values, tag_name, IMAGE_POSITION_PATIENT};

/// Extracts Image Position Patient from a DICOM object
///
/// # Algorithm
///
/// 1. Read the element as a multi-valued decimal
/// 2. Fail with `TagNotFound` if the element is absent
/// 3. Otherwise fall back to parsing the raw string
/// 4. Require exactly three values
pub fn extract_image_position(dcm: &InMemDicomObject) -> Result<ImagePosition> {
    if let Some(values) = get_f64_values(dcm, IMAGE_POSITION_PATIENT) {
        return ImagePosition::from_values(&values).map_err(ResidueError::InvalidValue);
    }

    let elem = dcm
        .element(IMAGE_POSITION_PATIENT)
        .map_err(|_| ResidueError::TagNotFound(tag_name(IMAGE_POSITION_PATIENT)))?;
    let raw = elem.to_str()?;
    ImagePosition::parse(&raw).map_err(ResidueError::InvalidValue)
}
