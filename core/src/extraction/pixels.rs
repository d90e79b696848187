use crate::error::{ResidueError, Result};
use crate::types::{PixelArray, SampleFormat};
use dicom_object::{DefaultDicomObject, InMemDicomObject};
use dicom_pixeldata::{ConvertOptions, ModalityLutOption, PixelDecoder};
use log::debug;
use ndarray::{ArrayD, IxDyn};

use super::tags::{
    get_u16_value, tag_name, BITS_ALLOCATED, BITS_STORED, PIXEL_DATA, PIXEL_REPRESENTATION,
    SAMPLES_PER_PIXEL,
};

/// Reads the sample layout from the Image Pixel module
///
/// Bits Stored defaults to Bits Allocated and Pixel Representation to
/// unsigned when absent.
pub fn extract_sample_format(dcm: &InMemDicomObject) -> Result<SampleFormat> {
    let bits_allocated = get_u16_value(dcm, BITS_ALLOCATED)
        .ok_or_else(|| ResidueError::TagNotFound(tag_name(BITS_ALLOCATED)))?;
    let bits_stored = get_u16_value(dcm, BITS_STORED).unwrap_or(bits_allocated);
    let signed = get_u16_value(dcm, PIXEL_REPRESENTATION).unwrap_or(0) == 1;

    Ok(SampleFormat::new(bits_allocated, bits_stored, signed))
}

/// Decodes the pixel data of a DICOM file into a [`PixelArray`]
///
/// Stored values are returned without the modality LUT, so the result
/// matches the raw pixel array of the file. Only single-sample
/// (grayscale) images are supported.
pub fn extract_pixel_array(obj: &DefaultDicomObject) -> Result<PixelArray> {
    if obj.element(PIXEL_DATA).is_err() {
        return Err(ResidueError::TagNotFound(tag_name(PIXEL_DATA)));
    }

    let samples_per_pixel = get_u16_value(obj, SAMPLES_PER_PIXEL).unwrap_or(1);
    if samples_per_pixel != 1 {
        return Err(ResidueError::UnsupportedSampleFormat(format!(
            "{} samples per pixel",
            samples_per_pixel
        )));
    }

    let format = extract_sample_format(obj)?;
    let decoded = obj.decode_pixel_data()?;

    let rows = decoded.rows() as usize;
    let cols = decoded.columns() as usize;
    let frames = decoded.number_of_frames() as usize;

    let options = ConvertOptions::new().with_modality_lut(ModalityLutOption::None);
    let values: Vec<i32> = decoded.to_vec_with_options(&options)?;

    let shape = if frames > 1 {
        vec![frames, rows, cols]
    } else {
        vec![rows, cols]
    };
    debug!("Decoded pixel array {:?} ({:?})", shape, format);

    let data = ArrayD::from_shape_vec(IxDyn(&shape), values)?;
    Ok(PixelArray::new(data, format))
}
