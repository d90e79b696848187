use crate::error::{ResidueError, Result};
use crate::types::SampleFormat;
use image::{GrayImage, ImageBuffer, ImageFormat, Luma};
use log::debug;
use ndarray::{Array2, ArrayD};
use std::path::Path;

/// Writes a residue array as a grayscale PNG
///
/// The PNG bit depth follows `format.bits_allocated` (8 or 16). Values are
/// stored modulo 2^bits, so negative differences land in two's complement
/// and are recovered exactly by [`read_residue_png`] with a signed format.
/// 3D arrays are written with their frames tiled top to bottom.
///
/// # Errors
///
/// Returns `UnsupportedSampleFormat` for arrays that are not 2D or 3D or
/// for bit depths other than 8 and 16
pub fn write_residue_png(path: &Path, residue: &ArrayD<i32>, format: SampleFormat) -> Result<()> {
    let (width, height) = tiled_dimensions(residue.shape())?;
    debug!(
        "Writing {}x{} {}-bit PNG to {}",
        width,
        height,
        format.bits_allocated,
        path.display()
    );

    match format.bits_allocated {
        8 => {
            let buf: Vec<u8> = residue.iter().map(|v| *v as u8).collect();
            let img = GrayImage::from_raw(width, height, buf)
                .ok_or_else(|| buffer_error(width, height))?;
            img.save_with_format(path, ImageFormat::Png)?;
        }
        16 => {
            let buf: Vec<u16> = residue.iter().map(|v| *v as u16).collect();
            let img = ImageBuffer::<Luma<u16>, Vec<u16>>::from_raw(width, height, buf)
                .ok_or_else(|| buffer_error(width, height))?;
            img.save_with_format(path, ImageFormat::Png)?;
        }
        bits => {
            return Err(ResidueError::UnsupportedSampleFormat(format!(
                "{} bits allocated",
                bits
            )))
        }
    }

    Ok(())
}

/// Reads a residue PNG back into a 2D array
///
/// Samples are reinterpreted as two's complement when `format.signed`.
pub fn read_residue_png(path: &Path, format: SampleFormat) -> Result<ArrayD<i32>> {
    let img = image::open(path)?;
    let (width, height) = (img.width() as usize, img.height() as usize);

    let values: Vec<i32> = match format.bits_allocated {
        8 => img
            .into_luma8()
            .into_raw()
            .into_iter()
            .map(|v| if format.signed { v as i8 as i32 } else { v as i32 })
            .collect(),
        16 => img
            .into_luma16()
            .into_raw()
            .into_iter()
            .map(|v| if format.signed { v as i16 as i32 } else { v as i32 })
            .collect(),
        bits => {
            return Err(ResidueError::UnsupportedSampleFormat(format!(
                "{} bits allocated",
                bits
            )))
        }
    };

    Ok(Array2::from_shape_vec((height, width), values)?.into_dyn())
}

fn tiled_dimensions(shape: &[usize]) -> Result<(u32, u32)> {
    let (rows, cols) = match shape {
        [rows, cols] => (*rows, *cols),
        [frames, rows, cols] => (frames * rows, *cols),
        _ => {
            return Err(ResidueError::UnsupportedSampleFormat(format!(
                "cannot write a {}-dimensional array as PNG",
                shape.len()
            )))
        }
    };

    let width = u32::try_from(cols)
        .map_err(|_| ResidueError::UnsupportedSampleFormat(format!("{} columns", cols)))?;
    let height = u32::try_from(rows)
        .map_err(|_| ResidueError::UnsupportedSampleFormat(format!("{} rows", rows)))?;
    Ok((width, height))
}

fn buffer_error(width: u32, height: u32) -> ResidueError {
    ResidueError::UnsupportedSampleFormat(format!(
        "pixel buffer does not match {}x{} image",
        width, height
    ))
}
