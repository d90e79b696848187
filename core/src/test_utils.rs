//! Synthetic DICOM fixtures shared by unit tests

use crate::extraction::tags::*;
use crate::types::SampleFormat;
use dicom_core::{DataElement, PrimitiveValue, VR};
use dicom_object::{DefaultDicomObject, FileMetaTableBuilder, InMemDicomObject};
use std::path::Path;

/// MR Image Storage
pub const MR_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.4";

/// Explicit VR Little Endian
pub const EXPLICIT_VR_LE: &str = "1.2.840.10008.1.2.1";

/// Builds a grayscale image object
///
/// `shape` is `[rows, cols]` or `[frames, rows, cols]`; `values` are
/// stored sample values in row-major order.
pub fn image_object(
    position: Option<[f64; 3]>,
    shape: &[usize],
    values: &[i32],
    format: SampleFormat,
) -> InMemDicomObject {
    let (frames, rows, cols) = match shape {
        [rows, cols] => (1, *rows, *cols),
        [frames, rows, cols] => (*frames, *rows, *cols),
        _ => panic!("unsupported fixture shape {:?}", shape),
    };
    assert_eq!(values.len(), frames * rows * cols);

    let mut dcm = InMemDicomObject::new_empty();
    dcm.put(DataElement::new(
        SOP_CLASS_UID,
        VR::UI,
        PrimitiveValue::from(MR_IMAGE_STORAGE),
    ));
    dcm.put(DataElement::new(
        SOP_INSTANCE_UID,
        VR::UI,
        PrimitiveValue::from("1.2.826.0.1.3680043.2.1125.1"),
    ));
    dcm.put(DataElement::new(MODALITY, VR::CS, PrimitiveValue::from("MR")));

    if let Some([x, y, z]) = position {
        dcm.put(DataElement::new(
            IMAGE_POSITION_PATIENT,
            VR::DS,
            PrimitiveValue::Strs(vec![x.to_string(), y.to_string(), z.to_string()].into()),
        ));
    }

    dcm.put(DataElement::new(
        SAMPLES_PER_PIXEL,
        VR::US,
        PrimitiveValue::from(1_u16),
    ));
    dcm.put(DataElement::new(
        PHOTOMETRIC_INTERPRETATION,
        VR::CS,
        PrimitiveValue::from("MONOCHROME2"),
    ));
    if frames > 1 {
        dcm.put(DataElement::new(
            NUMBER_OF_FRAMES,
            VR::IS,
            PrimitiveValue::from(frames.to_string()),
        ));
    }
    dcm.put(DataElement::new(ROWS, VR::US, PrimitiveValue::from(rows as u16)));
    dcm.put(DataElement::new(COLUMNS, VR::US, PrimitiveValue::from(cols as u16)));
    dcm.put(DataElement::new(
        BITS_ALLOCATED,
        VR::US,
        PrimitiveValue::from(format.bits_allocated),
    ));
    dcm.put(DataElement::new(
        BITS_STORED,
        VR::US,
        PrimitiveValue::from(format.bits_stored),
    ));
    dcm.put(DataElement::new(
        HIGH_BIT,
        VR::US,
        PrimitiveValue::from(format.bits_stored - 1),
    ));
    dcm.put(DataElement::new(
        PIXEL_REPRESENTATION,
        VR::US,
        PrimitiveValue::from(u16::from(format.signed)),
    ));

    let pixel_data = if format.bits_allocated == 8 {
        let bytes: Vec<u8> = values.iter().map(|v| *v as u8).collect();
        DataElement::new(PIXEL_DATA, VR::OB, PrimitiveValue::from(bytes))
    } else {
        let words: Vec<u16> = values.iter().map(|v| *v as u16).collect();
        DataElement::new(PIXEL_DATA, VR::OW, PrimitiveValue::U16(words.into()))
    };
    dcm.put(pixel_data);

    dcm
}

/// Wraps an object with an Explicit VR Little Endian file meta group
pub fn file_object(dcm: InMemDicomObject) -> DefaultDicomObject {
    dcm.with_meta(
        FileMetaTableBuilder::new()
            .transfer_syntax(EXPLICIT_VR_LE)
            .media_storage_sop_class_uid(MR_IMAGE_STORAGE)
            .media_storage_sop_instance_uid("1.2.826.0.1.3680043.2.1125.1"),
    )
    .unwrap()
}

/// Writes a 16-bit unsigned single-frame image to `path`
pub fn write_image(path: &Path, position: Option<[f64; 3]>, shape: &[usize], values: &[i32]) {
    write_object(
        path,
        image_object(position, shape, values, SampleFormat::unsigned16()),
    );
}

/// Writes an arbitrary object as a DICOM file
pub fn write_object(path: &Path, dcm: InMemDicomObject) {
    file_object(dcm).write_to_file(path).unwrap();
}
