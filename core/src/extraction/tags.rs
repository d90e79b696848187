use dicom_core::dictionary::{DataDictionary, DataDictionaryEntry};
use dicom_core::Tag;
use dicom_dictionary_std::StandardDataDictionary;
use dicom_object::InMemDicomObject;

// SOP Tags
pub const SOP_CLASS_UID: Tag = Tag(0x0008, 0x0016);
pub const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);
pub const MODALITY: Tag = Tag(0x0008, 0x0060);

// Image Plane Tags
pub const IMAGE_POSITION_PATIENT: Tag = Tag(0x0020, 0x0032);

// Image Pixel Tags
pub const SAMPLES_PER_PIXEL: Tag = Tag(0x0028, 0x0002);
pub const PHOTOMETRIC_INTERPRETATION: Tag = Tag(0x0028, 0x0004);
pub const NUMBER_OF_FRAMES: Tag = Tag(0x0028, 0x0008);
pub const ROWS: Tag = Tag(0x0028, 0x0010);
pub const COLUMNS: Tag = Tag(0x0028, 0x0011);
pub const BITS_ALLOCATED: Tag = Tag(0x0028, 0x0100);
pub const BITS_STORED: Tag = Tag(0x0028, 0x0101);
pub const HIGH_BIT: Tag = Tag(0x0028, 0x0102);
pub const PIXEL_REPRESENTATION: Tag = Tag(0x0028, 0x0103);
pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);

/// Human-readable name of a tag, e.g. `ImagePositionPatient (0020,0032)`
pub fn tag_name(tag: Tag) -> String {
    match StandardDataDictionary.by_tag(tag) {
        Some(entry) => format!("{} {}", entry.alias(), tag),
        None => format!("{}", tag),
    }
}

/// Helper to get u16 value from DICOM tag
///
/// Returns `None` if the tag is not present or cannot be converted to u16
pub fn get_u16_value(dcm: &InMemDicomObject, tag: Tag) -> Option<u16> {
    dcm.element(tag)
        .ok()
        .and_then(|elem| elem.to_int::<u16>().ok())
}

/// Helper to get a multi-valued decimal from DICOM tag
///
/// Returns `None` if the tag is not present or its values are not numeric
pub fn get_f64_values(dcm: &InMemDicomObject, tag: Tag) -> Option<Vec<f64>> {
    dcm.element(tag)
        .ok()
        .and_then(|elem| elem.to_multi_float64().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom_core::{DataElement, PrimitiveValue, VR};

    #[test]
    fn test_tag_values() {
        assert_eq!(IMAGE_POSITION_PATIENT, Tag(0x0020, 0x0032));
        assert_eq!(BITS_ALLOCATED, Tag(0x0028, 0x0100));
        assert_eq!(PIXEL_REPRESENTATION, Tag(0x0028, 0x0103));
        assert_eq!(PIXEL_DATA, Tag(0x7FE0, 0x0010));
    }

    #[test]
    fn test_tag_name() {
        assert_eq!(
            tag_name(IMAGE_POSITION_PATIENT),
            "ImagePositionPatient (0020,0032)"
        );
    }

    #[test]
    fn test_typed_helpers() {
        let mut dcm = InMemDicomObject::new_empty();
        dcm.put(DataElement::new(ROWS, VR::US, PrimitiveValue::from(256_u16)));
        dcm.put(DataElement::new(
            IMAGE_POSITION_PATIENT,
            VR::DS,
            PrimitiveValue::Strs(vec!["0.5".to_string(), "-2".to_string(), "10.25".to_string()].into()),
        ));

        assert_eq!(get_u16_value(&dcm, ROWS), Some(256));
        assert_eq!(get_u16_value(&dcm, COLUMNS), None);
        assert_eq!(
            get_f64_values(&dcm, IMAGE_POSITION_PATIENT),
            Some(vec![0.5, -2.0, 10.25])
        );
        assert_eq!(get_f64_values(&dcm, COLUMNS), None);
    }
}
