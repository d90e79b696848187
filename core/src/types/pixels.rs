use ndarray::ArrayD;

/// Layout of the stored pixel samples of a DICOM image
///
/// Mirrors Bits Allocated (0028,0100), Bits Stored (0028,0101) and
/// Pixel Representation (0028,0103).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleFormat {
    pub bits_allocated: u16,
    pub bits_stored: u16,
    pub signed: bool,
}

impl SampleFormat {
    /// Creates a new SampleFormat
    pub fn new(bits_allocated: u16, bits_stored: u16, signed: bool) -> Self {
        Self {
            bits_allocated,
            bits_stored,
            signed,
        }
    }
}

#[cfg(test)]
impl SampleFormat {
    /// 16-bit unsigned samples
    pub fn unsigned16() -> Self {
        Self::new(16, 16, false)
    }

    /// 16-bit two's complement samples
    pub fn signed16() -> Self {
        Self::new(16, 16, true)
    }
}

/// Stored pixel values of one DICOM image
///
/// Values are kept as found in the file (no rescale slope/intercept).
/// Shape is `[rows, cols]` for single-frame images and
/// `[frames, rows, cols]` for multi-frame images.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelArray {
    pub data: ArrayD<i32>,
    pub format: SampleFormat,
}

impl PixelArray {
    /// Creates a new PixelArray
    pub fn new(data: ArrayD<i32>, format: SampleFormat) -> Self {
        Self { data, format }
    }

    /// Array shape
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::IxDyn;

    #[test]
    fn test_shape() {
        let single = PixelArray::new(ArrayD::zeros(IxDyn(&[4, 5])), SampleFormat::unsigned16());
        let multi = PixelArray::new(ArrayD::zeros(IxDyn(&[3, 4, 5])), SampleFormat::signed16());
        assert_eq!(single.shape(), &[4, 5]);
        assert_eq!(multi.shape(), &[3, 4, 5]);
        assert!(multi.format.signed);
    }
}
