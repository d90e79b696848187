use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Image Position Patient (0020,0032)
///
/// Coordinates in mm of the upper-left voxel of an image, in the
/// patient coordinate system. Equality is exact: two positions are the
/// same only if every component compares equal as `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImagePosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl ImagePosition {
    /// Creates a new ImagePosition
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Builds a position from a decoded multi-valued DS element
    ///
    /// # Errors
    ///
    /// Returns an error unless exactly three values are given
    pub fn from_values(values: &[f64]) -> Result<Self, String> {
        match values {
            [x, y, z] => Ok(Self::new(*x, *y, *z)),
            _ => Err(format!(
                "ImagePositionPatient must have 3 values, got {}",
                values.len()
            )),
        }
    }

    /// Parses a position from string
    ///
    /// Accepts formats like:
    /// - "0\\0\\5"
    /// - "-125.0 -130.5 12.25"
    /// - "[0, 0, 5]"
    /// - Exponential notation: "1e-3\\0\\0"
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not hold exactly three numbers
    pub fn parse(s: &str) -> Result<Self, String> {
        static REGEX: OnceLock<Regex> = OnceLock::new();
        let re = REGEX.get_or_init(|| {
            Regex::new(r"[-+]?\d*\.?\d+(?:[eE][-+]?\d+)?").expect("Failed to compile regex")
        });

        let values = re
            .find_iter(s)
            .map(|m| {
                m.as_str()
                    .parse::<f64>()
                    .map_err(|e| format!("Failed to parse position value '{}': {}", m.as_str(), e))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_values(&values)
            .map_err(|_| format!("Failed to parse ImagePositionPatient from '{}'", s))
    }
}

impl fmt::Display for ImagePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
