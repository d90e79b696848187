use crate::error::{ResidueError, Result};
use log::debug;
use ndarray::{stack, Array2, ArrayD, ArrayView2, Axis, Ix2};

/// Default rotation angle in degrees
pub const DEFAULT_ANGLE: f64 = 180.0;

/// Rotates an image in the plane of its first two axes
///
/// The output plane is enlarged so the whole rotated input fits. Positive
/// angles rotate counter-clockwise as displayed (row 0 at the top).
/// Multiples of 90 degrees are exact index permutations; other angles use
/// bilinear interpolation with zero fill outside the input. 3D arrays are
/// rotated in the axis 0 / axis 1 plane once per index of the last axis,
/// so a `[frames, rows, cols]` volume turns in its frames/rows plane. The
/// angle is not range-checked.
///
/// # Errors
///
/// Returns `InvalidValue` for arrays that are not 2D or 3D, or for a
/// non-finite angle
pub fn rotate(input: &ArrayD<i32>, angle: f64) -> Result<ArrayD<i32>> {
    if !angle.is_finite() {
        return Err(ResidueError::InvalidValue(format!(
            "Rotation angle must be finite, got {}",
            angle
        )));
    }

    match input.ndim() {
        2 => {
            let plane = input.view().into_dimensionality::<Ix2>()?;
            Ok(rotate_plane(plane, angle).into_dyn())
        }
        3 => {
            let planes = input
                .axis_iter(Axis(2))
                .map(|plane| -> Result<Array2<i32>> {
                    Ok(rotate_plane(plane.into_dimensionality::<Ix2>()?, angle))
                })
                .collect::<Result<Vec<_>>>()?;
            let views: Vec<_> = planes.iter().map(|p| p.view()).collect();
            Ok(stack(Axis(2), &views)?.into_dyn())
        }
        n => Err(ResidueError::InvalidValue(format!(
            "Rotation needs a 2D or 3D array, got {} dimensions",
            n
        ))),
    }
}

fn rotate_plane(plane: ArrayView2<i32>, angle: f64) -> Array2<i32> {
    let normalized = angle.rem_euclid(360.0);

    if normalized == 0.0 {
        plane.to_owned()
    } else if normalized == 90.0 {
        let mut view = plane.reversed_axes();
        view.invert_axis(Axis(0));
        view.to_owned()
    } else if normalized == 180.0 {
        let mut view = plane;
        view.invert_axis(Axis(0));
        view.invert_axis(Axis(1));
        view.to_owned()
    } else if normalized == 270.0 {
        let mut view = plane.reversed_axes();
        view.invert_axis(Axis(1));
        view.to_owned()
    } else {
        rotate_bilinear(plane, normalized)
    }
}

fn rotate_bilinear(plane: ArrayView2<i32>, angle: f64) -> Array2<i32> {
    let (rows, cols) = plane.dim();
    let (sin, cos) = angle.to_radians().sin_cos();

    let out_rows = (rows as f64 * cos.abs() + cols as f64 * sin.abs() + 0.5) as usize;
    let out_cols = (cols as f64 * cos.abs() + rows as f64 * sin.abs() + 0.5) as usize;
    debug!(
        "Rotating {}x{} plane by {} degrees into {}x{}",
        rows, cols, angle, out_rows, out_cols
    );

    let in_center = ((rows as f64 - 1.0) / 2.0, (cols as f64 - 1.0) / 2.0);
    let out_center = ((out_rows as f64 - 1.0) / 2.0, (out_cols as f64 - 1.0) / 2.0);

    Array2::from_shape_fn((out_rows, out_cols), |(r, c)| {
        let dr = r as f64 - out_center.0;
        let dc = c as f64 - out_center.1;
        let src_r = cos * dr + sin * dc + in_center.0;
        let src_c = -sin * dr + cos * dc + in_center.1;
        sample_bilinear(&plane, src_r, src_c).round() as i32
    })
}

fn sample_bilinear(plane: &ArrayView2<i32>, r: f64, c: f64) -> f64 {
    let (rows, cols) = plane.dim();
    let r = snap(r);
    let c = snap(c);
    let r0 = r.floor();
    let c0 = c.floor();
    let fr = r - r0;
    let fc = c - c0;

    let at = |rr: f64, cc: f64| -> f64 {
        if rr < 0.0 || cc < 0.0 || rr >= rows as f64 || cc >= cols as f64 {
            0.0
        } else {
            f64::from(plane[[rr as usize, cc as usize]])
        }
    };

    at(r0, c0) * (1.0 - fr) * (1.0 - fc)
        + at(r0, c0 + 1.0) * (1.0 - fr) * fc
        + at(r0 + 1.0, c0) * fr * (1.0 - fc)
        + at(r0 + 1.0, c0 + 1.0) * fr * fc
}

/// Absorbs floating point noise around integer coordinates
fn snap(x: f64) -> f64 {
    let rounded = x.round();
    if (x - rounded).abs() < 1e-9 {
        rounded
    } else {
        x
    }
}
