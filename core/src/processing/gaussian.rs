use crate::error::{ResidueError, Result};
use log::debug;
use ndarray::{ArrayD, Axis};

/// Default smoothing parameter
pub const DEFAULT_SIGMA: f64 = 3.0;

/// Kernel half-width in standard deviations
pub const TRUNCATE: f64 = 4.0;

/// Axes with a sigma at or below this are left untouched
const MIN_SIGMA: f64 = 1e-15;

/// Largest kernel radius accepted before smoothing fails
pub const MAX_RADIUS: usize = 1 << 20;

/// Below this length a plain running sum is used
const PAIRWISE_UNROLL: usize = 8;

/// Block size of the 8-way unrolled sum
const PAIRWISE_BLOCK: usize = 128;

/// Gaussian smoothing over every axis of an integer array
///
/// Applies a separable 1D Gaussian along each axis in turn. The kernel
/// radius is `round(TRUNCATE * sigma)` and borders are handled by
/// half-sample reflection (`d c b a | a b c d | d c b a`). Each pass is
/// truncated toward zero before the next axis, the way an integer output
/// buffer would store it, so a pass never leaves the input's value range.
///
/// A sigma that is not strictly positive (including NaN) leaves the input
/// unchanged.
///
/// # Errors
///
/// Returns `InvalidValue` when the kernel radius would exceed
/// [`MAX_RADIUS`], which includes an infinite sigma
pub fn gaussian_filter(input: &ArrayD<i32>, sigma: f64) -> Result<ArrayD<i32>> {
    if !(sigma > MIN_SIGMA) {
        debug!("Skipping Gaussian smoothing for sigma {}", sigma);
        return Ok(input.clone());
    }

    let radius = kernel_radius(sigma)?;
    let kernel = gaussian_kernel(sigma, radius);
    debug!(
        "Gaussian smoothing: sigma {}, radius {}, {} axes",
        sigma,
        radius,
        input.ndim()
    );

    let mut data = input.mapv(f64::from);
    for axis in 0..data.ndim() {
        data = convolve_axis(&data, &kernel, Axis(axis));
    }

    Ok(data.mapv(|v| v as i32))
}

/// Kernel radius `round(TRUNCATE * sigma)`, bounded by [`MAX_RADIUS`]
fn kernel_radius(sigma: f64) -> Result<usize> {
    let radius = (TRUNCATE * sigma + 0.5).floor();
    if radius > MAX_RADIUS as f64 {
        return Err(ResidueError::InvalidValue(format!(
            "Gaussian sigma {} needs a kernel radius above {}",
            sigma, MAX_RADIUS
        )));
    }
    Ok(radius as usize)
}

/// Normalized 1D Gaussian kernel of width `2 * radius + 1`
pub fn gaussian_kernel(sigma: f64, radius: usize) -> Vec<f64> {
    let coeff = -0.5 / (sigma * sigma);
    let mut kernel: Vec<f64> = (0..=2 * radius)
        .map(|i| {
            let x = i as f64 - radius as f64;
            (coeff * (x * x)).exp()
        })
        .collect();

    let sum = pairwise_sum(&kernel);
    for val in &mut kernel {
        *val /= sum;
    }

    kernel
}

/// Pairwise summation with an 8-way unrolled base case
fn pairwise_sum(values: &[f64]) -> f64 {
    let n = values.len();
    if n < PAIRWISE_UNROLL {
        values.iter().fold(0.0, |acc, v| acc + v)
    } else if n <= PAIRWISE_BLOCK {
        let mut r = [0.0; PAIRWISE_UNROLL];
        r.copy_from_slice(&values[..PAIRWISE_UNROLL]);
        let blocks_end = n - n % PAIRWISE_UNROLL;
        for chunk in values[PAIRWISE_UNROLL..blocks_end].chunks_exact(PAIRWISE_UNROLL) {
            for (acc, v) in r.iter_mut().zip(chunk) {
                *acc += v;
            }
        }
        let head = ((r[0] + r[1]) + (r[2] + r[3])) + ((r[4] + r[5]) + (r[6] + r[7]));
        values[blocks_end..].iter().fold(head, |acc, v| acc + v)
    } else {
        let mut half = n / 2;
        half -= half % PAIRWISE_UNROLL;
        pairwise_sum(&values[..half]) + pairwise_sum(&values[half..])
    }
}

fn convolve_axis(input: &ArrayD<f64>, kernel: &[f64], axis: Axis) -> ArrayD<f64> {
    let radius = kernel.len() / 2;
    let mut output = ArrayD::zeros(input.raw_dim());

    for (lane_in, mut lane_out) in input.lanes(axis).into_iter().zip(output.lanes_mut(axis)) {
        let len = lane_in.len();
        for i in 0..len {
            // Symmetric kernel: pair up taps on both sides of the centre
            let mut acc = lane_in[i] * kernel[radius];
            for j in 1..=radius {
                let after = lane_in[reflect_index(i as isize + j as isize, len)];
                let before = lane_in[reflect_index(i as isize - j as isize, len)];
                acc += (after + before) * kernel[radius + j];
            }
            lane_out[i] = acc.trunc();
        }
    }

    output
}

/// Maps an out-of-range index back into `0..len` by half-sample reflection
fn reflect_index(index: isize, len: usize) -> usize {
    let period = 2 * len as isize;
    let m = index.rem_euclid(period) as usize;
    if m < len {
        m
    } else {
        2 * len - 1 - m
    }
}
