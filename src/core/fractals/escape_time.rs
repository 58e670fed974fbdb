use crate::core::data::complex::Complex;
use crate::core::data::scalar::Scalar;

pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Counts iterations of `z = z² + c` starting from `z = point` until `|z|²`
/// exceeds 4 or `max_iterations` is reached.
///
/// `c` is `julia_constant` when given, otherwise the point itself (Mandelbrot).
/// A return value of `max_iterations` means the point never escaped.
#[must_use]
pub fn evaluate<T: Scalar>(
    point: &Complex<T>,
    julia_constant: Option<&Complex<T>>,
    max_iterations: u32,
) -> u32 {
    let addend = julia_constant.unwrap_or(point);
    let bailout = T::from_f64(ESCAPE_RADIUS_SQUARED);
    let mut z = point.clone();
    let mut iterations = 0;

    while iterations < max_iterations && z.magnitude_squared() <= bailout {
        z = z.clone() * z + addend.clone();
        iterations += 1;
    }

    iterations
}
