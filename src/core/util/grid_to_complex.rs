use crate::core::data::complex::Complex;
use crate::core::data::scalar::Scalar;
use crate::core::data::viewport::Viewport;

/// Maps a sampled grid coordinate at stride `level` to its point in the
/// complex plane.
///
/// The offset from the viewport centre is taken in whole display pixels
/// (`x * level - width / 2`) before it is scaled. Grid cell `(x, y)` at stride
/// `2 * level` and cell `(2x, 2y)` at stride `level` therefore produce the same
/// integer offset and the same point, bit for bit.
#[must_use]
pub fn grid_to_complex<T: Scalar>(x: u32, y: u32, level: u32, viewport: &Viewport<T>) -> Complex<T> {
    let offset_x = i64::from(x) * i64::from(level) - i64::from(viewport.width / 2);
    let offset_y = i64::from(y) * i64::from(level) - i64::from(viewport.height / 2);

    Complex {
        real: T::from_i64(offset_x) * viewport.scale.clone() + viewport.center.real.clone(),
        imag: T::from_i64(offset_y) * viewport.scale.clone() + viewport.center.imag.clone(),
    }
}
