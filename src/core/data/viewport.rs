use crate::core::data::complex::Complex;
use crate::core::data::scalar::Scalar;

/// Region of the complex plane to render, as seen by the display surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport<T = f64> {
    pub width: u32,
    pub height: u32,
    /// Complex-plane units covered by one pixel.
    pub scale: T,
    pub center: Complex<T>,
}

impl<T: Scalar> Viewport<T> {
    #[must_use]
    pub fn new(width: u32, height: u32, scale: T, center: Complex<T>) -> Self {
        Self {
            width,
            height,
            scale,
            center,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Sampled grid size at the given stride.
    #[must_use]
    pub fn grid_size(&self, level: u32) -> (u32, u32) {
        (self.width / level, self.height / level)
    }
}
