use thiserror::Error;

use crate::core::colour_palette::palette::ColourPalette;
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::data::scalar::Scalar;
use crate::core::fractals::fractal_kinds::FractalKinds;

pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;
pub const DEFAULT_JULIA_CONSTANT: (f64, f64) = (-0.8, 0.156);

/// Colour of points that never escape.
pub const NEVER_ESCAPES: Colour = Colour::BLACK;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,
    #[error("palette produced {actual} colours for {expected} iterations")]
    PaletteLengthMismatch { expected: usize, actual: usize },
}

/// Fractal parameters plus the iteration-to-colour lookup table built from a
/// palette. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings<T = f64> {
    julia_constant: Option<Complex<T>>,
    max_iterations: u32,
    palette_table: Vec<Colour>,
}

impl<T: Scalar> RenderSettings<T> {
    pub fn mandelbrot(max_iterations: u32, palette: &ColourPalette) -> Result<Self, SettingsError> {
        Self::new(None, max_iterations, palette)
    }

    pub fn julia(
        constant: Complex<T>,
        max_iterations: u32,
        palette: &ColourPalette,
    ) -> Result<Self, SettingsError> {
        Self::new(Some(constant), max_iterations, palette)
    }

    /// `palette_table[i]` is the colour for a point that escaped after `i`
    /// iterations; the extra slot at `max_iterations` is [`NEVER_ESCAPES`].
    pub fn new(
        julia_constant: Option<Complex<T>>,
        max_iterations: u32,
        palette: &ColourPalette,
    ) -> Result<Self, SettingsError> {
        if max_iterations == 0 {
            return Err(SettingsError::ZeroMaxIterations);
        }

        let fractions: Vec<f64> = (0..max_iterations)
            .map(|i| f64::from(i) / f64::from(max_iterations))
            .collect();

        let mut palette_table = palette.generate(&fractions);

        if palette_table.len() != fractions.len() {
            return Err(SettingsError::PaletteLengthMismatch {
                expected: fractions.len(),
                actual: palette_table.len(),
            });
        }

        palette_table.push(NEVER_ESCAPES);

        Ok(Self {
            julia_constant,
            max_iterations,
            palette_table,
        })
    }

    #[must_use]
    pub fn julia_constant(&self) -> Option<&Complex<T>> {
        self.julia_constant.as_ref()
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn palette_table(&self) -> &[Colour] {
        &self.palette_table
    }

    #[must_use]
    pub fn fractal_kind(&self) -> FractalKinds {
        match self.julia_constant {
            Some(_) => FractalKinds::Julia,
            None => FractalKinds::Mandelbrot,
        }
    }

    #[inline]
    #[must_use]
    pub fn colour_for(&self, iterations: u32) -> Colour {
        self.palette_table[iterations.min(self.max_iterations) as usize]
    }
}
