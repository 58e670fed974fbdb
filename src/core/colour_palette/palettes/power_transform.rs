use crate::core::colour_palette::errors::PaletteError;
use crate::core::colour_palette::palette::ColourPalette;
use crate::core::data::colour::Colour;

/// Raises every fraction to `exponent` before handing it to the wrapped
/// palette. Exponents below 1 spend more of the palette on low iteration
/// counts.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerTransformPalette {
    exponent: f64,
    chained: Box<ColourPalette>,
}

impl PowerTransformPalette {
    pub fn new(exponent: f64, chained: ColourPalette) -> Result<Self, PaletteError> {
        if !exponent.is_finite() || exponent <= 0.0 {
            return Err(PaletteError::InvalidExponent { exponent });
        }

        Ok(Self {
            exponent,
            chained: Box::new(chained),
        })
    }

    #[must_use]
    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    #[must_use]
    pub fn chained(&self) -> &ColourPalette {
        &self.chained
    }

    #[must_use]
    pub fn generate(&self, fractions: &[f64]) -> Vec<Colour> {
        if self.exponent == 1.0 {
            return self.chained.generate(fractions);
        }

        let transformed: Vec<f64> = fractions.iter().map(|f| f.powf(self.exponent)).collect();
        self.chained.generate(&transformed)
    }
}
