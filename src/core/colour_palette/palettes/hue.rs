use crate::core::colour_palette::errors::PaletteError;
use crate::core::data::colour::{Colour, Hsba};

pub const DEFAULT_HUE_FACTOR: f64 = 1.0;

/// Walks the colour wheel at full saturation and brightness.
#[derive(Debug, Clone, PartialEq)]
pub struct HuePalette {
    hue_factor: f64,
}

impl HuePalette {
    pub fn new(hue_factor: f64) -> Result<Self, PaletteError> {
        if !hue_factor.is_finite() {
            return Err(PaletteError::InvalidHueFactor { hue_factor });
        }

        Ok(Self { hue_factor })
    }

    #[must_use]
    pub fn hue_factor(&self) -> f64 {
        self.hue_factor
    }

    #[must_use]
    pub fn generate(&self, fractions: &[f64]) -> Vec<Colour> {
        fractions
            .iter()
            .map(|fraction| {
                Hsba::new((fraction * self.hue_factor).rem_euclid(1.0), 1.0, 1.0, 1.0).to_colour()
            })
            .collect()
    }
}

impl Default for HuePalette {
    fn default() -> Self {
        Self {
            hue_factor: DEFAULT_HUE_FACTOR,
        }
    }
}
