use crate::core::colour_palette::palettes::hue::HuePalette;
use crate::core::colour_palette::palettes::linear_interpolation::LinearInterpolationPalette;
use crate::core::colour_palette::palettes::power_transform::PowerTransformPalette;
use crate::core::data::colour::Colour;

/// Strategy turning normalised iteration fractions in `[0, 1]` into colours.
#[derive(Debug, Clone, PartialEq)]
pub enum ColourPalette {
    Hue(HuePalette),
    PowerTransform(PowerTransformPalette),
    LinearInterpolation(LinearInterpolationPalette),
}

impl ColourPalette {
    /// Returns exactly one colour per fraction, in input order.
    #[must_use]
    pub fn generate(&self, fractions: &[f64]) -> Vec<Colour> {
        match self {
            Self::Hue(palette) => palette.generate(fractions),
            Self::PowerTransform(palette) => palette.generate(fractions),
            Self::LinearInterpolation(palette) => palette.generate(fractions),
        }
    }
}

impl Default for ColourPalette {
    fn default() -> Self {
        Self::Hue(HuePalette::default())
    }
}

impl From<HuePalette> for ColourPalette {
    fn from(palette: HuePalette) -> Self {
        Self::Hue(palette)
    }
}

impl From<PowerTransformPalette> for ColourPalette {
    fn from(palette: PowerTransformPalette) -> Self {
        Self::PowerTransform(palette)
    }
}

impl From<LinearInterpolationPalette> for ColourPalette {
    fn from(palette: LinearInterpolationPalette) -> Self {
        Self::LinearInterpolation(palette)
    }
}
