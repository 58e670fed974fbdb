use crate::core::colour_palette::errors::PaletteError;
use crate::core::colour_palette::kinds::PaletteKinds;
use crate::core::colour_palette::palette::ColourPalette;
use crate::core::colour_palette::palettes::hue::{DEFAULT_HUE_FACTOR, HuePalette};
use crate::core::colour_palette::palettes::linear_interpolation::{
    ControlPoint, LinearInterpolationPalette,
};
use crate::core::colour_palette::palettes::power_transform::PowerTransformPalette;
use crate::core::data::colour::Colour;

pub const POWER_HUE_EXPONENT: f64 = 0.2;
pub const POWER_HUE_FACTOR: f64 = 5.0;

/// Deep blue through white and orange to black.
pub const GRADIENT_CONTROL_POINTS: [ControlPoint; 6] = [
    ControlPoint::new(0.00, Colour::opaque(0, 7, 100)),
    ControlPoint::new(0.16, Colour::opaque(32, 107, 203)),
    ControlPoint::new(0.42, Colour::opaque(237, 255, 255)),
    ControlPoint::new(0.64, Colour::opaque(255, 170, 0)),
    ControlPoint::new(0.89, Colour::opaque(0, 2, 0)),
    ControlPoint::new(1.00, Colour::opaque(0, 0, 70)),
];

/// Optional overrides for the preset parameters. `None` keeps the preset.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaletteOptions {
    pub hue_factor: Option<f64>,
    pub exponent: Option<f64>,
}

pub fn palette_factory(
    kind: PaletteKinds,
    options: PaletteOptions,
) -> Result<ColourPalette, PaletteError> {
    let palette = match kind {
        PaletteKinds::Hue => {
            HuePalette::new(options.hue_factor.unwrap_or(DEFAULT_HUE_FACTOR))?.into()
        }
        PaletteKinds::PowerHue => {
            let hue = HuePalette::new(options.hue_factor.unwrap_or(POWER_HUE_FACTOR))?;
            PowerTransformPalette::new(options.exponent.unwrap_or(POWER_HUE_EXPONENT), hue.into())?
                .into()
        }
        PaletteKinds::Gradient => {
            let gradient = LinearInterpolationPalette::new(&GRADIENT_CONTROL_POINTS)?.into();

            match options.exponent {
                Some(exponent) => PowerTransformPalette::new(exponent, gradient)?.into(),
                None => gradient,
            }
        }
    };

    Ok(palette)
}
