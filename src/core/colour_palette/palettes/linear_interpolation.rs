use crate::core::colour_palette::errors::PaletteError;
use crate::core::data::colour::{Colour, Hsba};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    pub position: f64,
    pub colour: Colour,
}

impl ControlPoint {
    #[must_use]
    pub const fn new(position: f64, colour: Colour) -> Self {
        Self { position, colour }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Stop {
    position: f64,
    colour: Hsba,
}

/// Gradient through control points, interpolated component-wise in HSB space.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearInterpolationPalette {
    stops: Vec<Stop>,
}

impl LinearInterpolationPalette {
    /// Positions must be finite, strictly ascending, start at 0.0 and end at 1.0.
    pub fn new(control_points: &[ControlPoint]) -> Result<Self, PaletteError> {
        let (first, last) = match control_points {
            [first, .., last] => (first.position, last.position),
            _ => {
                return Err(PaletteError::TooFewControlPoints {
                    count: control_points.len(),
                });
            }
        };

        for (index, point) in control_points.iter().enumerate() {
            if !(0.0..=1.0).contains(&point.position) {
                return Err(PaletteError::PositionOutOfRange {
                    index,
                    position: point.position,
                });
            }
        }

        for (index, pair) in control_points.windows(2).enumerate() {
            if pair[1].position <= pair[0].position {
                return Err(PaletteError::PositionsNotAscending {
                    index: index + 1,
                    position: pair[1].position,
                    previous: pair[0].position,
                });
            }
        }

        if first != 0.0 || last != 1.0 {
            return Err(PaletteError::PositionsDoNotSpanUnitRange { first, last });
        }

        let stops = control_points
            .iter()
            .map(|point| Stop {
                position: point.position,
                colour: point.colour.to_hsba(),
            })
            .collect();

        Ok(Self { stops })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Fractions are expected in ascending order, which lets the bracketing
    /// search move a single cursor forward. Out-of-order input restarts the walk.
    #[must_use]
    pub fn generate(&self, fractions: &[f64]) -> Vec<Colour> {
        let last_pair = self.stops.len() - 2;
        let mut cursor = 0;

        fractions
            .iter()
            .map(|&fraction| {
                if fraction < self.stops[cursor].position {
                    cursor = 0;
                }

                while cursor < last_pair && fraction > self.stops[cursor + 1].position {
                    cursor += 1;
                }

                let low = &self.stops[cursor];
                let high = &self.stops[cursor + 1];
                let t = ((fraction - low.position) / (high.position - low.position)).clamp(0.0, 1.0);

                low.colour.lerp(high.colour, t).to_colour()
            })
            .collect()
    }
}
