use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaletteError {
    #[error("a gradient needs at least two control points, got {count}")]
    TooFewControlPoints { count: usize },
    #[error("control point {index} has position {position}, expected a value in [0, 1]")]
    PositionOutOfRange { index: usize, position: f64 },
    #[error("control point {index} at {position} does not come after {previous}")]
    PositionsNotAscending {
        index: usize,
        position: f64,
        previous: f64,
    },
    #[error("gradient must start at 0.0 and end at 1.0, got {first}..{last}")]
    PositionsDoNotSpanUnitRange { first: f64, last: f64 },
    #[error("power transform exponent must be finite and positive, got {exponent}")]
    InvalidExponent { exponent: f64 },
    #[error("hue factor must be finite, got {hue_factor}")]
    InvalidHueFactor { hue_factor: f64 },
    #[error("unknown palette '{0}'")]
    UnknownKind(String),
}
