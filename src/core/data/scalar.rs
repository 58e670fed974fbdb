use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

/// Numeric type used for complex-plane coordinates.
///
/// `f64` is the default. `f32` trades zoom depth for speed. An arbitrary
/// precision decimal can implement this trait to push the zoom limit further
/// without touching the evaluator or the engine.
pub trait Scalar:
    Clone
    + Debug
    + PartialOrd
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
{
    fn from_i64(value: i64) -> Self;

    fn from_f64(value: f64) -> Self;
}

impl Scalar for f64 {
    #[inline]
    fn from_i64(value: i64) -> Self {
        value as f64
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }
}

impl Scalar for f32 {
    #[inline]
    fn from_i64(value: i64) -> Self {
        value as f32
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }
}
