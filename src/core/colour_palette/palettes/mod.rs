pub mod hue;
pub mod linear_interpolation;
pub mod power_transform;
