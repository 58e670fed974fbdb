pub mod actions;
pub mod colour_palette;
pub mod data;
pub mod fractals;
pub mod util;
