pub mod colour;
pub mod complex;
pub mod pixel_buffer;
pub mod render_config;
pub mod render_settings;
pub mod scalar;
pub mod viewport;
