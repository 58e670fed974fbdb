pub mod adapters;
pub mod controllers;
pub mod core;
pub mod presenters;

pub use crate::controllers::cli::file_render::{FileRenderController, FileRenderError};
pub use crate::controllers::progressive::{
    FrameData, FrameSink, GenerationHandle, GenerationOutcome, GenerationState, RenderEngine,
    RenderEngineError, RenderRequest, ViewportRenderer,
};
pub use crate::core::colour_palette::factory::{PaletteOptions, palette_factory};
pub use crate::core::colour_palette::kinds::PaletteKinds;
pub use crate::core::colour_palette::palette::ColourPalette;
pub use crate::core::data::colour::{Colour, Hsba};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::render_config::RenderConfig;
pub use crate::core::data::render_settings::RenderSettings;
pub use crate::core::data::viewport::Viewport;
pub use crate::presenters::file::ppm::PpmFilePresenter;
