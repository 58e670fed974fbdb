//! Progressive, cancellable rendering of a viewport.
//!
//! Each generation renders the same viewport at a sequence of sampling
//! strides, coarse to fine, reusing the pixels of the previous pass.
//!
//! # Architecture
//!
//! - **Input**: `RenderRequest` snapshots of viewport and settings
//! - **Output**: `FrameSink` trait for receiving the frame of each pass
//! - **Core**: passes are computed by `core::actions::render_pass`

pub mod data;
pub mod engine;
pub mod errors;
pub mod generation;
pub mod ports;
pub mod types;
pub mod viewport_renderer;

pub use data::frame_data::FrameData;
pub use data::render_request::RenderRequest;
pub use engine::RenderEngine;
pub use errors::RenderEngineError;
pub use generation::{GenerationHandle, run_generation};
pub use ports::frame_sink::FrameSink;
pub use types::{GenerationOutcome, GenerationState};
pub use viewport_renderer::ViewportRenderer;
