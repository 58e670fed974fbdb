use std::time::Duration;

use crate::core::data::pixel_buffer::PixelBuffer;

/// One delivered pass of a generation.
#[derive(Debug, Clone)]
pub struct FrameData {
    pub generation: u64,
    /// Sampling stride this image was computed at.
    pub level: u32,
    pub image: PixelBuffer,
    pub is_final: bool,
    pub render_duration: Duration,
}
