use crate::controllers::progressive::data::frame_data::FrameData;

/// Receives the frames of a generation, coarse to fine, on the generation's
/// coordinating thread.
pub trait FrameSink: Send + Sync {
    fn submit(&self, frame: FrameData);
}

impl<F> FrameSink for F
where
    F: Fn(FrameData) + Send + Sync,
{
    fn submit(&self, frame: FrameData) {
        self(frame)
    }
}
