use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use thiserror::Error;
use tracing::info;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::progressive::{
    FrameData, FrameSink, GenerationOutcome, RenderEngine, RenderEngineError, RenderRequest,
};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::scalar::Scalar;

#[derive(Debug, Error)]
pub enum FileRenderError {
    #[error(transparent)]
    Engine(#[from] RenderEngineError),
    #[error("render failed: {0}")]
    Failed(String),
    #[error("render was cancelled")]
    Cancelled,
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
}

/// Keeps only the final frame of a generation.
#[derive(Default)]
struct FinalFrameSink {
    frame: Mutex<Option<PixelBuffer>>,
}

impl FrameSink for FinalFrameSink {
    fn submit(&self, frame: FrameData) {
        if frame.is_final {
            *self.frame.lock().unwrap_or_else(PoisonError::into_inner) = Some(frame.image);
        }
    }
}

/// Renders one request to completion and hands the final image to a file
/// presenter.
pub struct FileRenderController<P: FilePresenterPort> {
    engine: RenderEngine,
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> FileRenderController<P> {
    pub fn new(engine: RenderEngine, presenter: P) -> Self {
        Self {
            engine,
            presenter,
            buffer: None,
        }
    }

    /// Runs every pass and keeps the stride-1 image. A viewport with no
    /// pixels completes without one.
    pub fn generate<T: Scalar>(
        &mut self,
        request: RenderRequest<T>,
    ) -> Result<GenerationOutcome, FileRenderError> {
        let sink = Arc::new(FinalFrameSink::default());
        let handle = self
            .engine
            .start(request, Arc::clone(&sink) as Arc<dyn FrameSink>)?;

        let outcome = handle.join();
        match &outcome {
            GenerationOutcome::Completed { .. } => {}
            GenerationOutcome::Cancelled { .. } => return Err(FileRenderError::Cancelled),
            GenerationOutcome::Failed { message, .. } => {
                return Err(FileRenderError::Failed(message.clone()));
            }
        }

        self.buffer = sink
            .frame
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        Ok(outcome)
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    /// Writes the last generated image. Returns whether there was one.
    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<bool, FileRenderError> {
        let Some(buffer) = &self.buffer else {
            return Ok(false);
        };

        let filepath = filepath.as_ref();
        self.presenter.present(buffer, filepath)?;
        info!(path = %filepath.display(), "image written");

        Ok(true)
    }
}
