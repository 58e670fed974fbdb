use std::sync::Arc;

use tracing::debug;

use crate::controllers::progressive::data::render_request::RenderRequest;
use crate::controllers::progressive::engine::RenderEngine;
use crate::controllers::progressive::errors::RenderEngineError;
use crate::controllers::progressive::generation::GenerationHandle;
use crate::controllers::progressive::ports::frame_sink::FrameSink;
use crate::controllers::progressive::types::GenerationOutcome;
use crate::core::data::scalar::Scalar;

/// Owner of the one generation a display surface cares about.
///
/// Every new request supersedes the previous one: its generation is stopped
/// before the new one starts, so at most one generation per renderer is ever
/// delivering frames.
pub struct ViewportRenderer {
    engine: RenderEngine,
    current: Option<GenerationHandle>,
}

impl ViewportRenderer {
    #[must_use]
    pub fn new(engine: RenderEngine) -> Self {
        Self {
            engine,
            current: None,
        }
    }

    #[must_use]
    pub fn engine(&self) -> &RenderEngine {
        &self.engine
    }

    /// Stops the current generation and starts one for `request`.
    ///
    /// Returns the superseded handle, already stopped, so the caller may join
    /// it if it needs to know the old generation has gone quiet.
    pub fn render<T: Scalar>(
        &mut self,
        request: RenderRequest<T>,
        sink: Arc<dyn FrameSink>,
    ) -> Result<Option<GenerationHandle>, RenderEngineError> {
        let previous = self.stop();
        let handle = self.engine.start(request, sink)?;

        debug!(generation = handle.id(), "viewport render started");
        self.current = Some(handle);

        Ok(previous)
    }

    /// Stops and releases the current generation, if any.
    pub fn stop(&mut self) -> Option<GenerationHandle> {
        let handle = self.current.take()?;
        handle.stop();

        Some(handle)
    }

    #[must_use]
    pub fn current(&self) -> Option<&GenerationHandle> {
        self.current.as_ref()
    }

    /// Blocks until the current generation finishes on its own.
    pub fn wait(&mut self) -> Option<GenerationOutcome> {
        self.current.take().map(GenerationHandle::join)
    }
}

impl Drop for ViewportRenderer {
    fn drop(&mut self) {
        if let Some(handle) = self.current.take() {
            handle.stop();
        }
    }
}
