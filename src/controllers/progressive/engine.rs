use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;

use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::debug;

use crate::controllers::progressive::data::render_request::RenderRequest;
use crate::controllers::progressive::errors::RenderEngineError;
use crate::controllers::progressive::generation::{
    GenerationHandle, GenerationStatus, run_generation,
};
use crate::controllers::progressive::ports::frame_sink::FrameSink;
use crate::core::actions::cancellation::CancelFlag;
use crate::core::data::render_config::RenderConfig;
use crate::core::data::scalar::Scalar;

/// Schedules progressive generations on a shared worker pool.
///
/// The engine keeps no record of which generation is current; whoever calls
/// [`RenderEngine::start`] owns the returned handle and decides when to stop it.
pub struct RenderEngine {
    config: RenderConfig,
    pool: Arc<ThreadPool>,
    next_generation: AtomicU64,
}

impl RenderEngine {
    pub fn new(config: RenderConfig) -> Result<Self, RenderEngineError> {
        config.validate()?;

        let pool = ThreadPoolBuilder::new()
            .num_threads(config.resolved_pool_size())
            .thread_name(|index| format!("render-worker-{index}"))
            .build()?;

        debug!(threads = pool.current_num_threads(), "worker pool ready");

        Ok(Self {
            config,
            pool: Arc::new(pool),
            next_generation: AtomicU64::new(1),
        })
    }

    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    #[must_use]
    pub fn pool_size(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Starts a new generation on its own coordinating thread and returns
    /// immediately. Frames reach `sink` coarse to fine on that thread.
    pub fn start<T: Scalar>(
        &self,
        request: RenderRequest<T>,
        sink: Arc<dyn FrameSink>,
    ) -> Result<GenerationHandle, RenderEngineError> {
        let id = self.next_generation.fetch_add(1, Ordering::Relaxed);
        let cancel = CancelFlag::new();
        let status = Arc::new(GenerationStatus::new(self.config.initial_level));

        let coordinator = {
            let config = self.config.clone();
            let pool = Arc::clone(&self.pool);
            let cancel = cancel.clone();
            let status = Arc::clone(&status);

            thread::Builder::new()
                .name(format!("render-generation-{id}"))
                .spawn(move || {
                    run_generation(id, &request, &config, &pool, &cancel, sink.as_ref(), &status)
                })?
        };

        Ok(GenerationHandle::new(id, cancel, status, coordinator))
    }

    pub fn stop(&self, handle: &GenerationHandle) {
        handle.stop();
    }
}
