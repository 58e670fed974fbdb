use thiserror::Error;

use crate::core::data::render_config::RenderConfigError;

#[derive(Debug, Error)]
pub enum RenderEngineError {
    #[error("invalid render config: {0}")]
    Config(#[from] RenderConfigError),
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error("failed to spawn generation thread: {0}")]
    Spawn(#[from] std::io::Error),
}
