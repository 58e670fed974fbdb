use std::sync::Arc;

use crate::core::data::render_settings::RenderSettings;
use crate::core::data::scalar::Scalar;
use crate::core::data::viewport::Viewport;

/// Snapshot of everything one generation renders. Settings are shared so
/// consecutive requests for the same configuration do not rebuild the palette
/// table.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest<T = f64> {
    pub viewport: Viewport<T>,
    pub settings: Arc<RenderSettings<T>>,
}

impl<T: Scalar> RenderRequest<T> {
    #[must_use]
    pub fn new(viewport: Viewport<T>, settings: Arc<RenderSettings<T>>) -> Self {
        Self { viewport, settings }
    }
}
