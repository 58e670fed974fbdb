use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use rayon::ThreadPool;
use rayon::prelude::*;
use thiserror::Error;

use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::render_pass::pass_cache::PassCache;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::render_settings::RenderSettings;
use crate::core::data::scalar::Scalar;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::escape_time::evaluate;
use crate::core::util::calculate_work_units::calculate_work_units;
use crate::core::util::grid_to_complex::grid_to_complex;

/// Distinguishes cancellation, which is expected control flow, from a real
/// failure while assembling the image.
#[derive(Debug, Error)]
pub enum RenderPassError {
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
    #[error("pixel buffer error: {0}")]
    PixelBuffer(#[from] PixelBufferError),
}

#[derive(Debug)]
pub struct PassOutput {
    pub image: PixelBuffer,
    /// Same pixels as `image`, kept for seeding the next pass.
    pub cache: PassCache,
    pub reused_pixels: usize,
}

/// Colour of grid cell `(x, y)` at stride `level`, computed from scratch.
#[inline]
#[must_use]
pub fn compute_colour<T: Scalar>(
    x: u32,
    y: u32,
    level: u32,
    viewport: &Viewport<T>,
    settings: &RenderSettings<T>,
) -> Colour {
    let point = grid_to_complex(x, y, level, viewport);
    let iterations = evaluate(&point, settings.julia_constant(), settings.max_iterations());

    settings.colour_for(iterations)
}

/// Renders one resolution pass on `pool`.
///
/// Returns `Ok(None)` without scheduling any work when the sampled grid is
/// empty. Each work unit fills a private slice, polling `cancel` before every
/// pixel and once more before merging. A cancelled unit merges nothing.
pub fn render_pass<T, C>(
    viewport: &Viewport<T>,
    settings: &RenderSettings<T>,
    level: u32,
    cache: Option<&PassCache>,
    rows_per_unit: NonZeroUsize,
    pool: &ThreadPool,
    cancel: &C,
) -> Result<Option<PassOutput>, RenderPassError>
where
    T: Scalar,
    C: CancelToken,
{
    let (width, height) = viewport.grid_size(level);
    if width == 0 || height == 0 {
        return Ok(None);
    }

    let row_len = width as usize;
    let shared = Mutex::new(vec![Colour::TRANSPARENT; row_len * height as usize]);
    let reused = AtomicUsize::new(0);
    let units = calculate_work_units(height, rows_per_unit);

    pool.install(|| {
        units.into_par_iter().try_for_each(|rows| -> Result<(), Cancelled> {
            let mut local = Vec::with_capacity(rows.len() * row_len);
            let mut reused_here = 0;

            for y in rows.clone() {
                for x in 0..width {
                    if cancel.is_cancelled() {
                        return Err(Cancelled);
                    }

                    let colour = match cache.and_then(|c| c.lookup(x, y, level)) {
                        Some(colour) => {
                            reused_here += 1;
                            colour
                        }
                        None => compute_colour(x, y, level, viewport, settings),
                    };
                    local.push(colour);
                }
            }

            if cancel.is_cancelled() {
                return Err(Cancelled);
            }

            let start = rows.start as usize * row_len;
            // merges are whole-slice copies, so a poisoned lock still holds whole rows
            let mut pixels = shared.lock().unwrap_or_else(PoisonError::into_inner);
            pixels[start..start + local.len()].copy_from_slice(&local);
            reused.fetch_add(reused_here, Ordering::Relaxed);

            Ok(())
        })
    })?;

    if cancel.is_cancelled() {
        return Err(Cancelled.into());
    }

    let pixels = shared.into_inner().unwrap_or_else(PoisonError::into_inner);
    let image = PixelBuffer::from_colours(width, height, &pixels)?;

    Ok(Some(PassOutput {
        image,
        cache: PassCache::new(level, width, height, pixels),
        reused_pixels: reused.into_inner(),
    }))
}
