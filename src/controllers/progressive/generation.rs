use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::JoinHandle;
use std::time::Instant;

use rayon::ThreadPool;
use tracing::{debug, error, info, instrument, trace};

use crate::controllers::progressive::data::frame_data::FrameData;
use crate::controllers::progressive::data::render_request::RenderRequest;
use crate::controllers::progressive::ports::frame_sink::FrameSink;
use crate::controllers::progressive::types::{GenerationOutcome, GenerationState};
use crate::core::actions::cancellation::{CancelFlag, CancelToken};
use crate::core::actions::render_pass::pass_cache::PassCache;
use crate::core::actions::render_pass::render_pass::{RenderPassError, render_pass};
use crate::core::data::render_config::RenderConfig;
use crate::core::data::scalar::Scalar;

/// Latest state published by a generation's coordinating thread.
#[derive(Debug)]
pub struct GenerationStatus(Mutex<GenerationState>);

impl GenerationStatus {
    #[must_use]
    pub fn new(initial_level: u32) -> Self {
        Self(Mutex::new(GenerationState::Running {
            level: initial_level,
        }))
    }

    pub fn set(&self, state: GenerationState) {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner) = state;
    }

    #[must_use]
    pub fn get(&self) -> GenerationState {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Runs every pass of one generation on the calling thread, delivering each
/// finished pass to `sink`.
///
/// Stops at the first point it observes `cancel`, including right before a
/// delivery, so no frame reaches the sink once cancellation is seen.
#[instrument(skip_all, fields(generation = id))]
pub fn run_generation<T, C, S>(
    id: u64,
    request: &RenderRequest<T>,
    config: &RenderConfig,
    pool: &ThreadPool,
    cancel: &C,
    sink: &S,
    status: &GenerationStatus,
) -> GenerationOutcome
where
    T: Scalar,
    C: CancelToken,
    S: FrameSink + ?Sized,
{
    let viewport = &request.viewport;
    let settings = request.settings.as_ref();
    let rows_per_unit = NonZeroUsize::new(config.rows_per_work_unit).unwrap_or(NonZeroUsize::MIN);

    info!(
        width = viewport.width,
        height = viewport.height,
        fractal = %settings.fractal_kind(),
        max_iterations = settings.max_iterations(),
        "generation started"
    );

    let cancelled = |frames_delivered: usize| {
        status.set(GenerationState::Cancelled);
        info!(frames_delivered, "generation cancelled");
        GenerationOutcome::Cancelled { frames_delivered }
    };

    let started = Instant::now();
    let mut cache: Option<PassCache> = None;
    let mut frames_delivered = 0;

    for level in config.levels() {
        if cancel.is_cancelled() {
            return cancelled(frames_delivered);
        }

        status.set(GenerationState::Running { level });
        let pass_started = Instant::now();

        let output = match render_pass(
            viewport,
            settings,
            level,
            cache.as_ref(),
            rows_per_unit,
            pool,
            cancel,
        ) {
            Ok(Some(output)) => output,
            Ok(None) => {
                trace!(level, "skipping empty pass");
                cache = None;
                continue;
            }
            Err(RenderPassError::Cancelled(_)) => return cancelled(frames_delivered),
            Err(err) => {
                error!(level, %err, "pass failed");
                status.set(GenerationState::Cancelled);
                return GenerationOutcome::Failed {
                    frames_delivered,
                    message: err.to_string(),
                };
            }
        };

        let render_duration = pass_started.elapsed();
        debug!(
            level,
            width = output.image.width(),
            height = output.image.height(),
            reused_pixels = output.reused_pixels,
            elapsed = ?render_duration,
            "pass finished"
        );

        if cancel.is_cancelled() {
            return cancelled(frames_delivered);
        }

        sink.submit(FrameData {
            generation: id,
            level,
            image: output.image,
            is_final: level == 1,
            render_duration,
        });
        frames_delivered += 1;
        cache = Some(output.cache);
    }

    status.set(GenerationState::Completed);
    info!(frames_delivered, elapsed = ?started.elapsed(), "generation completed");

    GenerationOutcome::Completed { frames_delivered }
}

/// Owner's handle on a running generation.
///
/// Dropping the handle detaches the generation; it keeps running until it
/// completes. Call [`GenerationHandle::stop`] to cancel it.
#[derive(Debug)]
pub struct GenerationHandle {
    id: u64,
    cancel: CancelFlag,
    status: Arc<GenerationStatus>,
    coordinator: JoinHandle<GenerationOutcome>,
}

impl GenerationHandle {
    pub(crate) fn new(
        id: u64,
        cancel: CancelFlag,
        status: Arc<GenerationStatus>,
        coordinator: JoinHandle<GenerationOutcome>,
    ) -> Self {
        Self {
            id,
            cancel,
            status,
            coordinator,
        }
    }

    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Requests cancellation. Workers notice at their next pixel; no frame is
    /// delivered after the coordinator sees the flag.
    pub fn stop(&self) {
        self.cancel.cancel();
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.cancel.is_cancelled()
    }

    #[must_use]
    pub fn state(&self) -> GenerationState {
        match self.status.get() {
            GenerationState::Running { .. } if self.is_stopped() => GenerationState::Cancelled,
            state => state,
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.coordinator.is_finished()
    }

    /// Blocks until the coordinating thread exits.
    pub fn join(self) -> GenerationOutcome {
        self.coordinator
            .join()
            .unwrap_or_else(|_| GenerationOutcome::Failed {
                frames_delivered: 0,
                message: "generation thread panicked".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::NeverCancel;
    use crate::core::colour_palette::palette::ColourPalette;
    use crate::core::data::complex::Complex;
    use crate::core::data::render_settings::RenderSettings;
    use crate::core::data::viewport::Viewport;
    use rayon::ThreadPoolBuilder;

    #[derive(Default)]
    struct CollectingSink {
        frames: Mutex<Vec<FrameData>>,
    }

    impl CollectingSink {
        fn frames(&self) -> Vec<FrameData> {
            self.frames.lock().unwrap().clone()
        }
    }

    impl FrameSink for CollectingSink {
        fn submit(&self, frame: FrameData) {
            self.frames.lock().unwrap().push(frame);
        }
    }

    fn pool() -> ThreadPool {
        ThreadPoolBuilder::new().num_threads(2).build().unwrap()
    }

    fn request(width: u32, height: u32) -> RenderRequest {
        let settings = RenderSettings::mandelbrot(50, &ColourPalette::default()).unwrap();
        RenderRequest::new(
            Viewport::new(width, height, 3.0 / 64.0, Complex::new(-0.5, 0.0)),
            Arc::new(settings),
        )
    }

    #[test]
    fn test_frames_arrive_coarse_to_fine() {
        let sink = CollectingSink::default();
        let status = GenerationStatus::new(16);

        let outcome = run_generation(
            7,
            &request(64, 48),
            &RenderConfig::default(),
            &pool(),
            &NeverCancel,
            &sink,
            &status,
        );

        let frames = sink.frames();
        let levels: Vec<u32> = frames.iter().map(|f| f.level).collect();
        let sizes: Vec<(u32, u32)> = frames.iter().map(|f| (f.image.width(), f.image.height())).collect();
        let finals: Vec<bool> = frames.iter().map(|f| f.is_final).collect();

        assert_eq!(outcome, GenerationOutcome::Completed { frames_delivered: 5 });
        assert_eq!(levels, vec![16, 8, 4, 2, 1]);
        assert_eq!(sizes, vec![(4, 3), (8, 6), (16, 12), (32, 24), (64, 48)]);
        assert_eq!(finals, vec![false, false, false, false, true]);
        assert!(frames.iter().all(|f| f.generation == 7));
        assert_eq!(status.get(), GenerationState::Completed);
    }

    #[test]
    fn test_small_viewport_skips_empty_passes() {
        let sink = CollectingSink::default();

        let outcome = run_generation(
            1,
            &request(10, 10),
            &RenderConfig::default(),
            &pool(),
            &NeverCancel,
            &sink,
            &GenerationStatus::new(16),
        );

        let levels: Vec<u32> = sink.frames().iter().map(|f| f.level).collect();
        assert_eq!(levels, vec![8, 4, 2, 1]);
        assert_eq!(outcome, GenerationOutcome::Completed { frames_delivered: 4 });
    }

    #[test]
    fn test_zero_sized_viewport_delivers_nothing() {
        let sink = CollectingSink::default();

        let outcome = run_generation(
            1,
            &request(0, 0),
            &RenderConfig::default(),
            &pool(),
            &NeverCancel,
            &sink,
            &GenerationStatus::new(16),
        );

        assert!(sink.frames().is_empty());
        assert_eq!(outcome, GenerationOutcome::Completed { frames_delivered: 0 });
    }

    #[test]
    fn test_stop_before_first_pass_delivers_nothing() {
        let sink = CollectingSink::default();
        let cancel = CancelFlag::new();
        let status = GenerationStatus::new(16);
        cancel.cancel();

        let outcome = run_generation(
            1,
            &request(64, 64),
            &RenderConfig::default(),
            &pool(),
            &cancel,
            &sink,
            &status,
        );

        assert!(sink.frames().is_empty());
        assert_eq!(outcome, GenerationOutcome::Cancelled { frames_delivered: 0 });
        assert_eq!(status.get(), GenerationState::Cancelled);
    }

    #[test]
    fn test_stop_after_first_frame_delivers_no_more() {
        let cancel = CancelFlag::new();
        let frames = Mutex::new(Vec::new());
        let sink = |frame: FrameData| {
            frames.lock().unwrap().push(frame.level);
            cancel.cancel();
        };

        let outcome = run_generation(
            1,
            &request(64, 64),
            &RenderConfig::default(),
            &pool(),
            &cancel,
            &sink,
            &GenerationStatus::new(16),
        );

        assert_eq!(*frames.lock().unwrap(), vec![16]);
        assert_eq!(outcome, GenerationOutcome::Cancelled { frames_delivered: 1 });
    }

    #[test]
    fn test_cancellation_after_last_pass_computed_suppresses_delivery() {
        // 2x2 viewport, one level: pre-pass check, 4 pixel checks, 2 merge
        // checks and the post-barrier check all pass; the pre-delivery check trips
        let polls = std::sync::atomic::AtomicUsize::new(0);
        let cancel = || polls.fetch_add(1, std::sync::atomic::Ordering::SeqCst) >= 8;
        let sink = CollectingSink::default();
        let config = RenderConfig {
            initial_level: 1,
            ..RenderConfig::default()
        };

        let outcome = run_generation(
            1,
            &request(2, 2),
            &config,
            &ThreadPoolBuilder::new().num_threads(1).build().unwrap(),
            &cancel,
            &sink,
            &GenerationStatus::new(1),
        );

        assert!(sink.frames().is_empty());
        assert_eq!(outcome, GenerationOutcome::Cancelled { frames_delivered: 0 });
    }
}
