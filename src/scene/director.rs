use crate::{
    eval::evaluator::{EvaluationResult, Evaluator, Timeline},
    foundation::core::Progress,
    progress::direction::{DirectionTracker, ScrollDirection},
    progress::mapper::ProgressMapper,
    scene::observer::ScrollObserver,
    scene::target::{RenderTarget, TargetRegistry},
};

/// Tells the host whether to schedule another frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameControl {
    /// Keep requesting frames.
    Continue,
    /// The scene is unmounted; cancel the frame loop.
    Stop,
}

/// Drives a [`Timeline`] from live scroll input, once per display frame.
///
/// Per tick: mapper, then evaluator, then render targets, then scroll observers. All writes
/// happen inside `tick`; targets and observers only read what they are handed.
pub struct SceneDirector {
    timeline: Timeline,
    mapper: ProgressMapper,
    direction: DirectionTracker,
    targets: TargetRegistry,
    observers: Vec<Box<dyn ScrollObserver>>,
    last_progress: Option<Progress>,
    last_result: EvaluationResult,
    mounted: bool,
}

impl SceneDirector {
    /// Mounted director with no targets or observers.
    pub fn new(timeline: Timeline, mapper: ProgressMapper) -> Self {
        Self {
            timeline,
            mapper,
            direction: DirectionTracker::default(),
            targets: TargetRegistry::new(),
            observers: Vec::new(),
            last_progress: None,
            last_result: EvaluationResult::default(),
            mounted: true,
        }
    }

    /// Replace the default direction tracker.
    pub fn with_direction_tracker(mut self, tracker: DirectionTracker) -> Self {
        self.direction = tracker;
        self
    }

    /// Timeline being driven.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Attach a render target to a segment. Several targets may share one id.
    pub fn bind(&mut self, id: impl Into<String>, target: Box<dyn RenderTarget>) {
        self.targets.bind(id, target);
    }

    /// Detach every target of `id`; returns how many were removed.
    pub fn unbind(&mut self, id: &str) -> usize {
        self.targets.unbind(id)
    }

    /// Register a scroll observer.
    pub fn subscribe(&mut self, observer: Box<dyn ScrollObserver>) {
        self.observers.push(observer);
    }

    /// Return `false` once [`Self::unmount`] ran.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Stop reacting to frames. Every later tick returns [`FrameControl::Stop`].
    pub fn unmount(&mut self) {
        if self.mounted {
            tracing::debug!("scene unmounted");
        }
        self.mounted = false;
    }

    /// Progress of the last frame, if any ran.
    pub fn last_progress(&self) -> Option<Progress> {
        self.last_progress
    }

    /// Last observed scroll direction, once the threshold has been crossed.
    pub fn direction(&self) -> Option<ScrollDirection> {
        self.direction.direction()
    }

    /// Evaluation shown by the last frame.
    pub fn last_result(&self) -> &EvaluationResult {
        &self.last_result
    }

    /// One frame from a raw scroll offset and the total scrollable extent, in pixels.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn tick(&mut self, raw_offset: f64, extent: f64) -> FrameControl {
        if !self.mounted {
            return FrameControl::Stop;
        }
        let progress = self.mapper.update(raw_offset, extent);
        self.advance(progress)
    }

    /// One frame from an already-normalized progress value, bypassing smoothing.
    pub fn tick_progress(&mut self, progress: Progress) -> FrameControl {
        if !self.mounted {
            return FrameControl::Stop;
        }
        self.advance(progress)
    }

    fn advance(&mut self, progress: Progress) -> FrameControl {
        match Evaluator::evaluate(&self.timeline, progress) {
            Ok(result) => self.last_result = result,
            Err(err) => {
                // keep the previous frame on screen
                tracing::warn!(%err, "timeline evaluation failed");
            }
        }
        self.last_progress = Some(progress);

        for (id, output) in &self.last_result.segments {
            if !self.targets.apply(id, output) {
                tracing::debug!(segment = %id, "no render target bound");
            }
        }

        if let Some(event) = self.direction.observe(progress) {
            tracing::info!(
                visible = event.visible,
                offset = progress.get(),
                direction = ?event.direction,
                "nav visibility toggled"
            );
            for observer in &mut self.observers {
                observer.on_nav_visibility(&event);
            }
        }

        FrameControl::Continue
    }
}

/// Feed `(raw_offset, extent)` samples to `director` until the input ends or it stops.
///
/// Returns the number of frames that ran.
pub fn run_frames<I>(director: &mut SceneDirector, inputs: I) -> usize
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let mut frames = 0;
    for (raw, extent) in inputs {
        if director.tick(raw, extent) == FrameControl::Stop {
            break;
        }
        frames += 1;
    }
    frames
}

#[cfg(test)]
#[path = "../../tests/unit/scene/director.rs"]
mod tests;
