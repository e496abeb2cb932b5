use std::{fs::File, io::BufReader, path::Path};

use crate::{
    eval::evaluator::Timeline,
    foundation::error::{ScrollcueError, ScrollcueResult},
    progress::direction::{DEFAULT_DIRECTION_THRESHOLD, DEFAULT_TOP_ZONE, DirectionTracker},
    progress::mapper::{DEFAULT_DAMPING, DEFAULT_SETTLE_EPSILON, ProgressMapper},
    scene::director::SceneDirector,
    timeline::{segment::Segment, sequence::SequenceSpec},
};

/// Declarative scene: tuning constants plus the segments to drive.
///
/// This is the JSON-facing form. Sequences are expanded into plain segments when the
/// [`Timeline`] is built.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneConfig {
    /// Scroll height in viewport pages.
    #[serde(default = "default_pages")]
    pub pages: u32,
    /// Progress smoothing factor per frame.
    #[serde(default = "default_damping")]
    pub damping: f64,
    /// Settle distance of the mapper.
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
    /// Minimum progress delta for a direction change.
    #[serde(default = "default_direction_threshold")]
    pub direction_threshold: f64,
    /// Progress below which the nav is always visible.
    #[serde(default = "default_top_zone")]
    pub top_zone: f64,
    /// Plain segments.
    #[serde(default)]
    pub segments: Vec<Segment>,
    /// Sequential reveals, expanded after the plain segments.
    #[serde(default)]
    pub sequences: Vec<SequenceSpec>,
}

fn default_pages() -> u32 {
    4
}

fn default_damping() -> f64 {
    DEFAULT_DAMPING
}

fn default_epsilon() -> f64 {
    DEFAULT_SETTLE_EPSILON
}

fn default_direction_threshold() -> f64 {
    DEFAULT_DIRECTION_THRESHOLD
}

fn default_top_zone() -> f64 {
    DEFAULT_TOP_ZONE
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            pages: default_pages(),
            damping: default_damping(),
            epsilon: default_epsilon(),
            direction_threshold: default_direction_threshold(),
            top_zone: default_top_zone(),
            segments: Vec::new(),
            sequences: Vec::new(),
        }
    }
}

impl SceneConfig {
    /// Parse and validate scene JSON.
    pub fn from_reader<R: std::io::Read>(r: R) -> ScrollcueResult<Self> {
        let cfg: SceneConfig = serde_json::from_reader(r)
            .map_err(|e| ScrollcueError::serde(format!("parse scene JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load and validate a scene JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> ScrollcueResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ScrollcueError::configuration(format!("open scene JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Pretty-printed scene JSON.
    pub fn to_json_pretty(&self) -> ScrollcueResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ScrollcueError::serde(format!("serialize scene JSON: {e}")))
    }

    /// Check tuning constants and that the timeline builds.
    pub fn validate(&self) -> ScrollcueResult<()> {
        if self.pages == 0 {
            return Err(ScrollcueError::configuration("pages must be > 0"));
        }
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(ScrollcueError::configuration(format!(
                "damping must be within (0, 1], got {}",
                self.damping
            )));
        }
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(ScrollcueError::configuration("epsilon must be >= 0"));
        }
        self.timeline().map(|_| ())
    }

    /// Plain segments followed by expanded sequences, in declaration order.
    pub fn timeline(&self) -> ScrollcueResult<Timeline> {
        let mut segments = self.segments.clone();
        for seq in &self.sequences {
            segments.extend(seq.segments()?);
        }
        Timeline::new(segments)
    }

    /// Fresh mapper with this scene's smoothing.
    pub fn mapper(&self) -> ProgressMapper {
        ProgressMapper::new(self.damping).with_epsilon(self.epsilon)
    }

    /// Director for this scene with its mapper and direction tracker.
    pub fn director(&self) -> ScrollcueResult<SceneDirector> {
        Ok(SceneDirector::new(self.timeline()?, self.mapper()).with_direction_tracker(
            DirectionTracker::new(self.direction_threshold, self.top_zone),
        ))
    }

    /// Scrollable pixels for a viewport: one page is already on screen.
    pub fn scroll_extent(&self, viewport_height: f64) -> f64 {
        viewport_height * f64::from(self.pages.saturating_sub(1))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
