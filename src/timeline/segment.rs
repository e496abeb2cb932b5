use crate::{
    animation::ease::Ease,
    foundation::core::Progress,
    foundation::error::{ScrollcueError, ScrollcueResult},
    timeline::effect::EffectSpec,
};

/// A named visual effect active over a sub-range of progress.
///
/// Visibility follows a trapezoid: zero, a linear ramp up over `fade_width`, a plateau of
/// `active_width` centred on `peak_center`, a ramp down, zero again. Segments may overlap.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Segment {
    /// Unique id within a timeline.
    pub id: String,
    /// Centre of the plateau.
    pub peak_center: f64,
    /// Plateau width.
    #[serde(default)]
    pub active_width: f64,
    /// Width of each ramp.
    #[serde(default)]
    pub fade_width: f64,
    /// Shaping of both ramps. Linear unless set.
    #[serde(default)]
    pub ease: Ease,
    /// Effects evaluated from the envelope, in order.
    #[serde(default)]
    pub effects: Vec<EffectSpec>,
}

/// Where a progress value falls relative to a segment's trapezoid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RampPhase {
    /// Ahead of the fade-in.
    Before,
    /// On the fade-in ramp.
    Entering,
    /// Fully visible.
    Plateau,
    /// On the fade-out ramp.
    Exiting,
    /// Past the fade-out.
    After,
}

/// Segment visibility at one progress value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Envelope {
    /// Visibility in `[0, 1]`.
    pub value: f64,
    /// Part of the trapezoid the progress falls in.
    pub phase: RampPhase,
    /// Linear position within the current ramp, `0..=1`. Zero outside ramps.
    pub ramp: f64,
}

impl Envelope {
    /// Invisible, ahead of the segment.
    pub const HIDDEN: Self = Self {
        value: 0.0,
        phase: RampPhase::Before,
        ramp: 0.0,
    };
}

/// The four corners of a segment's trapezoid.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SegmentBounds {
    /// Visibility starts rising.
    pub start_fade_in: f64,
    /// Plateau starts.
    pub end_fade_in: f64,
    /// Plateau ends.
    pub start_fade_out: f64,
    /// Visibility is back to zero.
    pub end_fade_out: f64,
}

impl Segment {
    /// Segment with a linear ramp and no effects.
    pub fn new(id: impl Into<String>, peak_center: f64, active_width: f64, fade_width: f64) -> Self {
        Self {
            id: id.into(),
            peak_center,
            active_width,
            fade_width,
            ease: Ease::Linear,
            effects: Vec::new(),
        }
    }

    /// Append an effect.
    pub fn with_effect(mut self, effect: EffectSpec) -> Self {
        self.effects.push(effect);
        self
    }

    /// Shape both ramps with `ease`.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Reject empty ids, non-finite geometry, negative widths and invalid effects.
    pub fn validate(&self) -> ScrollcueResult<()> {
        if self.id.trim().is_empty() {
            return Err(ScrollcueError::configuration("segment id must be non-empty"));
        }
        for (name, v) in [
            ("peak_center", self.peak_center),
            ("active_width", self.active_width),
            ("fade_width", self.fade_width),
        ] {
            if !v.is_finite() {
                return Err(ScrollcueError::configuration(format!(
                    "segment '{}': {name} must be finite",
                    self.id
                )));
            }
        }
        if self.active_width < 0.0 {
            return Err(ScrollcueError::configuration(format!(
                "segment '{}': active_width must be >= 0",
                self.id
            )));
        }
        if self.fade_width < 0.0 {
            return Err(ScrollcueError::configuration(format!(
                "segment '{}': fade_width must be >= 0",
                self.id
            )));
        }
        for effect in &self.effects {
            effect
                .validate()
                .map_err(|e| ScrollcueError::configuration(format!("segment '{}': {e}", self.id)))?;
        }
        Ok(())
    }

    /// Trapezoid corners derived from centre and widths.
    pub fn bounds(&self) -> SegmentBounds {
        let half = self.active_width / 2.0;
        SegmentBounds {
            start_fade_in: self.peak_center - half - self.fade_width,
            end_fade_in: self.peak_center - half,
            start_fade_out: self.peak_center + half,
            end_fade_out: self.peak_center + half + self.fade_width,
        }
    }

    /// Trapezoid visibility at `progress`. A zero fade width collapses the ramps to steps.
    pub fn envelope(&self, progress: Progress) -> Envelope {
        let b = self.bounds();
        let p = progress.get();

        if p < b.start_fade_in {
            return Envelope::HIDDEN;
        }
        if p < b.end_fade_in {
            let ramp = ramp_position(p - b.start_fade_in, self.fade_width);
            return Envelope {
                value: self.ease.apply(ramp),
                phase: RampPhase::Entering,
                ramp,
            };
        }
        if p <= b.start_fade_out {
            return Envelope {
                value: 1.0,
                phase: RampPhase::Plateau,
                ramp: 0.0,
            };
        }
        if p < b.end_fade_out {
            let ramp = ramp_position(p - b.start_fade_out, self.fade_width);
            return Envelope {
                value: 1.0 - self.ease.apply(ramp),
                phase: RampPhase::Exiting,
                ramp,
            };
        }
        Envelope {
            value: 0.0,
            phase: RampPhase::After,
            ramp: 1.0,
        }
    }
}

fn ramp_position(into_ramp: f64, fade_width: f64) -> f64 {
    if fade_width <= 0.0 {
        return 1.0;
    }
    crate::foundation::math::clamp01(into_ramp / fade_width)
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/segment.rs"]
mod tests;
