use crate::foundation::{core::Progress, math};

/// Default EMA factor applied per 60 Hz frame.
pub const DEFAULT_DAMPING: f64 = 0.1;
/// Distance below which the published value snaps onto the target.
pub const DEFAULT_SETTLE_EPSILON: f64 = 1e-4;

/// Turns a raw scroll offset into a smoothed [`Progress`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProgressMapper {
    /// EMA factor per frame, in `(0, 1]`; 1 disables smoothing.
    pub damping: f64,
    /// Settle distance.
    pub epsilon: f64,
    #[serde(skip)]
    current: Option<f64>,
}

impl Default for ProgressMapper {
    fn default() -> Self {
        Self::new(DEFAULT_DAMPING)
    }
}

impl ProgressMapper {
    /// Mapper with `damping` clamped into `[0, 1]` and the default settle distance.
    pub fn new(damping: f64) -> Self {
        Self {
            damping: math::clamp01(damping),
            epsilon: DEFAULT_SETTLE_EPSILON,
            current: None,
        }
    }

    /// Override the settle distance. Negative values become zero.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon.max(0.0);
        self
    }

    /// Pure `clamp(raw / extent, 0, 1)`. A non-positive extent yields zero.
    pub fn normalize(raw: f64, extent: f64) -> Progress {
        if !extent.is_finite() || extent <= 0.0 || !raw.is_finite() {
            return Progress::ZERO;
        }
        Progress::new(raw / extent)
    }

    /// Advance one frame, assuming a 60 Hz display.
    pub fn update(&mut self, raw: f64, extent: f64) -> Progress {
        self.step(Self::normalize(raw, extent).get(), self.damping)
    }

    /// Advance by `dt_secs`, keeping the smoothing rate independent of refresh rate.
    pub fn update_with_dt(&mut self, raw: f64, extent: f64, dt_secs: f64) -> Progress {
        let frames = if dt_secs.is_finite() {
            (dt_secs * 60.0).max(0.0)
        } else {
            0.0
        };
        let factor = 1.0 - (1.0 - self.damping).powf(frames);
        self.step(Self::normalize(raw, extent).get(), factor)
    }

    fn step(&mut self, target: f64, factor: f64) -> Progress {
        let next = match self.current {
            None => target,
            Some(cur) => {
                let v = math::damp(cur, target, factor);
                if math::approx_eq(target, v, self.epsilon) {
                    target
                } else {
                    v
                }
            }
        };
        let next = math::clamp01(next);
        self.current = Some(next);
        Progress::new(next)
    }

    /// Last published value (zero before the first update).
    pub fn current(&self) -> Progress {
        Progress::new(self.current.unwrap_or(0.0))
    }

    /// Jump straight to the target on the next update.
    pub fn reset(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/progress/mapper.rs"]
mod tests;
