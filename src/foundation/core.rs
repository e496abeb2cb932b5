use crate::foundation::error::{ScrollcueError, ScrollcueResult};

pub use kurbo::Vec2;

/// Normalized scroll position in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Progress(f64);

impl Progress {
    /// Top of the scroll sequence.
    pub const ZERO: Self = Self(0.0);
    /// End of the scroll sequence.
    pub const ONE: Self = Self(1.0);

    /// Clamp `v` into `[0, 1]`. NaN maps to zero.
    pub fn new(v: f64) -> Self {
        if v.is_nan() {
            return Self::ZERO;
        }
        Self(v.clamp(0.0, 1.0))
    }

    /// Raw value, always within `[0, 1]`.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<f64> for Progress {
    fn from(v: f64) -> Self {
        Self::new(v)
    }
}

/// A sub-range of progress. `start <= end` once validated.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProgressRange {
    /// Inclusive lower bound.
    pub start: f64,
    /// Upper bound, exclusive except at 1.0.
    pub end: f64,
}

impl ProgressRange {
    /// Create a validated range with finite bounds and `start <= end`.
    pub fn new(start: f64, end: f64) -> ScrollcueResult<Self> {
        let r = Self { start, end };
        r.validate()?;
        Ok(r)
    }

    /// Check the bounds; used after deserializing.
    pub fn validate(&self) -> ScrollcueResult<()> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(ScrollcueError::configuration(
                "ProgressRange bounds must be finite",
            ));
        }
        if self.start > self.end {
            return Err(ScrollcueError::configuration(format!(
                "ProgressRange start ({}) must be <= end ({})",
                self.start, self.end
            )));
        }
        Ok(())
    }

    /// Width of the range.
    pub fn len(self) -> f64 {
        self.end - self.start
    }

    /// Return `true` for a zero-width range.
    pub fn is_empty(self) -> bool {
        self.len() <= 0.0
    }

    /// Half-open membership; a range ending at 1.0 also contains 1.0.
    pub fn contains(self, p: Progress) -> bool {
        let v = p.get();
        if self.end >= 1.0 && v == self.end {
            return true;
        }
        self.start <= v && v < self.end
    }

    /// Position of `p` within the range, clamped to `[0, 1]`.
    ///
    /// A zero-length range behaves as a step at `start`.
    pub fn local(self, p: Progress) -> f64 {
        crate::foundation::math::inverse_lerp(self.start, self.end, p.get())
    }

    /// Split into `n` equal contiguous slots. The last slot ends exactly at `end`.
    pub fn split(self, n: usize) -> Vec<ProgressRange> {
        if n == 0 {
            return Vec::new();
        }
        let w = self.len() / n as f64;
        (0..n)
            .map(|i| {
                let start = self.start + w * i as f64;
                let end = if i + 1 == n {
                    self.end
                } else {
                    self.start + w * (i + 1) as f64
                };
                ProgressRange { start, end }
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
