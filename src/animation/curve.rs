use crate::{
    animation::ease::Ease,
    foundation::core::{Progress, Vec2},
    foundation::error::{ScrollcueError, ScrollcueResult},
};

/// Values a [`Curve`] can interpolate.
pub trait Lerp: Sized {
    /// Blend from `a` to `b` by `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

/// A value keyed over scroll progress.
///
/// Keys must be sorted by `at`. Before the first key the first value holds, after the last
/// key the last value holds.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Curve<T> {
    /// Keys, sorted by `at`.
    pub keys: Vec<CurveKey<T>>,
    /// Interpolation between neighbouring keys.
    #[serde(default)]
    pub mode: InterpMode,
    /// Value returned when the curve has no keys.
    #[serde(default)]
    pub default: Option<T>,
}

/// One keyed value of a [`Curve`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CurveKey<T> {
    /// Progress position in `[0, 1]`.
    pub at: f64,
    /// Value at `at`.
    pub value: T,
    /// Easing applied toward the next key.
    #[serde(default)]
    pub ease: Ease,
}

/// How a [`Curve`] fills the span between keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpMode {
    /// Keep the earlier key's value until the next key.
    Hold,
    /// Eased blend between the two keys.
    #[default]
    Linear,
}

impl<T> Curve<T>
where
    T: Lerp + Clone,
{
    /// Curve holding a single value everywhere.
    pub fn constant(value: T) -> Self {
        Self {
            keys: vec![CurveKey {
                at: 0.0,
                value,
                ease: Ease::Linear,
            }],
            mode: InterpMode::Hold,
            default: None,
        }
    }

    /// Linear curve through `(at, value)` points.
    pub fn linear(points: impl IntoIterator<Item = (f64, T)>) -> Self {
        Self {
            keys: points
                .into_iter()
                .map(|(at, value)| CurveKey {
                    at,
                    value,
                    ease: Ease::Linear,
                })
                .collect(),
            mode: InterpMode::Linear,
            default: None,
        }
    }

    /// Check key ordering and range. Called when the owning segment is validated.
    pub fn validate(&self) -> ScrollcueResult<()> {
        if self.keys.is_empty() && self.default.is_none() {
            return Err(ScrollcueError::configuration(
                "Curve must have at least one key or a default value",
            ));
        }
        if self
            .keys
            .iter()
            .any(|k| !k.at.is_finite() || !(0.0..=1.0).contains(&k.at))
        {
            return Err(ScrollcueError::configuration(
                "Curve keys must lie within [0, 1]",
            ));
        }
        if !self.keys.windows(2).all(|w| w[0].at <= w[1].at) {
            return Err(ScrollcueError::configuration(
                "Curve keys must be sorted by progress",
            ));
        }
        Ok(())
    }

    /// Value at `progress`; outside the key range the nearest key holds.
    pub fn sample(&self, progress: Progress) -> ScrollcueResult<T> {
        if self.keys.is_empty() {
            return self
                .default
                .clone()
                .ok_or_else(|| ScrollcueError::evaluation("Curve has no keys and no default"));
        }

        let p = progress.get();
        let idx = self.keys.partition_point(|k| k.at <= p);

        if idx == 0 {
            return Ok(self.keys[0].value.clone());
        }
        if idx >= self.keys.len() {
            return Ok(self.keys[self.keys.len() - 1].value.clone());
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let span = b.at - a.at;
        if span <= 0.0 {
            return Ok(a.value.clone());
        }

        let t = (p - a.at) / span;
        match self.mode {
            InterpMode::Hold => Ok(a.value.clone()),
            InterpMode::Linear => Ok(T::lerp(&a.value, &b.value, a.ease.apply(t))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/curve.rs"]
mod tests;
