/// Shaping applied to ramp-local positions and curve segments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// No shaping.
    #[default]
    Linear,
    /// Quadratic, slow start.
    InQuad,
    /// Quadratic, slow finish.
    OutQuad,
    /// Quadratic, slow at both ends.
    InOutQuad,
    /// Cubic, slow start.
    InCubic,
    /// Cubic, slow finish.
    OutCubic,
    /// Cubic, slow at both ends.
    InOutCubic,
    /// Hermite `3t² - 2t³`.
    SmoothStep,
}

impl Ease {
    /// Map `t` (clamped to `[0, 1]`) through the curve. Endpoints are exact.
    pub fn apply(self, t: f64) -> f64 {
        let t = crate::foundation::math::clamp01(t);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
        }
    }

    /// Every curve, for exhaustive checks.
    pub const ALL: [Ease; 8] = [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
        Ease::SmoothStep,
    ];
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
