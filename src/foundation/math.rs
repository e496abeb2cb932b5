/// Linear interpolation from `a` to `b`; `t` is not clamped.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Inverse of [`lerp`], clamped to `[0, 1]`. A zero span is a step at `a`.
pub fn inverse_lerp(a: f64, b: f64, v: f64) -> f64 {
    let span = b - a;
    if span.abs() <= f64::EPSILON {
        return if v >= a { 1.0 } else { 0.0 };
    }
    clamp01((v - a) / span)
}

/// Clamp into `[0, 1]`. NaN maps to zero.
pub fn clamp01(v: f64) -> f64 {
    if v.is_nan() {
        return 0.0;
    }
    v.clamp(0.0, 1.0)
}

/// One exponential-moving-average step from `current` towards `target`.
pub fn damp(current: f64, target: f64, factor: f64) -> f64 {
    current + (target - current) * clamp01(factor)
}

/// `|a - b| <= eps`.
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
