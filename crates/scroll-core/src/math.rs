/// Linear interpolation `a*(1-t) + b*t`. Callers may pass `t` outside
/// `[0, 1]` to extrapolate past `b`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Maps `value` from `[min, max]` onto `[0, 1]` (unclamped).
#[inline]
pub fn norm(value: f64, min: f64, max: f64) -> f64 {
    (value - min) / (max - min)
}

/// Rounds to `scale` steps, e.g. `scale = 100.0` keeps two decimals.
/// Halves round toward +inf, matching `Math.round`.
#[inline]
pub fn round_to(value: f64, scale: f64) -> f64 {
    (value * scale + 0.5).floor() / scale
}
