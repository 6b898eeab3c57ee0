/// Size of the browsing viewport in CSS pixels.
///
/// Captured once at mount and used as the divisor that turns a scroll
/// distance into a velocity proxy. It is deliberately not refreshed on resize.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportMetrics {
    pub width: f64,
    pub height: f64,
}

impl ViewportMetrics {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn has_width(&self) -> bool {
        self.width.is_finite() && self.width > 0.0
    }
}
