// Tuning shared by the smoother and the parallax driver.

// Smoothing
pub const DEFAULT_EASE: f64 = 0.1; // fraction of the remaining distance covered per frame
pub const ROUNDING_SCALE: f64 = 100.0; // displayed offset is kept to 2 decimals
pub const SKEW_FACTOR: f64 = 0.5; // degrees of skew per unit of normalized velocity

// Parallax rates. The extrapolation factor is outside [0, 1] on purpose.
pub const PARALLAX_EVEN_RATE: f64 = 0.8;
pub const PARALLAX_ODD_RATE: f64 = 0.2;
pub const PARALLAX_EXTRAPOLATION: f64 = 2.0;
