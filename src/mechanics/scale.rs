/// Scale mechanics: map raw quantities to [0, 1] for plotting.
use super::control::{clamp_finite, denom};

/// Linear: clamp(value, 0, max) / max.
#[inline]
pub fn linear(value: f64, max: f64) -> f64 {
    let max = denom(max);
    clamp_finite(value, 0.0, max) / max
}

/// Logarithmic: log10(clamp(value, 1, max)) / log10(max).
/// A max of 1 or less has no range; everything maps to 0.
#[inline]
pub fn log10(value: f64, max: f64) -> f64 {
    if max <= 1.0 {
        return 0.0;
    }
    clamp_finite(value, 1.0, max).log10() / max.log10()
}
