/// Clamping mechanics: every control value and denominator passes through here.

/// Smallest value a denominator or log argument is allowed to take.
pub const MIN_POSITIVE: f64 = 1e-9;

/// Clamp to [lo, hi]; NaN collapses to `lo`.
#[inline]
pub fn clamp_finite(x: f64, lo: f64, hi: f64) -> f64 {
    if x.is_nan() { lo } else { x.clamp(lo, hi) }
}

/// Clamp to [0, 1]; NaN collapses to 0.
#[inline]
pub fn clamp01(x: f64) -> f64 {
    clamp_finite(x, 0.0, 1.0)
}

/// Floor a denominator so divisions never blow up.
#[inline]
pub fn denom(x: f64) -> f64 {
    if x.is_nan() { MIN_POSITIVE } else { x.max(MIN_POSITIVE) }
}

/// Upper clamp only: x' = min(x, hi), NaN collapses to `hi`.
#[inline]
pub fn cap(x: f64, hi: f64) -> f64 {
    if x.is_nan() { hi } else { x.min(hi) }
}
