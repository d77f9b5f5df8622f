/// Economy mechanics: food per capita, growth and reward curves.
use super::control::{clamp01, denom};

/// Per-second multiplicative growth from food per capita.
/// 0.5 when starving, up to 2.0 at ten carrots per bunny.
#[inline]
pub fn reproduction_factor(carrots: f64, population: f64) -> f64 {
    0.5 + 1.5 * clamp01(carrots / denom(population) / 10.0)
}

/// Continuous compounding: x * factor^dt, frame-rate independent.
#[inline]
pub fn compound(x: f64, factor: f64, dt: f64) -> f64 {
    x * factor.powf(dt)
}

/// Charge fill rate for an activity scaled by a divisor: pop / stock / divisor.
#[inline]
pub fn fill_rate(population: f64, stock: f64, divisor: f64) -> f64 {
    population / denom(stock) / denom(divisor)
}

/// End-of-game reward: scale * log10(population).
#[inline]
pub fn harvest_reward(population: f64, scale: f64) -> f64 {
    scale * denom(population).log10()
}
