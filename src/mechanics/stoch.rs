/// Stochastic mechanics: RNG helpers for scripted players.
/// Note: uses `bevy_prng::WyRand`; callers own the generator and inject seeds.
use bevy_prng::WyRand;
use rand_core::RngCore;

/// Uniform [0,1) from the top 53 bits.
#[inline]
pub fn uniform01(rng: &mut WyRand) -> f64 {
    ((rng.next_u64() >> 11) as f64) / ((1u64 << 53) as f64)
}

/// Gaussian(0,1) via Box–Muller.
#[inline]
pub fn gaussian01(rng: &mut WyRand) -> f64 {
    let u1 = uniform01(rng).max(f64::MIN_POSITIVE);
    let u2 = uniform01(rng);
    let r = (-2.0 * u1.ln()).sqrt();
    let t = 2.0 * std::f64::consts::PI * u2;
    r * t.cos()
}

/// Bernoulli(p).
#[inline]
pub fn bernoulli(rng: &mut WyRand, p: f64) -> bool {
    uniform01(rng) < p.clamp(0.0, 1.0)
}

/// Uniform index in 0..n (n > 0).
#[inline]
pub fn pick(rng: &mut WyRand, n: usize) -> usize {
    ((uniform01(rng) * n as f64) as usize).min(n.saturating_sub(1))
}
