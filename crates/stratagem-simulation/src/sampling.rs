//! Seeded sampling primitives for the trial model.

use rand::rngs::StdRng;
use rand::Rng;

/// FNV-1a hash of the pair identity, mixed into the run seed so every
/// (entity, action) pair gets an independent, order-free trial stream.
pub fn pair_seed(base: u64, entity_id: &str, action_id: &str) -> u64 {
    let mut hash: u64 = 0xcbf29ce484222325;
    for byte in entity_id.bytes().chain([0u8]).chain(action_id.bytes()) {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    base ^ hash
}

/// Sample from a normal distribution via the Box-Muller transform.
///
/// Degenerate parameters (non-finite or non-positive std-dev) collapse to
/// the mean, so callers never feed an invalid distribution.
pub fn sample_normal(rng: &mut StdRng, mean: f64, std_dev: f64) -> f64 {
    if !std_dev.is_finite() || std_dev <= 0.0 {
        return mean;
    }
    let u1: f64 = rng.gen::<f64>().max(1e-10);
    let u2: f64 = rng.gen();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
    mean + std_dev * z
}
