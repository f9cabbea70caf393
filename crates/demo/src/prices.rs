//! Synthetic price generation.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Draws `samples` prices uniformly from `base_price ± jitter`.
///
/// Deterministic for a given seed.
#[must_use]
pub fn synthesize_prices(samples: usize, base_price: f64, jitter: f64, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..samples)
        .map(|_| {
            if jitter > 0.0 {
                base_price + rng.gen_range(-jitter..jitter)
            } else {
                base_price
            }
        })
        .collect()
}

/// Seed used when the config does not pin one.
pub fn random_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .ok()
        .and_then(|dur| u64::try_from(dur.as_nanos()).ok())
        .unwrap_or(42)
}
