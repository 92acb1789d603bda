//! Seeded randomness.
//!
//! Every stochastic operation in this crate takes `&mut R where R: Rng`, so
//! any generator can be injected. [`create_rng`] is the default provider used
//! when a [`GaConfig`](crate::ga::GaConfig) carries a seed.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic generator from a 64-bit seed.
///
/// Two generators created from the same seed yield identical streams, which
/// makes whole evolutionary runs reproducible.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator seeded from the thread-local entropy source.
pub fn entropy_rng() -> StdRng {
    create_rng(rand::random())
}
