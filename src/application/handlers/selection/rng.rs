use rand::rngs::StdRng;
use rand::SeedableRng;

/// Seeded generator when a seed is configured, entropy otherwise
pub(crate) fn shuffle_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
