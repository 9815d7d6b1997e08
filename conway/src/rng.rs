// rng.rs - Process-wide random source, seeded once

use std::sync::{Mutex, OnceLock};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand::rngs::SmallRng;

static SHARED: OnceLock<Mutex<SmallRng>> = OnceLock::new();

/// Seed derived from the wall clock.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() ^ u64::from(d.subsec_nanos()))
        .unwrap_or_default()
}

/// Seeds the shared generator. Returns `false` if it was already seeded; the
/// existing state is kept.
pub fn seed_shared_rng(seed: u64) -> bool {
    let mut fresh = false;
    SHARED.get_or_init(|| {
        fresh = true;
        Mutex::new(SmallRng::seed_from_u64(seed))
    });

    if fresh {
        tracing::debug!(seed, "shared rng seeded");
    } else {
        tracing::warn!(seed, "shared rng already seeded, ignoring new seed");
    }
    fresh
}

/// Runs `f` with the shared generator, seeding it from the clock if nobody has yet.
pub fn with_shared_rng<T>(f: impl FnOnce(&mut SmallRng) -> T) -> T {
    let lock = SHARED.get_or_init(|| Mutex::new(SmallRng::seed_from_u64(clock_seed())));
    // A panic while holding the lock cannot leave a SmallRng half-updated.
    let mut rng = lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    f(&mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn seeds_only_once() {
        // The shared source is process-wide; whichever test seeds first wins.
        seed_shared_rng(11);
        assert!(!seed_shared_rng(12));

        let a: u32 = with_shared_rng(|rng| rng.random());
        let b: u32 = with_shared_rng(|rng| rng.random());
        assert_ne!((a, b), (0, 0));
    }
}
