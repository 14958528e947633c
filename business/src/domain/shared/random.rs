use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform random indices.
///
/// Injected wherever the business layer has to pick between equivalent
/// options so that tests can pin the outcome with a fixed seed.
pub trait RandomSource: Send + Sync {
    /// Returns an index in `0..upper`. `upper` is never zero.
    fn pick(&self, upper: usize) -> usize;
}

/// `StdRng` behind a mutex, seeded explicitly or from the OS.
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn from_os_rng() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }
}

impl RandomSource for SeededRandom {
    fn pick(&self, upper: usize) -> usize {
        if upper <= 1 {
            return 0;
        }
        // A poisoned generator is still a valid generator.
        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        rng.random_range(0..upper)
    }
}
