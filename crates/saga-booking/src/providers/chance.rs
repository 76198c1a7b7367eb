use std::ops::Range;
use std::sync::{Arc, Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random source shared by the booking services of one run.
///
/// Cloning shares the generator, so a single seed reproduces a whole run.
#[derive(Debug, Clone)]
pub struct Chance {
    rng: Arc<Mutex<StdRng>>,
}

impl Chance {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    #[must_use]
    pub fn from_os_rng() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// True with the given probability. `probability` must be within `0.0..=1.0`.
    pub fn happens(&self, probability: f64) -> bool {
        self.with_rng(|rng| rng.random_bool(probability))
    }

    pub fn pick(&self, range: Range<u32>) -> u32 {
        self.with_rng(|rng| rng.random_range(range))
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut rng)
    }
}
