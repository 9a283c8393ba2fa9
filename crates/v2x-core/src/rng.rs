//! Deterministic simulation RNG.
//!
//! # Determinism strategy
//!
//! One `SimRng` per simulator instance is the single source of randomness for
//! spawning, position noise, and packet loss.  A fixed seed therefore yields a
//! fully reproducible fleet and, step for step, identical degradation draws.
//! When the caller supplies no seed, one is drawn from OS entropy and retained
//! so the run can still be replayed.

use rand::rngs::{OsRng, SmallRng};
use rand::{RngCore, SeedableRng};

/// Simulation-level RNG wrapping a seeded `SmallRng`.
///
/// Used only in single-threaded contexts; the engine serializes all draws
/// through the one instance its simulator owns.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Draw a fresh seed from OS entropy, for seedless construction.
    pub fn entropy_seed() -> u64 {
        OsRng.next_u64()
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types
    /// (`Normal`, `Uniform`, etc.).
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        use rand::Rng;
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        use rand::Rng;
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
