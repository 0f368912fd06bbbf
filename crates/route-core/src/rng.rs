//! Deterministic RNG wrapper for the TSP metaheuristic solvers.
//!
//! Each solver instance owns an independent [`SolverRng`] so runs never
//! share state or depend on a process-wide global generator. By default the
//! stream is seeded from OS entropy; tests seed it deterministically via
//! [`SolverRng::seeded`].

use rand::rngs::{OsRng, SmallRng};
use rand::{Rng, SeedableRng};

/// Per-solver pseudo-random stream.
pub struct SolverRng(SmallRng);

impl SolverRng {
    /// Seed from OS entropy — the default for production runs.
    pub fn from_entropy() -> Self {
        SolverRng(SmallRng::from_rng(OsRng).unwrap_or_else(|_| {
            // OsRng failure is effectively unreachable on supported platforms;
            // fall back to a fixed seed rather than panicking a routing call.
            SmallRng::seed_from_u64(0)
        }))
    }

    /// Seed deterministically — used by tests that need reproducible tours.
    pub fn seeded(seed: u64) -> Self {
        SolverRng(SmallRng::seed_from_u64(seed))
    }

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
        self.0.gen_range(range)
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }
}

impl Default for SolverRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
