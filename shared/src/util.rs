//! Clock access and membership ID generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Current UTC timestamp in milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Source of membership and employee IDs.
///
/// `initialize` draws IDs through this trait, so tests can substitute a
/// deterministic sequence for the clock-seeded production source.
pub trait IdSource {
    /// Draws the next ID.
    fn next_id(&mut self) -> u64;
}

/// PRNG seeded from the wall clock at construction time.
///
/// Two sources constructed at least one clock tick apart use different
/// seeds. Draws are uniform over `1..u64::MAX`, so a drawn ID is never
/// zero; uniqueness across sources is probabilistic, not guaranteed.
#[derive(Debug)]
pub struct ClockSeededIds {
    rng: StdRng,
}

impl ClockSeededIds {
    /// Seeds from the current wall-clock millisecond.
    pub fn new() -> Self {
        Self {
            rng: StdRng::seed_from_u64(now_millis() as u64),
        }
    }
}

impl Default for ClockSeededIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for ClockSeededIds {
    fn next_id(&mut self) -> u64 {
        self.rng.gen_range(1..u64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_millis_is_past_2024() {
        // 2024-01-01 00:00:00 UTC
        assert!(now_millis() > 1_704_067_200_000);
    }

    #[test]
    fn test_clock_seeded_ids_are_nonzero() {
        let mut ids = ClockSeededIds::new();
        for _ in 0..64 {
            assert!(ids.next_id() > 0);
        }
    }

    #[test]
    fn test_successive_draws_differ() {
        let mut ids = ClockSeededIds::new();
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
    }
}
