//! Random implementations.

use rand::Rng;

use crate::infrastructure::ports::RandomPort;

/// System random - uses real randomness.
///
/// Draws from `rand::thread_rng()`, so every worker thread has its own
/// generator and nothing is shared between concurrent requests.
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPort for SystemRandom {
    fn gen_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Fixed random for testing.
#[cfg(test)]
pub struct FixedRandom(pub usize);

#[cfg(test)]
impl RandomPort for FixedRandom {
    fn gen_index(&self, _len: usize) -> usize {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_random_stays_in_range() {
        let random = SystemRandom::new();
        for len in 1..=12 {
            for _ in 0..200 {
                assert!(random.gen_index(len) < len);
            }
        }
    }

    #[test]
    fn system_random_single_slot_is_zero() {
        assert_eq!(SystemRandom::new().gen_index(1), 0);
    }

    #[test]
    fn system_random_is_usable_across_threads() {
        let random = std::sync::Arc::new(SystemRandom::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let random = random.clone();
                std::thread::spawn(move || (0..500).all(|_| random.gen_index(8) < 8))
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
