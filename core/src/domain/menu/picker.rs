use std::sync::Mutex;

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of the uniform choice made among reload candidates.
pub trait CandidatePicker: Send + Sync {
    /// Index in `0..len`, or `None` when `len` is zero.
    fn pick_index(&self, len: usize) -> Option<usize>;
}

/// Unseeded picker backed by the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngPicker;

impl CandidatePicker for ThreadRngPicker {
    fn pick_index(&self, len: usize) -> Option<usize> {
        (len > 0).then(|| rand::thread_rng().gen_range(0..len))
    }
}

/// Deterministic picker for reproducible runs.
#[derive(Debug)]
pub struct SeededPicker {
    rng: Mutex<StdRng>,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl CandidatePicker for SeededPicker {
    fn pick_index(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Some(rng.gen_range(0..len))
    }
}

pub fn pick_one<T>(picker: &dyn CandidatePicker, mut candidates: Vec<T>) -> Option<T> {
    let index = picker.pick_index(candidates.len())?;
    (index < candidates.len()).then(|| candidates.swap_remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_candidates_yield_none() {
        assert_eq!(pick_one::<u8>(&ThreadRngPicker, vec![]), None);
        assert_eq!(pick_one::<u8>(&SeededPicker::new(7), vec![]), None);
    }

    #[test]
    fn test_pick_is_a_member() {
        let candidates = vec!["a", "b", "c"];
        for _ in 0..50 {
            let picked = pick_one(&ThreadRngPicker, candidates.clone()).unwrap();
            assert!(candidates.contains(&picked));
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let left = SeededPicker::new(42);
        let right = SeededPicker::new(42);
        let a: Vec<_> = (0..20).map(|_| left.pick_index(10)).collect();
        let b: Vec<_> = (0..20).map(|_| right.pick_index(10)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_seeded_picker_covers_every_index() {
        let picker = SeededPicker::new(1);
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[picker.pick_index(4).unwrap()] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
    }
}
