//! Pluggable source of randomness for phrase selection and reply delays.

use rand::Rng;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Uniform index generator.
pub trait RandomSource: Send + Sync {
    /// Returns an index in `0..len`. `len` is never zero.
    fn index(&self, len: usize) -> usize;
}

/// Thread-local RNG backed source used in production.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn index(&self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        rand::thread_rng().gen_range(0..len)
    }
}

/// Replays a fixed list of indices in a loop, each reduced modulo `len`.
#[derive(Debug)]
pub struct FixedRandom {
    values: Vec<usize>,
    cursor: AtomicUsize,
}

impl FixedRandom {
    pub fn new(values: Vec<usize>) -> Self {
        Self {
            values,
            cursor: AtomicUsize::new(0),
        }
    }

    /// Always answers `value`.
    pub fn constant(value: usize) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for FixedRandom {
    fn index(&self, len: usize) -> usize {
        if self.values.is_empty() || len == 0 {
            return 0;
        }
        let i = self.cursor.fetch_add(1, Ordering::Relaxed) % self.values.len();
        self.values[i] % len
    }
}
