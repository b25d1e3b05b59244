use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Randomness source consumed by particle generation.
///
/// Injected into the field so spawn sequences are reproducible under a fixed seed, and
/// scriptable in tests.
pub trait SpawnRng {
    /// Uniform sample from `[lo, hi)`. Returns `lo` when the range is empty.
    fn uniform(&mut self, lo: f64, hi: f64) -> f64;

    /// `true` with probability `p`. `p <= 0` is never true, `p >= 1` always is.
    fn chance(&mut self, p: f64) -> bool;

    /// Uniform index into a slice of length `len`. Returns 0 when `len` is 0.
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: SpawnRng + ?Sized> SpawnRng for &mut R {
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        (**self).uniform(lo, hi)
    }

    fn chance(&mut self, p: f64) -> bool {
        (**self).chance(p)
    }

    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// Default [`SpawnRng`]: ChaCha8 seeded from a `u64`.
#[derive(Clone, Debug)]
pub struct SeededRng {
    inner: ChaCha8Rng,
}

impl SeededRng {
    /// Deterministic generator for `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl SpawnRng for SeededRng {
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        if lo.is_nan() || hi.is_nan() || lo >= hi {
            return lo;
        }
        self.inner.gen_range(lo..hi)
    }

    fn chance(&mut self, p: f64) -> bool {
        if p.is_nan() || p <= 0.0 {
            return false;
        }
        if p >= 1.0 {
            return true;
        }
        self.inner.gen_bool(p)
    }

    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.inner.gen_range(0..len)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/spawn/rng.rs"]
mod tests;
