use crate::domain::ports::RandomSource;
use rand::Rng;

/// Uniform positions drawn from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn position(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}
