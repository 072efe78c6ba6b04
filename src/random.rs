//! Sources of uniform random integers used to drive the randomized tree.

use rand::{Rng, StdRng, XorShiftRng};

/// A generator of uniformly distributed integers over an inclusive range.
///
/// The randomized tree only ever needs to draw an integer in `[low, high]`, so any generator that
/// can do that is enough to balance it. Implementing this trait for a scripted sequence of draws
/// makes specific rotation and join outcomes reproducible.
///
/// # Examples
/// ```
/// use randomized_bst::random::RandomSource;
///
/// let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
/// let value = rng.gen_range_inclusive(0, 3);
/// assert!(value <= 3);
/// ```
pub trait RandomSource {
    /// Returns a uniformly distributed integer in `[low, high]`, including both bounds.
    fn gen_range_inclusive(&mut self, low: usize, high: usize) -> usize;
}

impl RandomSource for XorShiftRng {
    fn gen_range_inclusive(&mut self, low: usize, high: usize) -> usize {
        self.gen_range(low, high + 1)
    }
}

impl RandomSource for StdRng {
    fn gen_range_inclusive(&mut self, low: usize, high: usize) -> usize {
        self.gen_range(low, high + 1)
    }
}

impl<'a, R> RandomSource for &'a mut R
where
    R: RandomSource + ?Sized,
{
    fn gen_range_inclusive(&mut self, low: usize, high: usize) -> usize {
        (**self).gen_range_inclusive(low, high)
    }
}
