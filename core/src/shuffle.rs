use alloc::vec::Vec;
use rand::Rng;

/// Fisher-Yates shuffle returning a new permutation, `items` is left untouched.
///
/// Walks the indices from last to first and swaps each one with a uniformly drawn index in `0..=i`, so every
/// permutation is equally likely as long as `rng` is uniform.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.random_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}
