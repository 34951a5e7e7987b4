//! Random draws shared by generation, combat and AI.
//!
//! Every roll in the core goes through [`uniform_int`] so the number and
//! order of draws stay identical for a given seed.

use rand::Rng;

/// Uniform integer in `[lo, hi]`, inclusive on both ends.
///
/// An empty or single-value range yields `lo` without consuming a draw.
pub fn uniform_int(rng: &mut impl Rng, lo: i32, hi: i32) -> i32 {
    if hi <= lo {
        return lo;
    }
    rng.gen_range(lo..=hi)
}

/// Picks an index from integer weights with a single `[1, sum]` roll.
///
/// Ties are resolved by declaration order: the roll is mapped onto the
/// cumulative sums in iteration order. Returns `None` when every weight is zero.
pub fn random_choice_index(chances: &[u32], rng: &mut impl Rng) -> Option<usize> {
    let total: u32 = chances.iter().sum();
    if total == 0 {
        return None;
    }
    let dice = uniform_int(rng, 1, total as i32) as u32;

    let mut running_sum = 0;
    for (index, &weight) in chances.iter().enumerate() {
        running_sum += weight;
        if dice <= running_sum {
            return Some(index);
        }
    }
    None
}

/// Picks a key from an ordered list of `(key, weight)` pairs.
pub fn random_choice<'a, K>(chances: &'a [(K, u32)], rng: &mut impl Rng) -> Option<&'a K> {
    let weights: Vec<u32> = chances.iter().map(|(_, w)| *w).collect();
    random_choice_index(&weights, rng).map(|i| &chances[i].0)
}
