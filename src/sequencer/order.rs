//! Play-order helpers: the session shuffle and the next-track selector.

use rand::Rng;

/// Produce a shuffled permutation of `0..n` (Fisher–Yates).
///
/// For every index `i` from `n - 1` down to `1`, swap with a uniformly
/// chosen index in `0..=i`. `n` of 0 or 1 yields the trivial order.
pub fn shuffled_order<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..n).collect();
    for i in (1..n).rev() {
        let j = rng.random_range(0..=i);
        order.swap(i, j);
    }
    order
}

/// Pick the next cursor position uniformly at random, rejecting `current`.
///
/// With a single track repetition is unavoidable and accepted. The
/// rejection loop has no upper bound, which is fine for the small
/// playlists this player handles; this is not a guaranteed-O(1) draw.
pub fn next_index<R: Rng>(current: usize, len: usize, rng: &mut R) -> usize {
    debug_assert!(len > 0, "next_index on an empty order");
    loop {
        let candidate = rng.random_range(0..len);
        if candidate != current || len == 1 {
            return candidate;
        }
    }
}
