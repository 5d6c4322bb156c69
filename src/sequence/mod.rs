//! Sequence model and in-place mutation primitives
//!
//! Every algorithm in [`crate::engine`] and [`crate::benchmark`] works on a
//! plain `&mut [Element]` and changes it only through the helpers here:
//! - [`swap`]: exchange two positions
//! - [`shift`]: move one element left into place, sliding the gap right
//! - [`flip`]: reverse a prefix (the pancake flip)
//!
//! All three leave the slice a permutation of what it was, so any state
//! observed between two calls is a consistent snapshot.

use rand::Rng;

/// Element type of a sequence. Values are bounded and non-negative in
/// practice, but the type is signed so that bad input can be detected
/// instead of wrapping.
pub type Element = i64;

/// Exchange positions `a` and `b`
#[inline]
pub fn swap(seq: &mut [Element], a: usize, b: usize) {
    seq.swap(a, b);
}

/// Move the element at `from` down to `to` (`to <= from`), shifting
/// `seq[to..from]` one step right.
#[inline]
pub fn shift(seq: &mut [Element], from: usize, to: usize) {
    debug_assert!(to <= from);
    seq[to..=from].rotate_right(1);
}

/// Reverse `seq[0..=k]`
#[inline]
pub fn flip(seq: &mut [Element], k: usize) {
    seq[..=k].reverse();
}

/// Index of the first largest element in `seq[..len]`, or `None` if empty
pub fn max_index(seq: &[Element], len: usize) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &value) in seq[..len].iter().enumerate() {
        match best {
            Some(b) if seq[b] >= value => {}
            _ => best = Some(i),
        }
    }
    best
}

/// True when every adjacent pair is non-decreasing
pub fn is_ordered(seq: &[Element]) -> bool {
    seq.windows(2).all(|pair| pair[0] <= pair[1])
}

/// Position and value of the first negative element, if any
pub fn first_negative(seq: &[Element]) -> Option<(usize, Element)> {
    seq.iter()
        .copied()
        .enumerate()
        .find(|&(_, value)| value < 0)
}

/// Generate `count` values uniformly drawn from `lower..=upper`
pub fn random<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    lower: Element,
    upper: Element,
) -> Vec<Element> {
    (0..count).map(|_| rng.gen_range(lower..=upper)).collect()
}
