//! Exchange sorts: bubble, cocktail shaker, gnome, odd-even, comb, bogo
//!
//! Each checkpoint follows exactly one swap (or one shuffle for bogo sort).

use crate::engine::checkpoint::{Checkpoint, Flow};
use crate::sequence::{is_ordered, swap, Element};
use rand::seq::SliceRandom;

/// Comb sort shrinks its gap by a factor of 1.3, expressed as 10/13
pub(crate) const COMB_SHRINK_NUM: usize = 10;
pub(crate) const COMB_SHRINK_DEN: usize = 13;

/// Full `n` passes over a shrinking window, no early exit
pub fn bubble(seq: &mut [Element], cp: &mut Checkpoint<'_>) -> Flow {
    let n = seq.len();
    for i in 0..n {
        for j in 0..n - i - 1 {
            if seq[j] > seq[j + 1] {
                swap(seq, j, j + 1);
                cp.reach(seq, &[j, j + 1])?;
            }
        }
    }
    Ok(())
}

/// Bidirectional bubble sort. Stops as soon as a forward pass swaps nothing.
pub fn cocktail_shaker(seq: &mut [Element], cp: &mut Checkpoint<'_>) -> Flow {
    if seq.len() < 2 {
        return Ok(());
    }
    let mut start = 0;
    let mut end = seq.len() - 1;

    while start <= end {
        let mut swapped = false;
        for i in start..end {
            if seq[i] > seq[i + 1] {
                swap(seq, i, i + 1);
                swapped = true;
                cp.reach(seq, &[i, i + 1])?;
            }
        }
        if !swapped {
            break;
        }

        // A forward swap implies end > start
        end -= 1;

        for i in (start + 1..=end).rev() {
            if seq[i - 1] > seq[i] {
                swap(seq, i - 1, i);
                cp.reach(seq, &[i - 1, i])?;
            }
        }
        start += 1;
    }
    Ok(())
}

pub fn gnome(seq: &mut [Element], cp: &mut Checkpoint<'_>) -> Flow {
    let n = seq.len();
    let mut index = 0;
    while index < n {
        if index == 0 || seq[index] >= seq[index - 1] {
            index += 1;
        } else {
            swap(seq, index, index - 1);
            index -= 1;
            cp.reach(seq, &[index, index + 1])?;
        }
    }
    Ok(())
}

/// Odd pass then even pass, repeated until a full pair swaps nothing
pub fn odd_even(seq: &mut [Element], cp: &mut Checkpoint<'_>) -> Flow {
    let last = seq.len().saturating_sub(1);
    let mut sorted = false;
    while !sorted {
        sorted = true;
        for first in [1, 0] {
            for i in (first..last).step_by(2) {
                if seq[i] > seq[i + 1] {
                    swap(seq, i, i + 1);
                    sorted = false;
                    cp.reach(seq, &[i, i + 1])?;
                }
            }
        }
    }
    Ok(())
}

pub fn comb(seq: &mut [Element], cp: &mut Checkpoint<'_>) -> Flow {
    let n = seq.len();
    let mut gap = n;
    let mut swapped = true;

    while gap > 1 || swapped {
        gap = (gap * COMB_SHRINK_NUM / COMB_SHRINK_DEN).max(1);
        swapped = false;
        for i in 0..n.saturating_sub(gap) {
            if seq[i] > seq[i + gap] {
                swap(seq, i, i + gap);
                swapped = true;
                cp.reach(seq, &[i, i + gap])?;
            }
        }
    }
    Ok(())
}

/// Shuffle until ordered. One checkpoint per shuffle, no touched indices.
pub fn bogo(seq: &mut [Element], cp: &mut Checkpoint<'_>) -> Flow {
    while !is_ordered(seq) {
        seq.shuffle(cp.rng());
        cp.reach(seq, &[])?;
    }
    Ok(())
}
