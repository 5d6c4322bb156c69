//! Insertion family: insertion sort and shell sort

use crate::engine::checkpoint::{Checkpoint, Flow};
use crate::sequence::{swap, Element};

/// Shift each element left while its predecessor is greater.
/// One checkpoint per single-step shift.
pub fn insertion(seq: &mut [Element], cp: &mut Checkpoint<'_>) -> Flow {
    for i in 1..seq.len() {
        let mut j = i;
        while j > 0 && seq[j - 1] > seq[j] {
            swap(seq, j, j - 1);
            cp.reach(seq, &[j, j - 1])?;
            j -= 1;
        }
    }
    Ok(())
}

/// Gapped insertion sort with gaps `n/2, n/4, .., 1`.
///
/// The element being inserted travels down by gapped swaps instead of being
/// held aside, so the slice stays a permutation between checkpoints. A
/// checkpoint also fires once the element comes to rest.
pub fn shell(seq: &mut [Element], cp: &mut Checkpoint<'_>) -> Flow {
    let n = seq.len();
    let mut gap = n / 2;

    while gap > 0 {
        for i in gap..n {
            let mut j = i;
            while j >= gap && seq[j - gap] > seq[j] {
                swap(seq, j, j - gap);
                j -= gap;
                cp.reach(seq, &[j + gap, j])?;
            }
            cp.reach(seq, &[j, i])?;
        }
        gap /= 2;
    }
    Ok(())
}
