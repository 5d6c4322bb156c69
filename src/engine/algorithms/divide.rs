//! Divide and conquer: merge sort and quick sort
//!
//! Both recurse, and both forward an [`Interrupted`] from any depth with `?`.
//!
//! [`Interrupted`]: crate::engine::checkpoint::Interrupted

use crate::engine::checkpoint::{Checkpoint, Flow, Interrupted};
use crate::sequence::{shift, swap, Element};

pub fn merge(seq: &mut [Element], cp: &mut Checkpoint<'_>) -> Flow {
    if seq.len() > 1 {
        merge_range(seq, 0, seq.len() - 1, cp)?;
    }
    Ok(())
}

fn merge_range(seq: &mut [Element], left: usize, right: usize, cp: &mut Checkpoint<'_>) -> Flow {
    if left >= right {
        return Ok(());
    }
    let mid = (left + right) / 2;
    merge_range(seq, left, mid, cp)?;
    merge_range(seq, mid + 1, right, cp)?;
    merge_runs(seq, left, mid, right, cp)
}

/// Merge `seq[left..=mid]` with `seq[mid+1..=right]`.
///
/// Invariant at every checkpoint: `seq[left..out]` is merged output,
/// `seq[out..head]` is what remains of the left run and `seq[head..=right]`
/// what remains of the right run. Taking from the right run shifts the
/// element down to `out`, so nothing is ever duplicated or lost.
fn merge_runs(
    seq: &mut [Element],
    left: usize,
    mid: usize,
    right: usize,
    cp: &mut Checkpoint<'_>,
) -> Flow {
    let mut out = left;
    let mut head = mid + 1;

    while out < head && head <= right {
        if seq[out] <= seq[head] {
            cp.reach(seq, &[out])?;
        } else {
            shift(seq, head, out);
            cp.reach(seq, &[out, head])?;
            head += 1;
        }
        out += 1;
    }

    // Left run leftovers are already in place
    while out < head {
        cp.reach(seq, &[out])?;
        out += 1;
    }

    // So are right run leftovers
    while head <= right {
        cp.reach(seq, &[head])?;
        head += 1;
    }
    Ok(())
}

pub fn quick(seq: &mut [Element], cp: &mut Checkpoint<'_>) -> Flow {
    if seq.len() > 1 {
        quick_range(seq, 0, seq.len() - 1, cp)?;
    }
    Ok(())
}

fn quick_range(seq: &mut [Element], low: usize, high: usize, cp: &mut Checkpoint<'_>) -> Flow {
    if low < high {
        let pivot = partition(seq, low, high, cp)?;
        if pivot > low {
            quick_range(seq, low, pivot - 1, cp)?;
        }
        quick_range(seq, pivot + 1, high, cp)?;
    }
    Ok(())
}

/// Lomuto partition around `seq[high]`, returning the pivot's final index
fn partition(
    seq: &mut [Element],
    low: usize,
    high: usize,
    cp: &mut Checkpoint<'_>,
) -> Result<usize, Interrupted> {
    let pivot = seq[high];
    let mut store = low;
    for j in low..high {
        if seq[j] <= pivot {
            swap(seq, store, j);
            cp.reach(seq, &[store, j])?;
            store += 1;
        }
    }
    swap(seq, store, high);
    cp.reach(seq, &[store, high])?;
    Ok(store)
}
