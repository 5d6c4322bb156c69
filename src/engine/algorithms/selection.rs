//! Selection family: selection, double selection, cycle, heap and pancake sort

use crate::engine::checkpoint::{Checkpoint, Flow};
use crate::sequence::{flip, max_index, swap, Element};

pub fn selection(seq: &mut [Element], cp: &mut Checkpoint<'_>) -> Flow {
    let n = seq.len();
    for i in 0..n {
        let mut min = i;
        for j in i..n {
            if seq[j] < seq[min] {
                min = j;
            }
        }
        if min != i {
            swap(seq, i, min);
            cp.reach(seq, &[i, min])?;
        }
    }
    Ok(())
}

/// Each pass selects both the minimum and the maximum of the unsorted middle
/// and places them at the two ends, one checkpoint per end.
pub fn double_selection(seq: &mut [Element], cp: &mut Checkpoint<'_>) -> Flow {
    let n = seq.len();
    for i in 0..n / 2 {
        let last = n - i - 1;
        let mut min = i;
        let mut max = i;
        for j in i + 1..=last {
            if seq[j] < seq[min] {
                min = j;
            }
            if seq[j] > seq[max] {
                max = j;
            }
        }

        if min != i {
            swap(seq, i, min);
            cp.reach(seq, &[i, min])?;
        }

        // The maximum was sitting at `i` and just moved to `min`
        if max == i {
            max = min;
        }

        if max != last {
            swap(seq, last, max);
            cp.reach(seq, &[last, max])?;
        }
    }
    Ok(())
}

/// Final position of `seq[start]` within `seq[start..]`
fn cycle_position(seq: &[Element], start: usize) -> usize {
    let item = seq[start];
    start + seq[start + 1..].iter().filter(|&&v| v < item).count()
}

/// Cycle sort. The item being carried around a cycle is parked at the cycle
/// start, so each cycle write is a swap with that slot.
pub fn cycle(seq: &mut [Element], cp: &mut Checkpoint<'_>) -> Flow {
    let n = seq.len();
    for start in 0..n.saturating_sub(1) {
        let mut pos = cycle_position(seq, start);
        while pos != start {
            let item = seq[start];
            // Skip slots already holding an equal value
            while seq[pos] == item {
                pos += 1;
            }
            swap(seq, pos, start);
            cp.reach(seq, &[pos, start])?;
            pos = cycle_position(seq, start);
        }
    }
    Ok(())
}

fn heapify(seq: &mut [Element], len: usize, root: usize, cp: &mut Checkpoint<'_>) -> Flow {
    let mut largest = root;
    let left = 2 * root + 1;
    let right = 2 * root + 2;

    if left < len && seq[root] < seq[left] {
        largest = left;
    }
    if right < len && seq[largest] < seq[right] {
        largest = right;
    }

    if largest != root {
        swap(seq, root, largest);
        cp.reach(seq, &[root, largest])?;
        heapify(seq, len, largest, cp)?;
    }
    Ok(())
}

pub fn heap(seq: &mut [Element], cp: &mut Checkpoint<'_>) -> Flow {
    let n = seq.len();
    for i in (0..n / 2).rev() {
        heapify(seq, n, i, cp)?;
    }
    for end in (1..n).rev() {
        swap(seq, end, 0);
        cp.reach(seq, &[end, 0])?;
        heapify(seq, end, 0, cp)?;
    }
    Ok(())
}

/// Pancake sort over a shrinking prefix. A flip pair (max to front, front to
/// the end of the prefix) is a single unit of progress.
pub fn pancake(seq: &mut [Element], cp: &mut Checkpoint<'_>) -> Flow {
    pancake_prefix(seq, seq.len(), cp)
}

fn pancake_prefix(seq: &mut [Element], size: usize, cp: &mut Checkpoint<'_>) -> Flow {
    if size < 2 {
        return Ok(());
    }
    if let Some(top) = max_index(seq, size) {
        if top != size - 1 {
            flip(seq, top);
            flip(seq, size - 1);
            cp.reach(seq, &[top, size - 1])?;
        }
    }
    pancake_prefix(seq, size - 1, cp)
}
