//! Uninstrumented twins of the engine's algorithms
//!
//! Same control flow as [`crate::engine::algorithms`] with the checkpoints
//! removed. Only used to time a throwaway copy before a real run.

use crate::engine::algorithms::distribution::{digit, RADIX};
use crate::engine::algorithms::exchange::{COMB_SHRINK_DEN, COMB_SHRINK_NUM};
use crate::sequence::{flip, max_index, shift, swap, Element};

pub fn bubble(seq: &mut [Element]) {
    let n = seq.len();
    for i in 0..n {
        for j in 0..n - i - 1 {
            if seq[j] > seq[j + 1] {
                swap(seq, j, j + 1);
            }
        }
    }
}

pub fn selection(seq: &mut [Element]) {
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
        }
    }
}

pub fn insertion(seq: &mut [Element]) {
    for i in 1..seq.len() {
        let mut j = i;
        while j > 0 && seq[j - 1] > seq[j] {
            swap(seq, j, j - 1);
            j -= 1;
        }
    }
}

pub fn merge(seq: &mut [Element]) {
    if seq.len() > 1 {
        merge_range(seq, 0, seq.len() - 1);
    }
}

fn merge_range(seq: &mut [Element], left: usize, right: usize) {
    if left >= right {
        return;
    }
    let mid = (left + right) / 2;
    merge_range(seq, left, mid);
    merge_range(seq, mid + 1, right);

    let mut out = left;
    let mut head = mid + 1;
    while out < head && head <= right {
        if seq[out] > seq[head] {
            shift(seq, head, out);
            head += 1;
        }
        out += 1;
    }
}

pub fn shell(seq: &mut [Element]) {
    let n = seq.len();
    let mut gap = n / 2;
    while gap > 0 {
        for i in gap..n {
            let mut j = i;
            while j >= gap && seq[j - gap] > seq[j] {
                swap(seq, j, j - gap);
                j -= gap;
            }
        }
        gap /= 2;
    }
}

pub fn cocktail_shaker(seq: &mut [Element]) {
    if seq.len() < 2 {
        return;
    }
    let mut start = 0;
    let mut end = seq.len() - 1;
    while start <= end {
        let mut swapped = false;
        for i in start..end {
            if seq[i] > seq[i + 1] {
                swap(seq, i, i + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
        end -= 1;
        for i in (start + 1..=end).rev() {
            if seq[i - 1] > seq[i] {
                swap(seq, i - 1, i);
            }
        }
        start += 1;
    }
}

pub fn quick(seq: &mut [Element]) {
    if seq.len() > 1 {
        quick_range(seq, 0, seq.len() - 1);
    }
}

fn quick_range(seq: &mut [Element], low: usize, high: usize) {
    if low >= high {
        return;
    }
    let pivot_value = seq[high];
    let mut store = low;
    for j in low..high {
        if seq[j] <= pivot_value {
            swap(seq, store, j);
            store += 1;
        }
    }
    swap(seq, store, high);

    if store > low {
        quick_range(seq, low, store - 1);
    }
    quick_range(seq, store + 1, high);
}

fn heapify(seq: &mut [Element], len: usize, root: usize) {
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
        heapify(seq, len, largest);
    }
}

pub fn heap(seq: &mut [Element]) {
    let n = seq.len();
    for i in (0..n / 2).rev() {
        heapify(seq, n, i);
    }
    for end in (1..n).rev() {
        swap(seq, end, 0);
        heapify(seq, end, 0);
    }
}

pub fn radix(seq: &mut [Element]) {
    let Some(&max) = seq.iter().max() else {
        return;
    };
    let mut output = vec![0; seq.len()];
    let mut exp: Element = 1;
    while max / exp > 0 {
        let mut count = [0usize; RADIX];
        for &value in seq.iter() {
            count[digit(value, exp)] += 1;
        }
        for d in 1..RADIX {
            count[d] += count[d - 1];
        }
        for i in (0..seq.len()).rev() {
            let d = digit(seq[i], exp);
            count[d] -= 1;
            output[count[d]] = seq[i];
        }
        seq.copy_from_slice(&output);

        exp = match exp.checked_mul(RADIX as Element) {
            Some(next) => next,
            None => break,
        };
    }
}

pub fn gnome(seq: &mut [Element]) {
    let n = seq.len();
    let mut index = 0;
    while index < n {
        if index == 0 || seq[index] >= seq[index - 1] {
            index += 1;
        } else {
            swap(seq, index, index - 1);
            index -= 1;
        }
    }
}

pub fn odd_even(seq: &mut [Element]) {
    let last = seq.len().saturating_sub(1);
    let mut sorted = false;
    while !sorted {
        sorted = true;
        for first in [1, 0] {
            for i in (first..last).step_by(2) {
                if seq[i] > seq[i + 1] {
                    swap(seq, i, i + 1);
                    sorted = false;
                }
            }
        }
    }
}

pub fn double_selection(seq: &mut [Element]) {
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
        }
        if max == i {
            max = min;
        }
        if max != last {
            swap(seq, last, max);
        }
    }
}

pub fn cycle(seq: &mut [Element]) {
    let n = seq.len();
    for start in 0..n.saturating_sub(1) {
        loop {
            let item = seq[start];
            let mut pos = start + seq[start + 1..].iter().filter(|&&v| v < item).count();
            if pos == start {
                break;
            }
            while seq[pos] == item {
                pos += 1;
            }
            swap(seq, pos, start);
        }
    }
}

pub fn pigeonhole(seq: &mut [Element]) {
    let (Some(&min), Some(&max)) = (seq.iter().min(), seq.iter().max()) else {
        return;
    };
    let mut holes = vec![0usize; (max - min) as usize + 1];
    for &value in seq.iter() {
        holes[(value - min) as usize] += 1;
    }
    let mut index = 0;
    for (offset, &count) in holes.iter().enumerate() {
        let value = min + offset as Element;
        for _ in 0..count {
            if let Some(found) = seq[index..].iter().position(|&v| v == value) {
                swap(seq, index, index + found);
            }
            index += 1;
        }
    }
}

pub fn comb(seq: &mut [Element]) {
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
            }
        }
    }
}

pub fn pancake(seq: &mut [Element]) {
    for size in (2..=seq.len()).rev() {
        if let Some(top) = max_index(seq, size) {
            if top != size - 1 {
                flip(seq, top);
                flip(seq, size - 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::algorithm::TABLE;

    #[test]
    fn test_every_twin_sorts() {
        let fixture = vec![42, 7, 7, 0, 913, 15, 8, 301, 2, 99, 7, 1000, 64];
        let mut expected = fixture.clone();
        expected.sort_unstable();

        for entry in TABLE.iter() {
            let Some(bare) = entry.bare else { continue };
            let mut seq = fixture.clone();
            bare(&mut seq);
            assert_eq!(seq, expected, "{} twin left input unsorted", entry.name);
        }
    }

    #[test]
    fn test_twins_accept_tiny_inputs() {
        for entry in TABLE.iter() {
            let Some(bare) = entry.bare else { continue };
            let mut empty: Vec<Element> = Vec::new();
            bare(&mut empty);
            let mut single = vec![5];
            bare(&mut single);
            assert_eq!(single, vec![5]);
            let mut pair = vec![9, 3];
            bare(&mut pair);
            assert_eq!(pair, vec![3, 9], "{}", entry.name);
        }
    }
}
