//! Distribution sorts: LSD radix sort and pigeonhole sort
//!
//! Both index by value and require non-negative elements. Callers go through
//! [`Algorithm::check`](crate::engine::algorithm::Algorithm::check) first.

use crate::engine::checkpoint::{Checkpoint, Flow};
use crate::sequence::{swap, Element};

pub(crate) const RADIX: usize = 10;

/// Largest value span pigeonhole sort will allocate holes for
pub const MAX_PIGEONHOLE_SPAN: u64 = 1 << 20;

#[inline]
pub(crate) fn digit(value: Element, exp: Element) -> usize {
    ((value / exp) % RADIX as Element) as usize
}

/// Least significant digit first, one stable counting pass per decimal digit
pub fn radix(seq: &mut [Element], cp: &mut Checkpoint<'_>) -> Flow {
    let Some(&max) = seq.iter().max() else {
        return Ok(());
    };
    let mut output = vec![0; seq.len()];
    let mut exp: Element = 1;

    while max / exp > 0 {
        counting_pass(seq, &mut output, exp, cp)?;
        exp = match exp.checked_mul(RADIX as Element) {
            Some(next) => next,
            None => break,
        };
    }
    Ok(())
}

/// Place every element into `output` by digit, then copy back in one step.
/// Checkpoints report the staging buffer; a pause snapshots `seq`, which
/// is untouched until the copy.
fn counting_pass(
    seq: &mut [Element],
    output: &mut [Element],
    exp: Element,
    cp: &mut Checkpoint<'_>,
) -> Flow {
    let mut count = [0usize; RADIX];
    for &value in seq.iter() {
        count[digit(value, exp)] += 1;
    }
    for d in 1..RADIX {
        count[d] += count[d - 1];
    }

    output.fill(0);
    for i in (0..seq.len()).rev() {
        let d = digit(seq[i], exp);
        count[d] -= 1;
        output[count[d]] = seq[i];
        cp.reach_staged(seq, output, &[count[d]])?;
    }

    seq.copy_from_slice(output);
    Ok(())
}

/// Count values into `max - min + 1` holes, then walk the holes writing each
/// value into the next output slot. The write swaps the value in from
/// further right so the slice stays a permutation.
pub fn pigeonhole(seq: &mut [Element], cp: &mut Checkpoint<'_>) -> Flow {
    let (Some(&min), Some(&max)) = (seq.iter().min(), seq.iter().max()) else {
        return Ok(());
    };
    let mut holes = vec![0usize; (max - min) as usize + 1];
    for &value in seq.iter() {
        holes[(value - min) as usize] += 1;
    }

    let mut index = 0;
    for (offset, count) in holes.iter_mut().enumerate() {
        let value = min + offset as Element;
        while *count > 0 {
            let from = seq[index..]
                .iter()
                .position(|&v| v == value)
                .map_or(index, |found| index + found);
            swap(seq, index, from);
            *count -= 1;
            cp.reach(seq, &[index, from])?;
            index += 1;
        }
    }
    Ok(())
}
