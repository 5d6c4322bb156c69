//! Duration estimates from uninstrumented runs
//!
//! [`estimate`] copies the caller's sequence, runs the [`bare`] twin of the
//! chosen algorithm to completion on the copy and returns the wall-clock
//! time. The estimate is only announced to the user; it never changes how
//! the real run behaves.

pub mod bare;

use crate::engine::algorithm::Algorithm;
use crate::sequence::Element;
use std::time::{Duration, Instant};

/// Time the bare twin of `algorithm` on a copy of `seq`.
///
/// Returns `None` for algorithms with unbounded running time (bogo sort)
/// and for input the algorithm would reject.
pub fn estimate(algorithm: Algorithm, seq: &[Element]) -> Option<Duration> {
    let bare = algorithm.entry().bare?;
    algorithm.check(seq).ok()?;
    let mut scratch = seq.to_vec();

    let started = Instant::now();
    bare(&mut scratch);
    Some(started.elapsed())
}

/// Human readable estimate, as shown before a run starts
pub fn describe(estimate: Option<Duration>) -> String {
    match estimate {
        Some(duration) => format!("{:.3}s", duration.as_secs_f64()),
        None => "a long time... probably".to_string(),
    }
}
