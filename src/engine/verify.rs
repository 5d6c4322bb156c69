//! Completion verifier
//!
//! [`verify`] is the boolean check; [`confirm`] is the optional stepped
//! animation that reveals an ordered sequence as verified one index at a
//! time through the normal progress channel. The animation never affects
//! the result.

use crate::engine::sink::{Phase, ProgressEvent, RenderSink};
use crate::sequence::{is_ordered, Element};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verification {
    pub ordered: bool,
}

/// Check that every adjacent pair is non-decreasing
pub fn verify(seq: &[Element]) -> Verification {
    Verification {
        ordered: is_ordered(seq),
    }
}

/// Emit one [`Phase::Verifying`] event per index. Event `i` means
/// `seq[..=i]` has been confirmed.
pub fn confirm(seq: &[Element], sink: &mut dyn RenderSink) {
    for i in 0..seq.len() {
        sink.on_progress(ProgressEvent {
            sequence: seq,
            touched: &[i],
            phase: Phase::Verifying,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Collect(Vec<(Vec<usize>, Phase)>);

    impl RenderSink for Collect {
        fn on_progress(&mut self, event: ProgressEvent<'_>) {
            self.0.push((event.touched.to_vec(), event.phase));
        }
    }

    #[test]
    fn test_verify_ordered_and_unordered() {
        assert!(verify(&[]).ordered);
        assert!(verify(&[1, 2, 2, 9]).ordered);
        assert!(!verify(&[1, 3, 2]).ordered);
    }

    #[test]
    fn test_verify_is_idempotent() {
        let seq = [5, 1, 4];
        assert_eq!(verify(&seq), verify(&seq));
        let seq = [1, 4, 5];
        assert_eq!(verify(&seq), verify(&seq));
    }

    #[test]
    fn test_confirm_steps_through_every_index() {
        let mut sink = Collect::default();
        confirm(&[1, 2, 3], &mut sink);
        assert_eq!(
            sink.0,
            vec![
                (vec![0], Phase::Verifying),
                (vec![1], Phase::Verifying),
                (vec![2], Phase::Verifying),
            ]
        );
    }
}
