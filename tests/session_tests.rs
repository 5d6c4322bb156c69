// Integration tests for pausing and resuming sort sessions

use rand::rngs::StdRng;
use rand::SeedableRng;
use sortvis::engine::{
    Algorithm, NullSink, PauseFlag, ProgressEvent, RenderSink, RunOutcome, SessionStatus,
    SortError, SortSession,
};
use sortvis::sequence::{self, Element};
use std::time::Duration;

/// Raises the pause flag once `remaining` events have been seen
struct PauseAfter {
    flag: PauseFlag,
    remaining: Option<usize>,
    seen: usize,
}

impl PauseAfter {
    fn new(flag: PauseFlag, after: usize) -> Self {
        PauseAfter {
            flag,
            remaining: Some(after),
            seen: 0,
        }
    }

    fn disarm(&mut self) {
        self.remaining = None;
    }
}

impl RenderSink for PauseAfter {
    fn on_progress(&mut self, _event: ProgressEvent<'_>) {
        self.seen += 1;
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining = remaining.saturating_sub(1);
            if *remaining == 0 {
                self.flag.set(true);
            }
        }
    }
}

fn sorted(input: &[Element]) -> Vec<Element> {
    let mut expected = input.to_vec();
    expected.sort();
    expected
}

fn session(input: Vec<Element>, algorithm: Algorithm) -> SortSession {
    SortSession::new(input, algorithm)
        .expect("Input rejected")
        .with_seed(5)
        .with_completion_check(false)
}

#[test]
fn test_bubble_paused_after_first_swap_then_resumed() {
    let mut session = session(vec![4, 2, 1, 3], Algorithm::Bubble);

    // Raised before the run: the first swap happens, its checkpoint pauses
    session.set_paused(true);
    let outcome = session.start(&mut NullSink).unwrap();
    assert!(outcome.is_paused());
    assert_eq!(session.snapshot(), Some(&[2, 4, 1, 3][..]));

    session.set_paused(false);
    let outcome = session.resume(&mut NullSink).unwrap();
    assert!(!outcome.is_paused());
    assert_eq!(session.sequence(), &[1, 2, 3, 4]);
    assert_eq!(session.status(), SessionStatus::Completed);
}

#[test]
fn test_pause_then_resume_sorts_for_every_algorithm() {
    let mut rng = StdRng::seed_from_u64(77);
    let input = sequence::random(&mut rng, 60, 1, 1000);
    let expected = sorted(&input);

    for algorithm in Algorithm::ALL {
        if !algorithm.is_deterministic() {
            continue;
        }
        for after in [1, 2, 5, 17, 40] {
            let mut session = session(input.clone(), algorithm);
            let mut sink = PauseAfter::new(session.pause_flag(), after);

            let outcome = session.start(&mut sink).unwrap();
            if !outcome.is_paused() {
                // The run finished before the pause was observed
                assert_eq!(session.sequence(), &expected[..]);
                continue;
            }

            let snapshot = session.snapshot().expect("paused without a snapshot");
            assert_eq!(
                sorted(snapshot),
                expected,
                "{} snapshot after {} events is not a permutation",
                algorithm,
                after
            );

            sink.disarm();
            session.set_paused(false);
            let outcome = session.resume(&mut sink).unwrap();
            assert!(!outcome.is_paused());
            assert_eq!(
                session.sequence(),
                &expected[..],
                "{} after resuming from event {}",
                algorithm,
                after
            );
        }
    }
}

#[test]
fn test_repeated_pauses_on_swap_driven_algorithms() {
    // Every checkpoint here follows a swap that removes an inversion, so each
    // resume keeps at least the swap that observed the pause
    let input: Vec<Element> = (1..=25).rev().collect();
    let iterative = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::CocktailShaker,
        Algorithm::Gnome,
        Algorithm::OddEven,
        Algorithm::DoubleSelection,
        Algorithm::Cycle,
        Algorithm::Comb,
    ];

    for algorithm in iterative {
        let mut session = session(input.clone(), algorithm);
        let mut sink = PauseAfter::new(session.pause_flag(), 3);
        let mut outcome = session.start(&mut sink).unwrap();
        let mut pauses = 0;

        while outcome.is_paused() {
            pauses += 1;
            assert!(pauses < 10_000, "{} never finished", algorithm);
            sink.remaining = Some(3);
            session.set_paused(false);
            outcome = session.resume(&mut sink).unwrap();
        }

        assert_eq!(session.sequence(), &sorted(&input)[..], "{}", algorithm);
    }
}

#[test]
fn test_elapsed_and_events_accumulate_across_resume() {
    let input: Vec<Element> = (1..=50).rev().collect();
    let mut session = session(input, Algorithm::Insertion);
    let mut sink = PauseAfter::new(session.pause_flag(), 10);

    let RunOutcome::Paused {
        elapsed: first_elapsed,
        events: first_events,
    } = session.start(&mut sink).unwrap()
    else {
        panic!("expected a pause");
    };
    assert_eq!(first_events, 10);

    sink.disarm();
    session.set_paused(false);
    let RunOutcome::Completed { elapsed, events } = session.resume(&mut sink).unwrap() else {
        panic!("expected completion");
    };

    // Reversed input has 50 * 49 / 2 inversions, one shift each. The shift
    // that observed the pause is kept in the snapshot but never reported.
    assert_eq!(events, 1224);
    assert_eq!(sink.seen, 1224);
    assert!(elapsed >= first_elapsed);

    // A fresh start resets the totals
    let outcome = session.start(&mut NullSink).unwrap();
    assert_eq!(
        outcome,
        RunOutcome::Completed {
            elapsed: session.elapsed(),
            events: 0
        }
    );
}

#[test]
fn test_resume_requires_a_pause() {
    let mut session = session(vec![2, 1], Algorithm::Merge);
    assert_eq!(session.resume(&mut NullSink), Err(SortError::NothingToResume));

    session.start(&mut NullSink).unwrap();
    assert_eq!(session.resume(&mut NullSink), Err(SortError::NothingToResume));
}

#[test]
fn test_pause_flag_cleared_by_caller_only() {
    let mut session = session(vec![3, 2, 1], Algorithm::Gnome);
    session.set_paused(true);
    assert!(session.start(&mut NullSink).unwrap().is_paused());

    // Still raised: resuming pauses again at the next mutation
    let outcome = session.resume(&mut NullSink).unwrap();
    assert!(outcome.is_paused());
    assert!(session.pause_flag().is_set());
}

#[test]
fn test_estimate_is_reported_without_touching_the_sequence() {
    let input: Vec<Element> = (1..=200).rev().collect();
    let session = session(input.clone(), Algorithm::Merge);
    let estimate = session.estimate_duration();
    assert!(estimate.is_some_and(|d| d < Duration::from_secs(5)));
    assert_eq!(session.sequence(), &input[..]);

    let bogo = SortSession::new(vec![2, 1], Algorithm::Bogo).unwrap();
    assert!(!bogo.algorithm().is_deterministic());
    assert_eq!(bogo.estimate_duration(), None);
}
