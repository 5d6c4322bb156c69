//! Sort sessions: start, pause, resume, verify
//!
//! A [`SortSession`] owns one live sequence and runs one algorithm over it.
//! A run ends in one of three ways:
//! - [`RunOutcome::Completed`]: the algorithm finished and the verifier
//!   confirmed the sequence is ordered
//! - [`RunOutcome::Paused`]: the pause flag was observed at a checkpoint and a
//!   snapshot was saved; [`SortSession::resume`] continues from it
//! - [`SortError::VerificationFailed`]: the algorithm finished on an
//!   unordered sequence
//!
//! Resuming re-enters the algorithm from the top on the snapshot. Iterative
//! algorithms pick up where they stopped because their progress lives in the
//! sequence itself; recursive ones redo their recursion on a partially
//! sorted input and still terminate sorted.

use crate::benchmark;
use crate::engine::algorithm::{Algorithm, Instrumented};
use crate::engine::checkpoint::{Checkpoint, PauseFlag};
use crate::engine::errors::SortError;
use crate::engine::sink::RenderSink;
use crate::engine::verify::{confirm, verify};
use crate::sequence::Element;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

/// Where a session stands between calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Ready,
    Paused,
    Completed,
    Failed,
}

/// Normal end of a call to [`SortSession::start`] or [`SortSession::resume`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed { elapsed: Duration, events: usize },
    Paused { elapsed: Duration, events: usize },
}

impl RunOutcome {
    pub fn is_paused(&self) -> bool {
        matches!(self, RunOutcome::Paused { .. })
    }
}

pub struct SortSession {
    algorithm: Algorithm,

    /// Live sequence, mutated in place
    sequence: Vec<Element>,

    pause: PauseFlag,

    /// Copy of the sequence taken when a pause was observed
    snapshot: Option<Vec<Element>>,

    /// Accumulated across pause/resume, reset by `start`
    elapsed: Duration,
    events: usize,

    status: SessionStatus,

    /// Play the stepped confirmation animation after a successful run
    animate_check: bool,

    rng: StdRng,
}

impl SortSession {
    /// Create a session, rejecting input the algorithm cannot sort
    pub fn new(sequence: Vec<Element>, algorithm: Algorithm) -> Result<Self, SortError> {
        algorithm.check(&sequence)?;
        Ok(SortSession {
            algorithm,
            sequence,
            pause: PauseFlag::new(),
            snapshot: None,
            elapsed: Duration::ZERO,
            events: 0,
            status: SessionStatus::Ready,
            animate_check: true,
            rng: StdRng::from_entropy(),
        })
    }

    /// Fix the random source (bogo sort shuffles)
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_completion_check(mut self, animate: bool) -> Self {
        self.animate_check = animate;
        self
    }

    pub fn set_completion_check(&mut self, animate: bool) {
        self.animate_check = animate;
    }

    pub fn completion_check(&self) -> bool {
        self.animate_check
    }

    /// Run from the current live sequence, resetting the accumulated time
    pub fn start(&mut self, sink: &mut dyn RenderSink) -> Result<RunOutcome, SortError> {
        self.snapshot = None;
        self.elapsed = Duration::ZERO;
        self.events = 0;
        self.run(sink)
    }

    /// Re-enter the algorithm on the last snapshot
    pub fn resume(&mut self, sink: &mut dyn RenderSink) -> Result<RunOutcome, SortError> {
        let snapshot = self.snapshot.take().ok_or(SortError::NothingToResume)?;
        self.sequence = snapshot;
        self.run(sink)
    }

    pub fn set_paused(&self, paused: bool) {
        self.pause.set(paused);
    }

    /// Another handle to this session's pause flag
    pub fn pause_flag(&self) -> PauseFlag {
        self.pause.clone()
    }

    /// Time the uninstrumented twin on a copy of the live sequence
    pub fn estimate_duration(&self) -> Option<Duration> {
        benchmark::estimate(self.algorithm, &self.sequence)
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn sequence(&self) -> &[Element] {
        &self.sequence
    }

    pub fn snapshot(&self) -> Option<&[Element]> {
        self.snapshot.as_deref()
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Progress events emitted since the last `start`
    pub fn events(&self) -> usize {
        self.events
    }

    fn run(&mut self, sink: &mut dyn RenderSink) -> Result<RunOutcome, SortError> {
        self.run_with(self.algorithm.entry().run, sink)
    }

    /// Drive `run` over the live sequence, then pause, fail or complete
    fn run_with(
        &mut self,
        run: Instrumented,
        sink: &mut dyn RenderSink,
    ) -> Result<RunOutcome, SortError> {
        let started = Instant::now();
        let mut checkpoint = Checkpoint::new(&self.pause, sink, &mut self.rng);
        let flow = run(&mut self.sequence, &mut checkpoint);
        self.events += checkpoint.events();
        let snapshot = checkpoint.take_snapshot();

        if flow.is_err() {
            self.elapsed += started.elapsed();
            self.snapshot = Some(snapshot.unwrap_or_else(|| self.sequence.clone()));
            self.status = SessionStatus::Paused;
            return Ok(RunOutcome::Paused {
                elapsed: self.elapsed,
                events: self.events,
            });
        }

        if !verify(&self.sequence).ordered {
            self.elapsed += started.elapsed();
            self.status = SessionStatus::Failed;
            sink.on_verification_failed(&self.sequence);
            return Err(SortError::VerificationFailed {
                algorithm: self.algorithm,
                sequence: self.sequence.clone(),
            });
        }

        self.elapsed += started.elapsed();
        self.status = SessionStatus::Completed;
        if self.animate_check {
            confirm(&self.sequence, sink);
        }
        sink.on_complete(&self.sequence);
        Ok(RunOutcome::Completed {
            elapsed: self.elapsed,
            events: self.events,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::checkpoint::Flow;
    use crate::engine::sink::{NullSink, ProgressEvent};
    use crate::snapshot::EventLog;

    #[test]
    fn test_resume_without_snapshot_is_rejected() {
        let mut session = SortSession::new(vec![2, 1], Algorithm::Bubble).unwrap();
        assert_eq!(session.resume(&mut NullSink), Err(SortError::NothingToResume));
        assert_eq!(session.status(), SessionStatus::Ready);
    }

    #[test]
    fn test_pause_then_resume_accumulates_events() {
        let mut session = SortSession::new(vec![3, 2, 1], Algorithm::Bubble)
            .unwrap()
            .with_completion_check(false);

        session.set_paused(true);
        let outcome = session.start(&mut NullSink).unwrap();
        assert!(outcome.is_paused());
        assert_eq!(session.status(), SessionStatus::Paused);
        assert_eq!(session.snapshot(), Some(&[2, 3, 1][..]));
        assert_eq!(session.events(), 0);

        session.set_paused(false);
        let outcome = session.resume(&mut NullSink).unwrap();
        assert!(matches!(outcome, RunOutcome::Completed { events: 2, .. }));
        assert_eq!(session.sequence(), &[1, 2, 3]);
        assert_eq!(session.snapshot(), None);
    }

    #[test]
    fn test_completion_check_events_follow_sorting_events() {
        struct Phases(Vec<crate::engine::sink::Phase>, usize);
        impl RenderSink for Phases {
            fn on_progress(&mut self, event: ProgressEvent<'_>) {
                self.0.push(event.phase);
            }
            fn on_complete(&mut self, _sequence: &[Element]) {
                self.1 += 1;
            }
        }

        let mut sink = Phases(Vec::new(), 0);
        let mut session = SortSession::new(vec![2, 1, 3], Algorithm::Selection).unwrap();
        session.start(&mut sink).unwrap();

        use crate::engine::sink::Phase::*;
        assert_eq!(sink.0, vec![Sorting, Verifying, Verifying, Verifying]);
        assert_eq!(sink.1, 1);
    }

    #[test]
    fn test_new_rejects_negative_radix_input() {
        let err = SortSession::new(vec![1, -4], Algorithm::Radix).err();
        assert!(matches!(err, Some(SortError::NegativeElement { index: 1, .. })));
    }

    /// Swaps the first pair the wrong way round and reports it
    fn unsort_first_pair(seq: &mut [Element], cp: &mut Checkpoint<'_>) -> Flow {
        if seq.len() > 1 && seq[0] < seq[1] {
            seq.swap(0, 1);
            cp.reach(seq, &[0, 1])?;
        }
        Ok(())
    }

    #[test]
    fn test_unordered_result_fails_verification() {
        let mut session = SortSession::new(vec![1, 2, 3], Algorithm::Bubble).unwrap();
        let mut log = EventLog::new(1024 * 1024);

        let result = session.run_with(unsort_first_pair, &mut log);

        assert_eq!(
            result,
            Err(SortError::VerificationFailed {
                algorithm: Algorithm::Bubble,
                sequence: vec![2, 1, 3],
            })
        );
        assert_eq!(session.status(), SessionStatus::Failed);
        assert_eq!(log.failed(), Some(&[2, 1, 3][..]));
        assert_eq!(log.completed(), None);
        // Left as the algorithm produced it, with no confirmation events
        assert_eq!(session.sequence(), &[2, 1, 3]);
        assert_eq!(log.total_events(), 1);
        assert_eq!(session.snapshot(), None);
        assert!(!result.unwrap_err().is_precondition());
    }
}
