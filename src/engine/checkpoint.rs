//! Cooperative pause protocol
//!
//! After each unit of progress an algorithm calls [`Checkpoint::reach`].
//! The checkpoint polls the [`PauseFlag`]; if it is raised, the current
//! sequence is copied into the snapshot slot and [`Interrupted`] is returned.
//! Otherwise a [`ProgressEvent`] is sent to the sink.
//!
//! Algorithms return [`Flow`] and forward the signal with `?`, so a pause seen
//! deep inside a recursive call unwinds every enclosing frame without doing
//! further work.

use crate::engine::sink::{Phase, ProgressEvent, RenderSink};
use crate::sequence::Element;
use rand::rngs::StdRng;
use std::cell::Cell;
use std::rc::Rc;

/// Shared, externally settable pause request.
///
/// Cloning yields another handle to the same flag. A render sink can hold a
/// clone and raise it between frames.
#[derive(Debug, Clone, Default)]
pub struct PauseFlag(Rc<Cell<bool>>);

impl PauseFlag {
    pub fn new() -> Self {
        PauseFlag(Rc::new(Cell::new(false)))
    }

    pub fn set(&self, paused: bool) {
        self.0.set(paused);
    }

    pub fn is_set(&self) -> bool {
        self.0.get()
    }
}

/// Internal signal: the run stopped at a checkpoint (not a real error)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interrupted;

/// Result of a unit of work inside an algorithm
pub type Flow = Result<(), Interrupted>;

/// Per-run checkpoint state handed to every instrumented algorithm
pub struct Checkpoint<'a> {
    pause: &'a PauseFlag,
    sink: &'a mut dyn RenderSink,
    rng: &'a mut StdRng,
    snapshot: Option<Vec<Element>>,
    events: usize,
}

impl<'a> Checkpoint<'a> {
    pub fn new(pause: &'a PauseFlag, sink: &'a mut dyn RenderSink, rng: &'a mut StdRng) -> Self {
        Checkpoint {
            pause,
            sink,
            rng,
            snapshot: None,
            events: 0,
        }
    }

    /// Poll the pause flag, then report `touched` on `seq`
    pub fn reach(&mut self, seq: &[Element], touched: &[usize]) -> Flow {
        self.reach_staged(seq, seq, touched)
    }

    /// Like [`reach`](Self::reach), but the sink sees `view` while a pause
    /// snapshots `live`. Used when placements go to a staging buffer that is
    /// only copied back between checkpoints.
    pub fn reach_staged(&mut self, live: &[Element], view: &[Element], touched: &[usize]) -> Flow {
        if self.pause.is_set() {
            self.snapshot = Some(live.to_vec());
            return Err(Interrupted);
        }
        self.sink.on_progress(ProgressEvent {
            sequence: view,
            touched,
            phase: Phase::Sorting,
        });
        self.events += 1;
        Ok(())
    }

    /// Randomness source for algorithms that need it (bogo sort)
    pub fn rng(&mut self) -> &mut StdRng {
        self.rng
    }

    /// Number of events emitted so far
    pub fn events(&self) -> usize {
        self.events
    }

    /// Take the snapshot captured by the last interrupted checkpoint
    pub fn take_snapshot(&mut self) -> Option<Vec<Element>> {
        self.snapshot.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::sink::NullSink;
    use rand::SeedableRng;

    struct Counting(usize);

    impl RenderSink for Counting {
        fn on_progress(&mut self, _event: ProgressEvent<'_>) {
            self.0 += 1;
        }
    }

    #[test]
    fn test_pause_flag_is_shared_between_clones() {
        let flag = PauseFlag::new();
        let other = flag.clone();
        other.set(true);
        assert!(flag.is_set());
        flag.set(false);
        assert!(!other.is_set());
    }

    #[test]
    fn test_reach_emits_when_not_paused() {
        let pause = PauseFlag::new();
        let mut sink = Counting(0);
        let mut rng = StdRng::seed_from_u64(0);
        let mut cp = Checkpoint::new(&pause, &mut sink, &mut rng);

        assert_eq!(cp.reach(&[1, 2], &[0, 1]), Ok(()));
        assert_eq!(cp.events(), 1);
        assert!(cp.take_snapshot().is_none());
        drop(cp);
        assert_eq!(sink.0, 1);
    }

    #[test]
    fn test_reach_snapshots_live_state_when_paused() {
        let pause = PauseFlag::new();
        pause.set(true);
        let mut sink = NullSink;
        let mut rng = StdRng::seed_from_u64(0);
        let mut cp = Checkpoint::new(&pause, &mut sink, &mut rng);

        assert_eq!(cp.reach_staged(&[3, 1], &[0, 0], &[1]), Err(Interrupted));
        assert_eq!(cp.events(), 0);
        assert_eq!(cp.take_snapshot(), Some(vec![3, 1]));
    }
}
