//! Render collaborator contract
//!
//! The engine never paints anything. It hands a [`ProgressEvent`] to a
//! [`RenderSink`] after every mutation and reports the end of a run through
//! [`RenderSink::on_complete`] or [`RenderSink::on_verification_failed`].
//! Sinks run synchronously on the engine's thread, so an event is fully
//! processed before the next mutation happens.

use crate::sequence::Element;

/// Which part of a run produced an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// An algorithm mutated the sequence
    Sorting,
    /// The completion check confirmed `sequence[..=touched[0]]`
    Verifying,
}

/// One checkpoint's worth of progress
#[derive(Debug, Clone, Copy)]
pub struct ProgressEvent<'a> {
    /// Current sequence state. Radix sort reports its staging buffer here.
    pub sequence: &'a [Element],
    /// Indices written by this unit of progress
    pub touched: &'a [usize],
    pub phase: Phase,
}

/// Receiver for progress reports
pub trait RenderSink {
    fn on_progress(&mut self, event: ProgressEvent<'_>);

    fn on_complete(&mut self, _sequence: &[Element]) {}

    fn on_verification_failed(&mut self, _sequence: &[Element]) {}
}

/// Sink that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn on_progress(&mut self, _event: ProgressEvent<'_>) {}
}
