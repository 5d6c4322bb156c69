//! Event recording for headless runs and inspection

use crate::engine::sink::{Phase, ProgressEvent, RenderSink};
use crate::sequence::Element;
use std::mem::size_of;

/// A recorded progress event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub sequence: Vec<Element>,
    pub touched: Vec<usize>,
    pub phase: Phase,
}

impl Frame {
    /// Estimate the memory usage of this frame in bytes
    pub fn estimated_size(&self) -> usize {
        size_of::<Frame>()
            + self.sequence.len() * size_of::<Element>()
            + self.touched.len() * size_of::<usize>()
    }
}

/// Render sink that keeps every progress event up to a memory limit.
///
/// Events past the limit are still counted but not stored, so
/// [`total_events`](EventLog::total_events) always reflects the full run.
#[derive(Debug)]
pub struct EventLog {
    frames: Vec<Frame>,
    max_memory: usize,
    current_memory: usize,
    total_events: usize,
    dropped: usize,
    completed: Option<Vec<Element>>,
    failed: Option<Vec<Element>>,
}

impl EventLog {
    pub fn new(max_memory: usize) -> Self {
        EventLog {
            frames: Vec::new(),
            max_memory,
            current_memory: 0,
            total_events: 0,
            dropped: 0,
            completed: None,
            failed: None,
        }
    }

    /// Add a frame to the log
    pub fn push(&mut self, frame: Frame) -> Result<(), String> {
        let frame_size = frame.estimated_size();

        if self.current_memory + frame_size > self.max_memory {
            return Err(format!(
                "Event log memory limit exceeded: {} + {} > {}",
                self.current_memory, frame_size, self.max_memory
            ));
        }

        self.current_memory += frame_size;
        self.frames.push(frame);
        Ok(())
    }

    /// Get a frame by index
    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Frames produced by the algorithm itself, excluding the completion check
    pub fn sorting_frames(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter().filter(|f| f.phase == Phase::Sorting)
    }

    /// Number of stored frames
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Every event received, stored or not
    pub fn total_events(&self) -> usize {
        self.total_events
    }

    /// Events received after the memory limit was reached
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Final sequence reported through `on_complete`
    pub fn completed(&self) -> Option<&[Element]> {
        self.completed.as_deref()
    }

    /// Sequence reported through `on_verification_failed`
    pub fn failed(&self) -> Option<&[Element]> {
        self.failed.as_deref()
    }

    /// Get current memory usage
    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    /// Get max memory limit
    pub fn memory_limit(&self) -> usize {
        self.max_memory
    }
}

impl RenderSink for EventLog {
    fn on_progress(&mut self, event: ProgressEvent<'_>) {
        self.total_events += 1;
        let frame = Frame {
            sequence: event.sequence.to_vec(),
            touched: event.touched.to_vec(),
            phase: event.phase,
        };
        if self.push(frame).is_err() {
            self.dropped += 1;
        }
    }

    fn on_complete(&mut self, sequence: &[Element]) {
        self.completed = Some(sequence.to_vec());
    }

    fn on_verification_failed(&mut self, sequence: &[Element]) {
        self.failed = Some(sequence.to_vec());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event<'a>(seq: &'a [Element], touched: &'a [usize]) -> ProgressEvent<'a> {
        ProgressEvent {
            sequence: seq,
            touched,
            phase: Phase::Sorting,
        }
    }

    #[test]
    fn test_records_frames_in_order() {
        let mut log = EventLog::new(1024 * 1024);
        log.on_progress(event(&[2, 1], &[0, 1]));
        log.on_progress(event(&[1, 2], &[0, 1]));

        assert_eq!(log.len(), 2);
        assert_eq!(log.get(0).map(|f| f.sequence.clone()), Some(vec![2, 1]));
        assert_eq!(log.get(1).map(|f| f.sequence.clone()), Some(vec![1, 2]));
        assert!(log.memory_usage() > 0);
    }

    #[test]
    fn test_counts_events_past_the_limit() {
        let one = Frame {
            sequence: vec![1, 2, 3],
            touched: vec![0],
            phase: Phase::Sorting,
        }
        .estimated_size();
        let mut log = EventLog::new(one * 2);

        for _ in 0..5 {
            log.on_progress(event(&[1, 2, 3], &[0]));
        }

        assert_eq!(log.len(), 2);
        assert_eq!(log.total_events(), 5);
        assert_eq!(log.dropped(), 3);
        assert!(log.memory_usage() <= log.memory_limit());
    }
}
