//! Bounds and defaults for generated sequences

use crate::sequence::Element;

/// Smallest value a generated element may take
pub const MINIMUM_ARRAY_VALUE: Element = 1;

/// Largest value a generated element may take
pub const MAXIMUM_ARRAY_VALUE: Element = 1000;

pub const MINIMUM_ARRAY_SAMPLES: usize = 1;
pub const MAXIMUM_ARRAY_SAMPLES: usize = 600;

pub const DEFAULT_SAMPLE_COUNT: usize = 100;

/// Pause between frames in the TUI, in milliseconds
pub const DEFAULT_FRAME_DELAY_MS: u64 = 10;

/// Memory cap for the headless event log (64 MB)
pub const EVENT_LOG_LIMIT: usize = 64 * 1024 * 1024;
