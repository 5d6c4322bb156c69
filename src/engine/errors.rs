//! Error types for the sorting engine
//!
//! This module defines [`SortError`], which covers every condition a session
//! can report to its caller other than a normal pause or completion.
//!
//! Two families exist:
//! - precondition violations, rejected before the sequence is touched
//! - [`SortError::VerificationFailed`], which means an algorithm claimed
//!   completion on a sequence that is not ordered (an engine defect)

use crate::engine::algorithm::Algorithm;
use crate::sequence::Element;
use std::fmt;

/// Errors reported by a sort session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// The algorithm name did not match any known algorithm
    UnknownAlgorithm(String),

    /// A negative element was given to an algorithm that indexes by value
    NegativeElement {
        algorithm: Algorithm,
        index: usize,
        value: Element,
    },

    /// The value range is too wide to allocate one hole per value
    SpanTooWide { span: u64, limit: u64 },

    /// `resume` was called with no saved snapshot
    NothingToResume,

    /// The algorithm finished but the sequence is not ordered
    VerificationFailed {
        algorithm: Algorithm,
        sequence: Vec<Element>,
    },
}

impl SortError {
    /// True for errors raised before any mutation took place
    pub fn is_precondition(&self) -> bool {
        !matches!(self, SortError::VerificationFailed { .. })
    }
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortError::UnknownAlgorithm(name) => {
                write!(f, "Unknown algorithm '{}'", name)
            }
            SortError::NegativeElement {
                algorithm,
                index,
                value,
            } => {
                write!(
                    f,
                    "{} requires non-negative elements, found {} at index {}",
                    algorithm.title(),
                    value,
                    index
                )
            }
            SortError::SpanTooWide { span, limit } => {
                write!(
                    f,
                    "Value span of {} exceeds the pigeonhole limit of {}",
                    span, limit
                )
            }
            SortError::NothingToResume => {
                write!(f, "No paused snapshot to resume from")
            }
            SortError::VerificationFailed {
                algorithm,
                sequence,
            } => {
                write!(
                    f,
                    "{} finished with an unordered sequence of {} element{}",
                    algorithm.title(),
                    sequence.len(),
                    if sequence.len() == 1 { "" } else { "s" }
                )
            }
        }
    }
}

impl std::error::Error for SortError {}
