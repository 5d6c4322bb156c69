//! Interruptible sorting engine
//!
//! This module provides the core sorting logic:
//! - [`algorithms`]: the 17 instrumented algorithms
//! - [`algorithm`]: the [`Algorithm`] identifiers and dispatch table
//! - [`checkpoint`]: the cooperative pause protocol
//! - [`sink`]: the render collaborator contract
//! - [`session`]: [`SortSession`], the caller-facing controller
//! - [`verify`]: the post-run sortedness check
//! - [`errors`]: [`SortError`]
//!
//! # Execution Model
//!
//! Everything runs synchronously on the caller's thread. After each unit of
//! progress an algorithm polls the pause flag. When it is clear, a progress
//! event goes to the sink and the algorithm continues; when it is set, the
//! sequence is snapshotted and control returns to the caller.

pub mod algorithm;
pub mod algorithms;
pub mod checkpoint;
pub mod errors;
pub mod session;
pub mod sink;
pub mod verify;

pub use algorithm::Algorithm;
pub use checkpoint::PauseFlag;
pub use errors::SortError;
pub use session::{RunOutcome, SessionStatus, SortSession};
pub use sink::{NullSink, Phase, ProgressEvent, RenderSink};
