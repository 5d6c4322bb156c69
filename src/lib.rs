//! # Introduction
//!
//! sortvis runs one of seventeen in-place sorting algorithms over a random
//! array and reports every mutation to a render sink, so the run can be
//! drawn as a bar chart in the terminal, paused mid-sort and resumed.
//!
//! ## Run pipeline
//!
//! ```text
//! Settings → random array → SortSession → Algorithm ⇄ Checkpoint → RenderSink
//!                                        ↓
//!                                  verify / confirm
//! ```
//!
//! 1. [`config`]: command-line settings and sequence bounds.
//! 2. [`sequence`]: the element type and the primitive moves algorithms use
//!    (swap, shift, prefix flip).
//! 3. [`engine`]: the algorithm table, the checkpoint that polls the pause
//!    flag and emits progress events, the verifier and [`engine::SortSession`].
//! 4. [`benchmark`]: uninstrumented copies of the algorithms, timed on a copy
//!    of the array to estimate how long a run will take.
//! 5. [`snapshot`]: an [`snapshot::EventLog`] sink that records every event,
//!    used by headless runs and tests.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Algorithms
//!
//! Bubble, selection, insertion, merge, shell, cocktail shaker, quick, heap,
//! radix (LSD), gnome, odd-even, double selection, cycle, pigeonhole, comb,
//! pancake and bogo.

pub mod benchmark;
pub mod config;
pub mod engine;
pub mod sequence;
pub mod snapshot;
pub mod ui;
