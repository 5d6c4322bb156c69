//! Instrumented sorting algorithms
//!
//! Every function here has the same shape,
//! `fn(&mut [Element], &mut Checkpoint<'_>) -> Flow`, sorts in place in
//! ascending order, and calls [`Checkpoint::reach`] after each unit of
//! progress.
//!
//! - [`exchange`]: bubble, cocktail shaker, gnome, odd-even, comb, bogo
//! - [`insertion`]: insertion, shell
//! - [`selection`]: selection, double selection, cycle, heap, pancake
//! - [`divide`]: merge, quick
//! - [`distribution`]: radix, pigeonhole
//!
//! [`Checkpoint::reach`]: crate::engine::checkpoint::Checkpoint::reach

pub mod distribution;
pub mod divide;
pub mod exchange;
pub mod insertion;
pub mod selection;

pub use distribution::{pigeonhole, radix, MAX_PIGEONHOLE_SPAN};
pub use divide::{merge, quick};
pub use exchange::{bogo, bubble, cocktail_shaker, comb, gnome, odd_even};
pub use insertion::{insertion, shell};
pub use selection::{cycle, double_selection, heap, pancake, selection};
