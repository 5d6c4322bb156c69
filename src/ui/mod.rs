//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]**: application state and the idle keyboard loop
//! - **[`sink`]**: a [`RenderSink`] that draws every progress event while a
//!   sort runs and turns Space into a pause request
//! - **[`panes`]**: stateless render functions for the bar chart and status bar
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it from [`Settings`]
//! and call [`App::run`] to start the event loop.
//!
//! [`RenderSink`]: crate::engine::sink::RenderSink
//! [`Settings`]: crate::config::Settings
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod sink;
pub mod theme;

pub use app::App;
