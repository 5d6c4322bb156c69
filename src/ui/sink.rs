//! Render sink that draws progress events straight to the terminal

use crate::engine::checkpoint::PauseFlag;
use crate::engine::sink::{Phase, ProgressEvent, RenderSink};
use crate::sequence::Element;
use crate::ui::panes::{render_screen, BarTint, BarsRenderData, RunState, StatusRenderData};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

/// Static parts of every frame drawn during a run
pub struct FrameContext<'a> {
    pub title: &'a str,
    pub message: &'a str,
    pub floor: Element,
    pub ceiling: Element,
    pub check_completion: bool,
    pub frame_delay: Duration,
    /// Events already emitted before this run (non-zero when resuming)
    pub prior_events: usize,
}

/// Draws one frame per event, then waits up to the frame delay for a key.
///
/// Space raises the shared pause flag, so the algorithm stops at its next
/// checkpoint. `q` does the same and asks the app to quit. A terminal error
/// also raises the flag; the error is kept for the caller. Once a quit is
/// requested no further frames are drawn or waited for.
pub struct TerminalSink<'t, B: Backend> {
    terminal: &'t mut Terminal<B>,
    pause: PauseFlag,
    context: FrameContext<'t>,
    events: usize,
    quit_requested: bool,
    error: Option<io::Error>,
}

impl<'t, B: Backend> TerminalSink<'t, B> {
    pub fn new(terminal: &'t mut Terminal<B>, pause: PauseFlag, context: FrameContext<'t>) -> Self {
        TerminalSink {
            terminal,
            pause,
            events: context.prior_events,
            context,
            quit_requested: false,
            error: None,
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// The first terminal error seen during the run, if any
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    fn draw(&mut self, event: ProgressEvent<'_>) -> io::Result<()> {
        let (state, touched, verified_up_to) = match event.phase {
            Phase::Sorting => (RunState::Sorting, event.touched, None),
            Phase::Verifying => (RunState::Verifying, &[][..], event.touched.first().copied()),
        };
        let bars = BarsRenderData {
            title: self.context.title,
            sequence: event.sequence,
            touched,
            verified_up_to,
            tint: BarTint::Normal,
            floor: self.context.floor,
            ceiling: self.context.ceiling,
            is_running: true,
        };
        let status = StatusRenderData {
            state,
            message: self.context.message,
            events: self.events,
            check_completion: self.context.check_completion,
        };
        self.terminal.draw(|f| render_screen(f, &bars, &status))?;
        Ok(())
    }

    /// Wait out the frame delay, reacting to keys that arrive meanwhile
    fn poll_keys(&mut self) -> io::Result<()> {
        if event::poll(self.context.frame_delay)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char(' ') | KeyCode::Char('p') => self.pause.set(true),
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            self.quit_requested = true;
                            self.pause.set(true);
                        }
                        _ => {}
                    }
                }
            }
        }
        Ok(())
    }
}

impl<B: Backend> RenderSink for TerminalSink<'_, B> {
    fn on_progress(&mut self, event: ProgressEvent<'_>) {
        self.events += 1;
        // A pending quit skips remaining frames, completion check included
        if self.error.is_some() || self.quit_requested {
            return;
        }
        if let Err(err) = self.draw(event).and_then(|_| self.poll_keys()) {
            self.error = Some(err);
            self.pause.set(true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn context() -> FrameContext<'static> {
        FrameContext {
            title: "Bubble Sort",
            message: "",
            floor: 1,
            ceiling: 10,
            check_completion: true,
            frame_delay: Duration::from_secs(5),
            prior_events: 0,
        }
    }

    #[test]
    fn test_pending_quit_skips_drawing_and_delay() {
        let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
        let mut sink = TerminalSink::new(&mut terminal, PauseFlag::new(), context());
        sink.quit_requested = true;

        for i in 0..3 {
            sink.on_progress(ProgressEvent {
                sequence: &[1, 2, 3],
                touched: &[i],
                phase: Phase::Verifying,
            });
        }

        assert_eq!(sink.events, 3);
        assert!(sink.take_error().is_none());
        drop(sink);
        let buffer = terminal.backend().buffer();
        assert!((0..20u16).all(|x| buffer[(x, 0u16)].symbol() == " "));
    }
}
