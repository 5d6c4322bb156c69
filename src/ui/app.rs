//! Main TUI application state and logic

use crate::benchmark::describe;
use crate::config::Settings;
use crate::engine::errors::SortError;
use crate::engine::session::{RunOutcome, SessionStatus, SortSession};
use crate::sequence;
use crate::ui::panes::{render_screen, BarTint, BarsRenderData, RunState, StatusRenderData};
use crate::ui::sink::{FrameContext, TerminalSink};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{backend::Backend, Frame, Terminal};
use std::io;
use std::time::Duration;

/// The main application state
pub struct App {
    pub settings: Settings,

    /// Session over the array on screen
    pub session: SortSession,

    /// Source for new arrays and per-session shuffle seeds
    rng: StdRng,

    /// Benchmark of the current array, shown before sorting
    pub estimate: Option<Duration>,

    pub state: RunState,
    pub tint: BarTint,

    /// Status message to display
    pub status_message: String,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Create the app with a freshly generated array
    pub fn new(settings: Settings) -> Result<Self, SortError> {
        let mut rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let session = build_session(&settings, &mut rng)?;
        let estimate = session.estimate_duration();

        Ok(App {
            status_message: estimate_message(&settings, estimate),
            settings,
            session,
            rng,
            estimate,
            state: RunState::Ready,
            tint: BarTint::Normal,
            should_quit: false,
        })
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key, terminal)?;
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the idle screen
    fn render(&self, frame: &mut Frame) {
        let bars = BarsRenderData {
            title: self.settings.algorithm.title(),
            sequence: self.session.sequence(),
            touched: &[],
            verified_up_to: None,
            tint: self.tint,
            floor: self.settings.lower,
            ceiling: self.settings.upper,
            is_running: false,
        };
        let status = StatusRenderData {
            state: self.state,
            message: &self.status_message,
            events: self.session.events(),
            check_completion: self.session.completion_check(),
        };
        render_screen(frame, &bars, &status);
    }

    /// Handle keyboard events while no run is in progress
    fn handle_key_event<B: Backend>(
        &mut self,
        key: KeyEvent,
        terminal: &mut Terminal<B>,
    ) -> io::Result<()> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.sort(terminal)?;
            }
            KeyCode::Char('n') => {
                self.new_array();
            }
            KeyCode::Char('c') => {
                let check = !self.session.completion_check();
                self.session.set_completion_check(check);
                self.settings.check_completion = check;
                self.status_message = format!(
                    "Completion check {}",
                    if check { "enabled" } else { "disabled" }
                );
            }
            _ => {}
        }
        Ok(())
    }

    /// Replace the array on screen with a new random one
    fn new_array(&mut self) {
        match build_session(&self.settings, &mut self.rng) {
            Ok(session) => {
                self.session = session;
                self.estimate = self.session.estimate_duration();
                self.state = RunState::Ready;
                self.tint = BarTint::Normal;
                self.status_message = estimate_message(&self.settings, self.estimate);
            }
            Err(err) => {
                self.status_message = format!("Error: {}", err);
            }
        }
    }

    /// Start a ready session or resume a paused one, drawing every event
    fn sort<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let resuming = match self.session.status() {
            SessionStatus::Ready => false,
            SessionStatus::Paused => true,
            SessionStatus::Completed | SessionStatus::Failed => {
                self.status_message = "Press n for a new array".to_string();
                return Ok(());
            }
        };

        let message = if resuming {
            format!("Resuming {}", self.settings.algorithm.title())
        } else {
            format!("Sorting with {}", self.settings.algorithm.title())
        };
        let context = FrameContext {
            title: self.settings.algorithm.title(),
            message: &message,
            floor: self.settings.lower,
            ceiling: self.settings.upper,
            check_completion: self.session.completion_check(),
            frame_delay: self.settings.frame_delay,
            prior_events: if resuming { self.session.events() } else { 0 },
        };

        self.session.set_paused(false);
        let mut sink = TerminalSink::new(terminal, self.session.pause_flag(), context);
        let result = if resuming {
            self.session.resume(&mut sink)
        } else {
            self.session.start(&mut sink)
        };
        let quit = sink.quit_requested();
        if let Some(err) = sink.take_error() {
            return Err(err);
        }

        match result {
            Ok(RunOutcome::Paused { elapsed, events }) => {
                self.state = RunState::Paused;
                self.status_message = format!(
                    "Paused after {} events ({:.3}s), press ↵ to resume",
                    events,
                    elapsed.as_secs_f64()
                );
            }
            Ok(RunOutcome::Completed { elapsed, .. }) => {
                self.state = RunState::Completed;
                self.tint = BarTint::Complete;
                self.status_message = format!(
                    "Sorted in {:.3}s (estimated {})",
                    elapsed.as_secs_f64(),
                    describe(self.estimate)
                );
            }
            Err(err) => {
                self.state = RunState::Failed;
                self.tint = BarTint::Failed;
                self.status_message = err.to_string();
            }
        }

        if quit {
            self.should_quit = true;
        }
        Ok(())
    }
}

/// Generate an array from the settings and wrap it in a session
fn build_session(settings: &Settings, rng: &mut StdRng) -> Result<SortSession, SortError> {
    let values = sequence::random(rng, settings.sample_count, settings.lower, settings.upper);
    Ok(SortSession::new(values, settings.algorithm)?
        .with_seed(rng.gen())
        .with_completion_check(settings.check_completion))
}

fn estimate_message(settings: &Settings, estimate: Option<Duration>) -> String {
    format!(
        "{} on {} elements, estimated {}",
        settings.algorithm.title(),
        settings.sample_count,
        describe(estimate)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::algorithm::Algorithm;

    fn settings(algorithm: Algorithm) -> Settings {
        let mut settings = Settings::new(algorithm);
        settings.sample_count = 20;
        settings.seed = Some(11);
        settings
    }

    #[test]
    fn test_seeded_apps_share_the_same_array() {
        let a = App::new(settings(Algorithm::Heap)).unwrap();
        let b = App::new(settings(Algorithm::Heap)).unwrap();
        assert_eq!(a.session.sequence(), b.session.sequence());
        assert_eq!(a.session.sequence().len(), 20);
        assert_eq!(a.state, RunState::Ready);
    }

    #[test]
    fn test_new_array_resets_state() {
        let mut app = App::new(settings(Algorithm::Bubble)).unwrap();
        let first = app.session.sequence().to_vec();
        app.state = RunState::Completed;
        app.tint = BarTint::Complete;

        app.new_array();

        assert_eq!(app.state, RunState::Ready);
        assert_eq!(app.tint, BarTint::Normal);
        assert_eq!(app.session.status(), SessionStatus::Ready);
        assert_ne!(app.session.sequence(), &first[..]);
    }

    #[test]
    fn test_toggle_completion_check() {
        let mut app = App::new(settings(Algorithm::Gnome)).unwrap();
        let backend = ratatui::backend::TestBackend::new(40, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let key = KeyEvent::from(KeyCode::Char('c'));

        app.handle_key_event(key, &mut terminal).unwrap();
        assert!(!app.session.completion_check());
        app.handle_key_event(key, &mut terminal).unwrap();
        assert!(app.session.completion_check());
    }

    #[test]
    fn test_render_idle_screen() {
        let app = App::new(settings(Algorithm::Quick)).unwrap();
        let backend = ratatui::backend::TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();

        let buffer = terminal.backend().buffer();
        let top: String = (0..60u16).map(|x| buffer[(x, 0u16)].symbol()).collect();
        assert!(top.contains("Quick Sort"), "title row was {:?}", top);
    }
}
