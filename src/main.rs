// sortvis: Interruptible Sorting Visualizer

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{backend::CrosstermBackend, Terminal};

use sortvis::benchmark::describe;
use sortvis::config::constants::EVENT_LOG_LIMIT;
use sortvis::config::{parse_args, usage, Command, Settings};
use sortvis::engine::{Algorithm, RunOutcome, SortError, SortSession};
use sortvis::sequence;
use sortvis::snapshot::EventLog;
use sortvis::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let program_name = std::env::args()
        .next()
        .unwrap_or_else(|| "sortvis".to_string());

    let settings = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Run(settings)) => settings,
        Ok(Command::List) => {
            for algorithm in Algorithm::ALL {
                println!("{:<24} {}", algorithm.name(), algorithm.title());
            }
            return Ok(());
        }
        Ok(Command::Help) => {
            print!("{}", usage(&program_name));
            return Ok(());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprint!("{}", usage(&program_name));
            eprintln!();
            eprintln!("Run '{} --list' to see the available algorithms.", program_name);
            std::process::exit(1);
        }
    };

    if settings.headless {
        return run_headless(&settings);
    }

    let mut app = match App::new(settings) {
        Ok(app) => app,
        Err(e) => exit_with(&e),
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Exit code for input the algorithm rejected
const EXIT_REJECTED: i32 = 1;

/// Exit code for an algorithm that finished on an unordered sequence
const EXIT_ENGINE_DEFECT: i32 = 70;

fn exit_with(error: &SortError) -> ! {
    if error.is_precondition() {
        eprintln!("Error: {}", error);
        std::process::exit(EXIT_REJECTED);
    }
    eprintln!("Internal error: {}", error);
    eprintln!("This is a bug in the sorting engine, not in the input.");
    std::process::exit(EXIT_ENGINE_DEFECT);
}

/// Sort once without the TUI, recording events, and print a summary
fn run_headless(settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let values = sequence::random(
        &mut rng,
        settings.sample_count,
        settings.lower,
        settings.upper,
    );

    let mut session = match SortSession::new(values, settings.algorithm) {
        Ok(session) => session,
        Err(e) => exit_with(&e),
    }
    .with_seed(rng.gen())
        .with_completion_check(settings.check_completion);

    eprintln!(
        "{} on {} elements in [{}, {}]",
        settings.algorithm.title(),
        settings.sample_count,
        settings.lower,
        settings.upper
    );
    eprintln!("Estimated duration: {}", describe(session.estimate_duration()));

    let mut log = EventLog::new(EVENT_LOG_LIMIT);
    match session.start(&mut log) {
        Ok(RunOutcome::Completed { elapsed, events }) => {
            eprintln!("Sorted in {:.3}s", elapsed.as_secs_f64());
            eprintln!(
                "Progress events: {} ({} recorded, {} over the memory limit)",
                events,
                log.len(),
                log.dropped()
            );
            println!("{:?}", session.sequence());
        }
        Ok(RunOutcome::Paused { events, .. }) => {
            eprintln!("Paused after {} events", events);
        }
        Err(e) => exit_with(&e),
    }

    Ok(())
}
