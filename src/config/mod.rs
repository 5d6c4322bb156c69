//! Command-line settings
//!
//! Arguments are parsed by hand from `std::env::args`. Sequence bounds are
//! checked against [`constants`] before anything is generated.

pub mod constants;

use crate::engine::algorithm::Algorithm;
use crate::engine::errors::SortError;
use crate::sequence::Element;
use constants::*;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Settings for one visualizer run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub algorithm: Algorithm,
    pub sample_count: usize,
    pub lower: Element,
    pub upper: Element,
    /// Fixed seed for the generated sequence and bogo shuffles
    pub seed: Option<u64>,
    /// Play the stepped completion check after a run
    pub check_completion: bool,
    pub frame_delay: Duration,
    /// Run without the TUI and print a summary
    pub headless: bool,
}

impl Settings {
    pub fn new(algorithm: Algorithm) -> Self {
        Settings {
            algorithm,
            sample_count: DEFAULT_SAMPLE_COUNT,
            lower: MINIMUM_ARRAY_VALUE,
            upper: MAXIMUM_ARRAY_VALUE,
            seed: None,
            check_completion: true,
            frame_delay: Duration::from_millis(DEFAULT_FRAME_DELAY_MS),
            headless: false,
        }
    }

    /// Check sample bounds and count against the allowed ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lower < MINIMUM_ARRAY_VALUE
            || self.upper > MAXIMUM_ARRAY_VALUE
            || self.lower >= self.upper
        {
            return Err(ConfigError::OutOfBounds(format!(
                "need {} <= min < max <= {}, got min {} and max {}",
                MINIMUM_ARRAY_VALUE, MAXIMUM_ARRAY_VALUE, self.lower, self.upper
            )));
        }
        if !(MINIMUM_ARRAY_SAMPLES..=MAXIMUM_ARRAY_SAMPLES).contains(&self.sample_count) {
            return Err(ConfigError::OutOfBounds(format!(
                "count must be between {} and {}, got {}",
                MINIMUM_ARRAY_SAMPLES, MAXIMUM_ARRAY_SAMPLES, self.sample_count
            )));
        }
        Ok(())
    }
}

/// What the command line asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Settings),
    List,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    MissingAlgorithm,
    Algorithm(SortError),
    UnknownFlag(String),
    MissingValue { flag: String },
    InvalidNumber { flag: String, value: String },
    OutOfBounds(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingAlgorithm => write!(f, "No algorithm given"),
            ConfigError::Algorithm(err) => write!(f, "{}", err),
            ConfigError::UnknownFlag(flag) => write!(f, "Unknown option '{}'", flag),
            ConfigError::MissingValue { flag } => write!(f, "Option '{}' needs a value", flag),
            ConfigError::InvalidNumber { flag, value } => {
                write!(f, "Option '{}' expects a number, got '{}'", flag, value)
            }
            ConfigError::OutOfBounds(message) => write!(f, "Out of bounds: {}", message),
        }
    }
}

impl std::error::Error for ConfigError {}

fn number<T: FromStr>(flag: &str, value: Option<String>) -> Result<T, ConfigError> {
    let value = value.ok_or_else(|| ConfigError::MissingValue {
        flag: flag.to_string(),
    })?;
    value.parse().map_err(|_| ConfigError::InvalidNumber {
        flag: flag.to_string(),
        value,
    })
}

/// Parse arguments, excluding the program name
pub fn parse_args<I>(args: I) -> Result<Command, ConfigError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut algorithm = None;
    let mut settings = Settings::new(Algorithm::Bubble);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--list" => return Ok(Command::List),
            "-n" | "--count" => settings.sample_count = number(&arg, args.next())?,
            "--min" => settings.lower = number(&arg, args.next())?,
            "--max" => settings.upper = number(&arg, args.next())?,
            "--seed" => settings.seed = Some(number(&arg, args.next())?),
            "--delay" => {
                settings.frame_delay = Duration::from_millis(number(&arg, args.next())?)
            }
            "--no-check" => settings.check_completion = false,
            "--headless" => settings.headless = true,
            flag if flag.starts_with('-') => {
                return Err(ConfigError::UnknownFlag(flag.to_string()));
            }
            name => {
                algorithm = Some(name.parse::<Algorithm>().map_err(ConfigError::Algorithm)?);
            }
        }
    }

    settings.algorithm = algorithm.ok_or(ConfigError::MissingAlgorithm)?;
    settings.validate()?;
    Ok(Command::Run(settings))
}

/// Usage text for `--help` and argument errors
pub fn usage(program: &str) -> String {
    format!(
        "Usage: {program} <algorithm> [options]\n\
         \n\
         Options:\n\
         \x20 -n, --count N   number of elements ({MINIMUM_ARRAY_SAMPLES}-{MAXIMUM_ARRAY_SAMPLES}, default {DEFAULT_SAMPLE_COUNT})\n\
         \x20 --min L         smallest value (>= {MINIMUM_ARRAY_VALUE})\n\
         \x20 --max U         largest value (<= {MAXIMUM_ARRAY_VALUE})\n\
         \x20 --seed S        fixed random seed\n\
         \x20 --delay MS      pause between frames (default {DEFAULT_FRAME_DELAY_MS})\n\
         \x20 --no-check      skip the completion check animation\n\
         \x20 --headless      run without the TUI and print a summary\n\
         \x20 --list          list available algorithms\n"
    )
}
