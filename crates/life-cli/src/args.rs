//! Command-line options and their conversion into run configuration

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use life_core::config::DEFAULT_PATTERN_URL;
use life_core::{BoardSize, Glyphs, LifeError, PatternOffset, PatternSourceConfig, RunConfig};

/// Two-letter single-dash flags accepted for compatibility, and their long form.
const LEGACY_FLAGS: [(&str, &str); 2] = [("-ww", "--ww"), ("-hh", "--hh")];

#[derive(Parser, Debug)]
#[clap(name = "life", version, about = "Conway's Game of Life in the terminal")]
pub struct Cli {
    #[clap(short = 'p', long = "pattern", default_value = "block", help = "Initial pattern name")]
    pub pattern: String,

    #[clap(long = "ww", default_value_t = 10, help = "Width of the board")]
    pub width: usize,

    #[clap(long = "hh", default_value_t = 10, help = "Height of the board")]
    pub height: usize,

    #[clap(short = 'x', default_value_t = 0, allow_negative_numbers = true, help = "X axis offset")]
    pub x: i64,

    #[clap(short = 'y', default_value_t = 0, allow_negative_numbers = true, help = "Y axis offset")]
    pub y: i64,

    #[clap(short = 'd', default_value_t = 0.25, allow_negative_numbers = true, help = "Delay between generations in seconds")]
    pub delay: f64,

    #[clap(short = 'g', help = "Generations to live (unbounded when omitted or 0)")]
    pub generations: Option<u64>,

    #[clap(long, help = "Living cell character")]
    pub alive: Option<String>,

    #[clap(long, help = "Dead cell character")]
    pub dead: Option<String>,

    #[clap(long, default_value = "warn")]
    pub log_level: String,

    #[clap(long, help = "Append logs to this file instead of stderr")]
    pub log_file: Option<PathBuf>,

    #[clap(long, default_value = DEFAULT_PATTERN_URL, help = "Base URL of the pattern repository")]
    pub pattern_url: String,

    #[clap(long, default_value_t = 10.0, help = "Pattern download timeout in seconds")]
    pub timeout: f64,
}

impl Cli {
    /// Parses arguments after rewriting the legacy `-ww`/`-hh` flags.
    pub fn parse_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::parse_from(normalize_args(args))
    }

    pub fn run_config(&self) -> Result<RunConfig, LifeError> {
        let config = RunConfig::default()
            .with_size(BoardSize::new(self.height, self.width))
            .with_glyphs(Glyphs::from_args(self.alive.as_deref(), self.dead.as_deref()))
            .with_generations(self.generations)
            .with_period_secs(self.delay)?;
        config.validate()?;
        Ok(config)
    }

    pub fn offset(&self) -> PatternOffset {
        PatternOffset::new(self.y, self.x)
    }

    pub fn source_config(&self) -> Result<PatternSourceConfig, LifeError> {
        let timeout = Duration::try_from_secs_f64(self.timeout).map_err(|e| {
            LifeError::ConfigError(format!("Invalid timeout {}: {}", self.timeout, e))
        })?;
        Ok(PatternSourceConfig {
            base_url: self.pattern_url.clone(),
            timeout,
        })
    }
}

/// Rewrites `-ww`/`-hh` (and their `=value` forms) to long flags, since clap
/// short flags are a single character and `-h` is taken by help.
pub fn normalize_args<I, T>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            for (legacy, long) in LEGACY_FLAGS {
                if arg == legacy {
                    return long.to_string();
                }
                if let Some(value) = arg.strip_prefix(legacy).and_then(|v| v.strip_prefix('=')) {
                    return format!("{}={}", long, value);
                }
            }
            arg
        })
        .collect()
}
