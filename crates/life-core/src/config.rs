//! Run configuration built once at startup and passed to the driver
//!
//! None of these values change during a run: the board is never resized and
//! the glyphs are never swapped mid-simulation.

use std::time::Duration;

use crate::engine::LivingSet;
use crate::errors::LifeError;

pub const DEFAULT_PATTERN_URL: &str = "https://www.conwaylife.com/patterns";
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Size of the rendered viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSize {
    pub height: usize,
    pub width: usize,
}

impl BoardSize {
    pub const fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self::new(10, 10)
    }
}

/// Characters drawn for living and dead cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub alive: char,
    pub dead: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            alive: '+',
            dead: ' ',
        }
    }
}

impl Glyphs {
    /// Takes the first character of each argument, falling back to the
    /// default glyph when an argument is absent or empty.
    pub fn from_args(alive: Option<&str>, dead: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            alive: alive.and_then(|s| s.chars().next()).unwrap_or(defaults.alive),
            dead: dead.and_then(|s| s.chars().next()).unwrap_or(defaults.dead),
        }
    }
}

/// Translation applied once to a freshly loaded pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternOffset {
    pub row: i64,
    pub col: i64,
}

impl PatternOffset {
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// Shifts every cell, failing if any would leave the `i64` coordinate range.
    pub fn apply(&self, cells: LivingSet) -> Result<LivingSet, LifeError> {
        cells
            .into_iter()
            .map(|cell| {
                cell.checked_offset(self.row, self.col).ok_or_else(|| {
                    LifeError::ConfigError(format!(
                        "Offset ({}, {}) moves cell ({}, {}) out of range",
                        self.row, self.col, cell.row, cell.col
                    ))
                })
            })
            .collect()
    }
}

/// Parameters of a single simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub size: BoardSize,
    pub glyphs: Glyphs,
    /// Delay between generations.
    pub period: Duration,
    /// Number of generations to render; `None` runs until the viewport empties.
    pub generations: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            size: BoardSize::default(),
            glyphs: Glyphs::default(),
            period: Duration::from_millis(250),
            generations: None,
        }
    }
}

impl RunConfig {
    pub fn with_size(mut self, size: BoardSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    /// A limit of zero is treated as no limit.
    pub fn with_generations(mut self, generations: Option<u64>) -> Self {
        self.generations = generations.filter(|&g| g > 0);
        self
    }

    /// Sets the period from a number of seconds, rejecting negative and
    /// non-finite values.
    pub fn with_period_secs(self, secs: f64) -> Result<Self, LifeError> {
        let period = Duration::try_from_secs_f64(secs).map_err(|e| {
            LifeError::ConfigError(format!("Invalid delay {}: {}", secs, e))
        })?;
        Ok(self.with_period(period))
    }

    pub fn validate(&self) -> Result<(), LifeError> {
        if self.size.height == 0 || self.size.width == 0 {
            return Err(LifeError::ConfigError(format!(
                "Board must be at least 1x1, got {}x{}",
                self.size.height, self.size.width
            )));
        }
        Ok(())
    }
}

/// Where and how patterns are fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternSourceConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for PatternSourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_PATTERN_URL.to_string(),
            timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Cell;

    #[test]
    fn test_defaults() {
        let config = RunConfig::default();
        assert_eq!(config.size, BoardSize::new(10, 10));
        assert_eq!(config.glyphs, Glyphs { alive: '+', dead: ' ' });
        assert_eq!(config.period, Duration::from_millis(250));
        assert_eq!(config.generations, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_glyphs_use_first_character() {
        let glyphs = Glyphs::from_args(Some("#x"), Some(".."));
        assert_eq!(glyphs, Glyphs { alive: '#', dead: '.' });

        let fallback = Glyphs::from_args(Some(""), None);
        assert_eq!(fallback, Glyphs::default());
    }

    #[test]
    fn test_offset_application() {
        let pattern: LivingSet = [Cell::new(0, 0)].into_iter().collect();
        let shifted = PatternOffset::new(2, 3).apply(pattern).unwrap();
        let expected: LivingSet = [Cell::new(2, 3)].into_iter().collect();
        assert_eq!(shifted, expected);
    }

    #[test]
    fn test_offset_out_of_range_is_rejected() {
        let pattern: LivingSet = [Cell::new(0, 0), Cell::new(0, 1)].into_iter().collect();
        let err = PatternOffset::new(0, i64::MAX).apply(pattern).unwrap_err();
        assert!(matches!(err, LifeError::ConfigError(ref msg) if msg.contains("out of range")));

        let pattern: LivingSet = [Cell::new(1, 0)].into_iter().collect();
        assert!(PatternOffset::new(i64::MIN, 0).apply(pattern.clone()).is_ok());
        assert!(PatternOffset::new(i64::MAX, 0).apply(pattern).is_err());
    }

    #[test]
    fn test_zero_generations_means_unbounded() {
        let config = RunConfig::default().with_generations(Some(0));
        assert_eq!(config.generations, None);
        let config = RunConfig::default().with_generations(Some(7));
        assert_eq!(config.generations, Some(7));
    }

    #[test]
    fn test_period_validation() {
        let config = RunConfig::default().with_period_secs(0.5).unwrap();
        assert_eq!(config.period, Duration::from_millis(500));

        assert!(matches!(
            RunConfig::default().with_period_secs(-1.0),
            Err(LifeError::ConfigError(_))
        ));
        assert!(RunConfig::default().with_period_secs(f64::NAN).is_err());
    }

    #[test]
    fn test_empty_board_rejected() {
        let config = RunConfig::default().with_size(BoardSize::new(0, 10));
        assert!(matches!(config.validate(), Err(LifeError::ConfigError(_))));
    }
}
