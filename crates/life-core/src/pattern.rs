//! Pattern loading from a remote `.cells` repository
//!
//! A `.cells` file is plain text: lines starting with `!` are comments, and
//! in the remaining lines an `O` marks a living cell. Row and column come
//! from the position of the character once comments are removed.

use crate::config::PatternSourceConfig;
use crate::engine::{Cell, LivingSet};
use crate::errors::LifeError;

const COMMENT_PREFIX: char = '!';
const ALIVE: char = 'O';

/// Parses `.cells` text into the set of living cells it marks.
pub fn parse_cells(text: &str) -> LivingSet {
    text.lines()
        .filter(|line| !line.starts_with(COMMENT_PREFIX))
        .enumerate()
        .flat_map(|(row, line)| {
            line.chars()
                .enumerate()
                .filter(|&(_, ch)| ch == ALIVE)
                .map(move |(col, _)| Cell::new(row as i64, col as i64))
        })
        .collect()
}

/// Fetches named patterns over HTTP. One request per lookup, no retries.
pub struct PatternSource {
    client: reqwest::Client,
    base_url: String,
}

impl PatternSource {
    pub fn new(config: PatternSourceConfig) -> Result<Self, LifeError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                LifeError::ConfigError(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn pattern_url(&self, name: &str) -> String {
        format!("{}/{}.cells", self.base_url, name.to_lowercase())
    }

    /// Looks up `name`, reporting why the lookup failed.
    pub async fn try_fetch(&self, name: &str) -> Result<LivingSet, LifeError> {
        let url = self.pattern_url(name);
        log::info!("Fetching pattern '{}' from {}", name, url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            LifeError::TransportError(format!("Failed to fetch pattern from {}: {}", url, e))
        })?;

        if !response.status().is_success() {
            return Err(LifeError::PatternNotFound(format!(
                "{} (HTTP {} from {})",
                name,
                response.status(),
                url
            )));
        }

        let text = response.text().await?;
        let cells = parse_cells(&text);
        log::info!("Pattern '{}' loaded with {} living cells", name, cells.len());
        Ok(cells)
    }

    /// Looks up `name`, collapsing every failure into `None`.
    ///
    /// A resolved pattern with no living cells is returned as an empty set,
    /// not as `None`.
    pub async fn fetch(&self, name: &str) -> Option<LivingSet> {
        match self.try_fetch(name).await {
            Ok(cells) => Some(cells),
            Err(e) => {
                log::info!("Could not load pattern '{}': {}", name, e);
                None
            }
        }
    }
}
