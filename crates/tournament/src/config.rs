//! Match configuration, loadable from TOML

use checkers_core::Difficulty;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::TournamentError;

/// Configuration for a match
///
/// Every field is optional in a config file:
///
/// ```toml
/// num_games = 20
/// difficulty = "medium"
/// max_turns = 150
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Difficulty level, which sets the search depth
    pub difficulty: Difficulty,
    /// Explicit depth in plies, overriding `difficulty`
    pub depth: Option<u8>,
    /// Maximum turns per game before declaring a draw
    pub max_turns: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            difficulty: Difficulty::default(),
            depth: None,
            max_turns: 200,
            alternate_colors: true,
        }
    }
}

impl MatchConfig {
    /// Search depth handed to engines on every move
    pub fn search_depth(&self) -> u8 {
        self.depth.unwrap_or_else(|| self.difficulty.depth())
    }

    pub fn from_toml_str(text: &str) -> Result<Self, TournamentError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, TournamentError> {
        let text = std::fs::read_to_string(path).map_err(|source| TournamentError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
