//! Tournament Runner for ML-checkers
//!
//! This crate provides infrastructure for:
//! - Running matches between different engines
//! - Loading match settings from TOML files
//! - Saving match results as JSON reports
//!
//! # Usage
//!
//! ```bash
//! # Run a match between the minimax and random engines
//! cargo run -p tournament -- match minimax random --games 20 --difficulty medium
//!
//! # Run a gauntlet (one engine vs all others)
//! cargo run -p tournament -- gauntlet minimax --games 10
//! ```

mod config;
mod match_runner;
mod results;

pub use config::*;
pub use match_runner::*;
pub use results::*;

use thiserror::Error;

/// Errors raised while loading settings or saving reports
#[derive(Error, Debug)]
pub enum TournamentError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid match config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid results file: {0}")]
    Json(#[from] serde_json::Error),
}
