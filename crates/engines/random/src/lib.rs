//! Random Move Checkers Engine
//!
//! A simple engine that selects moves uniformly at random from the moves it
//! is offered. Captures stay mandatory because the caller only ever offers
//! the playable set.
//! Useful for:
//! - Baseline comparisons (the minimax engine should easily beat this)
//! - Stress testing move generation and the turn driver

use checkers_core::{Board, Color, Engine, Move, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;


/// A checkers engine that plays random legal moves.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    /// Reproducible engine, for tests and repeatable matches.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, _board: &Board, _side: Color, candidates: &[Move], _depth: u8) -> SearchResult {
        self.nodes = 1;

        let best_move = candidates.choose(&mut self.rng).cloned();

        SearchResult {
            best_move,
            score: 0.0,
            depth: 1,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
