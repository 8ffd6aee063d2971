//! Match runner for playing games between engines

use checkers_core::{play_turn, Color, Engine, Game};
use tracing::{info, warn};

use crate::{GameResult, MatchConfig, MatchResult};

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            // Black moves first; engine1 takes it in even games
            let engine1_black = !self.config.alternate_colors || game_num % 2 == 0;

            let game_result = if engine1_black {
                self.play_game(engine1, engine2)
            } else {
                self.play_game(engine2, engine1).flip()
            };
            result.record(game_result);

            let outcome = match game_result {
                GameResult::Win => "1-0",
                GameResult::Loss => "0-1",
                GameResult::Draw => "1/2",
            };
            info!(
                game = game_num + 1,
                of = self.config.num_games,
                color = if engine1_black { "black" } else { "white" },
                outcome,
                wins = result.wins,
                losses = result.losses,
                draws = result.draws,
                "game finished"
            );
        }

        result
    }

    /// Play a single game, returns the result from black's perspective
    ///
    /// An engine that fails to produce a legal turn forfeits. Reaching
    /// `max_turns` without a winner is a draw.
    pub fn play_game(&self, black: &mut dyn Engine, white: &mut dyn Engine) -> GameResult {
        let mut game = Game::new();
        let depth = self.config.search_depth();
        black.new_game();
        white.new_game();

        while game.turns() < self.config.max_turns {
            if let Some(winner) = game.outcome() {
                return Self::result_for_black(winner);
            }

            let side = game.to_move();
            let engine: &mut dyn Engine = match side {
                Color::Black => &mut *black,
                Color::White => &mut *white,
            };

            match play_turn(engine, &mut game, depth) {
                Ok(hops) if !hops.is_empty() && game.pending_chain().is_none() => {}
                Ok(_) => {
                    warn!(engine = engine.name(), %side, "engine did not finish its turn, forfeiting");
                    return Self::result_for_black(side.other());
                }
                Err(e) => {
                    warn!(engine = engine.name(), %side, error = %e, "engine played an illegal move, forfeiting");
                    return Self::result_for_black(side.other());
                }
            }
        }

        match game.outcome() {
            Some(winner) => Self::result_for_black(winner),
            // Max turns reached
            None => GameResult::Draw,
        }
    }

    fn result_for_black(winner: Color) -> GameResult {
        match winner {
            Color::Black => GameResult::Win,
            Color::White => GameResult::Loss,
        }
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
    depth: u8,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        depth: Some(depth),
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(engine1, engine2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
