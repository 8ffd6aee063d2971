pub mod board;
pub mod difficulty;
pub mod error;
pub mod eval;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod rules;
pub mod search;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use difficulty::*;
pub use error::*;
pub use eval::evaluate;
pub use game::*;
pub use movegen::*;
pub use perft::{perft, perft_divide};
pub use rules::*;
pub use search::*;
pub use types::*;

// =============================================================================
// Engine trait: implemented by all checkers engines (minimax, random, ...)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// The chosen move (None if there was nothing to choose from)
    pub best_move: Option<Move>,
    /// Evaluation from the engine's side's perspective
    pub score: f64,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes searched (optional, for stats)
    pub nodes: u64,
}

/// Trait that all checkers engines must implement.
///
/// An engine is asked for one hop at a time: `candidates` is either the
/// side's playable moves at the start of a turn or the continuation
/// captures of a piece in the middle of a chain. The returned move must be
/// one of them.
pub trait Engine: Send {
    fn search(&mut self, board: &Board, side: Color, candidates: &[Move], depth: u8) -> SearchResult;

    /// Returns the engine's name for reports
    fn name(&self) -> &str;

    /// Returns the engine's author
    fn author(&self) -> &str {
        "ML-checkers"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}

/// Lets `engine` play a whole turn for the side to move in `game`.
///
/// Returns the hops played, empty when the side had no move or the engine
/// declined to choose.
pub fn play_turn(engine: &mut dyn Engine, game: &mut Game, depth: u8) -> CheckersResult<Vec<Move>> {
    let mut hops = Vec::new();
    loop {
        let candidates = game.legal_choices();
        if candidates.is_empty() {
            break;
        }
        let result = engine.search(game.board(), game.to_move(), &candidates, depth);
        let Some(mv) = result.best_move else {
            break;
        };
        let status = game.play(&mv)?;
        hops.push(mv);
        if status == TurnStatus::Finished {
            break;
        }
    }
    Ok(hops)
}
