//! Minimax Checkers Engine
//!
//! Alpha-beta search with material-based evaluation.
//! This is the computer opponent: every hop of a capture chain gets its own
//! fresh search over the continuations available from the landing square.

use checkers_core::{minimax, Board, Color, Engine, Move, SearchResult, SearchStats};
use tracing::debug;


/// Checkers engine using minimax with alpha-beta pruning.
///
/// This engine uses:
/// - Minimax search with alpha-beta pruning
/// - Mandatory captures at every node
/// - Simple material evaluation (kings count one and a half)
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    /// Nodes visited by the last search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, board: &Board, side: Color, candidates: &[Move], depth: u8) -> SearchResult {
        let mut stats = SearchStats::default();
        // Depth zero would only evaluate the root and never pick a move
        let depth = depth.max(1);
        let (score, best_move) = minimax(
            board,
            depth,
            f64::NEG_INFINITY,
            f64::INFINITY,
            true,
            side,
            candidates,
            &mut stats,
        );
        self.nodes = stats.nodes;

        debug!(
            engine = self.name(),
            %side,
            depth,
            nodes = self.nodes,
            score,
            "move chosen"
        );

        SearchResult {
            best_move,
            score: if score.is_finite() { score } else { 0.0 },
            depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
