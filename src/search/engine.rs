//! The automated player: one engine, parameterized by difficulty.

use super::alphabeta::{AlphaBeta, DRAW, SearchResult};
use super::difficulty::{DEFAULT_MEDIUM_DEPTH, Difficulty};
use crate::games::tictactoe::{Board, Player, Position};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Chooses moves for the automated player.
///
/// Easy picks uniformly among legal moves with a seedable RNG; Medium and
/// Hard run [`AlphaBeta`] with the depth budget of their level. The RNG is
/// only ever consulted on the Easy path.
#[derive(Debug, Clone)]
pub struct Engine {
    difficulty: Difficulty,
    medium_depth: u8,
    rng: StdRng,
    last_nodes: u64,
}

impl Engine {
    /// Creates an engine. `seed` makes Easy play reproducible.
    #[instrument]
    pub fn new(difficulty: Difficulty, medium_depth: u8, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            difficulty,
            medium_depth,
            rng,
            last_nodes: 0,
        }
    }

    /// Full-depth engine.
    pub fn hard() -> Self {
        Self::new(Difficulty::Hard, DEFAULT_MEDIUM_DEPTH, None)
    }

    /// Current difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Changes difficulty for subsequent moves.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Lookahead used at Medium.
    pub fn medium_depth(&self) -> u8 {
        self.medium_depth
    }

    /// Nodes searched for the most recent move (0 for Easy).
    pub fn last_nodes(&self) -> u64 {
        self.last_nodes
    }

    /// Chooses a move for `me`, who is on move.
    ///
    /// The board is explored in place and returned unchanged. Easy results
    /// carry a [`DRAW`] score because no evaluation takes place. A result
    /// without a move means the caller asked on a finished board.
    #[instrument(
        skip(self, board),
        fields(difficulty = %self.difficulty, board = %board.to_compact())
    )]
    pub fn choose_move(&mut self, board: &mut Board, me: Player) -> SearchResult {
        let result = match self.difficulty.depth_budget(self.medium_depth) {
            None => {
                self.last_nodes = 0;
                let moves = Position::valid_moves(board);
                SearchResult::new(DRAW, moves.choose(&mut self.rng).copied())
            }
            Some(depth) => {
                let mut searcher = AlphaBeta::new(me);
                let result = searcher.search(board, me, depth);
                self.last_nodes = searcher.nodes();
                result
            }
        };

        debug!(
            best_move = ?result.best_move,
            score = result.score,
            nodes = self.last_nodes,
            "Engine chose move"
        );
        result
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::hard()
    }
}
