//! Minimax search with alpha-beta pruning.
//!
//! Scores are from the maximizer's point of view: a win for the maximizer
//! is [`WIN`], a win for the other side is [`LOSS`], a draw is [`DRAW`].
//! Scores are not discounted by ply, so a slow win is worth as much as a
//! fast one. A position reached with the depth budget spent scores
//! [`DRAW`] whatever its real value; shallow budgets rely on this to play
//! weaker.

use crate::games::tictactoe::{Board, Move, Outcome, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Evaluation of a position.
pub type Score = i32;

/// Maximizer has three in a row.
pub const WIN: Score = 1;
/// Minimizer has three in a row.
pub const LOSS: Score = -1;
/// Full board, or depth budget exhausted.
pub const DRAW: Score = 0;

/// Depth budget that reaches every terminal position from an empty board.
pub const FULL_DEPTH: u8 = 9;

/// Best move found for a position together with its evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct SearchResult {
    /// Evaluation from the maximizer's point of view.
    pub score: Score,
    /// Move achieving `score`; `None` on terminal or depth-exhausted nodes.
    pub best_move: Option<Position>,
}

impl SearchResult {
    fn leaf(score: Score) -> Self {
        Self::new(score, None)
    }
}

/// Static evaluation: the score of a terminal position.
fn terminal_score(board: &Board, maximizer: Player) -> Option<Score> {
    match board.outcome() {
        Outcome::Winner(player) if player == maximizer => Some(WIN),
        Outcome::Winner(_) => Some(LOSS),
        Outcome::Draw => Some(DRAW),
        Outcome::Ongoing => None,
    }
}

/// Alpha-beta searcher for one maximizing player.
///
/// The searcher fills squares on the board it is given and undoes each
/// placement with [`Board::revert`], so the board is handed back unchanged.
#[derive(Debug, Clone)]
pub struct AlphaBeta {
    maximizer: Player,
    nodes: u64,
}

impl AlphaBeta {
    /// Creates a searcher that maximizes for `maximizer`.
    pub fn new(maximizer: Player) -> Self {
        Self {
            maximizer,
            nodes: 0,
        }
    }

    /// The maximizing player.
    pub fn maximizer(&self) -> Player {
        self.maximizer
    }

    /// Nodes visited by the last call to [`AlphaBeta::search`].
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Picks a move for `to_move` with a full alpha-beta window.
    ///
    /// The board must not be terminal: calling this on a finished game is a
    /// caller bug that panics in debug builds and returns a result without a
    /// move in release builds.
    #[instrument(
        skip(self, board),
        fields(board = %board.to_compact(), maximizer = %self.maximizer)
    )]
    pub fn search(&mut self, board: &mut Board, to_move: Player, depth: u8) -> SearchResult {
        debug_assert!(
            !board.outcome().is_terminal(),
            "search invoked on a finished board"
        );

        #[cfg(debug_assertions)]
        let before = *board;

        self.nodes = 0;
        let result = self.alpha_beta(board, to_move, depth, Score::MIN, Score::MAX);

        #[cfg(debug_assertions)]
        debug_assert_eq!(*board, before, "search must leave the board unchanged");

        debug!(
            score = result.score,
            best_move = ?result.best_move,
            nodes = self.nodes,
            "Search complete"
        );
        result
    }

    /// Recursive alpha-beta over `board` with `to_move` on move.
    ///
    /// Empty squares are tried in row-major order and only a strictly
    /// better score replaces the current best, so ties go to the first
    /// square in that order. Siblings are skipped once `beta <= alpha`;
    /// this never changes the returned score.
    pub fn alpha_beta(
        &mut self,
        board: &mut Board,
        to_move: Player,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
    ) -> SearchResult {
        self.nodes += 1;

        if let Some(score) = terminal_score(board, self.maximizer) {
            return SearchResult::leaf(score);
        }
        if depth == 0 {
            return SearchResult::leaf(DRAW);
        }

        let maximizing = to_move == self.maximizer;
        let mut best = SearchResult::leaf(if maximizing { Score::MIN } else { Score::MAX });

        for pos in Position::ALL {
            if !board.is_empty(pos) {
                continue;
            }

            board.place(Move::new(to_move, pos));
            let score = self
                .alpha_beta(board, to_move.opponent(), depth - 1, alpha, beta)
                .score;
            board.revert(pos);

            if maximizing {
                if score > best.score {
                    best = SearchResult::new(score, Some(pos));
                }
                alpha = alpha.max(best.score);
            } else {
                if score < best.score {
                    best = SearchResult::new(score, Some(pos));
                }
                beta = beta.min(best.score);
            }

            if beta <= alpha {
                break;
            }
        }

        best
    }
}

/// Plain minimax without pruning.
///
/// Visits every node within `depth` and uses the same row-major tie-break
/// as [`AlphaBeta`], so both agree on score and move everywhere.
pub fn minimax(board: &mut Board, maximizer: Player, to_move: Player, depth: u8) -> SearchResult {
    if let Some(score) = terminal_score(board, maximizer) {
        return SearchResult::leaf(score);
    }
    if depth == 0 {
        return SearchResult::leaf(DRAW);
    }

    let maximizing = to_move == maximizer;
    let mut best = SearchResult::leaf(if maximizing { Score::MIN } else { Score::MAX });

    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }

        board.place(Move::new(to_move, pos));
        let score = minimax(board, maximizer, to_move.opponent(), depth - 1).score;
        board.revert(pos);

        let better = if maximizing {
            score > best.score
        } else {
            score < best.score
        };
        if better {
            best = SearchResult::new(score, Some(pos));
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_completes_own_line_with_win_score() {
        // X holds TopLeft and TopCenter; TopRight wins.
        let mut board = board("XX./OO./...");
        let result = AlphaBeta::new(Player::X).search(&mut board, Player::X, FULL_DEPTH);
        assert_eq!(result, SearchResult::new(WIN, Some(Position::TopRight)));
    }

    #[test]
    fn test_empty_board_is_a_draw_and_opens_top_left() {
        let mut board = Board::new();
        let result = AlphaBeta::new(Player::X).search(&mut board, Player::X, FULL_DEPTH);
        assert_eq!(result, SearchResult::new(DRAW, Some(Position::TopLeft)));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_pruning_visits_fewer_nodes_than_exhaustive_count() {
        let mut board = Board::new();
        let mut searcher = AlphaBeta::new(Player::X);
        searcher.search(&mut board, Player::X, FULL_DEPTH);
        // Full tree from the empty board has 549_946 nodes.
        assert!(searcher.nodes() < 549_946);
        assert!(searcher.nodes() > 0);
    }

    #[test]
    fn test_terminal_node_returns_no_move() {
        let mut board = board("XXX/OO./...");
        let result = AlphaBeta::new(Player::X).alpha_beta(
            &mut board,
            Player::O,
            FULL_DEPTH,
            Score::MIN,
            Score::MAX,
        );
        assert_eq!(result, SearchResult::new(WIN, None));
    }

    #[test]
    fn test_depth_exhausted_scores_draw() {
        let mut board = board("XX./OO./...");
        let result =
            AlphaBeta::new(Player::X).alpha_beta(&mut board, Player::X, 0, Score::MIN, Score::MAX);
        assert_eq!(result, SearchResult::new(DRAW, None));
    }

    #[test]
    fn test_minimax_matches_alpha_beta_on_sample() {
        for layout in ["O.X......", "OXO......", "X...O....", "XXO.O...."] {
            let mut a = board(layout);
            let mut b = a;
            let pruned = AlphaBeta::new(Player::X).search(&mut a, Player::X, FULL_DEPTH);
            let exhaustive = minimax(&mut b, Player::X, Player::X, FULL_DEPTH);
            assert_eq!(pruned, exhaustive, "layout {layout}");
        }
    }
}
