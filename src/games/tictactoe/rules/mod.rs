//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the search engine and the session share one definition
//! of a finished game.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, winning_line};

use super::{Board, Outcome, Player, Position};

/// Derives the outcome of `board`.
pub fn outcome(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Winner(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

impl Board {
    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        is_full(self)
    }

    /// Checks for a winner on the board.
    pub fn winner(&self) -> Option<Player> {
        check_winner(self)
    }

    /// The completed line to highlight, if any.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        winning_line(self)
    }

    /// Derives the game outcome from the squares.
    pub fn outcome(&self) -> Outcome {
        outcome(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_variants() {
        assert_eq!(Board::new().outcome(), Outcome::Ongoing);

        let won: Board = "OOO/XX./X..".parse().unwrap();
        assert_eq!(won.outcome(), Outcome::Winner(Player::O));

        let drawn: Board = "XOX/OXX/OXO".parse().unwrap();
        assert_eq!(drawn.outcome(), Outcome::Draw);
    }
}
