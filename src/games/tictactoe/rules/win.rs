//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};

/// The eight winning lines, scanned rows first, then columns, then the
/// two diagonals. The order decides which line is reported for highlighting.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the player owning all three squares of `line`, if any.
fn line_owner(board: &Board, [a, b, c]: [Position; 3]) -> Option<Player> {
    let first = board.get(a);
    match first {
        Square::Occupied(player) if board.get(b) == first && board.get(c) == first => Some(player),
        _ => None,
    }
}

/// Returns the first completed line in scan order.
pub fn winning_line(board: &Board) -> Option<[Position; 3]> {
    LINES
        .into_iter()
        .find(|line| line_owner(board, *line).is_some())
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    LINES.into_iter().find_map(|line| line_owner(board, line))
}
