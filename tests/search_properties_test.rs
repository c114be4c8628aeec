//! Exhaustive properties of the search engine over the whole game tree.

use std::collections::HashSet;
use strictly_minimax::{
    AlphaBeta, Board, DRAW, Difficulty, Engine, FULL_DEPTH, Mark, Move, Outcome, Position, WIN,
    minimax,
};

/// Walks every line of play where `engine_mark` answers with the engine and
/// the opponent tries every legal reply.
fn assert_engine_never_loses(
    board: &mut Board,
    engine: &mut Engine,
    engine_mark: Mark,
    to_move: Mark,
) {
    match board.outcome() {
        Outcome::Winner(winner) => {
            assert_eq!(
                winner,
                engine_mark,
                "engine lost on {}",
                board.to_compact()
            );
            return;
        }
        Outcome::Draw => return,
        Outcome::Ongoing => {}
    }

    if to_move == engine_mark {
        let before = *board;
        let result = engine.choose_move(board, to_move);
        assert_eq!(*board, before, "search must leave the board unchanged");
        let position = result.best_move.expect("ongoing board has a move");
        board.apply(Move::new(to_move, position)).unwrap();
        assert_engine_never_loses(board, engine, engine_mark, to_move.opponent());
        board.revert(position);
    } else {
        for position in Position::valid_moves(board) {
            board.apply(Move::new(to_move, position)).unwrap();
            assert_engine_never_loses(board, engine, engine_mark, to_move.opponent());
            board.revert(position);
        }
    }
}

#[test]
fn test_hard_never_loses_moving_first() {
    let mut engine = Engine::hard();
    for mark in [Mark::X, Mark::O] {
        assert_engine_never_loses(&mut Board::new(), &mut engine, mark, mark);
    }
}

#[test]
fn test_hard_never_loses_moving_second() {
    let mut engine = Engine::hard();
    for mark in [Mark::X, Mark::O] {
        assert_engine_never_loses(&mut Board::new(), &mut engine, mark, mark.opponent());
    }
}

#[test]
fn test_hard_against_itself_draws() {
    for first in [Mark::X, Mark::O] {
        let mut board = Board::new();
        let mut engine = Engine::new(Difficulty::Hard, 2, None);
        let mut to_move = first;
        while !board.outcome().is_terminal() {
            let position = engine.choose_move(&mut board, to_move).best_move.unwrap();
            board.apply(Move::new(to_move, position)).unwrap();
            to_move = to_move.opponent();
        }
        assert_eq!(board.outcome(), Outcome::Draw);
    }
}

/// Every non-terminal board reachable with X moving first, paired with the
/// mark on move.
fn reachable_positions() -> Vec<(Board, Mark)> {
    fn walk(
        board: &mut Board,
        to_move: Mark,
        seen: &mut HashSet<String>,
        out: &mut Vec<(Board, Mark)>,
    ) {
        if board.outcome().is_terminal() || !seen.insert(board.to_compact()) {
            return;
        }
        out.push((*board, to_move));
        for position in Position::valid_moves(board) {
            board.apply(Move::new(to_move, position)).unwrap();
            walk(board, to_move.opponent(), seen, out);
            board.revert(position);
        }
    }

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    walk(&mut Board::new(), Mark::X, &mut seen, &mut out);
    out
}

#[test]
fn test_reachable_position_count() {
    assert_eq!(reachable_positions().len(), 4520);
}

#[test]
fn test_alpha_beta_matches_minimax_everywhere() {
    for (mut board, to_move) in reachable_positions() {
        for maximizer in [Mark::X, Mark::O] {
            let pruned = AlphaBeta::new(maximizer).search(&mut board, to_move, FULL_DEPTH);
            let full = minimax(&mut board, maximizer, to_move, FULL_DEPTH);
            assert_eq!(
                pruned,
                full,
                "disagreement on {} with {} to move, maximizing {}",
                board.to_compact(),
                to_move,
                maximizer
            );
        }
    }
}

#[test]
fn test_pruning_visits_fewer_nodes_than_full_tree() {
    let mut searcher = AlphaBeta::new(Mark::X);
    let result = searcher.search(&mut Board::new(), Mark::X, FULL_DEPTH);
    assert_eq!(result.score, DRAW);
    assert_eq!(result.best_move, Some(Position::TopLeft));
    assert_eq!(searcher.nodes(), 18_297);
}

#[test]
fn test_completes_two_in_a_row() {
    let mut board: Board = "XX.OO....".parse().unwrap();
    let result = Engine::hard().choose_move(&mut board, Mark::X);
    assert_eq!(result.best_move, Some(Position::TopRight));
    assert_eq!(result.score, WIN);
}

#[test]
fn test_corners_held_by_opponent_center_is_the_only_draw() {
    let mut board: Board = "OXO......".parse().unwrap();
    let result = Engine::hard().choose_move(&mut board, Mark::X);
    assert_eq!(result.best_move, Some(Position::Center));
    assert_eq!(result.score, DRAW);
}

#[test]
fn test_medium_horizon_misses_fork() {
    let mut medium = Engine::new(Difficulty::Medium, 2, None);
    let mut hard = Engine::hard();
    let mut board: Board = "O........".parse().unwrap();

    assert_eq!(
        medium.choose_move(&mut board, Mark::X).best_move,
        Some(Position::TopCenter)
    );
    assert_eq!(
        hard.choose_move(&mut board, Mark::X).best_move,
        Some(Position::Center)
    );
}
