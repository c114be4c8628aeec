//! Engine against engine.

use crate::games::tictactoe::{Board, Mark, Move, Outcome};
use crate::search::{DEFAULT_MEDIUM_DEPTH, Difficulty, Engine};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Aggregate results of a series of games, keyed by mark.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Games played.
    pub games: u32,
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
    /// Nodes searched over all games.
    pub nodes: u64,
}

impl MatchSummary {
    fn record(&mut self, outcome: Outcome) {
        self.games += 1;
        match outcome.winner() {
            Some(Mark::X) => self.x_wins += 1,
            Some(Mark::O) => self.o_wins += 1,
            None => self.draws += 1,
        }
    }
}

impl std::fmt::Display for MatchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games  |  X: {}  |  O: {}  |  Draws: {}",
            self.games, self.x_wins, self.o_wins, self.draws
        )
    }
}

/// Two engines that alternate starting marks.
#[derive(Debug)]
pub struct SelfPlay {
    x: Engine,
    o: Engine,
}

impl SelfPlay {
    /// Engines for X and O. `seed` seeds X's engine; O's uses the next value.
    pub fn new(x: Difficulty, o: Difficulty, seed: Option<u64>) -> Self {
        Self {
            x: Engine::new(x, DEFAULT_MEDIUM_DEPTH, seed),
            o: Engine::new(o, DEFAULT_MEDIUM_DEPTH, seed.map(|s| s.wrapping_add(1))),
        }
    }

    /// Plays one game with `first` on move.
    ///
    /// Returns the final board, its outcome and the nodes searched.
    #[instrument(skip(self))]
    pub fn play_game(&mut self, first: Mark) -> (Board, Outcome, u64) {
        let mut board = Board::new();
        let mut to_move = first;
        let mut nodes = 0;

        loop {
            let outcome = board.outcome();
            if outcome.is_terminal() {
                debug!(board = %board.to_compact(), %outcome, nodes, "Game finished");
                return (board, outcome, nodes);
            }

            let engine = match to_move {
                Mark::X => &mut self.x,
                Mark::O => &mut self.o,
            };
            let result = engine.choose_move(&mut board, to_move);
            nodes += engine.last_nodes();
            let Some(position) = result.best_move else {
                return (board, outcome, nodes);
            };
            board.place(Move::new(to_move, position));
            to_move = to_move.opponent();
        }
    }

    /// Plays `games` games; the starting mark alternates, X first.
    #[instrument(skip(self))]
    pub fn run(&mut self, games: u32) -> MatchSummary {
        let mut summary = MatchSummary::default();
        let mut first = Mark::X;
        for _ in 0..games {
            let (_, outcome, nodes) = self.play_game(first);
            summary.record(outcome);
            summary.nodes += nodes;
            first = first.opponent();
        }
        info!(%summary, nodes = summary.nodes, "Self-play finished");
        summary
    }
}
