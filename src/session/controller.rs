//! The session state machine tying board, engine, history and tally together.

use super::error::SessionError;
use super::history::{HistoryEntry, MoveHistory};
use super::settings::{Marks, Side};
use super::tally::ScoreTally;
use crate::config::SessionConfig;
use crate::games::tictactoe::{Board, Move, Outcome, Position};
use crate::search::{Difficulty, Engine, SearchResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Where a session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display)]
pub enum Phase {
    /// No first mover picked yet.
    #[default]
    AwaitingFirstPlayerChoice,
    /// Waiting for the human's move.
    HumanTurn,
    /// Waiting for the engine's move.
    AutomatedTurn,
    /// The board is terminal.
    GameOver,
}

/// One human playing a series of games against the engine.
///
/// Every refused request returns a [`SessionError`] and leaves the session
/// exactly as it was.
#[derive(Debug, Clone)]
pub struct Session {
    pub(crate) board: Board,
    pub(crate) history: MoveHistory,
    pub(crate) phase: Phase,
    pub(crate) tally: ScoreTally,
    pub(crate) engine: Engine,
    pub(crate) first_mover: Option<Side>,
    pub(crate) marks: Marks,
}

impl Session {
    /// Builds a session from configuration.
    ///
    /// A configured first mover starts the first game immediately.
    #[instrument(skip(config))]
    pub fn new(config: &SessionConfig) -> Self {
        let engine = Engine::new(
            *config.difficulty(),
            *config.medium_depth(),
            *config.seed(),
        );
        let mut session = Self {
            board: Board::new(),
            history: MoveHistory::new(),
            phase: Phase::AwaitingFirstPlayerChoice,
            tally: ScoreTally::default(),
            engine,
            first_mover: None,
            marks: Marks::new(*config.automated_mark()),
        };
        if let Some(first) = *config.first_mover() {
            session.begin(first);
        }
        session
    }

    /// Starts a fresh game with `first_mover` on move at `difficulty`.
    ///
    /// Allowed from any phase; the board and history are cleared, the tally
    /// is kept.
    #[instrument(skip(self))]
    pub fn start(&mut self, first_mover: Side, difficulty: Difficulty) {
        self.engine.set_difficulty(difficulty);
        self.begin(first_mover);
    }

    /// Starts another game with the remembered first mover and difficulty.
    ///
    /// # Errors
    ///
    /// [`SessionError::NoFirstMover`] if no game was ever started.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) -> Result<(), SessionError> {
        let first = self.first_mover.ok_or(SessionError::NoFirstMover)?;
        self.begin(first);
        Ok(())
    }

    /// Clears the board and forgets the first mover. The tally is kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.history.clear();
        self.first_mover = None;
        self.phase = Phase::AwaitingFirstPlayerChoice;
        info!("Session reset");
        self.check_invariants();
    }

    fn begin(&mut self, first: Side) {
        self.board = Board::new();
        self.history.clear();
        self.first_mover = Some(first);
        self.phase = match first {
            Side::Human => Phase::HumanTurn,
            Side::Automated => Phase::AutomatedTurn,
        };
        info!(
            first_mover = %first,
            difficulty = %self.engine.difficulty(),
            "New game"
        );
        self.check_invariants();
    }

    /// Plays the human's mark at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Refused outside [`Phase::HumanTurn`], for cells off the board and for
    /// occupied cells.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn apply_human_move(&mut self, row: usize, col: usize) -> Result<Outcome, SessionError> {
        match self.phase {
            Phase::HumanTurn => {}
            Phase::AutomatedTurn => return Err(SessionError::NotHumanTurn),
            Phase::GameOver => return Err(SessionError::GameOver),
            Phase::AwaitingFirstPlayerChoice => return Err(SessionError::NoFirstMover),
        }
        let position =
            Position::from_row_col(row, col).ok_or(SessionError::OutOfBounds { row, col })?;
        self.play(Side::Human, position)
    }

    /// Lets the engine move and reports where it played.
    ///
    /// # Errors
    ///
    /// Refused outside [`Phase::AutomatedTurn`].
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn request_automated_move(&mut self) -> Result<(Position, Outcome), SessionError> {
        match self.phase {
            Phase::AutomatedTurn => {}
            Phase::HumanTurn => return Err(SessionError::NotAutomatedTurn),
            Phase::GameOver => return Err(SessionError::GameOver),
            Phase::AwaitingFirstPlayerChoice => return Err(SessionError::NoFirstMover),
        }

        let mark = self.marks.automated;
        let SearchResult { score, best_move } = self.engine.choose_move(&mut self.board, mark);
        let position = best_move.ok_or(SessionError::NoLegalMove)?;
        debug!(%position, score, nodes = self.engine.last_nodes(), "Engine move");

        let outcome = self.play(Side::Automated, position)?;
        Ok((position, outcome))
    }

    fn play(&mut self, side: Side, position: Position) -> Result<Outcome, SessionError> {
        let mv = Move::new(self.marks.of(side), position);
        self.board.apply(mv)?;
        self.history.push(HistoryEntry::new(side, mv));

        let outcome = self.board.outcome();
        if outcome.is_terminal() {
            self.finish(outcome);
        } else {
            self.phase = match side {
                Side::Human => Phase::AutomatedTurn,
                Side::Automated => Phase::HumanTurn,
            };
        }
        self.check_invariants();
        Ok(outcome)
    }

    /// The only way into [`Phase::GameOver`], so each game is tallied once.
    fn finish(&mut self, outcome: Outcome) {
        let winner = outcome.winner().map(|mark| self.marks.side_of(mark));
        self.tally.record(winner);
        self.phase = Phase::GameOver;
        info!(%outcome, tally = %self.tally, "Game over");
    }

    /// Takes back the human's last move and any engine reply after it.
    ///
    /// Always lands in [`Phase::HumanTurn`].
    ///
    /// # Errors
    ///
    /// [`SessionError::NothingToUndo`] when the human has not moved yet,
    /// [`SessionError::GameOver`] once the game is finished and tallied, and
    /// [`SessionError::NoFirstMover`] before any game has started.
    #[instrument(skip(self), fields(phase = %self.phase, moves = self.history.len()))]
    pub fn undo_last_round(&mut self) -> Result<(), SessionError> {
        match self.phase {
            Phase::HumanTurn | Phase::AutomatedTurn => {}
            Phase::GameOver => return Err(SessionError::GameOver),
            Phase::AwaitingFirstPlayerChoice => return Err(SessionError::NoFirstMover),
        }
        if !self.history.has_moves_by(Side::Human) {
            return Err(SessionError::NothingToUndo);
        }

        if self
            .history
            .last()
            .is_some_and(|entry| entry.side == Side::Automated)
        {
            self.take_back();
        }
        self.take_back();

        self.phase = Phase::HumanTurn;
        debug!(board = %self.board.to_compact(), "Undid last round");
        self.check_invariants();
        Ok(())
    }

    fn take_back(&mut self) {
        match self.history.pop() {
            Some(entry) => self.board.revert(entry.mv.position),
            None => warn!("Undo found an empty history"),
        }
    }

    /// The board of the current game.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves played in the current game.
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Results of finished games.
    pub fn tally(&self) -> &ScoreTally {
        &self.tally
    }

    /// Zeroes the tally.
    pub fn reset_tally(&mut self) {
        self.tally.reset();
    }

    /// The first mover of the current game, if one was chosen.
    pub fn first_mover(&self) -> Option<Side> {
        self.first_mover
    }

    /// Marks played by each side.
    pub fn marks(&self) -> Marks {
        self.marks
    }

    /// Difficulty of the engine.
    pub fn difficulty(&self) -> Difficulty {
        self.engine.difficulty()
    }

    /// Changes the engine's difficulty from its next move on.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.engine.set_difficulty(difficulty);
    }

    /// Nodes the engine searched for its latest move.
    pub fn last_search_nodes(&self) -> u64 {
        self.engine.last_nodes()
    }

    /// Outcome of the board as it stands.
    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    /// The three cells of the completed line, if someone has won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.board.winning_line()
    }

    /// Short status line for the current phase.
    pub fn status_message(&self) -> &'static str {
        match self.phase {
            Phase::AwaitingFirstPlayerChoice => "Choose who plays first",
            Phase::HumanTurn => "Your turn!",
            Phase::AutomatedTurn => "Engine is thinking...",
            Phase::GameOver => match self.outcome().winner().map(|m| self.marks.side_of(m)) {
                Some(Side::Human) => "You win!",
                Some(Side::Automated) => "Engine wins!",
                None => "It's a draw!",
            },
        }
    }

    #[cfg(debug_assertions)]
    fn check_invariants(&self) {
        use super::invariants::{InvariantSet, SessionInvariants};

        if let Err(violations) = SessionInvariants::check_all(self) {
            let descriptions: Vec<String> =
                violations.iter().map(ToString::to_string).collect();
            panic!("session invariants violated: {}", descriptions.join("; "));
        }
    }

    #[cfg(not(debug_assertions))]
    fn check_invariants(&self) {}
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&SessionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Square};

    fn hard_session(first: Side) -> Session {
        let mut session = Session::default();
        session.start(first, Difficulty::Hard);
        session
    }

    #[test]
    fn test_fresh_session_awaits_first_mover() {
        let session = Session::default();
        assert_eq!(session.phase(), Phase::AwaitingFirstPlayerChoice);
        assert_eq!(session.status_message(), "Choose who plays first");
        assert_eq!(session.marks().automated, Player::X);
    }

    #[test]
    fn test_moves_refused_before_start() {
        let mut session = Session::default();
        assert_eq!(
            session.apply_human_move(0, 0),
            Err(SessionError::NoFirstMover)
        );
        assert_eq!(
            session.request_automated_move(),
            Err(SessionError::NoFirstMover)
        );
        assert_eq!(session.new_game(), Err(SessionError::NoFirstMover));
        assert_eq!(session.undo_last_round(), Err(SessionError::NoFirstMover));
    }

    #[test]
    fn test_start_picks_turn() {
        assert_eq!(hard_session(Side::Human).phase(), Phase::HumanTurn);
        let session = hard_session(Side::Automated);
        assert_eq!(session.phase(), Phase::AutomatedTurn);
        assert_eq!(session.status_message(), "Engine is thinking...");
    }

    #[test]
    fn test_human_move_hands_turn_to_engine() {
        let mut session = hard_session(Side::Human);
        let outcome = session.apply_human_move(1, 1).unwrap();
        assert_eq!(outcome, Outcome::Ongoing);
        assert_eq!(session.phase(), Phase::AutomatedTurn);
        assert_eq!(
            session.board().get(Position::Center),
            Square::Occupied(Player::O)
        );

        assert_eq!(
            session.apply_human_move(0, 0),
            Err(SessionError::NotHumanTurn)
        );
    }

    #[test]
    fn test_engine_reply_to_center_is_top_left() {
        let mut session = hard_session(Side::Human);
        session.apply_human_move(1, 1).unwrap();
        let (position, outcome) = session.request_automated_move().unwrap();
        assert_eq!(position, Position::TopLeft);
        assert_eq!(outcome, Outcome::Ongoing);
        assert_eq!(session.phase(), Phase::HumanTurn);
    }

    #[test]
    fn test_refused_moves_leave_state_untouched() {
        let mut session = hard_session(Side::Human);
        session.apply_human_move(1, 1).unwrap();
        session.request_automated_move().unwrap();
        let board = *session.board();
        let moves = session.history().len();

        assert_eq!(
            session.apply_human_move(3, 0),
            Err(SessionError::OutOfBounds { row: 3, col: 0 })
        );
        assert_eq!(
            session.apply_human_move(1, 1),
            Err(SessionError::SquareOccupied(Position::Center))
        );
        assert_eq!(
            session.request_automated_move(),
            Err(SessionError::NotAutomatedTurn)
        );
        assert_eq!(*session.board(), board);
        assert_eq!(session.history().len(), moves);
        assert_eq!(session.phase(), Phase::HumanTurn);
    }

    #[test]
    fn test_undo_takes_back_human_and_engine_moves() {
        let mut session = hard_session(Side::Human);
        session.apply_human_move(1, 1).unwrap();
        session.request_automated_move().unwrap();
        session.apply_human_move(0, 2).unwrap();
        session.request_automated_move().unwrap();
        assert_eq!(session.history().len(), 4);

        session.undo_last_round().unwrap();
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.board().occupied_count(), 2);
        assert_eq!(session.phase(), Phase::HumanTurn);
    }

    #[test]
    fn test_undo_with_engine_reply_pending() {
        let mut session = hard_session(Side::Human);
        session.apply_human_move(1, 1).unwrap();

        session.undo_last_round().unwrap();
        assert!(session.history().is_empty());
        assert_eq!(*session.board(), Board::new());
        assert_eq!(session.phase(), Phase::HumanTurn);
    }

    #[test]
    fn test_undo_refused_without_human_move() {
        let mut session = hard_session(Side::Automated);
        assert_eq!(session.undo_last_round(), Err(SessionError::NothingToUndo));

        session.request_automated_move().unwrap();
        assert_eq!(session.undo_last_round(), Err(SessionError::NothingToUndo));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_new_game_keeps_tally_and_first_mover() {
        let mut session = Session::default();
        session.start(Side::Automated, Difficulty::Hard);
        while session.phase() != Phase::GameOver {
            match session.phase() {
                Phase::AutomatedTurn => {
                    session.request_automated_move().unwrap();
                }
                Phase::HumanTurn => {
                    let pos = Position::valid_moves(session.board())[0];
                    session.apply_human_move(pos.row(), pos.col()).unwrap();
                }
                _ => unreachable!(),
            }
        }
        assert_eq!(session.tally().games(), 1);
        assert_eq!(
            session.apply_human_move(0, 0),
            Err(SessionError::GameOver)
        );
        let finished = *session.board();
        assert_eq!(session.undo_last_round(), Err(SessionError::GameOver));
        assert_eq!(*session.board(), finished);
        assert_eq!(session.phase(), Phase::GameOver);

        session.new_game().unwrap();
        assert_eq!(session.phase(), Phase::AutomatedTurn);
        assert_eq!(session.tally().games(), 1);
        assert!(session.history().is_empty());

        session.reset();
        assert_eq!(session.phase(), Phase::AwaitingFirstPlayerChoice);
        assert_eq!(session.first_mover(), None);
        assert_eq!(session.tally().games(), 1);
    }
}
