//! Line-oriented front end: one game per prompt loop on any reader/writer.

use crate::games::tictactoe::Position;
use crate::search::Difficulty;
use crate::session::{Phase, Session, Side};
use std::io::{self, BufRead, Write};
use tracing::{debug, instrument};

/// What a line of input asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayCommand {
    /// Play a square.
    Cell(Position),
    /// Pick who moves first.
    First(Side),
    /// Take back the last round.
    Undo,
    /// Start another game with the same first mover.
    NewGame,
    /// Change engine strength.
    Difficulty(Difficulty),
    /// Leave the loop.
    Quit,
}

impl PlayCommand {
    /// Parses one line of input. Blank or unrecognized lines yield `None`.
    #[instrument]
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let lower = line.to_lowercase();
        match lower.as_str() {
            "" => return None,
            "q" | "quit" | "exit" => return Some(Self::Quit),
            "u" | "undo" => return Some(Self::Undo),
            "n" | "new" => return Some(Self::NewGame),
            "h" | "human" | "me" => return Some(Self::First(Side::Human)),
            "e" | "engine" | "ai" => return Some(Self::First(Side::Automated)),
            _ => {}
        }
        if let Some(level) = lower.strip_prefix("difficulty ") {
            return Some(Self::Difficulty(Difficulty::from_name(level)));
        }
        Position::parse_input(line).map(Self::Cell)
    }
}

const HELP: &str = "Moves: 1-9, \"row col\" (0-2) or a cell name. \
u = undo, n = new game, difficulty <easy|medium|hard>, q = quit.";

/// Runs the interactive loop until `q` or end of input.
///
/// The engine replies on its own; refused input is reported and the prompt
/// repeats.
///
/// # Errors
///
/// Only I/O failures on `input` or `out` end the loop early.
#[instrument(skip_all)]
pub fn run_play<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "{}", HELP)?;
    let mut lines = input.lines();

    loop {
        if session.phase() == Phase::AutomatedTurn {
            match session.request_automated_move() {
                Ok((position, _)) => writeln!(out, "Engine plays {}", position)?,
                Err(e) => {
                    writeln!(out, "{}", e)?;
                    break;
                }
            }
            continue;
        }

        render(session, out)?;
        let Some(line) = lines.next() else {
            debug!("Input closed");
            break;
        };
        let line = line?;

        let Some(command) = PlayCommand::parse(&line) else {
            writeln!(out, "Unrecognized input. {}", HELP)?;
            continue;
        };
        debug!(?command, "Command");

        let result = match command {
            PlayCommand::Quit => break,
            PlayCommand::First(side) => {
                let difficulty = session.difficulty();
                session.start(side, difficulty);
                Ok(())
            }
            PlayCommand::Cell(position) => session
                .apply_human_move(position.row(), position.col())
                .map(|_| ()),
            PlayCommand::Undo => session.undo_last_round(),
            PlayCommand::NewGame => session.new_game(),
            PlayCommand::Difficulty(level) => {
                session.set_difficulty(level);
                writeln!(out, "Difficulty: {}", level)?;
                Ok(())
            }
        };
        if let Err(e) = result {
            writeln!(out, "{}", e)?;
        }
    }

    writeln!(out, "{}", session.tally())?;
    Ok(())
}

fn render<W: Write>(session: &Session, out: &mut W) -> io::Result<()> {
    match session.phase() {
        Phase::AwaitingFirstPlayerChoice => {
            writeln!(out, "{}: [h]uman or [e]ngine?", session.status_message())
        }
        Phase::GameOver => {
            writeln!(out, "\n{}\n", session.board())?;
            if let Some(line) = session.winning_line() {
                let cells: Vec<&str> = line.iter().map(|p| p.label()).collect();
                writeln!(out, "Line: {}", cells.join(", "))?;
            }
            writeln!(out, "{}", session.status_message())?;
            writeln!(out, "{}", session.tally())?;
            writeln!(out, "[n]ew game or [q]uit")
        }
        Phase::HumanTurn | Phase::AutomatedTurn => {
            writeln!(out, "\n{}\n", session.board())?;
            writeln!(
                out,
                "{} You are {}.",
                session.status_message(),
                session.marks().human
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_commands_parse_before_cells() {
        assert_eq!(PlayCommand::parse("n"), Some(PlayCommand::NewGame));
        assert_eq!(PlayCommand::parse(" U "), Some(PlayCommand::Undo));
        assert_eq!(
            PlayCommand::parse("e"),
            Some(PlayCommand::First(Side::Automated))
        );
        assert_eq!(
            PlayCommand::parse("5"),
            Some(PlayCommand::Cell(Position::Center))
        );
        assert_eq!(
            PlayCommand::parse("0 2"),
            Some(PlayCommand::Cell(Position::TopRight))
        );
        assert_eq!(
            PlayCommand::parse("difficulty Easy"),
            Some(PlayCommand::Difficulty(Difficulty::Easy))
        );
        assert_eq!(PlayCommand::parse(""), None);
    }

    #[test]
    fn test_scripted_game_against_hard_engine() {
        let mut session = Session::default();
        let script = "h\n5\n3\n4\n8\n9\nq\n";
        let mut out = Vec::new();
        run_play(&mut session, Cursor::new(script), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Engine plays Top-left (0, 0)"));
        assert_eq!(session.first_mover(), Some(Side::Human));
        assert_eq!(session.tally().human_wins(), 0);
    }

    #[test]
    fn test_refusals_are_reported() {
        let mut session = Session::default();
        let script = "5\nh\n5\n5\nzz\n";
        let mut out = Vec::new();
        run_play(&mut session, Cursor::new(script), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Choose who plays first before moving"));
        assert!(text.contains("already occupied"));
        assert!(text.contains("Unrecognized input"));
        assert_eq!(session.history().len(), 2);
    }
}
