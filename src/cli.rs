//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_minimax::{Mark, Side};

/// Strictly Minimax - tic-tac-toe against an alpha-beta engine
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Play tic-tac-toe against an engine that never loses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Session configuration file (TOML); defaults apply if it is missing
    #[arg(short, long, global = true, default_value = "strictly_minimax.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on stdin/stdout
    Play {
        /// Who moves first; asked interactively if omitted
        #[arg(short, long)]
        first: Option<Side>,

        /// Engine strength: easy, medium or hard
        #[arg(short, long)]
        difficulty: Option<String>,

        /// Mark the engine plays
        #[arg(long)]
        engine_mark: Option<Mark>,

        /// Seed for Easy's random moves
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Let two engines play each other
    Selfplay {
        /// Number of games; the starting mark alternates
        #[arg(short = 'n', long, default_value = "10")]
        games: u32,

        /// Strength of the X engine
        #[arg(short, long, default_value = "hard")]
        x: String,

        /// Strength of the O engine
        #[arg(short, long, default_value = "hard")]
        o: String,

        /// Seed for Easy's random moves
        #[arg(long)]
        seed: Option<u64>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Evaluate a position given as nine characters of X, O and .
    Analyze {
        /// The board, row-major, e.g. "XX.OO...."
        board: String,

        /// Engine strength: easy, medium or hard
        #[arg(short, long, default_value = "hard")]
        difficulty: String,

        /// Mark on move; inferred from the counts if omitted
        #[arg(long)]
        to_move: Option<Mark>,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_flags_parse() {
        let cli = Cli::parse_from([
            "strictly_minimax",
            "play",
            "--first",
            "engine",
            "-d",
            "medium",
        ]);
        match cli.command {
            Command::Play {
                first, difficulty, ..
            } => {
                assert_eq!(first, Some(Side::Automated));
                assert_eq!(difficulty.as_deref(), Some("medium"));
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(cli.config, PathBuf::from("strictly_minimax.toml"));
    }

    #[test]
    fn test_analyze_takes_positional_board() {
        let cli = Cli::parse_from(["strictly_minimax", "analyze", "XX.OO....", "--to-move", "x"]);
        match cli.command {
            Command::Analyze { board, to_move, .. } => {
                assert_eq!(board, "XX.OO....");
                assert_eq!(to_move, Some(Mark::X));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
