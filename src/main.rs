//! Strictly Minimax - command-line front end.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::io;
use strictly_minimax::{
    Board, Difficulty, Engine, Mark, SelfPlay, Session, SessionConfig, Side, analyze, run_play,
};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();
    initialize_tracing();

    let cli = Cli::parse();
    let config = SessionConfig::load_or_default(&cli.config)?;

    match cli.command {
        Command::Play {
            first,
            difficulty,
            engine_mark,
            seed,
        } => run_interactive(config, first, difficulty, engine_mark, seed),
        Command::Selfplay {
            games,
            x,
            o,
            seed,
            json,
        } => run_selfplay(games, &x, &o, seed.or(*config.seed()), json),
        Command::Analyze {
            board,
            difficulty,
            to_move,
            json,
        } => run_analyze(&config, &board, &difficulty, to_move, json),
    }
}

/// Logs go to stderr so they never mix with the game on stdout.
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

#[instrument(skip(config))]
fn run_interactive(
    config: SessionConfig,
    first: Option<Side>,
    difficulty: Option<String>,
    engine_mark: Option<Mark>,
    seed: Option<u64>,
) -> Result<()> {
    let mut config = config;
    if let Some(first) = first {
        config = config.with_first_mover(Some(first));
    }
    if let Some(name) = difficulty {
        config = config.with_difficulty(Difficulty::from_name(&name));
    }
    if let Some(mark) = engine_mark {
        config = config.with_automated_mark(mark);
    }
    if seed.is_some() {
        config = config.with_seed(seed);
    }

    info!(difficulty = %config.difficulty(), "Starting interactive session");
    let mut session = Session::new(&config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_play(&mut session, stdin.lock(), &mut stdout)?;
    Ok(())
}

#[instrument]
fn run_selfplay(games: u32, x: &str, o: &str, seed: Option<u64>, json: bool) -> Result<()> {
    let mut selfplay = SelfPlay::new(Difficulty::from_name(x), Difficulty::from_name(o), seed);
    let summary = selfplay.run(games);
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", summary);
    }
    Ok(())
}

#[instrument(skip(config))]
fn run_analyze(
    config: &SessionConfig,
    board: &str,
    difficulty: &str,
    to_move: Option<Mark>,
    json: bool,
) -> Result<()> {
    let board: Board = board.parse()?;
    let mut engine = Engine::new(
        Difficulty::from_name(difficulty),
        *config.medium_depth(),
        *config.seed(),
    );
    let analysis = analyze(&board, &mut engine, to_move)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        println!("{}\n\n{}", board, analysis);
    }
    Ok(())
}
