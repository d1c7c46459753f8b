//! Gomoku-Rust: a five-in-a-row game for the terminal.
//!
//! ## Usage
//!
//! - `gomoku-rust` - Play a two-player game at the console
//! - `gomoku-rust play --size 19` - Play on a 19x19 board
//! - `gomoku-rust demo --games 3 --seed 42` - Watch random self-play games
//!
//! Set `RUST_LOG=debug` to trace moves on stderr.

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use gomoku_rust::board::Player;
use gomoku_rust::config::GameConfig;
use gomoku_rust::console::Console;
use gomoku_rust::constants::DEFAULT_BOARD_SIZE;
use gomoku_rust::game::Game;
use gomoku_rust::playout::random_playout;

/// Gomoku-Rust: five in a row on an NxN board
#[derive(Parser)]
#[command(name = "gomoku-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board side length (at least 5)
    #[arg(short, long, global = true, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,

    /// Which side moves first
    #[arg(long, global = true, value_enum, default_value_t = First::Black)]
    first: First,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum First {
    Black,
    White,
}

impl From<First> for Player {
    fn from(first: First) -> Self {
        match first {
            First::Black => Player::Black,
            First::White => Player::White,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game on stdin/stdout
    Play,
    /// Play random self-play games and print the results
    Demo {
        /// Seed for the random move generator
        #[arg(long)]
        seed: Option<u64>,
        /// Number of games to play
        #[arg(long, default_value_t = 1)]
        games: usize,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig {
        board_size: cli.size,
        first_player: cli.first.into(),
    };
    let game = Game::with_config(config).context("invalid game settings")?;

    match cli.command {
        Some(Commands::Demo { seed, games }) => run_demo(game, seed, games),
        Some(Commands::Play) | None => {
            let mut console = Console::new(game);
            console
                .run(io::stdin().lock(), io::stdout().lock())
                .context("console I/O failed")
        }
    }
}

fn run_demo(mut game: Game, seed: Option<u64>, games: usize) -> Result<()> {
    let mut rng = match seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    };
    println!("Gomoku-Rust: random self-play on {0}x{0}\n", game.size());

    for i in 1..=games {
        game.reset();
        let phase = random_playout(&mut game, &mut rng);
        println!("=== Game {i} ===");
        print!("{}", game.board());
        println!("Result: {phase} after {} moves\n", game.move_count());
    }
    Ok(())
}
