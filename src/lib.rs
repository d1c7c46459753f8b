//! Gomoku-Rust: a five-in-a-row board engine.
//!
//! This crate provides the rules of gomoku on an NxN board: move validation,
//! turn alternation, and win/draw detection from the stone just placed.
//! It also ships a small text console and a random self-play driver on top
//! of the engine.
//!
//! ## Modules
//!
//! - [`constants`] - Board sizes, the winning length, and direction families
//! - [`board`] - Players, cells, and the grid with line counting
//! - [`game`] - Core game logic (turns, moves, win and draw detection)
//! - [`config`] - Game setup options
//! - [`error`] - Error types
//! - [`console`] - Text console for interactive play
//! - [`playout`] - Random game simulation
//!
//! ## Example
//!
//! ```
//! use gomoku_rust::board::Player;
//! use gomoku_rust::game::{Game, Phase};
//!
//! let mut game = Game::default();
//! for col in 0..4 {
//!     game.place_stone(7, col).unwrap(); // Black
//!     game.place_stone(0, col).unwrap(); // White
//! }
//! assert_eq!(game.place_stone(7, 4), Ok(Phase::Won(Player::Black)));
//! println!("{}", game.board());
//! ```

pub mod board;
pub mod config;
pub mod console;
pub mod constants;
pub mod error;
pub mod game;
pub mod playout;
