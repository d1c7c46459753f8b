//! Line-oriented text console for playing a game at a terminal.
//!
//! Each input line is either a move or a command. Input that is not a
//! well-formed pair of integers is rejected here and never reaches the
//! engine.
//!
//! ## Supported Commands
//!
//! - `<row> <col>` or `<row>,<col>` - Place a stone for the player to move
//! - `board` / `show` - Print the board
//! - `status` - Print whose turn it is, or the result
//! - `restart` / `reset` - Start a new game with the same settings
//! - `help` - List commands
//! - `quit` / `exit` - Leave the console
//!
//! ## Example
//!
//! ```
//! use gomoku_rust::console::Console;
//! use gomoku_rust::game::Game;
//!
//! let mut console = Console::new(Game::new(9).unwrap());
//! let mut out = Vec::new();
//! console.run("4 4\nquit\n".as_bytes(), &mut out).unwrap();
//! ```

use std::io::{self, BufRead, Write};

use crate::game::Game;

/// The list of known console commands.
const KNOWN_COMMANDS: &[&str] = &[
    "board", "exit", "help", "quit", "reset", "restart", "show", "status",
];

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Move(isize, isize),
    Command(String),
}

/// Console session state.
pub struct Console {
    game: Game,
}

impl Console {
    pub fn new(game: Game) -> Self {
        Self { game }
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        writeln!(output, "=== Gomoku (five in a row) ===")?;
        writeln!(output, "Enter moves as: row col (for example: 7 7). Type 'help' for commands.\n")?;
        write!(output, "{}", self.game.board())?;
        writeln!(output, "{}", self.game.status_text())?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (quit, message) = match Self::parse_line(line) {
                Ok(Input::Move(row, col)) => (false, self.play(row, col)),
                Ok(Input::Command(cmd)) => (cmd == "quit" || cmd == "exit", self.execute(&cmd)),
                Err(msg) => (false, msg),
            };

            writeln!(output, "{message}")?;
            output.flush()?;

            if quit {
                break;
            }
        }
        Ok(())
    }

    /// Split a line into a move or a lower-cased command word.
    fn parse_line(line: &str) -> Result<Input, String> {
        let parts: Vec<&str> = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .collect();

        match parts.as_slice() {
            [word] if !word.starts_with(|c: char| c.is_ascii_digit() || c == '-') => {
                Ok(Input::Command(word.to_lowercase()))
            }
            [row, col] => {
                let row = row
                    .parse::<isize>()
                    .map_err(|_| format!("invalid row: {row}"))?;
                let col = col
                    .parse::<isize>()
                    .map_err(|_| format!("invalid column: {col}"))?;
                Ok(Input::Move(row, col))
            }
            _ => Err("expected two numbers separated by a space, e.g. 7 7".to_string()),
        }
    }

    /// Place a stone and describe the result.
    fn play(&mut self, row: isize, col: isize) -> String {
        if self.game.status().is_terminal() {
            return format!(
                "{} Game over, type 'restart' to play again.",
                self.game.status_text()
            );
        }
        let mover = self.game.current_player();
        match self.game.place_stone(row, col) {
            Ok(_) => format!(
                "{mover} plays ({row}, {col})\n{}{}",
                self.game.board(),
                self.game.status_text()
            ),
            Err(e) => format!("{e}, try again"),
        }
    }

    /// Execute a console command and return the response.
    fn execute(&mut self, command: &str) -> String {
        match command {
            "board" | "show" => format!("{}{}", self.game.board(), self.game.status_text()),

            "status" => self.game.status_text(),

            "restart" | "reset" => {
                self.game.reset();
                format!("New game.\n{}{}", self.game.board(), self.game.status_text())
            }

            "help" => format!(
                "Moves: row col (0 to {}). Commands: {}",
                self.game.size() - 1,
                KNOWN_COMMANDS.join(", ")
            ),

            "quit" | "exit" => "Goodbye.".to_string(),

            _ => format!("unknown command: {command}"),
        }
    }
}
