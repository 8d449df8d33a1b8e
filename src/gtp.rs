//! Go Text Protocol (GTP) implementation.
//!
//! GTP is a text-based protocol for communicating with Go-playing
//! programs: one command per line, space-separated tokens, `=`/`?`
//! response framing. Besides the standard plumbing this engine exposes
//! its tactical layer directly:
//!
//! - `policy_moves` - tactical override router: forced capture, forced
//!   defense, then policy generation
//! - `go_safe {b|w}` - points of groups classified as safe
//! - `timelimit N` - set the solve time budget (seconds, 1 to 100)
//! - `solve` - winner under perfect play within the time budget
//!
//! ## Example
//!
//! ```ignore
//! use sente::gtp::GtpEngine;
//! let mut engine = GtpEngine::new();
//! engine.run()?;
//! ```

use std::io::{self, BufRead, Write};

use log::debug;

use crate::board::{parse_coord, str_coord, Board, Color};
use crate::constants::{N, TIMELIMIT_DEFAULT, TIMELIMIT_MAX, TIMELIMIT_MIN};
use crate::solver::{BasicSolver, Solver};
use crate::tactics::{choose_move, policy_reply};
use crate::util::sorted_point_string;

/// The list of known GTP commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "clear_board",
    "genmove",
    "go_safe",
    "known_command",
    "komi",
    "list_commands",
    "name",
    "play",
    "policy_moves",
    "protocol_version",
    "quit",
    "solve",
    "timelimit",
    "version",
];

const GO_SAFE_USAGE: &str = "Usage: go_safe {w,b}";
const TIMELIMIT_USAGE: &str = "Usage: timelimit INT [1,100]";

/// GTP engine state.
pub struct GtpEngine<S: Solver> {
    /// Current game position
    board: Board,
    /// Win/loss and safety queries are forwarded here
    solver: S,
    /// Time budget in seconds for the solve command
    timelimit: u32,
}

impl GtpEngine<BasicSolver> {
    /// Create a new GTP engine with the baseline solver.
    pub fn new() -> Self {
        Self::with_solver(BasicSolver)
    }
}

impl Default for GtpEngine<BasicSolver> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Solver> GtpEngine<S> {
    /// Create a GTP engine forwarding solve/safety queries to `solver`.
    pub fn with_solver(solver: S) -> Self {
        Self {
            board: Board::new(),
            solver,
            timelimit: TIMELIMIT_DEFAULT,
        }
    }

    /// Run the GTP command loop, reading from stdin and writing to stdout.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        for line in stdin.lock().lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            // Parse optional command ID
            let (id, command_line) = Self::parse_id(line);

            // Parse command and arguments
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let command = parts[0].to_lowercase();
            let args = &parts[1..];
            debug!("command: {command} {args:?}");

            // Execute command
            let (success, message) = self.execute(&command, args);
            debug!("response ok={success}: {message}");

            // Format and send response
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            writeln!(stdout, "\n{prefix}{id_str} {message}\n")?;
            stdout.flush()?;

            // Quit if requested
            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let mut chars = trimmed.char_indices();

        // Check if line starts with a digit
        if let Some((_, c)) = chars.next() {
            if c.is_ascii_digit() {
                // Find end of number
                let end = chars
                    .find(|(_, c)| !c.is_ascii_digit())
                    .map(|(i, _)| i)
                    .unwrap_or(trimmed.len());

                if let Ok(id) = trimmed[..end].parse::<u32>() {
                    return (Some(id), trimmed[end..].trim());
                }
            }
        }

        (None, trimmed)
    }

    /// Execute a GTP command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, "sente".to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "2".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                let known = KNOWN_COMMANDS.contains(&args[0].to_lowercase().as_str());
                (true, if known { "true" } else { "false" }.to_string())
            }

            "quit" => (true, String::new()),

            "boardsize" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                match args[0].parse::<usize>() {
                    Ok(size) if size == N => (true, String::new()),
                    Ok(size) => (
                        false,
                        format!("unacceptable size, only {N} is supported (got {size})"),
                    ),
                    Err(_) => (false, "invalid size".to_string()),
                }
            }

            "clear_board" => {
                self.board.clear();
                (true, String::new())
            }

            "komi" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                match args[0].parse::<f32>() {
                    Ok(komi) => {
                        self.board.komi = komi;
                        (true, String::new())
                    }
                    Err(_) => (false, "invalid komi".to_string()),
                }
            }

            "play" => {
                if args.len() < 2 {
                    return (false, "missing arguments".to_string());
                }
                let color = match Color::from_token(args[0]) {
                    Ok(c) => c,
                    Err(e) => return (false, format!("Error: {e}")),
                };
                match parse_coord(args[1]) {
                    None if args[1].eq_ignore_ascii_case("pass") => {
                        self.board.current_player = color;
                        self.board.pass();
                        (true, String::new())
                    }
                    None => (false, format!("invalid vertex: {}", args[1])),
                    Some(pt) => match self.board.play(pt, color) {
                        Ok(()) => (true, String::new()),
                        Err(e) => (false, e.to_string()),
                    },
                }
            }

            "genmove" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                let color = match Color::from_token(args[0]) {
                    Ok(c) => c,
                    Err(e) => return (false, format!("Error: {e}")),
                };
                self.board.current_player = color;

                match choose_move(&self.board) {
                    None => {
                        self.board.pass();
                        (true, "pass".to_string())
                    }
                    Some(pt) => match self.board.play(pt, color) {
                        Ok(()) => (true, str_coord(pt)),
                        // The generators only emit simulated-legal moves
                        Err(e) => (false, e.to_string()),
                    },
                }
            }

            "policy_moves" => (true, policy_reply(&self.board)),

            "go_safe" => {
                if args.is_empty() {
                    return (false, GO_SAFE_USAGE.to_string());
                }
                match Color::from_token(args[0]) {
                    Ok(color) => {
                        let safe = self.solver.find_safety(&self.board, color);
                        (true, sorted_point_string(&safe))
                    }
                    Err(e) => (false, format!("Error: {e}")),
                }
            }

            "timelimit" => {
                if args.is_empty() {
                    return (false, TIMELIMIT_USAGE.to_string());
                }
                match args[0].parse::<u32>() {
                    Ok(secs) if (TIMELIMIT_MIN..=TIMELIMIT_MAX).contains(&secs) => {
                        self.timelimit = secs;
                        (true, String::new())
                    }
                    _ => (false, TIMELIMIT_USAGE.to_string()),
                }
            }

            "solve" => (true, self.solver.solve(&self.board, self.timelimit)),

            _ => (false, format!("unknown command: {command}")),
        }
    }
}
