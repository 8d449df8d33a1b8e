//! Sente: a tactical Go engine with a GTP front end.
//!
//! Before any heuristic move generation, the engine looks for a forced
//! one-ply reply to the opponent's last move: capturing a group left in
//! atari, or rescuing an own group left in atari. Only when neither is
//! found does move selection fall through to pattern and random policy
//! moves.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions and engine parameters
//! - [`board`] - Board state, moves, captures, liberty queries
//! - [`util`] - Move filtering and deterministic point formatting
//! - [`tactics`] - Atari capture/defense detection and the move router
//! - [`policy`] - Pattern and random policy move generation
//! - [`patterns`] - 3x3 tactical pattern matching
//! - [`solver`] - Win/loss solving and safety classification
//! - [`gtp`] - Go Text Protocol front end
//!
//! ## Example
//!
//! ```
//! use sente::board::{parse_coord, Board, Color};
//! use sente::tactics::{atari_capture, policy_reply};
//!
//! let mut board = Board::new();
//! for (mv, color) in [
//!     ("D4", Color::Black),
//!     ("F4", Color::Black),
//!     ("E3", Color::Black),
//!     ("E4", Color::White),
//! ] {
//!     board.play(parse_coord(mv).unwrap(), color).unwrap();
//! }
//!
//! // White's stone at E4 is in atari; Black is forced to take it.
//! assert_eq!(atari_capture(&board), parse_coord("E5"));
//! assert_eq!(policy_reply(&board), "AtariCapture E5");
//! ```

pub mod board;
pub mod constants;
pub mod gtp;
pub mod patterns;
pub mod policy;
pub mod solver;
pub mod tactics;
pub mod util;
