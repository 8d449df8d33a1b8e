//! Win/loss solving and safety classification.
//!
//! The GTP layer treats both queries as external services behind the
//! [`Solver`] trait, so the command surface can be exercised against a
//! mock. [`BasicSolver`] is the shipped baseline: a deadline-bounded
//! exhaustive search for `solve`, and a static two-eye classifier for
//! `find_safety`. Neither is consulted by the tactical detectors.

use std::time::{Duration, Instant};

use crate::board::{Board, Color, Point};
use crate::constants::{BOARD_IMAX, BOARD_IMIN, EMPTY, MAX_GAME_LEN};

/// External queries forwarded by the GTP layer.
pub trait Solver {
    /// Compute the winner of the position under perfect play, within
    /// `timelimit` seconds. The result string is emitted verbatim.
    fn solve(&self, board: &Board, timelimit: u32) -> String;

    /// Points belonging to groups of `color` classified as safe.
    fn find_safety(&self, board: &Board, color: Color) -> Vec<Point>;
}

/// Baseline solver implementation.
pub struct BasicSolver;

impl Solver for BasicSolver {
    /// Exhaustive negamax over non-eye-filling moves, cut off at the
    /// deadline. Returns `"b"` or `"w"` when solved, `"unknown"` when the
    /// budget runs out first.
    fn solve(&self, board: &Board, timelimit: u32) -> String {
        let deadline = Instant::now() + Duration::from_secs(u64::from(timelimit));
        match negamax(board, 0, deadline) {
            Some(value) => {
                let winner = if value > 0.0 {
                    board.current_player
                } else {
                    board.current_player.opponent()
                };
                winner.to_string()
            }
            None => "unknown".to_string(),
        }
    }

    /// A group is safe when at least two of its liberties are true eyes
    /// of its own color. This is a conservative static check, not a full
    /// unconditional-life proof; anything it reports cannot be captured
    /// without the owner's cooperation.
    fn find_safety(&self, board: &Board, color: Color) -> Vec<Point> {
        let stone = color.stone();
        let mut safe = Vec::new();
        let mut claimed = vec![false; board.color.len()];

        for pt in BOARD_IMIN..BOARD_IMAX {
            if claimed[pt] || board.color[pt] != stone {
                continue;
            }
            let group = board.group_points(pt);
            for &g in &group {
                claimed[g] = true;
            }
            let eyes = board
                .liberty_points(pt)
                .into_iter()
                .filter(|&lib| board.eye_color(lib) == Some(color))
                .count();
            if eyes >= 2 {
                safe.extend(group);
            }
        }

        safe.sort_unstable();
        safe
    }
}

/// Negamax value of the position for the player to move, or `None` if
/// the deadline passed. A game ends on two consecutive passes or at the
/// move-count ceiling, and is then scored by area.
fn negamax(board: &Board, passes: u32, deadline: Instant) -> Option<f64> {
    if Instant::now() >= deadline {
        return None;
    }
    if passes >= 2 || board.n >= MAX_GAME_LEN {
        return Some(score(board));
    }

    // Passing is always available
    let mut best = {
        let mut child = board.clone();
        child.pass();
        -negamax(&child, passes + 1, deadline)?
    };

    let player = board.current_player;
    for pt in BOARD_IMIN..BOARD_IMAX {
        if board.color[pt] != EMPTY || board.eye_color(pt) == Some(player) {
            continue;
        }
        let mut child = board.clone();
        if child.play(pt, player).is_err() {
            continue;
        }
        let value = -negamax(&child, 0, deadline)?;
        if value > best {
            best = value;
        }
    }
    Some(best)
}

/// Area score from the perspective of the player to move.
///
/// Stones count directly; an empty point surrounded by one color counts
/// for that color; komi counts for White.
fn score(board: &Board) -> f64 {
    let player = board.current_player;
    let mut s = match player {
        Color::White => f64::from(board.komi),
        Color::Black => -f64::from(board.komi),
    };

    for pt in BOARD_IMIN..BOARD_IMAX {
        let c = board.color[pt];
        let owner = if c == EMPTY {
            board.eyeish_color(pt)
        } else if c == Color::Black.stone() {
            Some(Color::Black)
        } else {
            Some(Color::White)
        };
        match owner {
            Some(o) if o == player => s += 1.0,
            Some(_) => s -= 1.0,
            None => {}
        }
    }
    s
}
