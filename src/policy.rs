//! Heuristic policy move generation.
//!
//! This is the fallback tier of move selection, consulted only when the
//! tactical detectors in [`crate::tactics`] find nothing forced. Pattern
//! moves in the 3x3 neighborhood of the last move come first; if none
//! match, every reasonable move on the board is offered. Both tiers are
//! filtered for legality and self-atari and returned in the deterministic
//! order of [`crate::util::filter_moves`].

use std::fmt;

use crate::board::{all_neighbors, Board, Point};
use crate::constants::{BOARD_IMAX, BOARD_IMIN, EMPTY};
use crate::patterns::pat3_match;
use crate::util::filter_moves;

/// The tag a move-generation response carries.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveKind {
    /// Forced capture of an opponent group in atari.
    AtariCapture,
    /// Forced rescue of an own group in atari.
    AtariDefense,
    /// A 3x3 pattern matched near the last move.
    Pattern,
    /// Any reasonable move; no heuristic preferred one.
    Random,
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveKind::AtariCapture => write!(f, "AtariCapture"),
            MoveKind::AtariDefense => write!(f, "AtariDefense"),
            MoveKind::Pattern => write!(f, "Pattern"),
            MoveKind::Random => write!(f, "Random"),
        }
    }
}

/// Generate all policy move candidates for the player to move.
///
/// Returns the candidate list (possibly empty) and its tag.
pub fn generate_policy_moves(board: &Board) -> (Vec<Point>, MoveKind) {
    if let Some(last) = board.last_move {
        let pattern = pattern_moves(board, last);
        if !pattern.is_empty() {
            return (pattern, MoveKind::Pattern);
        }
    }
    (random_moves(board), MoveKind::Random)
}

/// Empty points around the last move whose neighborhood matches a
/// tactical pattern.
fn pattern_moves(board: &Board, last: Point) -> Vec<Point> {
    let candidates: Vec<Point> = all_neighbors(last)
        .into_iter()
        .filter(|&np| board.color[np] == EMPTY && pat3_match(board, np))
        .collect();
    filter_moves(board, &candidates, board.current_player)
}

/// Every legal move that does not fill the mover's own true eye.
fn random_moves(board: &Board) -> Vec<Point> {
    let player = board.current_player;
    let candidates: Vec<Point> = (BOARD_IMIN..BOARD_IMAX)
        .filter(|&pt| board.color[pt] == EMPTY && board.eye_color(pt) != Some(player))
        .collect();
    filter_moves(board, &candidates, player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{parse_coord, Color};
    use crate::constants::N;

    fn pt(s: &str) -> Point {
        parse_coord(s).unwrap()
    }

    #[test]
    fn test_move_kind_tags() {
        assert_eq!(MoveKind::AtariCapture.to_string(), "AtariCapture");
        assert_eq!(MoveKind::AtariDefense.to_string(), "AtariDefense");
        assert_eq!(MoveKind::Pattern.to_string(), "Pattern");
        assert_eq!(MoveKind::Random.to_string(), "Random");
    }

    #[test]
    fn test_random_moves_on_empty_board() {
        let board = Board::new();
        let (moves, kind) = generate_policy_moves(&board);
        assert_eq!(kind, MoveKind::Random);
        assert_eq!(moves.len(), N * N);
    }

    #[test]
    fn test_pattern_moves_near_last_move() {
        // Black C5 then White D6: the katatsuke shape puts D5 on the
        // pattern tier for Black.
        let mut board = Board::new();
        board.play(pt("C5"), Color::Black).unwrap();
        board.play(pt("D6"), Color::White).unwrap();
        let (moves, kind) = generate_policy_moves(&board);
        assert_eq!(kind, MoveKind::Pattern);
        assert!(moves.contains(&pt("D5")));
        // Pattern candidates stay within the last move's neighborhood
        for &m in &moves {
            assert!(all_neighbors(pt("D6")).contains(&m));
        }
    }

    #[test]
    fn test_random_excludes_own_true_eye() {
        let mut board = Board::new();
        for p in ["A2", "B1", "B2"] {
            board.play(pt(p), Color::Black).unwrap();
        }
        // White's turn after three Black placements; hand it back to Black
        board.current_player = Color::Black;
        board.last_move = None;
        let (moves, kind) = generate_policy_moves(&board);
        assert_eq!(kind, MoveKind::Random);
        assert!(!moves.contains(&pt("A1")));
    }
}
