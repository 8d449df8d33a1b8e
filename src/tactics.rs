//! One-ply tactical move detection.
//!
//! Before any heuristic move generation runs, two detectors look for a
//! forced reply to the last move:
//!
//! - [`atari_capture`]: the opponent group just touched by the last move
//!   has a single liberty, and taking it is a legal, non-self-atari
//!   capture.
//! - [`atari_defense`]: an own group sits at a single liberty, and filling
//!   that liberty keeps it alive with room to spare.
//!
//! [`policy_reply`] is the entry point that strings these together with
//! the policy generator, establishing the strict priority
//! capture > defense > policy > pass. Each detector simulates its
//! hypothetical move on a throwaway clone of the board only; the live
//! board is never touched.

use crate::board::{Board, Point};
use crate::policy::generate_policy_moves;
use crate::util::{filter_moves, is_self_atari, sorted_point_string};

/// Detect a forced capture of the opponent group extended by the last
/// move.
///
/// Returns the capturing point when the group is in atari and taking its
/// liberty is legal and not a self-atari (a snapback is no capture worth
/// forcing). `None` when there is no last move or no sound capture.
pub fn atari_capture(board: &Board) -> Option<Point> {
    let last = board.last_move?;
    let player = board.current_player;
    let opp = player.opponent();

    if board.liberty_count(last, opp) != 1 {
        return None;
    }
    let cap = board.single_liberty(last, opp)?;
    if is_self_atari(board, cap, player) {
        return None;
    }

    let mut probe = board.clone();
    probe.play(cap, player).ok()?;
    Some(cap)
}

/// Detect forced rescues of own groups in atari.
///
/// Every stone of the player to move is visited; a group surfaces once
/// per member stone and the duplicates are dropped by the final filter.
/// A candidate survives only if playing it is legal and leaves the
/// rescued group with strictly more than one liberty, so a move that
/// merely relocates the atari never preempts policy search.
///
/// Returns the surviving liberty points in ascending board-index order,
/// empty when nothing is forced.
pub fn atari_defense(board: &Board) -> Vec<Point> {
    if board.last_move.is_none() {
        return Vec::new();
    }
    let player = board.current_player;
    let mut moves = Vec::new();

    for stone in board.stones_of(player) {
        if board.liberty_count(stone, player) != 1 {
            continue;
        }
        let Some(defense) = board.single_liberty(stone, player) else {
            continue;
        };
        let mut probe = board.clone();
        if probe.play(defense, player).is_ok() && probe.liberty_count(defense, player) > 1 {
            moves.push(defense);
        }
    }

    filter_moves(board, &moves, player)
}

/// Produce the move-generation response for the current position.
///
/// Priority order: forced capture, then forced defense, then policy
/// moves, then `Pass`. Whichever tier fires first owns the response;
/// multi-point responses are rendered in the deterministic order of
/// [`sorted_point_string`].
pub fn policy_reply(board: &Board) -> String {
    if board.last_move.is_some() {
        if let Some(cap) = atari_capture(board) {
            return format!("AtariCapture {}", sorted_point_string(&[cap]));
        }
        let defense = atari_defense(board);
        if !defense.is_empty() {
            return format!("AtariDefense {}", sorted_point_string(&defense));
        }
    }
    let (moves, kind) = generate_policy_moves(board);
    if moves.is_empty() {
        "Pass".to_string()
    } else {
        format!("{kind} {}", sorted_point_string(&moves))
    }
}

/// Pick one move to actually play, honoring the tactical priority.
///
/// `None` means pass. Within a tier the choice is random; across tiers
/// the ordering matches [`policy_reply`].
pub fn choose_move(board: &Board) -> Option<Point> {
    if board.last_move.is_some() {
        if let Some(cap) = atari_capture(board) {
            return Some(cap);
        }
        let defense = atari_defense(board);
        if !defense.is_empty() {
            return Some(defense[fastrand::usize(..defense.len())]);
        }
    }
    let (moves, _) = generate_policy_moves(board);
    if moves.is_empty() {
        None
    } else {
        Some(moves[fastrand::usize(..moves.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{parse_coord, Color};

    fn pt(s: &str) -> Point {
        parse_coord(s).unwrap()
    }

    #[test]
    fn test_detectors_quiet_at_game_start() {
        let board = Board::new();
        assert_eq!(atari_capture(&board), None);
        assert!(atari_defense(&board).is_empty());
        // The router falls through to the policy tier
        assert!(policy_reply(&board).starts_with("Random"));
    }

    #[test]
    fn test_detectors_quiet_after_pass() {
        let mut board = Board::new();
        board.play(pt("D4"), Color::Black).unwrap();
        board.pass();
        assert_eq!(board.last_move, None);
        assert_eq!(atari_capture(&board), None);
        assert!(atari_defense(&board).is_empty());
    }

    #[test]
    fn test_capture_requires_single_liberty() {
        let mut board = Board::new();
        board.play(pt("D4"), Color::Black).unwrap();
        board.play(pt("E4"), Color::White).unwrap();
        // White's stone has three liberties left
        assert_eq!(atari_capture(&board), None);
    }

    #[test]
    fn test_choose_move_prefers_capture() {
        let mut board = Board::new();
        for p in ["D4", "F4", "E3"] {
            board.play(pt(p), Color::Black).unwrap();
        }
        board.play(pt("E4"), Color::White).unwrap();
        assert_eq!(choose_move(&board), Some(pt("E5")));
    }

    #[test]
    fn test_choose_move_passes_when_nothing_remains() {
        let mut board = Board::new();
        // Leave no empty point that is not Black's own eye
        for row in 1..=crate::constants::N {
            for col in 1..=crate::constants::N {
                let p = row * (crate::constants::N + 1) + col;
                // Keep A1 open as a Black eye
                if p == pt("A1") {
                    continue;
                }
                board.color[p] = Color::Black.stone();
            }
        }
        board.current_player = Color::Black;
        board.last_move = None;
        assert_eq!(choose_move(&board), None);
        assert_eq!(policy_reply(&board), "Pass");
    }
}
