//! Integration tests for the tactical layer.
//!
//! Each test builds a position by playing explicit stones, so that
//! `last_move` and `current_player` end up exactly as they would in a
//! real game, then checks the detectors and the router against it.

use sente::board::{parse_coord, Board, Color};
use sente::tactics::{atari_capture, atari_defense, policy_reply};
use sente::util::sorted_point_string;

fn pt(s: &str) -> usize {
    parse_coord(s).unwrap()
}

/// Play a list of (coordinate, color) stones in order.
fn setup_position(moves: &[(&str, Color)]) -> Board {
    let mut board = Board::new();
    for &(mv, color) in moves {
        board
            .play(pt(mv), color)
            .unwrap_or_else(|e| panic!("setup move {mv} failed: {e}"));
    }
    board
}

use Color::{Black, White};

// =============================================================================
// Capture detection
// =============================================================================

#[test]
fn capture_of_group_in_atari() {
    // White just played E4 into a Black pincer; E5 is its last liberty.
    let board = setup_position(&[
        ("D4", Black),
        ("F4", Black),
        ("E3", Black),
        ("E4", White),
    ]);
    assert_eq!(board.current_player, Black);
    assert_eq!(board.last_move, Some(pt("E4")));

    // Soundness: the reported point is the group's sole liberty
    assert_eq!(board.liberty_count(pt("E4"), White), 1);
    assert_eq!(board.single_liberty(pt("E4"), White), Some(pt("E5")));
    assert_eq!(atari_capture(&board), Some(pt("E5")));
    assert_eq!(policy_reply(&board), "AtariCapture E5");
}

#[test]
fn capture_simulation_is_legal_on_a_copy() {
    let board = setup_position(&[
        ("D4", Black),
        ("F4", Black),
        ("E3", Black),
        ("E4", White),
    ]);
    let cap = atari_capture(&board).unwrap();
    let mut probe = board.clone();
    assert!(probe.play(cap, board.current_player).is_ok());
    // The live board still holds the doomed White stone
    assert_eq!(board.single_liberty(pt("E4"), White), Some(cap));
}

#[test]
fn no_capture_when_group_has_two_liberties() {
    let board = setup_position(&[("D4", Black), ("E3", Black), ("E4", White)]);
    assert_eq!(atari_capture(&board), None);
}

#[test]
fn snapback_capture_is_rejected_as_self_atari() {
    // White's D3 is in atari at E3, but a Black stone on E3 would sit in
    // a White pocket with the captured point as its only liberty.
    let board = setup_position(&[
        ("D4", Black),
        ("C3", Black),
        ("D2", Black),
        ("E4", White),
        ("F3", White),
        ("E2", White),
        ("D3", White),
    ]);
    assert_eq!(board.current_player, Black);
    assert_eq!(board.liberty_count(pt("D3"), White), 1);
    assert_eq!(atari_capture(&board), None);
}

// =============================================================================
// Defense detection
// =============================================================================

#[test]
fn defense_of_group_in_atari() {
    // Black C3 is down to one liberty after White's D3.
    let board = setup_position(&[
        ("C3", Black),
        ("B3", White),
        ("C2", White),
        ("D3", White),
    ]);
    assert_eq!(board.current_player, Black);
    assert_eq!(atari_capture(&board), None);
    assert_eq!(atari_defense(&board), vec![pt("C4")]);
    assert_eq!(policy_reply(&board), "AtariDefense C4");
}

#[test]
fn defense_requires_strict_liberty_gain() {
    // Black {A1,B1} has only C1 left, and C1 runs straight into another
    // atari at D1: no true escape, so nothing is forced.
    let board = setup_position(&[
        ("A1", Black),
        ("B1", Black),
        ("A2", White),
        ("B2", White),
        ("C2", White),
    ]);
    assert_eq!(board.current_player, Black);
    assert_eq!(board.liberty_count(pt("A1"), Black), 1);
    assert_eq!(atari_capture(&board), None);
    assert!(atari_defense(&board).is_empty());
    // The router falls through to the policy tier
    let reply = policy_reply(&board);
    assert!(
        !reply.starts_with("AtariDefense"),
        "snapback defense must not preempt policy: {reply}"
    );
}

#[test]
fn defense_deduplicates_multi_stone_group() {
    // Two-stone Black group, every member stone reports the same liberty.
    let board = setup_position(&[
        ("C3", Black),
        ("C4", Black),
        ("B3", White),
        ("C2", White),
        ("B4", White),
        ("D3", White),
        ("D4", White),
    ]);
    assert_eq!(board.current_player, Black);
    assert_eq!(board.liberty_count(pt("C3"), Black), 1);
    assert_eq!(atari_defense(&board), vec![pt("C5")]);
}

#[test]
fn defense_reports_all_groups_in_order() {
    // Two independent Black groups in atari, both with clean escapes.
    let board = setup_position(&[
        ("C3", Black),
        ("G3", Black),
        ("B3", White),
        ("C2", White),
        ("D3", White),
        ("F3", White),
        ("G2", White),
        ("H3", White),
    ]);
    assert_eq!(board.current_player, Black);
    let defense = atari_defense(&board);
    assert_eq!(defense, vec![pt("C4"), pt("G4")]);
    assert_eq!(policy_reply(&board), "AtariDefense C4 G4");
}

// =============================================================================
// Router priority and non-mutation
// =============================================================================

#[test]
fn capture_takes_priority_over_defense() {
    // Black C3 needs rescuing AND White E4 hangs in atari; the capture
    // must own the response.
    let board = setup_position(&[
        ("C3", Black),
        ("B3", White),
        ("C2", White),
        ("D3", White),
        ("D4", Black),
        ("F4", Black),
        ("E3", Black),
        ("E4", White),
    ]);
    assert_eq!(board.current_player, Black);
    assert_eq!(atari_capture(&board), Some(pt("E5")));
    assert!(!atari_defense(&board).is_empty());
    assert_eq!(policy_reply(&board), "AtariCapture E5");
}

#[test]
fn router_skips_detectors_without_last_move() {
    let board = Board::new();
    let reply = policy_reply(&board);
    assert!(reply.starts_with("Random"));
}

#[test]
fn detectors_never_mutate_the_live_board() {
    let board = setup_position(&[
        ("C3", Black),
        ("B3", White),
        ("C2", White),
        ("D3", White),
        ("D4", Black),
        ("F4", Black),
        ("E3", Black),
        ("E4", White),
    ]);
    let snapshot = board.clone();

    let first_cap = atari_capture(&board);
    let first_def = atari_defense(&board);
    let second_cap = atari_capture(&board);
    let second_def = atari_defense(&board);

    assert_eq!(first_cap, second_cap);
    assert_eq!(first_def, second_def);
    assert_eq!(board, snapshot);
}

#[test]
fn multi_point_response_is_deterministic() {
    let board = setup_position(&[
        ("C3", Black),
        ("G3", Black),
        ("B3", White),
        ("C2", White),
        ("D3", White),
        ("F3", White),
        ("G2", White),
        ("H3", White),
    ]);
    let first = policy_reply(&board);
    let second = policy_reply(&board);
    assert_eq!(first, second);
    assert_eq!(first, "AtariDefense C4 G4");

    // The formatting rule itself is order-insensitive
    let defense = atari_defense(&board);
    let mut reversed = defense.clone();
    reversed.reverse();
    assert_eq!(
        sorted_point_string(&defense),
        sorted_point_string(&reversed)
    );
}
