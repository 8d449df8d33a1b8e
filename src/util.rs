//! Move filtering and formatting helpers.
//!
//! The tactical detectors and the policy generator both produce raw
//! candidate lists; everything here is about turning those into clean,
//! deterministic output: legality and self-atari filtering, deduplication,
//! and the single total order (ascending board index) used whenever a
//! response contains more than one point.

use crate::board::{str_coord, Board, Color, Point};

/// Whether playing `pt` as `color` would leave the played stone's group
/// with exactly one liberty.
///
/// Tried on a throwaway copy of the board. An illegal move is not
/// self-atari; legality is filtered separately.
pub fn is_self_atari(board: &Board, pt: Point, color: Color) -> bool {
    let mut probe = board.clone();
    match probe.play(pt, color) {
        Ok(()) => probe.liberty_count(pt, color) == 1,
        Err(_) => false,
    }
}

/// Filter a raw candidate list down to legal, non-self-atari moves.
///
/// Duplicates are dropped and the result is in ascending board-index
/// order, so repeated runs over the same position render identically.
pub fn filter_moves(board: &Board, moves: &[Point], color: Color) -> Vec<Point> {
    let mut keep = Vec::with_capacity(moves.len());
    for &pt in moves {
        let mut probe = board.clone();
        if probe.play(pt, color).is_err() {
            continue;
        }
        if probe.liberty_count(pt, color) == 1 {
            continue;
        }
        keep.push(pt);
    }
    keep.sort_unstable();
    keep.dedup();
    keep
}

/// Render points as a space-separated coordinate list in ascending
/// board-index order.
pub fn sorted_point_string(points: &[Point]) -> String {
    let mut pts = points.to_vec();
    pts.sort_unstable();
    pts.iter()
        .map(|&p| str_coord(p))
        .collect::<Vec<_>>()
        .join(" ")
}
