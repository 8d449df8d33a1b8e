//! 3x3 tactical pattern matching for the policy generator.
//!
//! The pattern source is the classic michi 3x3 set: hane, cut, and side
//! shapes around a candidate point. At first use the source patterns are
//! expanded under rotation, reflection, color swap, and wildcards into a
//! set of 16-bit neighborhood codes; matching a point is then a single
//! set lookup on the code of its 8 neighbors.
//!
//! Pattern characters:
//! - `X`: player to move
//! - `O`: opponent
//! - `.`: empty
//! - `x`: not X (O, `.`, or `#`)
//! - `o`: not O (X, `.`, or `#`)
//! - `?`: anything
//! - `#`: edge of board

use std::collections::HashSet;
use std::sync::OnceLock;

use crate::board::{all_neighbors, Board, Point};
use crate::constants::EMPTY;

/// The 3x3 pattern source definitions, written as 9-character grids
/// (rows top to bottom, center = the candidate point).
const PAT3_SRC: &[&str] = &[
    // hane pattern - enclosing hane
    "XOX...???",
    // hane pattern - non-cutting hane
    "XO....?.?",
    // hane pattern - magari
    "XO?X..x.?",
    // generic pattern - katatsuke or diagonal attachment
    ".O.X.....",
    // cut1 pattern (kiri) - unprotected cut
    "XO?O.o?o?",
    // cut1 pattern (kiri) - peeped cut
    "XO?O.X???",
    // cut2 pattern (de)
    "?X?O.Oooo",
    // cut keima
    "OX?o.O???",
    // side pattern - chase
    "X.?O.?##?",
    // side pattern - block side cut
    "OX?X.O###",
    // side pattern - block side connection
    "?X?x.O###",
    // side pattern - sagari
    "?XOx.x###",
    // side pattern - cut
    "?OXX.O###",
];

/// Neighbor class codes packed into the lookup key, 2 bits each.
const OPPONENT: u16 = 0;
const OWN: u16 = 1;
const VACANT: u16 = 2;
const EDGE: u16 = 3;

/// Grid cell index and key slot for each of the 8 neighbors,
/// in [`crate::constants::DELTA`] order (N, E, S, W, NE, SE, SW, NW).
const CELL_SLOT: [(usize, usize); 8] = [
    (1, 0),
    (5, 1),
    (7, 2),
    (3, 3),
    (2, 4),
    (8, 5),
    (6, 6),
    (0, 7),
];

static PAT3SET: OnceLock<HashSet<u16>> = OnceLock::new();

/// Check whether the 3x3 neighborhood of `pt` matches any pattern,
/// seen from the player to move.
pub fn pat3_match(board: &Board, pt: Point) -> bool {
    let set = PAT3SET.get_or_init(build_pat3set);
    set.contains(&neighborhood_code(board, pt))
}

/// Encode the 8 neighbors of `pt` relative to the player to move.
fn neighborhood_code(board: &Board, pt: Point) -> u16 {
    let own = board.current_player.stone();
    let opp = board.current_player.opponent().stone();
    let mut code = 0u16;
    for (slot, np) in all_neighbors(pt).into_iter().enumerate() {
        let class = match board.color[np] {
            c if c == own => OWN,
            c if c == opp => OPPONENT,
            EMPTY => VACANT,
            _ => EDGE,
        };
        code |= class << (2 * slot);
    }
    code
}

/// Expand every source pattern under the full symmetry group.
fn build_pat3set() -> HashSet<u16> {
    let mut set = HashSet::new();
    for src in PAT3_SRC {
        let mut grid: [u8; 9] = src.as_bytes().try_into().unwrap();
        for _ in 0..4 {
            for variant in [grid, mirror(grid)] {
                expand_wildcards(&variant, 0, 0, &mut set);
                expand_wildcards(&swap_colors(variant), 0, 0, &mut set);
            }
            grid = rot90(grid);
        }
    }
    set
}

/// Recursively expand wildcard cells, inserting one code per concrete
/// assignment of the 8 neighbor cells.
fn expand_wildcards(grid: &[u8; 9], k: usize, acc: u16, set: &mut HashSet<u16>) {
    if k == 8 {
        set.insert(acc);
        return;
    }
    let (cell, slot) = CELL_SLOT[k];
    let classes: &[u16] = match grid[cell] {
        b'X' => &[OWN],
        b'O' => &[OPPONENT],
        b'.' => &[VACANT],
        b'#' => &[EDGE],
        b'x' => &[OPPONENT, VACANT, EDGE],
        b'o' => &[OWN, VACANT, EDGE],
        _ => &[OPPONENT, OWN, VACANT, EDGE],
    };
    for &class in classes {
        expand_wildcards(grid, k + 1, acc | (class << (2 * slot)), set);
    }
}

/// Rotate a 3x3 grid 90 degrees clockwise.
fn rot90(grid: [u8; 9]) -> [u8; 9] {
    std::array::from_fn(|i| {
        let (row, col) = (i / 3, i % 3);
        grid[(2 - col) * 3 + row]
    })
}

/// Mirror a 3x3 grid horizontally.
fn mirror(grid: [u8; 9]) -> [u8; 9] {
    std::array::from_fn(|i| {
        let (row, col) = (i / 3, i % 3);
        grid[row * 3 + (2 - col)]
    })
}

/// Swap X and O (and their wildcards) in a pattern.
fn swap_colors(grid: [u8; 9]) -> [u8; 9] {
    grid.map(|c| match c {
        b'X' => b'O',
        b'O' => b'X',
        b'x' => b'o',
        b'o' => b'x',
        other => other,
    })
}
