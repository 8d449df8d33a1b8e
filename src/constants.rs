//! Constants for board dimensions and engine parameters.
//!
//! The board uses a 1D array representation with padding for boundary
//! detection.
//!
//! # Board Size Configuration
//!
//! The board size is controlled by Cargo features:
//! - `board9x9` (default): 9x9 board
//! - `board13x13`: 13x13 board
//!
//! To compile for a specific board size:
//! ```sh
//! cargo build                           # 9x9 (default)
//! cargo build --no-default-features --features board13x13  # 13x13
//! ```

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN). Standard Go sizes are 9, 13, or 19.
#[cfg(feature = "board9x9")]
pub const N: usize = 9;

#[cfg(feature = "board13x13")]
pub const N: usize = 13;

// Compile-time check: exactly one board size feature must be enabled
#[cfg(all(feature = "board9x9", feature = "board13x13"))]
compile_error!("Cannot enable both 'board9x9' and 'board13x13' features at the same time");

#[cfg(not(any(feature = "board9x9", feature = "board13x13")))]
compile_error!("Must enable exactly one board size feature: 'board9x9' or 'board13x13'");

/// Board width including left padding (N + 2 for padding on both sides).
pub const W: usize = N + 2;

/// Total board array size including all padding.
pub const BOARDSIZE: usize = (N + 1) * W + 1;

/// First valid board index (skips top and left padding).
pub const BOARD_IMIN: usize = N + 1;

/// Last valid board index (before bottom padding).
pub const BOARD_IMAX: usize = BOARDSIZE - N - 1;

/// Move-count ceiling after which the solver scores a position as-is.
pub const MAX_GAME_LEN: usize = N * N * 3;

// =============================================================================
// Time Budget (solve command)
// =============================================================================

/// Smallest accepted time budget, in seconds.
pub const TIMELIMIT_MIN: u32 = 1;

/// Largest accepted time budget, in seconds.
pub const TIMELIMIT_MAX: u32 = 100;

/// Session default time budget.
pub const TIMELIMIT_DEFAULT: u32 = 1;

// =============================================================================
// Neighbor Offsets
// =============================================================================

/// Offsets to neighboring points in the 1D board array.
/// Order: North, East, South, West, NE, SE, SW, NW
pub const DELTA: [isize; 8] = [
    -(N as isize) - 1, // North (up one row)
    1,                 // East (right one column)
    (N as isize) + 1,  // South (down one row)
    -1,                // West (left one column)
    -(N as isize),     // NE (diagonal)
    W as isize,        // SE (diagonal)
    N as isize,        // SW (diagonal)
    -(W as isize),     // NW (diagonal)
];

// =============================================================================
// Point Contents (as bytes for direct comparison)
// =============================================================================

/// Black stone.
pub const BLACK_STONE: u8 = b'X';

/// White stone.
pub const WHITE_STONE: u8 = b'O';

/// Empty point.
pub const EMPTY: u8 = b'.';

/// Out of bounds (padding).
pub const BORDER: u8 = b' ';
