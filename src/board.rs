//! Go board representation and move execution.
//!
//! This module provides the board state and the query surface the tactical
//! layer is built on:
//! - Stone placement with capture resolution, ko and suicide checking
//! - Flood-fill group traversal and liberty counting
//! - Eye detection
//! - Coordinate parsing and formatting
//!
//! The board is a 1D byte array with a one-cell border of padding, so
//! neighbor arithmetic never needs bounds checks. Unlike engines that swap
//! colors after every move, stones keep their color and the board tracks
//! `current_player` and `last_move` explicitly; the tactical detectors key
//! off both.
//!
//! `Board` is `Clone` with no shared state, so a hypothetical move can be
//! tried on a throwaway copy and the copy dropped, leaving the live board
//! untouched.

use std::fmt;

use crate::constants::*;

/// A point on the board, represented as an index into the 1D board array.
pub type Point = usize;

/// A stone color. Also identifies the player owning that color.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The other color.
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// The byte this color's stones are stored as on the board.
    pub fn stone(self) -> u8 {
        match self {
            Color::Black => BLACK_STONE,
            Color::White => WHITE_STONE,
        }
    }

    /// Parse a GTP color token (case-insensitive `b`, `black`, `w`, `white`).
    pub fn from_token(s: &str) -> Result<Color, InvalidColor> {
        match s.to_ascii_lowercase().as_str() {
            "b" | "black" => Ok(Color::Black),
            "w" | "white" => Ok(Color::White),
            _ => Err(InvalidColor(s.to_string())),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "b"),
            Color::White => write!(f, "w"),
        }
    }
}

/// Error for a token that names no color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidColor(pub String);

impl fmt::Display for InvalidColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown color '{}', expected b or w", self.0)
    }
}

impl std::error::Error for InvalidColor {}

/// Result of attempting to play an illegal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Point is not empty
    Occupied,
    /// Move violates ko rule
    Ko,
    /// Move would be suicide (no liberties after capture resolution)
    Suicide,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::Occupied => write!(f, "illegal move: point not empty"),
            MoveError::Ko => write!(f, "illegal move: retakes ko"),
            MoveError::Suicide => write!(f, "illegal move: suicide"),
        }
    }
}

impl std::error::Error for MoveError {}

/// A Go board.
///
/// Playable points hold [`BLACK_STONE`], [`WHITE_STONE`] or [`EMPTY`];
/// the padding ring holds [`BORDER`].
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    /// Point contents, including the padding ring.
    pub color: [u8; BOARDSIZE],
    /// The color to move.
    pub current_player: Color,
    /// The most recent successful stone placement. `None` at game start
    /// and after a pass.
    pub last_move: Option<Point>,
    /// Point forbidden by the ko rule, if any.
    pub ko: Option<Point>,
    /// Move number (0 = start of game).
    pub n: usize,
    /// Komi (compensation points for White).
    pub komi: f32,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board with Black to move.
    pub fn new() -> Self {
        let mut board = Board {
            color: [BORDER; BOARDSIZE],
            current_player: Color::Black,
            last_move: None,
            ko: None,
            n: 0,
            komi: 7.5,
        };
        board.clear();
        board
    }

    /// Reset to the empty starting position. Komi is kept.
    pub fn clear(&mut self) {
        self.color = [BORDER; BOARDSIZE];
        for row in 1..=N {
            for col in 1..=N {
                self.color[row * (N + 1) + col] = EMPTY;
            }
        }
        self.current_player = Color::Black;
        self.last_move = None;
        self.ko = None;
        self.n = 0;
    }

    /// Play a stone of `color` at `pt`.
    ///
    /// Resolves captures, enforces the ko and suicide rules, and on success
    /// records `pt` as `last_move` and hands the turn to the opponent.
    /// On failure the board is left exactly as it was.
    pub fn play(&mut self, pt: Point, color: Color) -> Result<(), MoveError> {
        if self.color[pt] != EMPTY {
            return Err(MoveError::Occupied);
        }
        if self.ko == Some(pt) {
            return Err(MoveError::Ko);
        }

        // A single-stone capture inside an eye creates a ko.
        let in_eye = self.eyeish_color(pt).is_some();

        self.color[pt] = color.stone();
        let opp_stone = color.opponent().stone();
        let mut captured = 0;
        let mut capture_point = 0;

        for np in neighbors(pt) {
            if self.color[np] == opp_stone && self.liberty_points(np).is_empty() {
                let group = self.group_points(np);
                captured += group.len();
                capture_point = np;
                for &g in &group {
                    self.color[g] = EMPTY;
                }
            }
        }

        if captured > 0 {
            self.ko = if captured == 1 && in_eye {
                Some(capture_point)
            } else {
                None
            };
        } else {
            if self.liberty_points(pt).is_empty() {
                self.color[pt] = EMPTY;
                return Err(MoveError::Suicide);
            }
            self.ko = None;
        }

        self.n += 1;
        self.last_move = Some(pt);
        self.current_player = color.opponent();
        Ok(())
    }

    /// The current player passes: the turn flips and `last_move` clears.
    pub fn pass(&mut self) {
        self.n += 1;
        self.last_move = None;
        self.ko = None;
        self.current_player = self.current_player.opponent();
    }

    /// All stones in the group containing `pt`, or empty if `pt` holds no
    /// stone.
    pub fn group_points(&self, pt: Point) -> Vec<Point> {
        let color = self.color[pt];
        if color != BLACK_STONE && color != WHITE_STONE {
            return Vec::new();
        }
        let mut group = Vec::new();
        let mut stack = vec![pt];
        let mut visited = [false; BOARDSIZE];
        while let Some(p) = stack.pop() {
            if visited[p] {
                continue;
            }
            visited[p] = true;
            group.push(p);
            for np in neighbors(p) {
                if !visited[np] && self.color[np] == color {
                    stack.push(np);
                }
            }
        }
        group
    }

    /// Distinct liberties of the group containing `pt`, or empty if `pt`
    /// holds no stone.
    pub fn liberty_points(&self, pt: Point) -> Vec<Point> {
        let color = self.color[pt];
        if color != BLACK_STONE && color != WHITE_STONE {
            return Vec::new();
        }
        let mut libs = Vec::new();
        let mut stack = vec![pt];
        let mut visited = [false; BOARDSIZE];
        let mut lib_seen = [false; BOARDSIZE];
        while let Some(p) = stack.pop() {
            if visited[p] {
                continue;
            }
            visited[p] = true;
            for np in neighbors(p) {
                match self.color[np] {
                    EMPTY => {
                        if !lib_seen[np] {
                            lib_seen[np] = true;
                            libs.push(np);
                        }
                    }
                    c if c == color && !visited[np] => stack.push(np),
                    _ => {}
                }
            }
        }
        libs
    }

    /// Liberty count of the group of `color` containing `pt`.
    ///
    /// Returns 0 when `pt` does not hold a stone of `color`.
    pub fn liberty_count(&self, pt: Point, color: Color) -> usize {
        if self.color[pt] != color.stone() {
            return 0;
        }
        self.liberty_points(pt).len()
    }

    /// The sole liberty of the group of `color` containing `pt`.
    ///
    /// Defined only when the group is in atari; `None` otherwise.
    pub fn single_liberty(&self, pt: Point, color: Color) -> Option<Point> {
        if self.color[pt] != color.stone() {
            return None;
        }
        match self.liberty_points(pt).as_slice() {
            &[lib] => Some(lib),
            _ => None,
        }
    }

    /// Every point holding a stone of `color`.
    pub fn stones_of(&self, color: Color) -> Vec<Point> {
        let stone = color.stone();
        (BOARD_IMIN..BOARD_IMAX)
            .filter(|&pt| self.color[pt] == stone)
            .collect()
    }

    /// The color surrounding `pt` if every orthogonal neighbor is that
    /// color or border. May report false eyes.
    pub fn eyeish_color(&self, pt: Point) -> Option<Color> {
        let mut owner: Option<Color> = None;
        for np in neighbors(pt) {
            match self.color[np] {
                BORDER => continue,
                EMPTY => return None,
                c => {
                    let nc = if c == BLACK_STONE {
                        Color::Black
                    } else {
                        Color::White
                    };
                    match owner {
                        None => owner = Some(nc),
                        Some(o) if o != nc => return None,
                        _ => {}
                    }
                }
            }
        }
        owner
    }

    /// The color owning a true eye at `pt`, if any.
    ///
    /// An eyeish point is a true eye when at most one diagonal holds an
    /// opponent stone at the edge, and none in the center.
    pub fn eye_color(&self, pt: Point) -> Option<Color> {
        let owner = self.eyeish_color(pt)?;
        let enemy = owner.opponent().stone();
        let mut at_edge = false;
        let mut false_count = 0;
        for dp in diagonal_neighbors(pt) {
            if self.color[dp] == BORDER {
                at_edge = true;
            } else if self.color[dp] == enemy {
                false_count += 1;
            }
        }
        let tolerance = if at_edge { 1 } else { 0 };
        (false_count <= tolerance).then_some(owner)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 1..=N {
            write!(f, "{:2} ", N + 1 - row)?;
            for col in 1..=N {
                let c = self.color[row * (N + 1) + col] as char;
                write!(f, "{c} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "   ")?;
        for col in 1..=N {
            let mut c = (b'@' + col as u8) as char;
            if c >= 'I' {
                c = (c as u8 + 1) as char;
            }
            write!(f, "{c} ")?;
        }
        writeln!(f)
    }
}

/// Get the 4 orthogonal neighbors (N, E, S, W) of a point.
#[inline]
fn neighbors(pt: Point) -> [Point; 4] {
    std::array::from_fn(|i| (pt as isize + DELTA[i]) as usize)
}

/// Get the 4 diagonal neighbors (NE, SE, SW, NW) of a point.
#[inline]
fn diagonal_neighbors(pt: Point) -> [Point; 4] {
    std::array::from_fn(|i| (pt as isize + DELTA[i + 4]) as usize)
}

/// Get all 8 neighbors (4 orthogonal + 4 diagonal) of a point.
#[inline]
pub fn all_neighbors(pt: Point) -> [Point; 8] {
    std::array::from_fn(|i| (pt as isize + DELTA[i]) as usize)
}

/// Parse a coordinate string (e.g., "D4") into a Point.
///
/// Go coordinates use letters A-T (skipping I) for columns and 1-19 for
/// rows. Returns `None` for "pass" and for anything off the board.
pub fn parse_coord(s: &str) -> Option<Point> {
    if s.eq_ignore_ascii_case("pass") {
        return None;
    }
    let bytes = s.as_bytes();
    if bytes.len() < 2 || !bytes[0].is_ascii_alphabetic() {
        return None;
    }

    let col_char = bytes[0].to_ascii_uppercase();
    let mut col = (col_char - b'A' + 1) as usize;

    // Skip 'I' column (Go convention to avoid confusion with 'J')
    if col_char > b'I' {
        col -= 1;
    }

    let row: usize = s[1..].parse().ok()?;
    if !(1..=N).contains(&col) || !(1..=N).contains(&row) {
        return None;
    }
    Some((N - row + 1) * (N + 1) + col)
}

/// Convert a Point to 1-based display coordinates (column, row).
pub fn point_to_coord(pt: Point) -> (usize, usize) {
    (pt % (N + 1), N + 1 - pt / (N + 1))
}

/// Convert a Point to a coordinate string (e.g., "D4").
pub fn str_coord(pt: Point) -> String {
    let (col, row) = point_to_coord(pt);

    // Convert column to letter, skipping 'I'
    let mut c = (b'@' + col as u8) as char;
    if c >= 'I' {
        c = (c as u8 + 1) as char;
    }

    format!("{c}{row}")
}
