//! Board geometry: coordinates, bounds and move legality.
//!
//! The board is a fixed 7x7 grid, cells `(0, 0)` through `(6, 6)`.
//! A legal move is exactly one orthogonal step that stays on the board.

use serde::{Deserialize, Serialize};

/// Width and height of the board.
pub const BOARD_SIZE: i32 = 7;

/// A cell reference on the board.
///
/// Coordinates are plain values and may point off the board (for example a
/// requested destination); use [`Coordinate::is_on_board`] to check.
/// Serialized as `[x, y]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Check if this cell lies on the board.
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.x >= 0 && self.x < BOARD_SIZE && self.y >= 0 && self.y < BOARD_SIZE
    }

    /// Per-axis absolute distance to another cell.
    #[must_use]
    pub const fn distance(self, other: Coordinate) -> (u32, u32) {
        (self.x.abs_diff(other.x), self.y.abs_diff(other.y))
    }
}

impl From<[i32; 2]> for Coordinate {
    fn from([x, y]: [i32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Coordinate> for [i32; 2] {
    fn from(c: Coordinate) -> Self {
        [c.x, c.y]
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Check whether moving from `current` to `requested` is legal.
///
/// Legal iff `requested` is on the board and exactly one orthogonal step
/// away. Staying put, diagonals and jumps are all illegal.
///
/// ```
/// use grid_duel::core::{is_legal_move, Coordinate};
///
/// let origin = Coordinate::new(0, 0);
/// assert!(is_legal_move(origin, Coordinate::new(0, 1)));
/// assert!(!is_legal_move(origin, Coordinate::new(1, 1)));
/// assert!(!is_legal_move(origin, Coordinate::new(-1, 0)));
/// ```
#[must_use]
pub const fn is_legal_move(current: Coordinate, requested: Coordinate) -> bool {
    if !requested.is_on_board() {
        return false;
    }
    matches!(current.distance(requested), (1, 0) | (0, 1))
}
