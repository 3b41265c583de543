//! Common types for the game: coordinates, shot results and board errors.

use core::fmt;

/// Offsets of the 3x3 Moore neighborhood, the center included.
const NEIGHBORHOOD: [(i32, i32); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A cell position on the grid, zero-indexed.
///
/// Coordinates are never validated on construction; whether one lies on a
/// board is up to [`Board::is_out_of_bounds`](crate::Board::is_out_of_bounds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    row: i32,
    column: i32,
}

impl Coordinate {
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn column(&self) -> i32 {
        self.column
    }

    /// This coordinate shifted by the given row and column deltas.
    pub fn offset(&self, rows: i32, columns: i32) -> Self {
        Self::new(self.row + rows, self.column + columns)
    }

    /// The coordinate itself and its 8 neighbors. Some may be off the board.
    /// Neighbors past the edge of the `i32` range are skipped.
    pub fn neighborhood(self) -> impl Iterator<Item = Coordinate> {
        NEIGHBORHOOD.into_iter().filter_map(move |(dr, dc)| {
            Some(Self::new(
                self.row.checked_add(dr)?,
                self.column.checked_add(dc)?,
            ))
        })
    }
}

impl fmt::Display for Coordinate {
    /// Shown 1-indexed, the way players type them.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row + 1, self.column + 1)
    }
}

/// Result of a shot that the board accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// Shot hit no ship.
    Miss,
    /// Shot hit a ship that is still afloat.
    Hit,
    /// Shot destroyed the last healthy cell of a ship.
    Sunk,
}

impl ShotResult {
    /// Only a non-sinking hit lets the shooter fire again.
    pub fn keeps_turn(self) -> bool {
        matches!(self, ShotResult::Hit)
    }
}

/// Errors returned by board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Target lies outside the grid.
    OutOfBounds,
    /// Target was already shot at or lies in a sunk ship's sealed perimeter.
    AlreadyTargeted,
    /// Ship would leave the grid, overlap another ship or touch one.
    InvalidPlacement,
    /// Random placement gave up on the current board.
    PlacementCapExceeded { attempts: usize },
}

impl BoardError {
    /// Whether the acting player should simply choose another target.
    pub fn is_retryable_shot(&self) -> bool {
        matches!(self, BoardError::OutOfBounds | BoardError::AlreadyTargeted)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds => write!(f, "Coordinates are outside the board"),
            BoardError::AlreadyTargeted => write!(f, "This cell has already been targeted"),
            BoardError::InvalidPlacement => write!(f, "Ship cannot be placed there"),
            BoardError::PlacementCapExceeded { attempts } => {
                write!(f, "Gave up placing the fleet after {} attempts", attempts)
            }
        }
    }
}

impl core::error::Error for BoardError {}
