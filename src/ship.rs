//! Ships and their orientation on the board.

use core::fmt;
use rand::distr::{Distribution, StandardUniform};
use rand::Rng;

use crate::common::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends along the row, column increasing.
    Horizontal,
    /// Extends down the column, row increasing.
    Vertical,
}

impl Distribution<Orientation> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// A straight run of `length` cells anchored at `head`, tracking how many
/// of its cells are still intact.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    head: Coordinate,
    length: usize,
    orientation: Orientation,
    health: usize,
}

impl Ship {
    /// A fresh, undamaged ship. `length` should be positive; boards refuse
    /// to place an empty ship.
    pub fn new(head: Coordinate, length: usize, orientation: Orientation) -> Self {
        Ship {
            head,
            length,
            orientation,
            health: length,
        }
    }

    pub fn head(&self) -> Coordinate {
        self.head
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of cells not yet hit.
    pub fn health(&self) -> usize {
        self.health
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_destroyed(&self) -> bool {
        self.health == 0
    }

    /// The last cell of the ship. `None` when the ship is empty or reaches
    /// past the coordinate range.
    pub fn tail(&self) -> Option<Coordinate> {
        self.last_offset().map(|last| self.at(last))
    }

    /// Cells covered by the ship, starting at the head. A ship without a
    /// valid [`tail`](Ship::tail) covers nothing.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let ship = *self;
        let offsets = match self.last_offset() {
            Some(last) => 0..=last,
            None => 1..=0,
        };
        offsets.map(move |i| ship.at(i))
    }

    /// Whether a shot at `coord` lands on this ship.
    pub fn is_hit_by(&self, coord: Coordinate) -> bool {
        self.cells().any(|cell| cell == coord)
    }

    fn last_offset(&self) -> Option<i32> {
        let last = i32::try_from(self.length.checked_sub(1)?).ok()?;
        let start = match self.orientation {
            Orientation::Horizontal => self.head.column(),
            Orientation::Vertical => self.head.row(),
        };
        start.checked_add(last)?;
        Some(last)
    }

    fn at(&self, offset: i32) -> Coordinate {
        match self.orientation {
            Orientation::Horizontal => self.head.offset(0, offset),
            Orientation::Vertical => self.head.offset(offset, 0),
        }
    }

    pub(crate) fn take_hit(&mut self) {
        self.health = self.health.saturating_sub(1);
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ head: ({}, {}), length: {}, orientation: {:?}, health: {} }}",
            self.head.row(),
            self.head.column(),
            self.length,
            self.orientation,
            self.health,
        )
    }
}
