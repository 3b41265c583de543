//! Game board state: ship placements, display grid and shot resolution.

use alloc::collections::BTreeSet;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::{BoardError, Coordinate, ShotResult};
use crate::config::BOARD_SIZE;
use crate::ship::Ship;

/// Display state of a single grid cell. Used for rendering only; shot
/// resolution works from the ships themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Ship,
    Miss,
    Hit,
}

/// A square grid holding one player's fleet.
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    ships: Vec<Ship>,
    used: BTreeSet<Coordinate>,
    destroyed: usize,
    conceal_ships: bool,
}

impl Board {
    /// Create an empty board of the default size.
    pub fn new() -> Self {
        Self::with_size(BOARD_SIZE)
    }

    /// Create an empty `size`×`size` board.
    pub fn with_size(size: usize) -> Self {
        Board {
            size,
            cells: vec![Cell::Empty; size * size],
            ships: Vec::new(),
            used: BTreeSet::new(),
            destroyed: 0,
            conceal_ships: false,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships sunk so far.
    pub fn destroyed_count(&self) -> usize {
        self.destroyed
    }

    /// Number of ships still afloat.
    pub fn remaining_ships(&self) -> usize {
        self.ships.len() - self.destroyed
    }

    /// Whether renderers must hide intact ship cells on this board.
    pub fn conceals_ships(&self) -> bool {
        self.conceal_ships
    }

    pub fn set_conceal_ships(&mut self, conceal: bool) {
        self.conceal_ships = conceal;
    }

    /// Whether `coord` was fired upon or is reserved.
    pub fn is_used(&self, coord: Coordinate) -> bool {
        self.used.contains(&coord)
    }

    pub fn is_out_of_bounds(&self, coord: Coordinate) -> bool {
        self.index(coord).is_none()
    }

    /// Display state at `coord`, `None` when off the board.
    pub fn cell(&self, coord: Coordinate) -> Option<Cell> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Rows of display cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Reserve the cells of `ship` and the ring around it. With
    /// `paint_misses` the reserved cells are also drawn as misses, which
    /// seals off a sunk ship on screen.
    pub fn mark_exclusion_zone(&mut self, ship: &Ship, paint_misses: bool) {
        for cell in ship.cells() {
            for near in cell.neighborhood() {
                let Some(i) = self.index(near) else {
                    continue;
                };
                if self.used.insert(near) && paint_misses {
                    self.cells[i] = Cell::Miss;
                }
            }
        }
    }

    /// Place `ship` on the board. Fails without touching the board when the
    /// ship is empty or too long to address, or when any of its cells is off
    /// the grid or already reserved.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        if ship.tail().is_none() {
            return Err(BoardError::InvalidPlacement);
        }
        if ship
            .cells()
            .any(|c| self.is_out_of_bounds(c) || self.used.contains(&c))
        {
            return Err(BoardError::InvalidPlacement);
        }
        for c in ship.cells() {
            if let Some(i) = self.index(c) {
                self.cells[i] = Cell::Ship;
            }
            self.used.insert(c);
        }
        self.ships.push(ship);
        self.mark_exclusion_zone(&ship, false);
        Ok(())
    }

    /// Forget placement bookkeeping so buffer cells can be shot at.
    pub fn reset_used_coordinates(&mut self) {
        self.used.clear();
    }

    /// Fire at `coord` and report what happened.
    pub fn shoot(&mut self, coord: Coordinate) -> Result<ShotResult, BoardError> {
        let Some(i) = self.index(coord) else {
            return Err(BoardError::OutOfBounds);
        };
        if !self.used.insert(coord) {
            return Err(BoardError::AlreadyTargeted);
        }

        let Some(ship) = self.ships.iter_mut().find(|s| s.is_hit_by(coord)) else {
            self.cells[i] = Cell::Miss;
            return Ok(ShotResult::Miss);
        };
        ship.take_hit();
        self.cells[i] = Cell::Hit;
        if !ship.is_destroyed() {
            return Ok(ShotResult::Hit);
        }

        let sunk = *ship;
        self.destroyed += 1;
        self.mark_exclusion_zone(&sunk, true);
        Ok(ShotResult::Sunk)
    }

    /// Returns `true` when every placed ship is sunk.
    pub fn is_defeated(&self) -> bool {
        self.destroyed == self.ships.len()
    }

    /// Row-major index of `coord`, `None` when off the board.
    fn index(&self, coord: Coordinate) -> Option<usize> {
        let row = usize::try_from(coord.row()).ok()?;
        let column = usize::try_from(coord.column()).ok()?;
        if row < self.size && column < self.size {
            Some(row * self.size + column)
        } else {
            None
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  size: {},\n  destroyed: {},\n  used: {},\n  conceal: {},\n  ships: {:?}\n}}",
            self.size,
            self.destroyed,
            self.used.len(),
            self.conceal_ships,
            self.ships
        )
    }
}
