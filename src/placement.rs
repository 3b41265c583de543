//! Random fleet placement.
//!
//! Heads are drawn over `0..=size` on both axes, so some candidates hang off
//! the grid on purpose; [`Board::place_ship`] rejects them like any other
//! bad spot and the draw is simply repeated. A single attempt counter spans
//! the whole fleet. Once it passes [`MAX_PLACEMENT_ATTEMPTS`] the half-built
//! board is abandoned and [`random_board`] starts over from an empty one.

use rand::Rng;

use crate::board::Board;
use crate::common::{BoardError, Coordinate};
use crate::config::MAX_PLACEMENT_ATTEMPTS;
use crate::ship::Ship;

/// Try once to place every ship of `fleet` on a fresh `size`×`size` board.
///
/// Returns [`BoardError::PlacementCapExceeded`] when the attempt budget runs
/// out. On success the placement reservations are already cleared and the
/// board is ready to be shot at.
pub fn try_random_board<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    fleet: &[usize],
) -> Result<Board, BoardError> {
    let mut board = Board::with_size(size);
    // Cells past `i32::MAX` cannot be addressed anyway.
    let max = i32::try_from(size).unwrap_or(i32::MAX);
    place_fleet(&mut board, fleet, |length| {
        let head = Coordinate::new(rng.random_range(0..=max), rng.random_range(0..=max));
        Ship::new(head, length, rng.random())
    })?;
    board.reset_used_coordinates();
    Ok(board)
}

/// Place `fleet` in order, asking `candidate` for a ship of the wanted
/// length until the board takes it. At most [`MAX_PLACEMENT_ATTEMPTS`]
/// candidates are tried over the whole fleet.
fn place_fleet<F>(board: &mut Board, fleet: &[usize], mut candidate: F) -> Result<(), BoardError>
where
    F: FnMut(usize) -> Ship,
{
    let mut attempts = 0;
    for &length in fleet {
        loop {
            if attempts == MAX_PLACEMENT_ATTEMPTS {
                return Err(BoardError::PlacementCapExceeded { attempts });
            }
            attempts += 1;
            match board.place_ship(candidate(length)) {
                Ok(()) => break,
                Err(BoardError::InvalidPlacement) => {}
                Err(e) => return Err(e),
            }
        }
    }
    Ok(())
}

/// Build a board with every ship of `fleet` placed, retrying whole boards
/// until one works out.
pub fn random_board<R: Rng + ?Sized>(rng: &mut R, size: usize, fleet: &[usize]) -> Board {
    let mut discarded = 0usize;
    loop {
        match try_random_board(rng, size, fleet) {
            Ok(board) => {
                log::debug!(
                    "placed {} ships on a {}x{} board ({} boards discarded)",
                    fleet.len(),
                    size,
                    size,
                    discarded
                );
                return board;
            }
            Err(e) => {
                discarded += 1;
                log::debug!("discarding board: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ship::Orientation;

    fn at(row: i32, column: i32, length: usize) -> Ship {
        Ship::new(Coordinate::new(row, column), length, Orientation::Horizontal)
    }

    #[test]
    fn gives_up_after_exactly_the_cap() {
        let mut board = Board::with_size(3);
        let mut calls = 0;
        let err = place_fleet(&mut board, &[1], |length| {
            calls += 1;
            at(5, 5, length)
        })
        .unwrap_err();
        assert_eq!(calls, MAX_PLACEMENT_ATTEMPTS);
        assert_eq!(
            err,
            BoardError::PlacementCapExceeded {
                attempts: MAX_PLACEMENT_ATTEMPTS
            }
        );
        assert!(board.ships().is_empty());
    }

    #[test]
    fn last_allowed_attempt_still_counts() {
        let mut board = Board::with_size(3);
        let mut calls = 0;
        let placed = place_fleet(&mut board, &[1], |length| {
            calls += 1;
            if calls < MAX_PLACEMENT_ATTEMPTS {
                at(5, 5, length)
            } else {
                at(0, 0, length)
            }
        });
        assert_eq!(placed, Ok(()));
        assert_eq!(calls, MAX_PLACEMENT_ATTEMPTS);
        assert_eq!(board.ships().len(), 1);
    }

    #[test]
    fn one_budget_covers_the_whole_fleet() {
        let mut board = Board::with_size(3);
        let mut calls = 0;
        // The first ship lands on its 1000th try; the second never fits.
        let err = place_fleet(&mut board, &[1, 3], |length| {
            calls += 1;
            if calls == 1000 {
                at(0, 0, length)
            } else {
                at(5, 5, length)
            }
        })
        .unwrap_err();
        assert_eq!(calls, MAX_PLACEMENT_ATTEMPTS);
        assert_eq!(
            err,
            BoardError::PlacementCapExceeded {
                attempts: MAX_PLACEMENT_ATTEMPTS
            }
        );
        assert_eq!(board.ships().len(), 1);
    }
}
