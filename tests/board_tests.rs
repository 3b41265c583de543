use seabattle::{Board, BoardError, Cell, Coordinate, Orientation, Ship, ShotResult};

fn c(row: i32, column: i32) -> Coordinate {
    Coordinate::new(row, column)
}

fn board_with(ships: &[Ship]) -> Board {
    let mut board = Board::new();
    for ship in ships {
        board.place_ship(*ship).unwrap();
    }
    board.reset_used_coordinates();
    board
}

#[test]
fn test_single_cell_ship_sinks_and_defeats() {
    let mut board = board_with(&[Ship::new(c(2, 2), 1, Orientation::Horizontal)]);
    assert_eq!(board.shoot(c(2, 2)), Ok(ShotResult::Sunk));
    assert_eq!(board.destroyed_count(), 1);
    assert!(board.is_defeated());
}

#[test]
fn test_two_cell_ship_hit_then_sunk() {
    let mut board = board_with(&[Ship::new(c(0, 0), 2, Orientation::Horizontal)]);
    assert_eq!(board.shoot(c(0, 0)), Ok(ShotResult::Hit));
    assert_eq!(board.shoot(c(0, 1)), Ok(ShotResult::Sunk));
}

#[test]
fn test_shot_out_of_bounds() {
    let mut board = board_with(&[Ship::new(c(0, 0), 1, Orientation::Horizontal)]);
    assert_eq!(board.shoot(c(10, 10)), Err(BoardError::OutOfBounds));
    assert_eq!(board.shoot(c(-1, 0)), Err(BoardError::OutOfBounds));
    assert_eq!(board.shoot(c(0, 6)), Err(BoardError::OutOfBounds));
    assert!(!board.is_used(c(10, 10)));
}

#[test]
fn test_placement_off_the_edge() {
    let mut board = Board::new();
    assert_eq!(
        board.place_ship(Ship::new(c(5, 5), 3, Orientation::Horizontal)),
        Err(BoardError::InvalidPlacement)
    );
    assert!(board.ships().is_empty());
    assert!(!board.is_used(c(5, 5)));
    assert_eq!(board.cell(c(5, 5)), Some(Cell::Empty));
}

#[test]
fn test_placement_rejects_overlap_and_adjacency() {
    let mut board = Board::new();
    board
        .place_ship(Ship::new(c(2, 2), 2, Orientation::Horizontal))
        .unwrap();
    // overlapping
    assert_eq!(
        board.place_ship(Ship::new(c(0, 3), 3, Orientation::Vertical)),
        Err(BoardError::InvalidPlacement)
    );
    // touching diagonally
    assert_eq!(
        board.place_ship(Ship::new(c(3, 4), 1, Orientation::Horizontal)),
        Err(BoardError::InvalidPlacement)
    );
    // one free cell in between is fine
    board
        .place_ship(Ship::new(c(4, 2), 1, Orientation::Horizontal))
        .unwrap();
    assert_eq!(board.ships().len(), 2);
}

#[test]
fn test_placement_reserves_exclusion_zone() {
    let mut board = Board::new();
    board
        .place_ship(Ship::new(c(0, 0), 2, Orientation::Vertical))
        .unwrap();
    for coord in [c(0, 0), c(1, 0), c(2, 0), c(0, 1), c(1, 1), c(2, 1)] {
        assert!(board.is_used(coord), "{:?} should be reserved", coord);
    }
    assert!(!board.is_used(c(3, 0)));
    assert!(!board.is_used(c(0, 2)));
    // only the ship cells are drawn
    assert_eq!(board.cell(c(0, 0)), Some(Cell::Ship));
    assert_eq!(board.cell(c(1, 0)), Some(Cell::Ship));
    assert_eq!(board.cell(c(2, 0)), Some(Cell::Empty));
}

#[test]
fn test_reset_frees_buffer_cells_for_shots() {
    let mut board = Board::new();
    board
        .place_ship(Ship::new(c(0, 0), 1, Orientation::Horizontal))
        .unwrap();
    assert_eq!(board.shoot(c(0, 1)), Err(BoardError::AlreadyTargeted));
    board.reset_used_coordinates();
    assert_eq!(board.shoot(c(0, 1)), Ok(ShotResult::Miss));
}

#[test]
fn test_zero_length_ship_is_rejected() {
    let mut board = Board::new();
    assert_eq!(
        board.place_ship(Ship::new(c(1, 1), 0, Orientation::Vertical)),
        Err(BoardError::InvalidPlacement)
    );
}

#[test]
fn test_overlong_ship_is_rejected() {
    let mut board = Board::new();
    for length in [usize::MAX, i32::MAX as usize + 1, i32::MAX as usize + 2] {
        assert_eq!(
            board.place_ship(Ship::new(c(0, 0), length, Orientation::Horizontal)),
            Err(BoardError::InvalidPlacement),
            "length {}",
            length
        );
    }
    assert!(board.ships().is_empty());
    assert!(!board.is_used(c(0, 0)));
}

#[cfg(target_pointer_width = "64")]
#[test]
fn test_length_past_u32_is_not_wrapped() {
    // 2^32 + 1 would read as a single cell if narrowed to 32 bits.
    let mut board = Board::new();
    let ship = Ship::new(c(0, 0), u32::MAX as usize + 2, Orientation::Vertical);
    assert_eq!(board.place_ship(ship), Err(BoardError::InvalidPlacement));
    assert_eq!(board.cell(c(0, 0)), Some(Cell::Empty));
}

#[test]
fn test_ship_running_past_the_coordinate_range_is_rejected() {
    let mut board = Board::new();
    let ship = Ship::new(c(0, i32::MAX), 2, Orientation::Horizontal);
    assert_eq!(board.place_ship(ship), Err(BoardError::InvalidPlacement));
    let ship = Ship::new(c(i32::MAX, 0), 2, Orientation::Vertical);
    assert_eq!(board.place_ship(ship), Err(BoardError::InvalidPlacement));
}

#[test]
fn test_repeated_shot_is_already_targeted() {
    let mut board = board_with(&[Ship::new(c(3, 3), 2, Orientation::Vertical)]);
    assert_eq!(board.shoot(c(0, 0)), Ok(ShotResult::Miss));
    assert_eq!(board.shoot(c(0, 0)), Err(BoardError::AlreadyTargeted));
    assert_eq!(board.shoot(c(3, 3)), Ok(ShotResult::Hit));
    assert_eq!(board.shoot(c(3, 3)), Err(BoardError::AlreadyTargeted));
    assert_eq!(board.ships()[0].health(), 1);
}

#[test]
fn test_hit_leaves_neighbors_untouched() {
    let mut board = board_with(&[Ship::new(c(2, 1), 3, Orientation::Horizontal)]);
    assert_eq!(board.shoot(c(2, 2)), Ok(ShotResult::Hit));
    assert_eq!(board.ships()[0].health(), 2);
    assert_eq!(board.destroyed_count(), 0);
    assert_eq!(board.cell(c(2, 2)), Some(Cell::Hit));
    for near in c(2, 2).neighborhood().filter(|&n| n != c(2, 2)) {
        assert!(!board.is_used(near), "{:?} should still be open", near);
    }
}

#[test]
fn test_sinking_seals_the_perimeter() {
    let mut board = board_with(&[
        Ship::new(c(0, 0), 2, Orientation::Horizontal),
        Ship::new(c(4, 4), 1, Orientation::Horizontal),
    ]);
    board.shoot(c(0, 0)).unwrap();
    assert_eq!(board.shoot(c(0, 1)), Ok(ShotResult::Sunk));
    assert_eq!(board.destroyed_count(), 1);
    assert!(!board.is_defeated());

    for coord in [c(0, 2), c(1, 0), c(1, 1), c(1, 2)] {
        assert!(board.is_used(coord));
        assert_eq!(board.cell(coord), Some(Cell::Miss));
    }
    assert_eq!(board.cell(c(0, 0)), Some(Cell::Hit));
    assert_eq!(board.cell(c(0, 1)), Some(Cell::Hit));
    assert_eq!(board.shoot(c(1, 1)), Err(BoardError::AlreadyTargeted));
    // the other ship is unaffected
    assert_eq!(board.cell(c(4, 4)), Some(Cell::Ship));
}

#[test]
fn test_miss_is_drawn() {
    let mut board = board_with(&[Ship::new(c(0, 0), 1, Orientation::Horizontal)]);
    assert_eq!(board.shoot(c(5, 5)), Ok(ShotResult::Miss));
    assert_eq!(board.cell(c(5, 5)), Some(Cell::Miss));
    assert!(!board.is_defeated());
}

#[test]
fn test_custom_size_bounds() {
    let board = Board::with_size(8);
    assert_eq!(board.size(), 8);
    assert!(!board.is_out_of_bounds(c(7, 7)));
    assert!(board.is_out_of_bounds(c(8, 0)));
    assert_eq!(board.rows().count(), 8);
}

#[test]
fn test_result_turn_rules() {
    assert!(ShotResult::Hit.keeps_turn());
    assert!(!ShotResult::Miss.keeps_turn());
    assert!(!ShotResult::Sunk.keeps_turn());
}
