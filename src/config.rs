pub const BOARD_SIZE: usize = 6;
pub const NUM_SHIPS: usize = 7;

/// Ship lengths in placement order: one 3-cell, two 2-cell, four 1-cell.
pub const FLEET: [usize; NUM_SHIPS] = [3, 2, 2, 1, 1, 1, 1];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_FLEET_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1 + 1;

/// Placement attempts allowed across a whole fleet before the board is
/// thrown away and rebuilt.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 2000;
