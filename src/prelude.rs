//! Commonly used types and utilities for ease of import.

pub use crate::{
    random_board, AiPlayer, Board, Coordinate, Game, GameObserver, GameState, Player, ShotResult,
    Side, BOARD_SIZE, FLEET,
};

#[cfg(feature = "std")]
pub use crate::{
    init_logging,
    ui::{print_greeting, ConsoleView},
    CliPlayer,
};
