#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod board;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
pub mod placement;
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod player_cli;
pub mod prelude;
mod ship;
#[cfg(feature = "std")]
pub mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use placement::{random_board, try_random_board};
pub use player::*;
pub use player_ai::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use ship::*;
