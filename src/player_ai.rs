use rand::rngs::SmallRng;
use rand::Rng;

use crate::{board::Board, common::Coordinate, player::Player};

/// Computer opponent that fires at uniformly random cells.
///
/// It keeps no record of earlier shots and leans on the board to refuse
/// repeats.
pub struct AiPlayer {
    name: &'static str,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self::named("Computer")
    }

    pub fn named(name: &'static str) -> Self {
        Self { name }
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn name(&self) -> &str {
        self.name
    }

    fn select_target(&mut self, rng: &mut SmallRng, enemy: &Board) -> anyhow::Result<Coordinate> {
        let size = i32::try_from(enemy.size())
            .map_err(|_| anyhow::anyhow!("board of size {} is too large to target", enemy.size()))?;
        if size == 0 {
            anyhow::bail!("cannot target an empty board");
        }
        Ok(Coordinate::new(
            rng.random_range(0..size),
            rng.random_range(0..size),
        ))
    }
}
