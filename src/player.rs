use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{BoardError, Coordinate, ShotResult},
};

/// Interface implemented by different player types.
///
/// Implementations only decide where to shoot. Firing, rejecting bad
/// targets and retrying is the shared [`Player::take_turn`] protocol.
pub trait Player {
    /// Short label used in logs and messages.
    fn name(&self) -> &str;

    /// Choose the next target on the enemy board. The board is read-only
    /// here; whether the target is legal is for the board to decide.
    fn select_target(&mut self, rng: &mut SmallRng, enemy: &Board) -> anyhow::Result<Coordinate>;

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _target: Coordinate, _result: ShotResult) {}

    /// Inform the player that the board refused its target.
    fn handle_rejected_shot(&mut self, _target: Coordinate, _error: BoardError) {}

    /// Fire one accepted shot at `enemy`, asking again for as long as the
    /// board rejects the target as off-grid or already used.
    fn take_turn(
        &mut self,
        rng: &mut SmallRng,
        enemy: &mut Board,
    ) -> anyhow::Result<(Coordinate, ShotResult)> {
        loop {
            let target = self.select_target(rng, enemy)?;
            match enemy.shoot(target) {
                Ok(result) => {
                    log::info!("{} fired at {} -> {:?}", self.name(), target, result);
                    self.handle_shot_result(target, result);
                    return Ok((target, result));
                }
                Err(e) if e.is_retryable_shot() => {
                    log::debug!("{} target {} rejected: {}", self.name(), target, e);
                    self.handle_rejected_shot(target, e);
                }
                Err(e) => return Err(anyhow::Error::new(e)),
            }
        }
    }
}
