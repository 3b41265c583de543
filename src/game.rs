//! Turn orchestration between the user and the computer.

use alloc::boxed::Box;
use alloc::vec::Vec;
use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{Coordinate, ShotResult},
    config::FLEET,
    placement,
    player::Player,
};

/// One of the two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Side {
    User,
    Ai,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::User => Side::Ai,
            Side::Ai => Side::User,
        }
    }
}

/// Where the game stands. The two `*Won` states are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameState {
    UserTurn,
    AiTurn,
    UserWon,
    AiWon,
}

impl GameState {
    /// Side due to shoot, `None` once the game is decided.
    pub fn acting(self) -> Option<Side> {
        match self {
            GameState::UserTurn => Some(Side::User),
            GameState::AiTurn => Some(Side::Ai),
            GameState::UserWon | GameState::AiWon => None,
        }
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            GameState::UserWon => Some(Side::User),
            GameState::AiWon => Some(Side::Ai),
            GameState::UserTurn | GameState::AiTurn => None,
        }
    }
}

/// A shot the board accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotRecord {
    pub shooter: Side,
    pub target: Coordinate,
    pub result: ShotResult,
}

/// Final tally of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSummary {
    pub winner: Option<Side>,
    pub turns: usize,
    pub user_shots: usize,
    pub ai_shots: usize,
    pub user_ships_left: usize,
    pub ai_ships_left: usize,
}

/// Hooks around the turn loop, used for rendering and pacing.
pub trait GameObserver {
    fn before_shot(&mut self, _game: &Game) {}
    fn after_shot(&mut self, _game: &Game, _shot: &ShotRecord) {}
    fn game_over(&mut self, _game: &Game, _winner: Side) {}
}

/// Observer that does nothing.
pub struct Silent;

impl GameObserver for Silent {}

/// Owns both boards and both players and runs the match.
pub struct Game {
    user: Box<dyn Player>,
    ai: Box<dyn Player>,
    user_board: Board,
    ai_board: Board,
    turn: usize,
    state: GameState,
    history: Vec<ShotRecord>,
}

impl Game {
    /// Start a game on prepared boards. The computer's board is always
    /// concealed.
    pub fn new(
        user: Box<dyn Player>,
        ai: Box<dyn Player>,
        user_board: Board,
        mut ai_board: Board,
    ) -> Self {
        ai_board.set_conceal_ships(true);
        Game {
            user,
            ai,
            user_board,
            ai_board,
            turn: 0,
            state: GameState::UserTurn,
            history: Vec::new(),
        }
    }

    /// Start a game with the standard fleet randomly placed on two
    /// `size`×`size` boards.
    pub fn with_random_boards(
        user: Box<dyn Player>,
        ai: Box<dyn Player>,
        rng: &mut SmallRng,
        size: usize,
    ) -> Self {
        let user_board = placement::random_board(rng, size, &FLEET);
        let ai_board = placement::random_board(rng, size, &FLEET);
        Self::new(user, ai, user_board, ai_board)
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn winner(&self) -> Option<Side> {
        self.state.winner()
    }

    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Turn counter. Even means the user acts, odd the computer.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// The board holding `side`'s fleet.
    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::User => &self.user_board,
            Side::Ai => &self.ai_board,
        }
    }

    pub fn player(&self, side: Side) -> &dyn Player {
        match side {
            Side::User => self.user.as_ref(),
            Side::Ai => self.ai.as_ref(),
        }
    }

    /// Every accepted shot, oldest first.
    pub fn history(&self) -> &[ShotRecord] {
        &self.history
    }

    pub fn shots_fired(&self, side: Side) -> usize {
        self.history.iter().filter(|s| s.shooter == side).count()
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            winner: self.winner(),
            turns: self.turn,
            user_shots: self.shots_fired(Side::User),
            ai_shots: self.shots_fired(Side::Ai),
            user_ships_left: self.user_board.remaining_ships(),
            ai_ships_left: self.ai_board.remaining_ships(),
        }
    }

    /// Let the acting side fire one accepted shot and advance the state.
    ///
    /// A hit keeps the same side acting. A miss or a sinking shot hands the
    /// turn over, unless it decided the game.
    pub fn step(&mut self, rng: &mut SmallRng) -> anyhow::Result<ShotRecord> {
        let Some(shooter) = self.state.acting() else {
            anyhow::bail!("game is already over");
        };
        let (target, result) = match shooter {
            Side::User => self.user.take_turn(rng, &mut self.ai_board)?,
            Side::Ai => self.ai.take_turn(rng, &mut self.user_board)?,
        };
        let record = ShotRecord {
            shooter,
            target,
            result,
        };
        self.history.push(record);

        if self.ai_board.is_defeated() {
            self.state = GameState::UserWon;
        } else if self.user_board.is_defeated() {
            self.state = GameState::AiWon;
        } else {
            if !result.keeps_turn() {
                self.turn += 1;
            }
            self.state = if self.turn % 2 == 0 {
                GameState::UserTurn
            } else {
                GameState::AiTurn
            };
        }
        if let Some(winner) = self.winner() {
            log::info!("game over after {} turns, {:?} won", self.turn, winner);
        }
        Ok(record)
    }

    /// Play until one fleet is destroyed and return the winner.
    pub fn run<O: GameObserver + ?Sized>(
        &mut self,
        rng: &mut SmallRng,
        observer: &mut O,
    ) -> anyhow::Result<Side> {
        loop {
            if let Some(winner) = self.winner() {
                observer.game_over(self, winner);
                return Ok(winner);
            }
            observer.before_shot(self);
            let shot = self.step(rng)?;
            observer.after_shot(self, &shot);
        }
    }
}
