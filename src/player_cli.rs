#![cfg(feature = "std")]

use std::io::{self, BufRead, StdinLock, Write};
use std::num::IntErrorKind;
use std::string::String;

use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{BoardError, Coordinate, ShotResult},
    player::Player,
};

/// Human player typing targets as two 1-indexed numbers, row then column.
pub struct CliPlayer<R> {
    input: R,
    line: String,
}

impl CliPlayer<StdinLock<'static>> {
    /// Player reading from the process's standard input.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> CliPlayer<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            line: String::new(),
        }
    }
}

/// Parse `"<row> <column>"`, both 1-indexed, into a zero-indexed coordinate.
///
/// Only the shape of the input is checked. A number past the edge of the
/// board is left for the board to reject.
pub fn parse_coord(input: &str) -> Result<Coordinate, String> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    let [row, column] = parts.as_slice() else {
        return Err("Enter two coordinates: row and column (e.g. 2 5)".to_string());
    };
    let row = parse_index(row)?;
    let column = parse_index(column)?;
    Ok(Coordinate::new(row - 1, column - 1))
}

fn parse_index(token: &str) -> Result<i32, String> {
    match token.parse::<i32>() {
        Ok(n) if n >= 1 => Ok(n),
        Ok(_) => Err(format!("'{}' is not a positive number", token)),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Err(format!("'{}' is out of range", token)),
            IntErrorKind::NegOverflow => Err(format!("'{}' is not a positive number", token)),
            _ => Err(format!("'{}' is not a number", token)),
        },
    }
}

impl<R: BufRead> Player for CliPlayer<R> {
    fn name(&self) -> &str {
        "You"
    }

    fn select_target(&mut self, _rng: &mut SmallRng, _enemy: &Board) -> anyhow::Result<Coordinate> {
        loop {
            std::print!("Your shot (row column): ");
            io::stdout().flush()?;
            self.line.clear();
            if self.input.read_line(&mut self.line)? == 0 {
                std::println!();
                anyhow::bail!("input closed");
            }
            match parse_coord(self.line.trim()) {
                Ok(coord) => return Ok(coord),
                Err(msg) => std::println!("{}", msg),
            }
        }
    }

    fn handle_shot_result(&mut self, _target: Coordinate, result: ShotResult) {
        let msg = match result {
            ShotResult::Miss => "You missed!",
            ShotResult::Hit => "Ship hit! Fire again.",
            ShotResult::Sunk => "Ship destroyed!",
        };
        std::println!("{}", msg);
    }

    fn handle_rejected_shot(&mut self, target: Coordinate, error: BoardError) {
        std::println!("{}: {}", target, error);
    }
}
