#![cfg(feature = "std")]

use std::fmt::Write as _;
use std::string::String;
use std::thread;
use std::time::Duration;

use crate::{
    board::{Board, Cell},
    common::ShotResult,
    game::{Game, GameObserver, ShotRecord, Side},
    player::Player,
};

const GAP: &str = "     ";

fn glyph(cell: Cell, conceal: bool) -> char {
    match cell {
        Cell::Empty => '.',
        Cell::Ship if conceal => '.',
        Cell::Ship => '#',
        Cell::Miss => 'o',
        Cell::Hit => 'X',
    }
}

fn header(size: usize) -> String {
    let mut line = String::from("   |");
    for c in 1..=size {
        let _ = write!(line, "{:>3}|", c);
    }
    line
}

fn row_line(row: usize, cells: &[Cell], conceal: bool) -> String {
    let mut line = std::format!("{:>2} |", row + 1);
    for &cell in cells {
        let _ = write!(line, "{:>2} |", glyph(cell, conceal));
    }
    line
}

fn title(text: &str, width: usize) -> String {
    std::format!("{:^width$}", text, width = width)
}

/// Render two boards side by side, each honoring its own conceal flag.
pub fn render_boards(left: (&str, &Board), right: (&str, &Board)) -> String {
    let (left_name, left_board) = left;
    let (right_name, right_board) = right;
    let width = header(left_board.size()).chars().count();

    let mut out = String::new();
    let _ = writeln!(out, "{}{}{}", title(left_name, width), GAP, right_name);
    let _ = writeln!(out, "{}{}{}", header(left_board.size()), GAP, header(right_board.size()));
    let mut left_rows = left_board.rows();
    let mut right_rows = right_board.rows();
    let mut row = 0;
    loop {
        let l = left_rows.next();
        let r = right_rows.next();
        if l.is_none() && r.is_none() {
            break;
        }
        let l = l
            .map(|cells| row_line(row, cells, left_board.conceals_ships()))
            .unwrap_or_else(|| " ".repeat(width));
        let r = r
            .map(|cells| row_line(row, cells, right_board.conceals_ships()))
            .unwrap_or_default();
        let _ = writeln!(out, "{}{}{}", l, GAP, r);
        row += 1;
    }
    out
}

/// Print both boards of `game`, the computer's on the left.
pub fn print_game(game: &Game) {
    let ai_title = std::format!("{}'s board", game.player(Side::Ai).name());
    std::print!(
        "{}",
        render_boards(
            (ai_title.as_str(), game.board(Side::Ai)),
            ("Your board", game.board(Side::User)),
        )
    );
}

/// One line narrating a shot fired by `shooter`.
fn describe_shot(shooter: &str, shot: &ShotRecord) -> String {
    let outcome = match shot.result {
        ShotResult::Miss => "missed",
        ShotResult::Hit => "hit one of your ships",
        ShotResult::Sunk => "destroyed one of your ships",
    };
    std::format!("{} fired at {} and {}.", shooter, shot.target, outcome)
}

/// Print the welcome banner and input instructions.
pub fn print_greeting() {
    std::println!("---------------------------------------");
    std::println!("              SEA BATTLE");
    std::println!("---------------------------------------");
    std::println!("To fire, enter the target as: ROW COLUMN");
    std::println!("  ROW    - counted from the top, from 1");
    std::println!("  COLUMN - counted from the left, from 1");
    std::println!("A hit lets you fire again.");
}

/// Terminal front-end: draws the boards before every shot, narrates the
/// computer's moves and pauses around them.
pub struct ConsoleView {
    delay: Duration,
}

impl ConsoleView {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    fn pause(&self) {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}

impl GameObserver for ConsoleView {
    fn before_shot(&mut self, game: &Game) {
        std::println!();
        print_game(game);
        match game.state().acting() {
            Some(Side::User) => std::println!("Your move."),
            Some(Side::Ai) => {
                std::println!("{}'s move...", game.player(Side::Ai).name());
                self.pause();
            }
            None => {}
        }
    }

    fn after_shot(&mut self, game: &Game, shot: &ShotRecord) {
        if shot.shooter != Side::Ai {
            return;
        }
        std::println!("{}", describe_shot(game.player(shot.shooter).name(), shot));
        self.pause();
    }

    fn game_over(&mut self, game: &Game, winner: Side) {
        std::println!();
        print_game(game);
        match winner {
            Side::User => std::println!("You win! The enemy fleet is destroyed."),
            Side::Ai => std::println!("The computer wins. Your fleet is destroyed."),
        }
    }
}
