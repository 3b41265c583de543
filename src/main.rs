#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use seabattle::prelude::*;

#[cfg(feature = "std")]
use clap::{builder::TypedValueParser, Parser};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::time::Duration;

/// Sea battle against the computer on a small square grid.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = BOARD_SIZE, value_parser = clap::value_parser!(u16).range(6..=26).map(usize::from))]
    size: usize,
    #[arg(long, default_value_t = 1500, help = "Pause around the computer's move, in milliseconds")]
    delay_ms: u64,
    #[arg(long, help = "Skip the welcome banner")]
    no_greeting: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(log::LevelFilter::Warn);

    let mut rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (boards and computer shots will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    if !cli.no_greeting {
        print_greeting();
    }

    let mut game = Game::with_random_boards(
        Box::new(CliPlayer::stdin()),
        Box::new(AiPlayer::new()),
        &mut rng,
        cli.size,
    );
    let mut view = ConsoleView::new(Duration::from_millis(cli.delay_ms));
    let winner = game.run(&mut rng, &mut view)?;
    let summary = game.summary();
    println!(
        "{} won after {} turns ({} shots by you, {} by the computer).",
        match winner {
            Side::User => "You",
            Side::Ai => "The computer",
        },
        summary.turns,
        summary.user_shots,
        summary.ai_shots,
    );
    Ok(())
}
