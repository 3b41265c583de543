use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{init_logging, AiPlayer, Game, Silent, BOARD_SIZE};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <placement-seed> <shot-seed>", args[0]);
        std::process::exit(1);
    }
    let placement_seed: u64 = args[1].parse()?;
    let shot_seed: u64 = args[2].parse()?;
    init_logging(log::LevelFilter::Warn);

    let mut placement_rng = SmallRng::seed_from_u64(placement_seed);
    let mut shot_rng = SmallRng::seed_from_u64(shot_seed);

    let mut game = Game::with_random_boards(
        Box::new(AiPlayer::named("player1")),
        Box::new(AiPlayer::named("player2")),
        &mut placement_rng,
        BOARD_SIZE,
    );
    game.run(&mut shot_rng, &mut Silent)?;

    let result = json!({
        "seeds": [placement_seed, shot_seed],
        "summary": game.summary(),
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
