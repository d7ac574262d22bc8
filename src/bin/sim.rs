use dots_and_boxes::{play_game, GameSession, Player, RandomPlayer, DEFAULT_COLS, DEFAULT_ROWS};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn parse_arg<T: std::str::FromStr>(args: &[String], i: usize, default: T) -> anyhow::Result<T>
where
    T::Err: std::fmt::Display,
{
    match args.get(i) {
        Some(s) => s
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid argument {:?}: {}", s, e)),
        None => Ok(default),
    }
}

/// Plays one random-vs-random game and prints it as a JSON object.
fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 4 {
        eprintln!("Usage: {} <seed> [rows] [cols]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = parse_arg(&args, 1, 0)?;
    let rows: usize = parse_arg(&args, 2, DEFAULT_ROWS)?;
    let cols: usize = parse_arg(&args, 3, DEFAULT_COLS)?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut session = GameSession::with_dimensions(rows, cols)?;
    let mut players: [Box<dyn Player>; 2] = [Box::new(RandomPlayer), Box::new(RandomPlayer)];
    let trajectory = play_game(&mut session, &mut players, &mut rng)?;

    let winner = match trajectory.winner {
        Some(1) => "player1",
        Some(_) => "player2",
        None => "draw",
    };
    let result = json!({
        "seed": seed,
        "winner": winner,
        "scores": trajectory.scores,
        "moves": trajectory.steps.len(),
        "trajectory": trajectory,
    });
    println!("{}", result);
    Ok(())
}
