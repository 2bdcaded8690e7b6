//! Blokus Bot Arena
//!
//! Runs bot-vs-bot Blokus simulations and reports win percentages. Two
//! bots play on a square board with opposite-corner start positions; each
//! game runs until both players are retired or out of shapes.

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rustc_hash::FxHashSet;
use std::sync::Arc;

use blokus::bots::{play_game, Strategy};
use blokus::game::Game;
use blokus::geometry::Point;
use blokus::shapes::ShapeCatalog;

/// Plays two bot strategies against each other and tallies the results.
#[derive(Parser)]
#[command(name = "blokus")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of games to simulate.
    #[arg(short = 'n', long, default_value_t = 20)]
    num_games: u32,

    /// Strategy for bot 1.
    #[arg(short = '1', long, value_enum, default_value = "random")]
    strategy_1: Strategy,

    /// Strategy for bot 2.
    #[arg(short = '2', long, value_enum, default_value = "random")]
    strategy_2: Strategy,

    /// Board edge length (minimum 5).
    #[arg(long, default_value_t = 11)]
    size: usize,

    /// Seed for reproducible simulations.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("simulation failed: {e}");
        std::process::exit(1);
    }
}

/// Runs the configured number of games and prints the win breakdown.
fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Arc::new(ShapeCatalog::standard()?);
    let strategies = [cli.strategy_1, cli.strategy_2];
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut wins = [0u32; 2];
    let mut ties = 0u32;

    for round in 1..=cli.num_games {
        let last = cli.size as i32 - 1;
        let starts: FxHashSet<Point> = [(0, 0), (last, last)].into_iter().collect();
        let mut game = Game::new(2, cli.size, starts, Arc::clone(&catalog))?;

        let winners = play_game(&mut game, &strategies, &mut rng)?;
        log::debug!("game {round}: winners {winners:?}");

        match winners.as_slice() {
            [sole] => wins[(*sole - 1) as usize] += 1,
            _ => ties += 1,
        }
    }

    let total = cli.num_games.max(1) as f64;
    for (bot, count) in wins.iter().enumerate() {
        println!(
            "Bot {} wins | {:6.2} %",
            bot + 1,
            *count as f64 / total * 100.0
        );
    }
    println!("Ties       | {:6.2} %", ties as f64 / total * 100.0);

    Ok(())
}
