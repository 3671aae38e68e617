use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use flotilla::console::{coord_label, parse_coord, parse_orientation, render_board};
use flotilla::stats::{format_duration, MatchLog, MatchRecord};
use flotilla::{
    init_logging, place_random_fleet, Board, Coord, Game, Gunner, RandomGunner, ShotError,
    ShotOutcome, Side,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against the computer.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Player name for the match log (prompted if absent)")]
        name: Option<String>,
        #[arg(long, default_value = "flotilla_stats.jsonl", help = "Path of the match log")]
        stats: PathBuf,
    },
    /// Run a non-interactive game between two random gunners.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// List recorded match results.
    Stats {
        #[arg(long, default_value = "flotilla_stats.jsonl", help = "Path of the match log")]
        stats: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Play { seed, name, stats } => play(seed, name, &MatchLog::new(stats)),
        Commands::Auto { seed } => auto(seed),
        Commands::Stats { stats } => list_stats(&MatchLog::new(stats)),
    }
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_rng(&mut rand::rng()),
    }
}

fn prompt(text: &str) -> anyhow::Result<String> {
    print!("{text}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn play(seed: Option<u64>, name: Option<String>, match_log: &MatchLog) -> anyhow::Result<()> {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut rng = make_rng(seed);
    let player = match name {
        Some(n) if !n.trim().is_empty() => n.trim().to_string(),
        _ => {
            let n = prompt("Player name: ")?;
            if n.is_empty() {
                "Player".to_string()
            } else {
                n
            }
        }
    };

    loop {
        let record = run_match(&player, &mut rng)?;
        match_log.append(&record)?;
        let again = prompt("\nPlay again? (y/n): ")?;
        if !again.eq_ignore_ascii_case("y") {
            break;
        }
    }
    Ok(())
}

fn run_match(player: &str, rng: &mut SmallRng) -> anyhow::Result<MatchRecord> {
    let mut game = Game::new(rng);
    println!("\nThe computer fleet is in position. Place your ships.");

    while let Some(kind) = game.remaining_kinds().first().copied() {
        println!("\n{}", render_board(game.player_board(), true));
        let input = prompt(&format!(
            "Place your {} - coordinate and orientation (e.g. A5 h): ",
            kind
        ))?;
        let mut parts = input.split_whitespace();
        let (Some(coord_part), Some(orient_part)) = (parts.next(), parts.next()) else {
            println!("Need a coordinate and an orientation, e.g. A5 h");
            continue;
        };
        let coord = match parse_coord(coord_part) {
            Ok(coord) => coord,
            Err(msg) => {
                println!("{msg}");
                continue;
            }
        };
        let orientation = match parse_orientation(orient_part) {
            Ok(orientation) => orientation,
            Err(msg) => {
                println!("{msg}");
                continue;
            }
        };
        if let Err(err) = game.place_ship(kind, coord, orientation) {
            println!("Cannot place there: {err}");
        }
    }

    println!("\nAll ships placed! The battle begins.");
    let mut gunner = RandomGunner::new();
    let started = Instant::now();
    let mut shots: u32 = 0;

    while !game.is_finished() {
        match game.turn() {
            Some(Side::Player) => {
                println!("\nEnemy waters:\n{}", render_board(game.computer_board(), false));
                println!("Your fleet:\n{}", render_board(game.player_board(), true));
                let input = prompt("Fire at (e.g. B7): ")?;
                let coord = match parse_coord(&input) {
                    Ok(coord) => coord,
                    Err(msg) => {
                        println!("{msg}");
                        continue;
                    }
                };
                match game.fire_shot(coord) {
                    Ok(outcome) => {
                        shots += 1;
                        announce(Side::Player, coord, outcome);
                    }
                    Err(ShotError::AlreadyFired) => {
                        println!(
                            "You already fired at {}. Pick another cell.",
                            coord_label(coord)
                        );
                    }
                    Err(err) => return Err(err.into()),
                }
            }
            Some(Side::Computer) => {
                let (coord, outcome) = game.computer_turn(&mut gunner, rng)?;
                announce(Side::Computer, coord, outcome);
            }
            None => break,
        }
    }

    let winner = game
        .winner()
        .ok_or_else(|| anyhow::anyhow!("battle loop ended without a winner"))?;
    let duration = format_duration(started.elapsed().as_secs());
    match winner {
        Side::Player => {
            println!("\nCongratulations {player}! You won in {shots} shots and {duration}.");
        }
        Side::Computer => {
            println!("\nThe computer won. Better luck next time! Duration: {duration}.");
        }
    }
    log::info!("match finished: winner={winner}, shots={shots}, duration={duration}");

    Ok(MatchRecord {
        player: player.to_string(),
        winner,
        shots,
        duration,
    })
}

fn announce(shooter: Side, coord: Coord, outcome: ShotOutcome) {
    let cell = coord_label(coord);
    let line = match (shooter, outcome) {
        (Side::Player, ShotOutcome::Miss) => format!("You fire at {cell}: miss."),
        (Side::Player, ShotOutcome::Hit(kind)) => {
            format!("You fire at {cell}: hit on the {}!", kind.name())
        }
        (Side::Player, ShotOutcome::Sunk(kind)) => {
            format!("You fire at {cell}: you sank the {}!", kind.name())
        }
        (Side::Player, ShotOutcome::FleetDestroyed(kind)) => format!(
            "You fire at {cell}: the {} goes down - the enemy fleet is destroyed!",
            kind.name()
        ),
        (Side::Computer, ShotOutcome::Miss) => format!("Computer fires at {cell}: miss."),
        (Side::Computer, ShotOutcome::Hit(kind)) => {
            format!("Computer fires at {cell}: your {} is hit!", kind.name())
        }
        (Side::Computer, ShotOutcome::Sunk(kind)) => {
            format!("Computer fires at {cell}: your {} is sunk!", kind.name())
        }
        (Side::Computer, ShotOutcome::FleetDestroyed(kind)) => format!(
            "Computer fires at {cell}: your {} is sunk - your fleet is destroyed!",
            kind.name()
        ),
    };
    println!("{line}");
}

fn auto(seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = make_rng(seed);
    let mut boards = [Board::new(), Board::new()];
    place_random_fleet(&mut boards[0], &mut rng);
    place_random_fleet(&mut boards[1], &mut rng);
    let mut gunners = [RandomGunner::new(), RandomGunner::new()];
    let mut shots = [0u32; 2];
    let mut shooter = 0usize;

    let winner = loop {
        let target = 1 - shooter;
        let fired = boards[target].fired();
        let coord = gunners[shooter].choose_shot(&fired, &mut rng);
        let outcome = boards[target].receive_shot(coord)?;
        shots[shooter] += 1;
        if matches!(outcome, ShotOutcome::FleetDestroyed(_)) {
            break shooter;
        }
        shooter = target;
    };

    let summary = serde_json::json!({
        "winner": format!("gunner{}", winner + 1),
        "shots": { "gunner1": shots[0], "gunner2": shots[1] },
        "seed": seed,
    });
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}

fn list_stats(match_log: &MatchLog) -> anyhow::Result<()> {
    let records = match_log.load()?;
    if records.is_empty() {
        println!("No matches recorded at {}.", match_log.path().display());
        return Ok(());
    }
    println!(
        "{:<20} {:>10} {:>6}  {}",
        "Player", "Winner", "Shots", "Duration"
    );
    for record in &records {
        println!(
            "{:<20} {:>10} {:>6}  {}",
            record.player, record.winner, record.shots, record.duration
        );
    }
    Ok(())
}
