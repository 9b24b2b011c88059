//! Parlor Chess command-line front-end.
//!
//! - `parlor_chess` / `parlor_chess play` - text protocol on stdin/stdout
//! - `parlor_chess selfplay` - engine-vs-engine match
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use std::error::Error;

use clap::{Parser, Subcommand, ValueEnum};

use parlor_chess::engines::difficulty::{build_engine, Difficulty};
use parlor_chess::game_state::chess_types::Color;
use parlor_chess::protocol::text_protocol::{run_stdio_loop, SessionConfig};
use parlor_chess::utils::engine_match_harness::{play_engine_match, MatchConfig};
use parlor_chess::utils::render_game_state::render_game_state;

/// Parlor Chess: rules engine with an easy/normal/hard AI opponent
#[derive(Parser)]
#[command(name = "parlor_chess")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Engine strength
    #[arg(long, value_enum, default_value_t = Difficulty::Normal)]
    difficulty: Difficulty,

    /// Seed for the random tiers; omitted means OS entropy
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Side the engine plays in the interactive session
    #[arg(long, value_enum, default_value_t = AiSide::Black)]
    ai_plays: AiSide,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read commands from stdin and play against the engine
    Play,
    /// Play two engines against each other and print the result
    Selfplay {
        #[arg(long, value_enum, default_value_t = Difficulty::Hard)]
        white: Difficulty,
        #[arg(long, value_enum, default_value_t = Difficulty::Easy)]
        black: Difficulty,
        #[arg(long, default_value_t = 300)]
        max_plies: u16,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AiSide {
    White,
    Black,
    None,
}

impl std::fmt::Display for AiSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            AiSide::White => "white",
            AiSide::Black => "black",
            AiSide::None => "none",
        })
    }
}

impl From<AiSide> for Option<Color> {
    fn from(side: AiSide) -> Self {
        match side {
            AiSide::White => Some(Color::White),
            AiSide::Black => Some(Color::Black),
            AiSide::None => None,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Selfplay {
            white,
            black,
            max_plies,
        }) => run_selfplay(white, black, max_plies, cli.seed),
        Some(Commands::Play) | None => {
            run_stdio_loop(SessionConfig {
                difficulty: cli.difficulty,
                seed: cli.seed,
                ai_side: cli.ai_plays.into(),
            })?;
            Ok(())
        }
    }
}

fn run_selfplay(
    white: Difficulty,
    black: Difficulty,
    max_plies: u16,
    seed: Option<u64>,
) -> Result<(), Box<dyn Error>> {
    // Distinct seeds so two equal random tiers do not mirror each other.
    let mut engine_white = build_engine(white, seed);
    let mut engine_black = build_engine(black, seed.map(|s| s.wrapping_add(1)));

    let result = play_engine_match(
        engine_white.as_mut(),
        engine_black.as_mut(),
        &MatchConfig { max_plies },
    )?;

    println!("{}", render_game_state(&result.final_state));
    println!("moves {}", result.played_moves_lan.join(" "));
    println!("status {}", result.final_state.status());
    println!("{}", result.report());
    Ok(())
}
