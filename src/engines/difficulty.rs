//! Difficulty tiers and the one-call search entry point.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use log::debug;

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_greedy::GreedyEngine;
use crate::engines::engine_one_ply::OnePlyEngine;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::{Board, Color, Move};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Difficulty {
    /// Uniform random legal move.
    Easy,
    /// Random capture when one exists, otherwise any legal move.
    #[default]
    Normal,
    /// Best material balance after one ply.
    Hard,
}

impl Difficulty {
    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "1" => Ok(Difficulty::Easy),
            "normal" | "2" => Ok(Difficulty::Normal),
            "hard" | "3" => Ok(Difficulty::Hard),
            _ => Err(ChessError::UnknownDifficulty(s.to_owned())),
        }
    }
}

/// Engine for `difficulty`; `seed` makes the random tiers reproducible.
pub fn build_engine(difficulty: Difficulty, seed: Option<u64>) -> Box<dyn Engine> {
    match (difficulty, seed) {
        (Difficulty::Easy, Some(seed)) => Box::new(RandomEngine::with_seed(seed)),
        (Difficulty::Easy, None) => Box::new(RandomEngine::new()),
        (Difficulty::Normal, Some(seed)) => Box::new(GreedyEngine::with_seed(seed)),
        (Difficulty::Normal, None) => Box::new(GreedyEngine::new()),
        (Difficulty::Hard, _) => Box::new(OnePlyEngine::new()),
    }
}

/// Pick a move for `side` from `legal_moves` at `difficulty`.
///
/// Fails with `NoMoveAvailable` on an empty move list; callers should check
/// `GameState::is_game_over` first.
pub fn choose_move(
    legal_moves: &[Move],
    board: &Board,
    side: Color,
    difficulty: Difficulty,
) -> ChessResult<Move> {
    let mut engine = build_engine(difficulty, None);
    let out = engine.choose_move(legal_moves, board, side)?;
    let best = out.best_move.ok_or(ChessError::NoMoveAvailable)?;
    debug!("{} chose {best} for {side}", engine.name());
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{GameState, Square};

    #[test]
    fn parses_names_and_numbers() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("Normal".parse::<Difficulty>(), Ok(Difficulty::Normal));
        assert_eq!("3".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("expert".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::Hard.to_string(), "hard");
    }

    #[test]
    fn every_tier_returns_a_legal_move() {
        let game = GameState::new_game();
        let moves = game.all_legal_moves();
        for difficulty in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
            let mv = choose_move(&moves, &game.board(), game.turn(), difficulty)
                .expect("start position has moves");
            assert!(game.is_legal_move(mv));
        }
    }

    #[test]
    fn empty_universe_is_an_error() {
        let game = GameState::new_game();
        for difficulty in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
            assert_eq!(
                choose_move(&[], &game.board(), game.turn(), difficulty),
                Err(ChessError::NoMoveAvailable)
            );
        }
    }

    #[test]
    fn hard_takes_the_hanging_queen() {
        let game = GameState::from_fen("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1").expect("fen should parse");
        let mv = choose_move(&game.all_legal_moves(), &game.board(), game.turn(), Difficulty::Hard)
            .expect("position has moves");
        assert_eq!(mv, Move::new(Square::new(3, 4), Square::new(4, 3)));
    }
}
