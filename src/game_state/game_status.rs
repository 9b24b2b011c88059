use std::fmt;

use crate::game_state::chess_types::Color;

/// Banner-level summary of a game, derived from the engine after each move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    ToMove(Color),
    InCheck(Color),
    Checkmate { winner: Color },
    Stalemate,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::ToMove(color) => write!(f, "{color} to move"),
            GameStatus::InCheck(color) => write!(f, "{color} is in check"),
            GameStatus::Checkmate { winner } => write!(f, "Checkmate - {winner} wins"),
            GameStatus::Stalemate => f.write_str("Stalemate (draw)"),
        }
    }
}
