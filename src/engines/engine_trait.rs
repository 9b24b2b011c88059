//! Engine abstraction layer used by the text protocol and match harness.
//!
//! Engines never generate or validate moves themselves: they pick from the
//! legal moves the rules engine hands them, so whatever they return can be
//! submitted straight back through `GameState::make_move`.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::{Board, Color, Move};

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Pick one of `legal_moves` for `side` on `board`. An empty move list
    /// yields `best_move: None`.
    fn choose_move(
        &mut self,
        legal_moves: &[Move],
        board: &Board,
        side: Color,
    ) -> ChessResult<EngineOutput>;
}
