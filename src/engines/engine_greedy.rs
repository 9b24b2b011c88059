//! Normal tier: random choice among captures, falling back to any legal move.

use log::trace;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::chess_types::{Board, Color, Move};
use crate::move_generation::legal_move_shared::enemy_piece_on;

pub struct GreedyEngine {
    rng: StdRng,
}

impl GreedyEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "Parlor Greedy"
    }

    fn choose_move(
        &mut self,
        legal_moves: &[Move],
        board: &Board,
        side: Color,
    ) -> ChessResult<EngineOutput> {
        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string greedy_engine legal_moves {}",
            legal_moves.len()
        ));

        if legal_moves.is_empty() {
            return Ok(out);
        }

        let captures: Vec<Move> = legal_moves
            .iter()
            .copied()
            .filter(|mv| enemy_piece_on(board, side, mv.to).is_some())
            .collect();
        out.info_lines.push(format!(
            "info string greedy_engine captures {}",
            captures.len()
        ));

        let pool = if captures.is_empty() {
            legal_moves
        } else {
            captures.as_slice()
        };
        let picked = pool
            .choose(&mut self.rng)
            .ok_or(ChessError::NoMoveAvailable)?;
        trace!("greedy engine picked {picked} for {side} from {} candidates", pool.len());

        out.best_move = Some(*picked);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::GreedyEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::chess_types::*;

    #[test]
    fn always_takes_when_a_capture_exists() {
        let game = GameState::from_fen("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1").expect("fen should parse");
        let moves = game.all_legal_moves();
        let capture = Move::new(Square::new(3, 4), Square::new(4, 3));
        assert!(moves.contains(&capture));

        for seed in 0..20 {
            let mut engine = GreedyEngine::with_seed(seed);
            let out = engine
                .choose_move(&moves, &game.board(), Color::White)
                .expect("greedy engine should not fail");
            assert_eq!(out.best_move, Some(capture));
        }
    }

    #[test]
    fn falls_back_to_quiet_moves() {
        let game = GameState::new_game();
        let moves = game.all_legal_moves();
        let mut engine = GreedyEngine::with_seed(3);
        let out = engine
            .choose_move(&moves, &game.board(), Color::White)
            .expect("greedy engine should not fail");
        let best = out.best_move.expect("start position has moves");
        assert!(moves.contains(&best));
    }
}
