//! Hard tier: one-ply static evaluation.
//!
//! Each candidate is applied to a scratch board and scored for the moving
//! side. The opponent's reply is not simulated. Ties keep the earliest move
//! in the supplied order, which is square-scan order when the list comes
//! from the rules engine.

use log::trace;

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::chess_types::{Board, Color, Move};
use crate::move_generation::legal_move_apply::apply_move;
use crate::search::board_scoring::{BoardScorer, MaterialScorer};

pub struct OnePlyEngine<S: BoardScorer = MaterialScorer> {
    scorer: S,
}

impl OnePlyEngine<MaterialScorer> {
    pub fn new() -> Self {
        Self {
            scorer: MaterialScorer,
        }
    }
}

impl Default for OnePlyEngine<MaterialScorer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: BoardScorer> Engine for OnePlyEngine<S> {
    fn name(&self) -> &str {
        "Parlor One-Ply"
    }

    fn choose_move(
        &mut self,
        legal_moves: &[Move],
        board: &Board,
        side: Color,
    ) -> ChessResult<EngineOutput> {
        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string one_ply_engine legal_moves {}",
            legal_moves.len()
        ));

        let mut best: Option<(Move, i32)> = None;
        for mv in legal_moves {
            let score = self.scorer.score(&apply_move(board, *mv), side);
            trace!("one-ply {mv} scores {score} for {side}");
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((*mv, score));
            }
        }

        if let Some((mv, score)) = best {
            out.info_lines
                .push(format!("info string one_ply_engine score {score}"));
            out.best_move = Some(mv);
        }
        Ok(out)
    }
}
