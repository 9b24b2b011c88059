//! Easy tier: uniform random choice over all legal moves.

use log::trace;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::chess_types::{Board, Color, Move};

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic selection sequence for tests and replays.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Parlor Random"
    }

    fn choose_move(
        &mut self,
        legal_moves: &[Move],
        _board: &Board,
        side: Color,
    ) -> ChessResult<EngineOutput> {
        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));

        if legal_moves.is_empty() {
            return Ok(out);
        }

        let picked = legal_moves
            .choose(&mut self.rng)
            .ok_or(ChessError::NoMoveAvailable)?;
        trace!("random engine picked {picked} for {side}");

        out.best_move = Some(*picked);
        Ok(out)
    }
}
