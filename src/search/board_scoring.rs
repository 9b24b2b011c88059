//! Static board evaluation.
//!
//! Scoring is delegated through `BoardScorer` so the one-ply engine does not
//! depend on a particular heuristic.

use crate::game_state::chess_types::*;

pub trait BoardScorer: Send + Sync {
    /// Score from the perspective of `side`; higher is better for `side`.
    fn score(&self, board: &Board, side: Color) -> i32;
}

/// Plain material count with conventional relative values.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 100,
        }
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &Board, side: Color) -> i32 {
        board
            .iter()
            .flatten()
            .flatten()
            .map(|piece| {
                let value = Self::piece_value(piece.kind);
                if piece.color == side {
                    value
                } else {
                    -value
                }
            })
            .sum()
    }
}
