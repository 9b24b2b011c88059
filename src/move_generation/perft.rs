//! Move-tree node counting for validating the legal move generator.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{all_legal_moves, has_any_legal_move};
use crate::move_generation::legal_move_shared::piece_on_square;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Count leaf positions `depth` plies below `game_state`.
///
/// A finished game has no children regardless of depth.
pub fn perft(game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }
    if game_state.is_game_over() {
        return PerftCounts::default();
    }
    let board = game_state.board();
    perft_recurse(&board, game_state.turn(), depth)
}

fn perft_recurse(board: &Board, side: Color, depth: u8) -> PerftCounts {
    let mut total = PerftCounts::default();

    for mv in all_legal_moves(board, side) {
        if depth == 1 {
            total.merge(classify_leaf(board, side, mv));
            continue;
        }
        let next = apply_move(board, mv);
        total.merge(perft_recurse(&next, side.opposite(), depth - 1));
    }

    total
}

fn classify_leaf(board: &Board, side: Color, mv: Move) -> PerftCounts {
    let next = apply_move(board, mv);
    let gives_check = is_king_in_check(&next, side.opposite());
    let is_promotion = matches!(
        piece_on_square(board, mv.from),
        Some(Piece { kind: PieceKind::Pawn, .. })
    ) && mv.to.row == side.promotion_row();

    PerftCounts {
        nodes: 1,
        captures: usize::from(piece_on_square(board, mv.to).is_some()),
        promotions: usize::from(is_promotion),
        checks: usize::from(gives_check),
        checkmates: usize::from(gives_check && !has_any_legal_move(&next, side.opposite())),
    }
}
