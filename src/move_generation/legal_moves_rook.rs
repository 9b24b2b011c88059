use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::is_path_clear;

#[inline]
pub fn is_straight(from: Square, to: Square) -> bool {
    (from.row == to.row) != (from.col == to.col)
}

pub fn is_rook_move(board: &Board, from: Square, to: Square) -> bool {
    is_straight(from, to) && is_path_clear(board, from, to)
}
