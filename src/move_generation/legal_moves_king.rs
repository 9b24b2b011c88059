use crate::game_state::chess_types::*;

/// One step in any direction. No castling.
#[inline]
pub fn is_king_move(from: Square, to: Square) -> bool {
    let d_row = (to.row - from.row).abs();
    let d_col = (to.col - from.col).abs();
    d_row <= 1 && d_col <= 1 && (d_row, d_col) != (0, 0)
}
