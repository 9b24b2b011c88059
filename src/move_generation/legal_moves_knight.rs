use crate::game_state::chess_types::*;

/// Knight jump pattern. Intermediate squares are never inspected.
#[inline]
pub fn is_knight_move(from: Square, to: Square) -> bool {
    let d_row = (to.row - from.row).abs();
    let d_col = (to.col - from.col).abs();
    (d_row == 2 && d_col == 1) || (d_row == 1 && d_col == 2)
}
