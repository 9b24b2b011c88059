use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{enemy_piece_on, piece_on_square};

/// Pawn movement pattern: single push, double push from the start row, or a
/// diagonal step onto an enemy piece. No en-passant.
pub fn is_pawn_move(board: &Board, color: Color, from: Square, to: Square) -> bool {
    let direction = color.pawn_direction();
    let d_row = to.row - from.row;
    let d_col = to.col - from.col;
    let target = piece_on_square(board, to);

    if d_col == 0 {
        if target.is_some() {
            return false;
        }
        if d_row == direction {
            return true;
        }
        if d_row == 2 * direction && from.row == color.pawn_start_row() {
            let between = Square::new(from.row + direction, from.col);
            return piece_on_square(board, between).is_none();
        }
        return false;
    }

    d_col.abs() == 1 && d_row == direction && enemy_piece_on(board, color, to).is_some()
}

/// Squares a pawn of `color` on `from` attacks, regardless of occupancy.
#[inline]
pub fn pawn_attacks(color: Color, from: Square, target: Square) -> bool {
    target.row - from.row == color.pawn_direction() && (target.col - from.col).abs() == 1
}
