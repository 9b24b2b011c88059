use crate::game_state::chess_types::*;

/// Occupant of `square`, or `None` when the square is empty or off the board.
#[inline]
pub fn piece_on_square(board: &Board, square: Square) -> Option<Piece> {
    if !square.is_on_board() {
        return None;
    }
    board[square.row as usize][square.col as usize]
}

#[inline]
pub fn enemy_piece_on(board: &Board, side: Color, square: Square) -> Option<Piece> {
    piece_on_square(board, square).filter(|piece| piece.color != side)
}

#[inline]
pub fn set_square(board: &mut Board, square: Square, piece: Option<Piece>) {
    if square.is_on_board() {
        board[square.row as usize][square.col as usize] = piece;
    }
}

/// True when every square strictly between `from` and `to` is empty.
///
/// Steps by the sign of each delta, so callers must only pass squares that
/// share a rank, file, or diagonal.
pub fn is_path_clear(board: &Board, from: Square, to: Square) -> bool {
    let step_row = (to.row - from.row).signum();
    let step_col = (to.col - from.col).signum();

    let mut row = from.row + step_row;
    let mut col = from.col + step_col;
    while row != to.row || col != to.col {
        if piece_on_square(board, Square::new(row, col)).is_some() {
            return false;
        }
        row += step_row;
        col += step_col;
    }
    true
}
