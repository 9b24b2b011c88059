use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::is_path_clear;

#[inline]
pub fn is_diagonal(from: Square, to: Square) -> bool {
    let d_row = to.row - from.row;
    let d_col = to.col - from.col;
    d_row != 0 && d_row.abs() == d_col.abs()
}

pub fn is_bishop_move(board: &Board, from: Square, to: Square) -> bool {
    is_diagonal(from, to) && is_path_clear(board, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::EMPTY_BOARD;

    #[test]
    fn bishop_slides_diagonally_on_empty_board() {
        let board = EMPTY_BOARD;
        assert!(is_bishop_move(&board, Square::new(0, 2), Square::new(5, 7)));
        assert!(!is_bishop_move(&board, Square::new(0, 2), Square::new(5, 6)));
    }

    #[test]
    fn bishop_is_blocked_by_any_piece_on_path() {
        let mut board = EMPTY_BOARD;
        board[2][4] = Some(Piece::new(PieceKind::Pawn, Color::Black));
        assert!(!is_bishop_move(&board, Square::new(0, 2), Square::new(3, 5)));
        assert!(is_bishop_move(&board, Square::new(0, 2), Square::new(2, 4)));
    }
}
