use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{piece_on_square, set_square};

/// Piece kind that lands on `mv.to` when `piece` makes the move.
#[inline]
pub fn landing_kind(piece: Piece, mv: Move) -> PieceKind {
    if piece.kind == PieceKind::Pawn && mv.to.row == piece.color.promotion_row() {
        mv.promotion.unwrap_or(PieceKind::Queen)
    } else {
        piece.kind
    }
}

/// Move a piece on `board` in place, returning whatever was captured.
///
/// Performs no legality checking; a move from an empty or off-board square
/// leaves the board untouched.
pub fn apply_move_on_board(board: &mut Board, mv: Move) -> Option<Piece> {
    let piece = piece_on_square(board, mv.from)?;
    if !mv.to.is_on_board() {
        return None;
    }

    let captured = piece_on_square(board, mv.to);
    set_square(board, mv.from, None);
    set_square(
        board,
        mv.to,
        Some(Piece {
            kind: landing_kind(piece, mv),
            color: piece.color,
            has_moved: true,
        }),
    );
    captured
}

/// Copying variant used for hypothetical positions.
#[inline]
pub fn apply_move(board: &Board, mv: Move) -> Board {
    let mut next = *board;
    apply_move_on_board(&mut next, mv);
    next
}
