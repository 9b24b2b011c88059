//! Full legality predicate and legal move enumeration.
//!
//! Every function takes the board and the side to test explicitly, so the
//! live game never has to be mutated to look at a position from another
//! side's perspective. Enumeration order is row-major over sources and then
//! destinations, which the search relies on for tie-breaking.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_shared::piece_on_square;
use crate::move_generation::legal_moves_bishop::is_bishop_move;
use crate::move_generation::legal_moves_king::is_king_move;
use crate::move_generation::legal_moves_knight::is_knight_move;
use crate::move_generation::legal_moves_pawn::is_pawn_move;
use crate::move_generation::legal_moves_queen::is_queen_move;
use crate::move_generation::legal_moves_rook::is_rook_move;

/// Movement-shape check for `piece`, ignoring check implications.
pub fn is_legal_pattern(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    match piece.kind {
        PieceKind::Pawn => is_pawn_move(board, piece.color, from, to),
        PieceKind::Knight => is_knight_move(from, to),
        PieceKind::Bishop => is_bishop_move(board, from, to),
        PieceKind::Rook => is_rook_move(board, from, to),
        PieceKind::Queen => is_queen_move(board, from, to),
        PieceKind::King => is_king_move(from, to),
    }
}

/// Whether `side` may play `mv` on `board`.
///
/// Does not know about game-over; `GameState::is_legal_move` layers that on.
pub fn is_legal_move(board: &Board, side: Color, mv: Move) -> bool {
    let Move { from, to, promotion } = mv;
    if !from.is_on_board() || !to.is_on_board() || from == to {
        return false;
    }

    let Some(piece) = piece_on_square(board, from) else {
        return false;
    };
    if piece.color != side {
        return false;
    }
    if matches!(piece_on_square(board, to), Some(target) if target.color == side) {
        return false;
    }
    // The promotion field only matters when a pawn reaches its last row.
    let is_promotion = piece.kind == PieceKind::Pawn && to.row == piece.color.promotion_row();
    if is_promotion && promotion.is_some_and(|kind| !kind.is_promotion_target()) {
        return false;
    }

    if !is_legal_pattern(board, piece, from, to) {
        return false;
    }

    // Illegal if own king is in check after move.
    !is_king_in_check(&apply_move(board, mv), side)
}

/// Legal moves for the piece on `from`, destinations in row-major order.
pub fn legal_moves_from(board: &Board, side: Color, from: Square) -> Vec<Move> {
    match piece_on_square(board, from) {
        Some(piece) if piece.color == side => Square::all()
            .map(|to| Move::new(from, to))
            .filter(|mv| is_legal_move(board, side, *mv))
            .collect(),
        _ => Vec::new(),
    }
}

/// Every legal move for `side`, in square-scan order.
pub fn all_legal_moves(board: &Board, side: Color) -> Vec<Move> {
    let mut legal = Vec::with_capacity(64);
    for from in Square::all() {
        legal.extend(legal_moves_from(board, side, from));
    }
    legal
}

/// Short-circuiting existence test used for terminal-state detection.
pub fn has_any_legal_move(board: &Board, side: Color) -> bool {
    Square::all().any(|from| match piece_on_square(board, from) {
        Some(piece) if piece.color == side => Square::all()
            .any(|to| is_legal_move(board, side, Move::new(from, to))),
        _ => false,
    })
}
