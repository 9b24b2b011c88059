//! Attack and check detection.
//!
//! Attack tests reuse the movement-pattern predicates but never the full
//! legality check, so they cannot recurse back into self-check filtering.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::piece_on_square;
use crate::move_generation::legal_moves_bishop::is_bishop_move;
use crate::move_generation::legal_moves_king::is_king_move;
use crate::move_generation::legal_moves_knight::is_knight_move;
use crate::move_generation::legal_moves_pawn::pawn_attacks;
use crate::move_generation::legal_moves_queen::is_queen_move;
use crate::move_generation::legal_moves_rook::is_rook_move;

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    Square::all().find(|sq| {
        matches!(
            piece_on_square(board, *sq),
            Some(Piece { kind: PieceKind::King, color: c, .. }) if c == color
        )
    })
}

/// True when the king of `color` is attacked.
///
/// A board without a king of that color counts as in check, which steers a
/// corrupted position toward a terminal state instead of an endless game.
#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        return true;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    Square::all().any(|from| match piece_on_square(board, from) {
        Some(piece) if piece.color == attacker_color => {
            can_piece_attack_square(board, piece, from, square)
        }
        _ => false,
    })
}

pub fn can_piece_attack_square(board: &Board, piece: Piece, from: Square, target: Square) -> bool {
    if from == target {
        return false;
    }
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(piece.color, from, target),
        PieceKind::Knight => is_knight_move(from, target),
        PieceKind::Bishop => is_bishop_move(board, from, target),
        PieceKind::Rook => is_rook_move(board, from, target),
        PieceKind::Queen => is_queen_move(board, from, target),
        PieceKind::King => is_king_move(from, target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::starting_board;
    use crate::utils::fen_parser::parse_fen_board;

    #[test]
    fn nobody_in_check_at_start() {
        let board = starting_board();
        assert!(!is_king_in_check(&board, Color::White));
        assert!(!is_king_in_check(&board, Color::Black));
        assert_eq!(king_square(&board, Color::White), Some(Square::new(0, 4)));
        assert_eq!(king_square(&board, Color::Black), Some(Square::new(7, 4)));
    }

    #[test]
    fn rook_on_open_file_gives_check() {
        let (board, _) = parse_fen_board("4r2k/8/8/8/8/8/8/4K3 w - - 0 1").expect("fen should parse");
        assert!(is_king_in_check(&board, Color::White));
        assert!(!is_king_in_check(&board, Color::Black));
        let rook = board[7][4].expect("rook on e8");
        assert!(can_piece_attack_square(&board, rook, Square::new(7, 4), Square::new(0, 4)));
    }

    #[test]
    fn interposed_piece_blocks_check() {
        let (board, _) =
            parse_fen_board("4r2k/8/8/8/8/8/4N3/4K3 w - - 0 1").expect("fen should parse");
        assert!(!is_king_in_check(&board, Color::White));
    }

    #[test]
    fn pawn_checks_only_diagonally_forward() {
        let (board, _) = parse_fen_board("7k/8/8/8/8/3p4/4K3/8 w - - 0 1").expect("fen should parse");
        assert!(is_king_in_check(&board, Color::White));

        let (board, _) = parse_fen_board("7k/8/8/8/8/4p3/4K3/8 w - - 0 1").expect("fen should parse");
        assert!(!is_king_in_check(&board, Color::White));
    }

    #[test]
    fn missing_king_counts_as_check() {
        let (board, _) = parse_fen_board("7k/8/8/8/8/8/8/8 w - - 0 1").expect("fen should parse");
        assert!(is_king_in_check(&board, Color::White));
        assert!(!is_king_in_check(&board, Color::Black));
    }
}
