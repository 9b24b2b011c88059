//! Canonical chess-rule constants.
//!
//! Stores the standard starting layout, both as FEN text and as a directly
//! constructed board used by `GameState::new_game`.

use crate::game_state::chess_types::*;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
///
/// Castling and en-passant fields are always `-` since neither is modelled.
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

/// Back-rank order from the a-file to the h-file.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub fn starting_board() -> Board {
    let mut board = EMPTY_BOARD;
    for (col, kind) in BACK_RANK.iter().enumerate() {
        board[0][col] = Some(Piece::new(*kind, Color::White));
        board[1][col] = Some(Piece::new(PieceKind::Pawn, Color::White));
        board[6][col] = Some(Piece::new(PieceKind::Pawn, Color::Black));
        board[7][col] = Some(Piece::new(*kind, Color::Black));
    }
    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen_generator::generate_fen;

    #[test]
    fn starting_board_matches_starting_fen() {
        let board = starting_board();
        assert_eq!(generate_fen(&board, Color::White), STARTING_POSITION_FEN);
    }

    #[test]
    fn starting_board_has_one_king_each() {
        let board = starting_board();
        let kings = board
            .iter()
            .flatten()
            .flatten()
            .filter(|p| p.kind == PieceKind::King)
            .count();
        assert_eq!(kings, 2);
        assert_eq!(board[0][4].map(|p| p.kind), Some(PieceKind::King));
        assert_eq!(board[7][4].map(|p| p.color), Some(Color::Black));
    }
}
