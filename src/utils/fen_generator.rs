//! Board-to-FEN text generation.
//!
//! Castling and en-passant fields are always `-` and the clocks are fixed at
//! `0 1`, since the rules engine models neither.

use crate::game_state::chess_types::*;

pub fn generate_fen(board: &Board, side_to_move: Color) -> String {
    let mut out = String::new();

    for row in (0..8).rev() {
        let mut empty_run = 0u8;
        for col in 0..8 {
            match board[row][col] {
                Some(piece) => {
                    if empty_run > 0 {
                        out.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    out.push(piece_to_fen_char(piece));
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            out.push(char::from(b'0' + empty_run));
        }
        if row > 0 {
            out.push('/');
        }
    }

    out.push(' ');
    out.push(match side_to_move {
        Color::White => 'w',
        Color::Black => 'b',
    });
    out.push_str(" - - 0 1");
    out
}

pub fn piece_to_fen_char(piece: Piece) -> char {
    let ch = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color {
        Color::White => ch.to_ascii_uppercase(),
        Color::Black => ch,
    }
}
