//! Moves as long algebraic text (`e2e4`, `e7e8q`).

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn move_to_long_algebraic(mv: Move) -> ChessResult<String> {
    let mut out = square_to_algebraic(mv.from)?;
    out.push_str(&square_to_algebraic(mv.to)?);
    if let Some(promotion) = mv.promotion {
        out.push(promotion_to_char(promotion)?);
    }
    Ok(out)
}

/// Parse `e2e4` or `e7e8q`. Legality is left to the rules engine.
pub fn long_algebraic_to_move(long_algebraic: &str) -> ChessResult<Move> {
    let text = long_algebraic.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ChessError::InvalidMoveText(long_algebraic.to_owned()));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    let promotion = match text.chars().nth(4) {
        Some(ch) => Some(char_to_promotion(ch)?),
        None => None,
    };

    Ok(Move { from, to, promotion })
}

fn promotion_to_char(piece: PieceKind) -> ChessResult<char> {
    match piece {
        PieceKind::Knight => Ok('n'),
        PieceKind::Bishop => Ok('b'),
        PieceKind::Rook => Ok('r'),
        PieceKind::Queen => Ok('q'),
        other => Err(ChessError::InvalidMoveText(format!(
            "{other:?} is not a promotion piece"
        ))),
    }
}

fn char_to_promotion(ch: char) -> ChessResult<PieceKind> {
    match ch.to_ascii_lowercase() {
        'n' => Ok(PieceKind::Knight),
        'b' => Ok(PieceKind::Bishop),
        'r' => Ok(PieceKind::Rook),
        'q' => Ok(PieceKind::Queen),
        _ => Err(ChessError::InvalidMoveText(format!(
            "invalid promotion piece '{ch}'"
        ))),
    }
}
