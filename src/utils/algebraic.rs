//! Square conversions for coordinate text.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and board
//! squares. Row 0 is rank 1 and column 0 is the a-file.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert coordinate text (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    Ok(Square::new((rank - b'1') as i8, (file - b'a') as i8))
}

/// Convert an on-board square to coordinate text (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> ChessResult<String> {
    if !square.is_on_board() {
        return Err(ChessError::InvalidSquare(format!(
            "({}, {})",
            square.row, square.col
        )));
    }
    Ok(square.to_string())
}
