//! FEN-to-board parser.
//!
//! Only the placement and side-to-move fields carry meaning here. Castling,
//! en-passant and clock fields are accepted when present and ignored.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;

pub fn parse_fen_board(fen: &str) -> ChessResult<(Board, Color)> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| ChessError::InvalidFen("missing board layout".to_owned()))?;
    let side_part = parts
        .next()
        .ok_or_else(|| ChessError::InvalidFen("missing side-to-move".to_owned()))?;

    if parts.count() > 4 {
        return Err(ChessError::InvalidFen("extra trailing fields".to_owned()));
    }

    let board = parse_board(board_part)?;
    let side = parse_side_to_move(side_part)?;
    Ok((board, side))
}

fn parse_board(board_part: &str) -> ChessResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::InvalidFen(
            "board layout must contain 8 ranks".to_owned(),
        ));
    }

    let mut board = EMPTY_BOARD;
    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let row = 7 - fen_rank_idx;
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessError::InvalidFen(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = piece_from_fen_char(ch).ok_or_else(|| {
                ChessError::InvalidFen(format!("invalid piece character '{ch}'"))
            })?;
            if col >= 8 {
                return Err(ChessError::InvalidFen(format!(
                    "rank '{rank_str}' has too many files"
                )));
            }
            board[row][col] = Some(piece);
            col += 1;
        }

        if col != 8 {
            return Err(ChessError::InvalidFen(format!(
                "rank '{rank_str}' does not sum to 8 files"
            )));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(ChessError::InvalidFen(format!(
            "invalid side-to-move field: {side_part}"
        ))),
    }
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };
    Some(Piece::new(kind, color))
}

#[cfg(test)]
mod tests {
    use super::parse_fen_board;
    use crate::game_state::chess_rules::{starting_board, STARTING_POSITION_FEN};
    use crate::game_state::chess_types::*;

    #[test]
    fn parses_starting_position() {
        let (board, side) = parse_fen_board(STARTING_POSITION_FEN).expect("start fen should parse");
        assert_eq!(board, starting_board());
        assert_eq!(side, Color::White);
    }

    #[test]
    fn accepts_placement_and_side_only() {
        let (board, side) = parse_fen_board("4k3/8/8/8/8/8/8/4K3 b").expect("short fen should parse");
        assert_eq!(side, Color::Black);
        assert_eq!(board[7][4], Some(Piece::new(PieceKind::King, Color::Black)));
    }

    #[test]
    fn rejects_malformed_layouts() {
        assert!(parse_fen_board("").is_err());
        assert!(parse_fen_board("8/8/8/8/8/8/8 w").is_err());
        assert!(parse_fen_board("9/8/8/8/8/8/8/8 w").is_err());
        assert!(parse_fen_board("7/8/8/8/8/8/8/8 w").is_err());
        assert!(parse_fen_board("8/8/8/8/8/8/8/7x w").is_err());
        assert!(parse_fen_board("8/8/8/8/8/8/8/8 x").is_err());
        assert!(parse_fen_board("8/8/8/8/8/8/8/8 w - - 0 1 extra").is_err());
    }
}
