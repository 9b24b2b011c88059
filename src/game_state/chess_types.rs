//! Core value types shared by the rules engine and the move search.
//!
//! Every type here is a small `Copy` value so boards can be duplicated freely
//! when a hypothetical move has to be evaluated without touching live state.

use std::fmt;

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::game_status::GameStatus;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn push for this color.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    #[inline]
    pub const fn pawn_start_row(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Row on which this color's pawns promote.
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Piece kind (color is carried separately on [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Kinds a pawn is allowed to turn into on the back rank.
    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }
}

/// A piece on the board.
///
/// `has_moved` is set whenever the piece is moved. No rule reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            has_moved: false,
        }
    }
}

/// Board coordinate. Row 0 is White's back rank, column 0 is the a-file.
///
/// Coordinates are signed so off-board input can be represented and rejected
/// instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row >= 0 && self.row < 8 && self.col >= 0 && self.col < 8
    }

    /// Iterate all 64 squares in row-major order (a1, b1, ..., h8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8i8).flat_map(|row| (0..8i8).map(move |col| Square::new(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            write!(
                f,
                "{}{}",
                char::from(b'a' + self.col as u8),
                char::from(b'1' + self.row as u8)
            )
        } else {
            write!(f, "({},{})", self.row, self.col)
        }
    }
}

/// A requested move. `promotion` is only consulted when a pawn reaches its
/// promotion row; `None` there means a queen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(from: Square, to: Square, promotion: PieceKind) -> Self {
        Self {
            from,
            to,
            promotion: Some(promotion),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        let ch = match self.promotion {
            Some(PieceKind::Knight) => 'n',
            Some(PieceKind::Bishop) => 'b',
            Some(PieceKind::Rook) => 'r',
            Some(PieceKind::Queen) => 'q',
            // Not a promotion piece; never part of move text.
            Some(PieceKind::Pawn | PieceKind::King) | None => return Ok(()),
        };
        write!(f, "{ch}")
    }
}

/// Outcome marker. Only meaningful once the game is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Winner {
    #[default]
    None,
    Side(Color),
    Draw,
}

/// 8x8 grid indexed `[row][col]`.
pub type Board = [[Option<Piece>; 8]; 8];

/// A board with no pieces on it.
pub const EMPTY_BOARD: Board = [[None; 8]; 8];
