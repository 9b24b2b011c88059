//! Live game model.
//!
//! `GameState` owns the board, the side to move, and the terminal outcome.
//! It is only mutated by `make_move` and `reset`; every query either reads a
//! field or delegates to the pure functions in `move_generation` with the
//! side passed explicitly.

use log::{debug, info};

use crate::chess_errors::ChessResult;
use crate::game_state::chess_rules::starting_board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move_on_board;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{
    all_legal_moves, has_any_legal_move, is_legal_move, legal_moves_from,
};
use crate::move_generation::legal_move_shared::piece_on_square;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen_board;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    game_over: bool,
    winner: Winner,

    // Bookkeeping for front-ends; never consulted by the rules.
    last_move: Option<Move>,
    captured: [Vec<Piece>; 2],
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard starting position, White to move.
    pub fn new_game() -> Self {
        Self {
            board: starting_board(),
            side_to_move: Color::White,
            game_over: false,
            winner: Winner::None,
            last_move: None,
            captured: [Vec::new(), Vec::new()],
        }
    }

    /// Arbitrary position. Terminal state is computed immediately so a
    /// loaded mate or stalemate is reported as finished.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        let mut game = Self {
            board,
            side_to_move,
            ..Self::new_game()
        };
        game.update_terminal_state();
        game
    }

    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        let (board, side) = parse_fen_board(fen)?;
        Ok(Self::from_board(board, side))
    }

    pub fn get_fen(&self) -> String {
        generate_fen(&self.board, self.side_to_move)
    }

    pub fn reset(&mut self) {
        *self = Self::new_game();
        debug!("game reset to starting position");
    }

    /// Independent snapshot of the board.
    #[inline]
    pub fn board(&self) -> Board {
        self.board
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[inline]
    pub fn winner(&self) -> Winner {
        self.winner
    }

    /// Occupant of `(row, col)`; off-board coordinates read as empty.
    #[inline]
    pub fn piece_at(&self, row: i8, col: i8) -> Option<Piece> {
        piece_on_square(&self.board, Square::new(row, col))
    }

    #[inline]
    pub fn is_check(&self, color: Color) -> bool {
        is_king_in_check(&self.board, color)
    }

    pub fn is_legal_move(&self, mv: Move) -> bool {
        !self.game_over && is_legal_move(&self.board, self.side_to_move, mv)
    }

    /// Legal moves for the piece on `square`. Empty for an empty square, an
    /// opponent's piece, or a finished game.
    pub fn legal_moves_for(&self, square: Square) -> Vec<Move> {
        if self.game_over {
            return Vec::new();
        }
        legal_moves_from(&self.board, self.side_to_move, square)
    }

    /// Every legal move for the side to move in square-scan order.
    pub fn all_legal_moves(&self) -> Vec<Move> {
        if self.game_over {
            return Vec::new();
        }
        all_legal_moves(&self.board, self.side_to_move)
    }

    /// Validate and apply `mv`. Returns `false` and leaves the game untouched
    /// when the move is not legal.
    pub fn make_move(&mut self, mv: Move) -> bool {
        if !self.is_legal_move(mv) {
            debug!("rejected move {mv} for {}", self.side_to_move);
            return false;
        }

        let mover = self.side_to_move;
        if let Some(taken) = apply_move_on_board(&mut self.board, mv) {
            self.captured[mover.index()].push(taken);
        }
        self.last_move = Some(mv);
        self.side_to_move = mover.opposite();
        debug!("{mover} played {mv}");

        self.update_terminal_state();
        true
    }

    pub fn status(&self) -> GameStatus {
        match (self.game_over, self.winner) {
            (true, Winner::Side(winner)) => GameStatus::Checkmate { winner },
            (true, _) => GameStatus::Stalemate,
            (false, _) if self.is_check(self.side_to_move) => GameStatus::InCheck(self.side_to_move),
            (false, _) => GameStatus::ToMove(self.side_to_move),
        }
    }

    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Enemy pieces `color` has taken, in capture order.
    #[inline]
    pub fn captured_by(&self, color: Color) -> &[Piece] {
        &self.captured[color.index()]
    }

    fn update_terminal_state(&mut self) {
        let side = self.side_to_move;
        if has_any_legal_move(&self.board, side) {
            self.game_over = false;
            self.winner = Winner::None;
            return;
        }

        self.game_over = true;
        if is_king_in_check(&self.board, side) {
            self.winner = Winner::Side(side.opposite());
            info!("checkmate, {} wins", side.opposite());
        } else {
            self.winner = Winner::Draw;
            info!("stalemate, {side} has no legal move");
        }
    }
}
