//! Errors used outside the rules contract.
//!
//! The rules engine itself answers with `bool`, `Option`, or empty move lists
//! and never fails. `ChessError` covers the layers around it: notation
//! parsing, the text protocol, and move search.

use std::error::Error;
use std::fmt;
use std::io;

pub type ChessResult<T> = Result<T, ChessError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// Coordinate text or index outside `a1..h8`.
    InvalidSquare(String),

    /// Long algebraic move text that could not be parsed.
    InvalidMoveText(String),

    /// FEN text that could not be turned into a position.
    InvalidFen(String),

    /// A well-formed move the rules engine refused.
    IllegalMove(String),

    /// Difficulty name that is not `easy`, `normal` or `hard`.
    UnknownDifficulty(String),

    /// Protocol line whose first word is not a known command.
    UnknownCommand(String),

    /// Search was asked for a move in a position without any.
    NoMoveAvailable,

    /// Writing protocol output failed.
    Output(String),
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::InvalidSquare(msg) => write!(f, "invalid square: {msg}"),
            ChessError::InvalidMoveText(msg) => write!(f, "invalid move text: {msg}"),
            ChessError::InvalidFen(msg) => write!(f, "invalid FEN: {msg}"),
            ChessError::IllegalMove(mv) => write!(f, "illegal move: {mv}"),
            ChessError::UnknownDifficulty(name) => write!(f, "unknown difficulty: {name}"),
            ChessError::UnknownCommand(cmd) => write!(f, "unknown command: {cmd}"),
            ChessError::NoMoveAvailable => write!(f, "no legal move available"),
            ChessError::Output(msg) => write!(f, "output error: {msg}"),
        }
    }
}

impl Error for ChessError {}

impl From<io::Error> for ChessError {
    fn from(err: io::Error) -> Self {
        ChessError::Output(err.to_string())
    }
}
