//! Error types for move validation and parsing

use crate::game::Player;
use crate::layout::SIZE;

/// Reasons a sow is rejected. The board is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SowError {
    #[error("the game is over")]
    GameOver,

    #[error("it is {expected}'s turn, not {actual}'s")]
    WrongTurn { expected: Player, actual: Player },

    #[error("pit {pit} is out of range (expected 0..={})", SIZE - 1)]
    OutOfRange { pit: usize },

    #[error("pit {pit} of {player} is empty")]
    EmptyPit { player: Player, pit: usize },
}

/// Errors from parsing players and moves out of text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseMoveError {
    #[error("unknown player: {0:?}")]
    UnknownPlayer(String),

    #[error("invalid pit number: {0:?}")]
    InvalidPit(String),

    #[error("expected <player>:<pit>, got {0:?}")]
    Malformed(String),
}
