//! Mancala Core - Kalah rules engine
//!
//! This crate provides the game logic for six-pit, four-seed Kalah:
//! - Board geometry (14-slot ring of pits and stores)
//! - Board state and sow move application, including captures and the end-of-game sweep
//! - Read-only board snapshots and final outcome

pub mod layout;
pub mod game;
pub mod view;
pub mod error;

// Re-exports for convenient access
pub use layout::{SIZE, INITIAL_SEEDS, TOTAL_SEEDS};
pub use game::{Board, GameStatus, Move, Player};
pub use view::{BoardView, GameOutcome};
pub use error::{ParseMoveError, SowError};
