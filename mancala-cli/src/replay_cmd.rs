//! Replay command - apply a fixed list of moves to a fresh board
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: load_moves(), replay()
//! - Level 3: parse_move_list(), load_script()
//! - Level 4: rendering (delegated to render module)

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use mancala_core::{Board, Move};

use crate::render;
use crate::GlobalOpts;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct ReplayArgs {
    /// Moves as `<player>:<pit>` separated by commas or spaces, e.g. "p1:2,p1:5,p2:1"
    #[arg(long, conflicts_with = "script", required_unless_present = "script")]
    pub moves: Option<String>,

    /// JSON file holding an array of {"player": "One", "pit": 2} moves
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run replay command
///
/// 1. Load the move list
/// 2. Apply every move to a fresh board
/// 3. Print the final board
pub fn run(args: ReplayArgs, opts: GlobalOpts) -> Result<()> {
    let moves = load_moves(&args)?;

    tracing::info!("Replaying {} moves", moves.len());

    let board = replay(&moves)?;

    render::print_board(&board.view(), opts.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn load_moves(args: &ReplayArgs) -> Result<Vec<Move>> {
    match (&args.moves, &args.script) {
        (Some(list), _) => parse_move_list(list),
        (None, Some(path)) => load_script(path),
        (None, None) => anyhow::bail!("either --moves or --script is required"),
    }
}

/// Apply moves in order, stopping at the first rejected one
pub fn replay(moves: &[Move]) -> Result<Board> {
    let mut board = Board::new();

    for (i, &mv) in moves.iter().enumerate() {
        let (next, status) = board
            .apply(mv)
            .with_context(|| format!("move {} ({}) rejected", i + 1, mv))?;
        tracing::debug!("Move {}: {} -> next {}, {:?}", i + 1, mv, next, status);
    }

    Ok(board)
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

pub fn parse_move_list(list: &str) -> Result<Vec<Move>> {
    list.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<Move>()
                .with_context(|| format!("Failed to parse move {:?}", token))
        })
        .collect()
}

fn load_script(path: &Path) -> Result<Vec<Move>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read move script: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse move script: {}", path.display()))
}
