//! Play command - interactive two-player session on stdin/stdout
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: run_session() - prompt/read/apply loop
//! - Level 3: parse_input()
//! - Level 4: rendering (delegated to render module)

use std::io::{self, BufRead, Write};

use anyhow::Result;

use mancala_core::{Board, GameStatus, Move};

use crate::render;
use crate::GlobalOpts;

/// One line of player input
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Move(Move),
    Quit,
    Blank,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

pub fn run(opts: GlobalOpts) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let board = run_session(stdin.lock(), stdout.lock(), opts.json)?;

    tracing::info!("Session ended with status {:?}", board.status());
    Ok(())
}

// ============================================================================
// LEVEL 2 - SESSION LOOP
// ============================================================================

/// Read moves line by line until the game finishes, the input ends, or `quit`.
/// Rejected moves are reported and the same player is prompted again.
fn run_session<R: BufRead, W: Write>(input: R, mut out: W, json: bool) -> Result<Board> {
    let mut board = Board::new();
    write_board(&mut out, &board, json)?;

    let mut lines = input.lines();
    while board.status() != GameStatus::Finished {
        write!(out, "{} > ", board.next_player())?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };

        match parse_input(&line?, &board) {
            Ok(Input::Quit) => break,
            Ok(Input::Blank) => continue,
            Ok(Input::Move(mv)) => match board.apply(mv) {
                Ok(_) => write_board(&mut out, &board, json)?,
                Err(err) => {
                    tracing::debug!("Rejected {}: {}", mv, err);
                    writeln!(out, "illegal move: {}", err)?;
                }
            },
            Err(err) => writeln!(out, "{}", err)?,
        }
    }

    Ok(board)
}

// ============================================================================
// LEVEL 3 - INPUT
// ============================================================================

/// `<pit>` sows for the player to move; `<player>:<pit>` names the player explicitly
fn parse_input(line: &str, board: &Board) -> Result<Input> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Input::Blank);
    }
    if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("q") {
        return Ok(Input::Quit);
    }
    if line.contains(':') {
        return Ok(Input::Move(line.parse()?));
    }

    let pit = line
        .parse()
        .map_err(|_| anyhow::anyhow!("enter a pit number, <player>:<pit>, or quit"))?;
    Ok(Input::Move(Move::new(board.next_player(), pit)))
}

fn write_board<W: Write>(out: &mut W, board: &Board, json: bool) -> Result<()> {
    let view = board.view();
    if json {
        writeln!(out, "{}", render::board_json(&view)?)?;
    } else {
        write!(out, "{}", render::board_text(&view))?;
    }
    Ok(())
}
