//! Text and JSON rendering of board snapshots
//!
//! The text board reads as the physical ring: player two's row runs right-to-left
//! across the top, player one's row left-to-right along the bottom, with player
//! two's store on the left and player one's on the right.

use std::fmt::Write as _;

use anyhow::Result;
use serde::Serialize;

use mancala_core::{BoardView, GameOutcome, GameStatus, Player, SIZE};

/// Snapshot plus outcome, as emitted by `--json`
#[derive(Serialize)]
struct JsonBoard<'a> {
    #[serde(flatten)]
    view: &'a BoardView,
    outcome: Option<GameOutcome>,
}

/// Print a board to stdout in the selected format
pub fn print_board(view: &BoardView, json: bool) -> Result<()> {
    if json {
        println!("{}", board_json(view)?);
    } else {
        print!("{}", board_text(view));
    }
    Ok(())
}

pub fn board_json(view: &BoardView) -> Result<String> {
    let output = JsonBoard {
        view,
        outcome: view.outcome(),
    };
    Ok(serde_json::to_string_pretty(&output)?)
}

pub fn board_text(view: &BoardView) -> String {
    let mut out = String::new();

    let top_labels: String = (0..SIZE).rev().map(|pit| format!("{:>4}", pit)).collect();
    let top_row: String = view
        .row(Player::Two)
        .iter()
        .rev()
        .map(|seeds| format!("{:>4}", seeds))
        .collect();
    let bottom_row: String = view
        .row(Player::One)
        .iter()
        .map(|seeds| format!("{:>4}", seeds))
        .collect();
    let bottom_labels: String = (0..SIZE).map(|pit| format!("{:>4}", pit)).collect();

    let _ = writeln!(out, "    {}   <- {}", top_labels, Player::Two);
    let _ = writeln!(out, "    {}", top_row);
    let _ = writeln!(
        out,
        "{:>4}{:width$}{:>4}",
        view.store(Player::Two),
        "",
        view.store(Player::One),
        width = 4 * SIZE
    );
    let _ = writeln!(out, "    {}", bottom_row);
    let _ = writeln!(out, "    {}   <- {}", bottom_labels, Player::One);
    let _ = writeln!(out, "{}", status_line(view));

    out
}

fn status_line(view: &BoardView) -> String {
    match (view.status, view.outcome()) {
        (GameStatus::Finished, Some(GameOutcome::Winner(player))) => format!(
            "game over: {} wins {}-{}",
            player,
            view.store(player),
            view.store(player.opponent())
        ),
        (GameStatus::Finished, _) => format!("game over: draw {}-{}", view.stores[0], view.stores[1]),
        (GameStatus::Fresh, _) => format!("new game, {} to move", view.next_player),
        (GameStatus::Started, _) => format!("{} to move", view.next_player),
    }
}
