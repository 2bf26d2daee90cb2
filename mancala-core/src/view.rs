//! Read-only board snapshots

use serde::Serialize;

use crate::game::{GameStatus, Player};
use crate::layout::SIZE;

/// Final result of a finished game
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Snapshot of a [`crate::Board`].
///
/// `pits[p]` lists player `p`'s pits in that player's sowing order, so index 0 is always
/// the pit sown from first and index `SIZE - 1` sits next to the player's store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub pits: [[u32; SIZE]; 2],
    pub stores: [u32; 2],
    pub next_player: Player,
    pub status: GameStatus,
}

impl BoardView {
    pub fn row(&self, player: Player) -> &[u32; SIZE] {
        &self.pits[player.index()]
    }

    pub fn store(&self, player: Player) -> u32 {
        self.stores[player.index()]
    }

    /// Seeds across all pits and stores
    pub fn total_seeds(&self) -> u32 {
        self.pits.iter().flatten().sum::<u32>() + self.stores.iter().sum::<u32>()
    }

    /// Winner by store count, once the game is finished
    pub fn outcome(&self) -> Option<GameOutcome> {
        if self.status != GameStatus::Finished {
            return None;
        }

        let one = self.store(Player::One);
        let two = self.store(Player::Two);
        Some(match one.cmp(&two) {
            std::cmp::Ordering::Greater => GameOutcome::Winner(Player::One),
            std::cmp::Ordering::Less => GameOutcome::Winner(Player::Two),
            std::cmp::Ordering::Equal => GameOutcome::Draw,
        })
    }
}
