//! Board geometry: the 14-slot ring of pits and stores
//!
//! Slots are numbered in sowing order:
//!
//! ```text
//!  0..=5   player one's pits
//!  6       player one's store
//!  7..=12  player two's pits
//!  13      player two's store
//! ```

use crate::game::Player;

/// Pits per side
pub const SIZE: usize = 6;

/// Seeds placed in every pit of a fresh board
pub const INITIAL_SEEDS: u32 = 4;

/// Seeds in play for the lifetime of a board
pub const TOTAL_SEEDS: u32 = INITIAL_SEEDS * (2 * SIZE) as u32;

/// Pits and stores together
pub const SLOTS: usize = 2 * SIZE + 2;

/// Slot holding `player`'s pit at `pit` (0 is sown from first)
pub const fn pit_slot(player: Player, pit: usize) -> usize {
    player.index() * (SIZE + 1) + pit
}

/// Slot holding `player`'s store
pub const fn store_slot(player: Player) -> usize {
    player.index() * (SIZE + 1) + SIZE
}

/// Side of the board a slot belongs to
pub fn owner(slot: usize) -> Player {
    if slot <= SIZE {
        Player::One
    } else {
        Player::Two
    }
}

/// Check if this slot is a store rather than a playing pit
pub fn is_store(slot: usize) -> bool {
    slot == SIZE || slot == SLOTS - 1
}

/// Mirror pit across the board (pit `i` faces pit `SIZE - 1 - i` of the other side)
pub fn opposite(slot: usize) -> usize {
    debug_assert!(!is_store(slot), "stores have no opposite");
    2 * SIZE - slot
}

/// Next slot a seed sown by `sower` lands in after `slot`.
/// The opponent's store is stepped over.
pub fn next_slot(slot: usize, sower: Player) -> usize {
    let next = (slot + 1) % SLOTS;
    if next == store_slot(sower.opponent()) {
        (next + 1) % SLOTS
    } else {
        next
    }
}
