//! Board state and move application

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ParseMoveError, SowError};
use crate::layout::{
    is_store, next_slot, opposite, owner, pit_slot, store_slot, INITIAL_SEEDS, SIZE, SLOTS,
};
use crate::view::BoardView;

// ============================================================================
// CORE TYPES
// ============================================================================

/// Side of the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One = 0,
    Two = 1,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// 0 for player one, 1 for player two
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => f.write_str("player one"),
            Player::Two => f.write_str("player two"),
        }
    }
}

impl FromStr for Player {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "p1" | "one" => Ok(Player::One),
            "2" | "p2" | "two" => Ok(Player::Two),
            _ => Err(ParseMoveError::UnknownPlayer(s.to_string())),
        }
    }
}

/// Lifecycle of a game
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// No move made yet
    Fresh,
    Started,
    Finished,
}

/// A sow request: `player` empties their own pit `pit` (0..SIZE)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub player: Player,
    pub pit: usize,
}

impl Move {
    pub const fn new(player: Player, pit: usize) -> Self {
        Self { player, pit }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}:{}", self.player.index() + 1, self.pit)
    }
}

/// Parses `<player>:<pit>`, e.g. `p1:2` or `2:5`
impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (player, pit) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| ParseMoveError::Malformed(s.to_string()))?;
        let player = player.parse()?;
        let pit = pit
            .trim()
            .parse()
            .map_err(|_| ParseMoveError::InvalidPit(pit.to_string()))?;
        Ok(Move { player, pit })
    }
}

// ============================================================================
// BOARD
// ============================================================================

/// Mutable game board. Mutated only through [`Board::sow`].
#[derive(Debug, PartialEq, Eq)]
pub struct Board {
    /// Seed counts, indexed by slot (see [`crate::layout`])
    pits: [u32; SLOTS],
    next_player: Player,
    status: GameStatus,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Fresh board: four seeds in every pit, empty stores, player one to move
    pub fn new() -> Self {
        let mut pits = [0; SLOTS];
        for pit in 0..SIZE {
            pits[pit_slot(Player::One, pit)] = INITIAL_SEEDS;
            pits[pit_slot(Player::Two, pit)] = INITIAL_SEEDS;
        }

        Self {
            pits,
            next_player: Player::One,
            status: GameStatus::Fresh,
        }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn next_player(&self) -> Player {
        self.next_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Read-only snapshot with each row in its owner's sowing order
    pub fn view(&self) -> BoardView {
        let mut pits = [[0; SIZE]; 2];
        for player in [Player::One, Player::Two] {
            for (pit, seeds) in pits[player.index()].iter_mut().enumerate() {
                *seeds = self.pits[pit_slot(player, pit)];
            }
        }

        BoardView {
            pits,
            stores: [
                self.pits[store_slot(Player::One)],
                self.pits[store_slot(Player::Two)],
            ],
            next_player: self.next_player,
            status: self.status,
        }
    }

    /// Pits the player to move may sow from
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.status == GameStatus::Finished {
            return vec![];
        }

        (0..SIZE)
            .filter(|&pit| self.pits[pit_slot(self.next_player, pit)] > 0)
            .map(|pit| Move::new(self.next_player, pit))
            .collect()
    }

    // ========================================================================
    // MOVE APPLICATION
    // ========================================================================

    /// Apply a [`Move`]; see [`Board::sow`]
    pub fn apply(&mut self, mv: Move) -> Result<(Player, GameStatus), SowError> {
        self.sow(mv.player, mv.pit)
    }

    /// Sow the seeds of `player`'s pit `pit` and return who moves next and the new status.
    ///
    /// On error the board is unchanged.
    pub fn sow(&mut self, player: Player, pit: usize) -> Result<(Player, GameStatus), SowError> {
        self.validate(player, pit)?;

        let mut slot = pit_slot(player, pit);
        let mut seeds = std::mem::take(&mut self.pits[slot]);
        self.status = GameStatus::Started;

        tracing::trace!(%player, pit, seeds, "sowing");

        while seeds > 0 {
            slot = next_slot(slot, player);
            self.pits[slot] += 1;
            seeds -= 1;
        }

        self.capture(player, slot);

        if !is_store(slot) {
            self.next_player = player.opponent();
        }

        self.finish_if_row_empty();

        Ok((self.next_player, self.status))
    }

    fn validate(&self, player: Player, pit: usize) -> Result<(), SowError> {
        if self.status == GameStatus::Finished {
            return Err(SowError::GameOver);
        }
        if player != self.next_player {
            return Err(SowError::WrongTurn {
                expected: self.next_player,
                actual: player,
            });
        }
        if pit >= SIZE {
            return Err(SowError::OutOfRange { pit });
        }
        if self.pits[pit_slot(player, pit)] == 0 {
            return Err(SowError::EmptyPit { player, pit });
        }
        Ok(())
    }

    /// Last seed in a previously empty own pit takes the facing pit's seeds with it
    fn capture(&mut self, player: Player, last: usize) {
        if is_store(last) || owner(last) != player || self.pits[last] != 1 {
            return;
        }

        let facing = opposite(last);
        let taken = self.pits[facing];
        if taken == 0 {
            return;
        }

        self.pits[last] = 0;
        self.pits[facing] = 0;
        self.pits[store_slot(player)] += taken + 1;

        tracing::debug!(%player, slot = last, taken, "capture");
    }

    /// Sweep every row into its owner's store once either row runs dry
    fn finish_if_row_empty(&mut self) {
        let one = self.row_total(Player::One);
        let two = self.row_total(Player::Two);
        if one != 0 && two != 0 {
            return;
        }

        for player in [Player::One, Player::Two] {
            let swept = self.row_total(player);
            for pit in 0..SIZE {
                self.pits[pit_slot(player, pit)] = 0;
            }
            self.pits[store_slot(player)] += swept;
        }
        self.status = GameStatus::Finished;

        tracing::debug!(
            store_one = self.pits[store_slot(Player::One)],
            store_two = self.pits[store_slot(Player::Two)],
            "game finished"
        );
    }

    fn row_total(&self, player: Player) -> u32 {
        (0..SIZE).map(|pit| self.pits[pit_slot(player, pit)]).sum()
    }

    /// Board from raw slot counts, for setting up positions in tests
    #[cfg(test)]
    pub(crate) fn from_slots(pits: [u32; SLOTS], next_player: Player, status: GameStatus) -> Self {
        Self {
            pits,
            next_player,
            status,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
