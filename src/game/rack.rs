use crate::game::letter::Letter;
use crate::ScrabbleError;
use rand::RngExt;
use serde::{Deserialize, Serialize};

/// Maximum number of tiles a player holds.
pub const RACK_SIZE: usize = 7;

/// Stable, session-scoped identifier for a dealt tile. Unlike a slot
/// index, it survives shuffles and compaction, so references held by a
/// presentation layer cannot desync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileId(pub u64);

/// A tile sitting in the rack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RackTile {
    pub id: TileId,
    pub letter: Letter,
}

/// The player's hand: an ordered sequence of up to 7 slots, each holding
/// a tile or vacated while its tile sits on the board.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rack {
    slots: Vec<Option<RackTile>>,
    next_id: u64,
}

impl Rack {
    /// Build a rack from freshly dealt letters, assigning stable ids.
    pub fn from_letters(letters: &[Letter]) -> Rack {
        let mut rack = Rack::default();
        for &letter in letters {
            rack.push_letter(letter);
        }
        rack
    }

    pub fn slots(&self) -> &[Option<RackTile>] {
        &self.slots
    }

    pub fn get(&self, index: usize) -> Option<RackTile> {
        self.slots.get(index).copied().flatten()
    }

    /// Number of occupied slots.
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// How many tiles are needed to refill the rack.
    pub fn missing_count(&self) -> usize {
        RACK_SIZE.saturating_sub(self.occupied_count())
    }

    /// Letters currently held, in slot order.
    pub fn letters(&self) -> Vec<Letter> {
        self.slots.iter().flatten().map(|t| t.letter).collect()
    }

    /// Remove the tile at `index`, leaving the slot vacated.
    pub fn take(&mut self, index: usize) -> crate::Result<RackTile> {
        self.slots
            .get_mut(index)
            .and_then(Option::take)
            .ok_or(ScrabbleError::SlotEmpty(index))
    }

    /// Append a newly drawn letter, assigning it a fresh id.
    pub fn push_letter(&mut self, letter: Letter) -> RackTile {
        let tile = RackTile {
            id: TileId(self.next_id),
            letter,
        };
        self.next_id += 1;
        self.slots.push(Some(tile));
        tile
    }

    /// Return a previously taken tile to the rack, keeping its id.
    pub fn push_tile(&mut self, tile: RackTile) {
        self.slots.push(Some(tile));
    }

    /// Drop vacated slots, preserving the order of the remaining tiles.
    pub fn compact(&mut self) {
        self.slots.retain(|slot| slot.is_some());
    }

    /// Fisher-Yates shuffle over the compacted occupied entries: every
    /// permutation of the held tiles is equally likely, and vacated slots
    /// disappear from the visible order.
    pub fn shuffle(&mut self) {
        self.compact();
        let mut rng = rand::rng();
        for i in (1..self.slots.len()).rev() {
            let j = rng.random_range(0..=i);
            self.slots.swap(i, j);
        }
    }
}
