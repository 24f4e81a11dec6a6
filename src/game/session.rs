use crate::game::board::Board;
use crate::game::letter::Letter;
use crate::game::rack::{Rack, RackTile, TileId};
use crate::ScrabbleError;
use serde::{Deserialize, Serialize};

/// Total number of tiles in the supply bag at the start of a game.
pub const BAG_CAPACITY: u32 = 100;

/// A tile moved from the rack onto the board during the current,
/// not-yet-submitted turn. Remembers the slot it came from so a recall
/// can account for it, and its stable id for presentation references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedTile {
    pub id: TileId,
    pub letter: Letter,
    pub row: usize,
    pub col: usize,
    pub rack_index: usize,
}

/// The authoritative state of one game: board, rack, this-turn ledger,
/// cumulative score and the supply bag's remaining count. Created fresh
/// on every new game; owned by the caller, never a global.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    pub board: Board,
    pub rack: Rack,
    pub placed: Vec<PlacedTile>,
    pub score: u32,
    pub tiles_remaining: u32,
}

impl GameSession {
    /// Start a session from a freshly generated board and initial deal.
    pub fn new(board: Board, initial_tiles: &[Letter]) -> GameSession {
        GameSession {
            board,
            rack: Rack::from_letters(initial_tiles),
            placed: Vec::new(),
            score: 0,
            tiles_remaining: BAG_CAPACITY.saturating_sub(initial_tiles.len() as u32),
        }
    }

    /// Move a tile from rack slot `rack_index` onto the board. All
    /// preconditions are checked before any state changes, so a failure
    /// leaves rack, board and ledger untouched.
    pub fn place_tile(&mut self, rack_index: usize, row: usize, col: usize) -> crate::Result<PlacedTile> {
        if !self.board.in_bounds(row, col) {
            return Err(ScrabbleError::OutOfBounds(row, col));
        }
        if self.placed.iter().any(|p| p.row == row && p.col == col) {
            return Err(ScrabbleError::CellOccupied(row, col));
        }
        if self.rack.get(rack_index).is_none() {
            return Err(ScrabbleError::SlotEmpty(rack_index));
        }

        let RackTile { id, letter } = self.rack.take(rack_index)?;
        let placed = PlacedTile {
            id,
            letter,
            row,
            col,
            rack_index,
        };
        self.placed.push(placed);
        Ok(placed)
    }

    /// Return every placed tile to the rack (appended; slot identity is
    /// not preserved) and clear the ledger. The board cells' premium
    /// metadata was never mutated, so nothing to restore there.
    /// Idempotent when nothing is placed.
    pub fn recall_all(&mut self) -> &Rack {
        for placed in self.placed.drain(..) {
            self.rack.push_tile(RackTile {
                id: placed.id,
                letter: placed.letter,
            });
        }
        &self.rack
    }

    /// Consume the placed-tile ledger for submission. The vacated rack
    /// slots stay empty; refill appends after compaction.
    pub fn take_placed(&mut self) -> crate::Result<Vec<PlacedTile>> {
        if self.placed.is_empty() {
            return Err(ScrabbleError::NothingPlaced);
        }
        Ok(std::mem::take(&mut self.placed))
    }

    /// Append freshly drawn letters and decrement the remaining count by
    /// the number actually received, clamped at zero.
    pub fn record_draw(&mut self, drawn: &[Letter]) {
        self.rack.compact();
        for &letter in drawn {
            self.rack.push_letter(letter);
        }
        self.tiles_remaining = self.tiles_remaining.saturating_sub(drawn.len() as u32);
    }

    pub fn shuffle_rack(&mut self) {
        self.rack.shuffle();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::create_standard_board;
    use assert_matches::assert_matches;

    fn letters(s: &str) -> Vec<Letter> {
        s.chars().map(|c| Letter::new(c).unwrap()).collect()
    }

    fn session_with(rack: &str) -> GameSession {
        GameSession::new(create_standard_board(), &letters(rack))
    }

    #[test]
    fn test_new_session_accounting() {
        let session = session_with("RETAINS");
        assert_eq!(session.score, 0, "A fresh session should start at score 0.");
        assert_eq!(
            session.tiles_remaining,
            BAG_CAPACITY - 7,
            "The bag should be short exactly the initial deal."
        );
        assert!(session.placed.is_empty(), "A fresh session should have no placed tiles.");
    }

    #[test]
    fn test_place_tile_moves_letter_to_ledger() {
        let mut session = session_with("CAT");
        let placed = session.place_tile(0, 7, 7).unwrap();

        assert_eq!(placed.letter, Letter::new('C').unwrap());
        assert_eq!((placed.row, placed.col), (7, 7));
        assert_eq!(placed.rack_index, 0, "The origin slot index should be recorded.");
        assert_eq!(session.rack.get(0), None, "The origin slot should be vacated.");
        assert_eq!(session.placed.len(), 1);
    }

    #[test]
    fn test_place_tile_on_occupied_cell_fails_without_mutation() {
        let mut session = session_with("CAT");
        session.place_tile(0, 7, 7).unwrap();

        let before = session.clone();
        assert_matches!(
            session.place_tile(1, 7, 7),
            Err(ScrabbleError::CellOccupied(7, 7))
        );
        assert_eq!(session, before, "A rejected placement should not mutate anything.");
    }

    #[test]
    fn test_place_tile_from_empty_slot_fails_without_mutation() {
        let mut session = session_with("CAT");
        session.place_tile(0, 7, 7).unwrap();

        let before = session.clone();
        assert_matches!(session.place_tile(0, 7, 8), Err(ScrabbleError::SlotEmpty(0)));
        assert_eq!(session, before);
    }

    #[test]
    fn test_place_tile_out_of_bounds_fails() {
        let mut session = session_with("CAT");
        assert_matches!(
            session.place_tile(0, 15, 3),
            Err(ScrabbleError::OutOfBounds(15, 3))
        );
        assert_eq!(session.rack.occupied_count(), 3, "The rack should be untouched.");
    }

    #[test]
    fn test_recall_then_replace_round_trips() {
        let mut session = session_with("WORD");
        session.place_tile(0, 7, 7).unwrap();
        session.place_tile(1, 7, 8).unwrap();
        let original = session.placed.clone();

        session.recall_all();
        assert!(session.placed.is_empty(), "Recall should clear the ledger.");
        assert_eq!(
            session.rack.occupied_count(),
            4,
            "Recall should return every placed letter to the rack."
        );

        // The recalled tiles were appended behind the two never-moved
        // letters; replay the same letters onto the same cells.
        session.rack.compact();
        session.place_tile(2, 7, 7).unwrap();
        session.place_tile(3, 7, 8).unwrap();

        let replayed: Vec<(Letter, usize, usize)> = session
            .placed
            .iter()
            .map(|p| (p.letter, p.row, p.col))
            .collect();
        let expected: Vec<(Letter, usize, usize)> = original
            .iter()
            .map(|p| (p.letter, p.row, p.col))
            .collect();
        assert_eq!(replayed, expected, "Replacing recalled tiles should rebuild the ledger.");
    }

    #[test]
    fn test_recall_is_idempotent_when_nothing_placed() {
        let mut session = session_with("WORD");
        session.recall_all();
        session.recall_all();
        assert_eq!(session.rack.occupied_count(), 4);
    }

    #[test]
    fn test_take_placed_requires_a_placement() {
        let mut session = session_with("WORD");
        assert_matches!(session.take_placed(), Err(ScrabbleError::NothingPlaced));

        session.place_tile(0, 0, 0).unwrap();
        let taken = session.take_placed().unwrap();
        assert_eq!(taken.len(), 1);
        assert!(session.placed.is_empty());
    }

    #[test]
    fn test_record_draw_compacts_then_appends() {
        let mut session = session_with("WORD");
        session.place_tile(1, 7, 7).unwrap();
        session.take_placed().unwrap();

        session.record_draw(&letters("Z"));
        assert_eq!(
            session.rack.letters(),
            letters("WRDZ"),
            "Drawn letters should append after the surviving rack letters."
        );
        assert_eq!(session.tiles_remaining, BAG_CAPACITY - 4 - 1);
    }

    #[test]
    fn test_tiles_remaining_never_goes_negative() {
        let mut session = session_with("WORD");
        session.tiles_remaining = 2;
        session.record_draw(&letters("ABC"));
        assert_eq!(
            session.tiles_remaining, 0,
            "An over-draw should clamp the remaining count at zero."
        );
    }
}
