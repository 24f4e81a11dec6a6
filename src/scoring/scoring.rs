use crate::game::board::{Board, Premium};
use crate::game::session::PlacedTile;

/// Score one submission: sum each placed letter's value under its cell's
/// letter multiplier, then compound the word multipliers of every placed
/// tile's cell into the total. Word multipliers stack multiplicatively
/// when a placement covers several premium-word cells.
///
/// No adjacency, contiguity or dictionary check happens here; any set of
/// placed tiles scores.
pub fn score_placement(board: &Board, placed: &[PlacedTile]) -> u32 {
    let mut word_score = 0;

    for tile in placed {
        let multiplier = match board.premium_at(tile.row, tile.col) {
            Some(Premium::DoubleLetter) => 2,
            Some(Premium::TripleLetter) => 3,
            _ => 1,
        };
        word_score += tile.letter.value() * multiplier;
    }

    for tile in placed {
        match board.premium_at(tile.row, tile.col) {
            Some(Premium::DoubleWord) => word_score *= 2,
            Some(Premium::TripleWord) => word_score *= 3,
            _ => {}
        }
    }

    word_score
}
