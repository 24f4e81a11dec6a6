use crate::game::letter::Letter;
use rand::RngExt;

/// Standard English tile distribution: 100 tiles, including two blanks.
const LETTER_DISTRIBUTION: &[(char, usize)] = &[
    ('A', 9),
    ('B', 2),
    ('C', 2),
    ('D', 4),
    ('E', 12),
    ('F', 2),
    ('G', 3),
    ('H', 2),
    ('I', 9),
    ('J', 1),
    ('K', 1),
    ('L', 4),
    ('M', 2),
    ('N', 6),
    ('O', 8),
    ('P', 2),
    ('Q', 1),
    ('R', 6),
    ('S', 4),
    ('T', 6),
    ('U', 4),
    ('V', 2),
    ('W', 2),
    ('X', 1),
    ('Y', 2),
    ('Z', 1),
    ('_', 2),
];

/// The supply side's pool of undealt tiles. Letters are modeled here
/// only; the client tracks the remaining count.
#[derive(Debug, Clone, PartialEq)]
pub struct TileBag {
    tiles: Vec<Letter>,
}

impl TileBag {
    /// Draw up to `count` tiles; a short draw near exhaustion is normal.
    pub fn draw(&mut self, count: usize) -> Vec<Letter> {
        let take = count.min(self.tiles.len());
        self.tiles.split_off(self.tiles.len() - take)
    }

    pub fn remaining(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

/// Build a full bag from the standard distribution and shuffle it.
pub fn create_shuffled_bag() -> TileBag {
    let mut tiles = Vec::new();
    for &(c, count) in LETTER_DISTRIBUTION {
        for _ in 0..count {
            tiles.push(Letter::from_ascii_unchecked(c));
        }
    }

    // Fisher-Yates
    let mut rng = rand::rng();
    for i in (1..tiles.len()).rev() {
        let j = rng.random_range(0..=i);
        tiles.swap(i, j);
    }

    TileBag { tiles }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::session::BAG_CAPACITY;

    #[test]
    fn test_full_bag_holds_one_hundred_tiles() {
        let bag = create_shuffled_bag();
        assert_eq!(
            bag.remaining() as u32,
            BAG_CAPACITY,
            "The standard distribution should total exactly 100 tiles."
        );
    }

    #[test]
    fn test_distribution_counts() {
        let bag = create_shuffled_bag();
        let count_of = |c: char| {
            bag.tiles
                .iter()
                .filter(|l| l.as_char() == c)
                .count()
        };

        assert_eq!(count_of('E'), 12, "The bag should hold 12 E tiles.");
        assert_eq!(count_of('A'), 9, "The bag should hold 9 A tiles.");
        assert_eq!(count_of('Q'), 1, "The bag should hold a single Q tile.");
        assert_eq!(count_of('_'), 2, "The bag should hold two blank tiles.");
    }

    #[test]
    fn test_draw_removes_tiles() {
        let mut bag = create_shuffled_bag();
        let drawn = bag.draw(7);
        assert_eq!(drawn.len(), 7);
        assert_eq!(bag.remaining(), 93, "Drawing 7 should leave 93 in the bag.");
    }

    #[test]
    fn test_over_draw_is_clamped() {
        let mut bag = create_shuffled_bag();
        bag.draw(98);
        let drawn = bag.draw(7);
        assert_eq!(drawn.len(), 2, "A near-empty bag should return what it has.");
        assert!(bag.is_empty());
        assert!(bag.draw(1).is_empty(), "An empty bag should return nothing.");
    }
}
