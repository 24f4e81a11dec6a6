use serde::{Deserialize, Serialize};

/// Side length of the square board.
pub const BOARD_SIZE: usize = 15;

/// The center cell, where the first word traditionally starts. It carries
/// no premium of its own in the web layout.
pub const CENTER: (usize, usize) = (7, 7);

/// Premium square kinds, with their wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Premium {
    #[serde(rename = "DL")]
    DoubleLetter,
    #[serde(rename = "TL")]
    TripleLetter,
    #[serde(rename = "DW")]
    DoubleWord,
    #[serde(rename = "TW")]
    TripleWord,
}

/// One board cell. Premium metadata is assigned at board generation and
/// never changes; occupation is tracked by the session's placed-tile
/// ledger, not here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premium: Option<Premium>,
}

/// A 15x15 grid of cells, row-major.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    pub cells: Vec<Vec<Cell>>,
}

impl Board {
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.cells.len() && col < self.cells.get(row).map_or(0, |r| r.len())
    }

    pub fn premium_at(&self, row: usize, col: usize) -> Option<Premium> {
        self.cells.get(row)?.get(col)?.premium
    }

    pub fn is_center(&self, row: usize, col: usize) -> bool {
        (row, col) == CENTER
    }
}

// Standard premium layout, as served by the tile supply API.
const TRIPLE_WORD_POSITIONS: &[(usize, usize)] = &[
    (0, 0),
    (0, 7),
    (0, 14),
    (7, 0),
    (7, 14),
    (14, 0),
    (14, 7),
    (14, 14),
];

const DOUBLE_WORD_POSITIONS: &[(usize, usize)] = &[
    (1, 1),
    (2, 2),
    (3, 3),
    (4, 4),
    (10, 10),
    (11, 11),
    (12, 12),
    (13, 13),
    (1, 13),
    (2, 12),
    (3, 11),
    (4, 10),
    (10, 4),
    (11, 3),
    (12, 2),
    (13, 1),
];

const TRIPLE_LETTER_POSITIONS: &[(usize, usize)] = &[
    (1, 5),
    (1, 9),
    (5, 1),
    (5, 5),
    (5, 9),
    (5, 13),
    (9, 1),
    (9, 5),
    (9, 9),
    (9, 13),
    (13, 5),
    (13, 9),
];

const DOUBLE_LETTER_POSITIONS: &[(usize, usize)] = &[
    (0, 3),
    (0, 11),
    (2, 6),
    (2, 8),
    (3, 0),
    (3, 7),
    (3, 14),
    (6, 2),
    (6, 6),
    (6, 8),
    (6, 12),
    (7, 3),
    (7, 11),
    (8, 2),
    (8, 6),
    (8, 8),
    (8, 12),
    (11, 0),
    (11, 7),
    (11, 14),
    (12, 6),
    (12, 8),
    (14, 3),
    (14, 11),
];

/// Build the standard 15x15 board with its premium squares.
pub fn create_standard_board() -> Board {
    let mut cells = vec![vec![Cell::default(); BOARD_SIZE]; BOARD_SIZE];

    let groups = [
        (Premium::TripleWord, TRIPLE_WORD_POSITIONS),
        (Premium::DoubleWord, DOUBLE_WORD_POSITIONS),
        (Premium::TripleLetter, TRIPLE_LETTER_POSITIONS),
        (Premium::DoubleLetter, DOUBLE_LETTER_POSITIONS),
    ];

    for (premium, positions) in groups {
        for &(row, col) in positions {
            cells[row][col].premium = Some(premium);
        }
    }

    Board { cells }
}
