use crate::ScrabbleError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A letter tile face: one of the 26 uppercase letters, or `_` for the
/// blank wildcard. Encodes on the wire as a one-character string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Letter(char);

impl Letter {
    /// The blank wildcard tile, worth 0 points.
    pub const BLANK: Letter = Letter('_');

    pub fn new(c: char) -> crate::Result<Letter> {
        Letter::try_from(c)
    }

    /// Constructor for letters known valid at compile time.
    pub(crate) const fn from_ascii_unchecked(c: char) -> Letter {
        Letter(c)
    }

    pub fn as_char(self) -> char {
        self.0
    }

    pub fn is_blank(self) -> bool {
        self.0 == '_'
    }

    /// Base point value of the letter, before any premium multiplier.
    pub fn value(self) -> u32 {
        match self.0 {
            'A' | 'E' | 'I' | 'L' | 'N' | 'O' | 'R' | 'S' | 'T' | 'U' => 1,
            'D' | 'G' => 2,
            'B' | 'C' | 'M' | 'P' => 3,
            'F' | 'H' | 'V' | 'W' | 'Y' => 4,
            'K' => 5,
            'J' | 'X' => 8,
            'Q' | 'Z' => 10,
            _ => 0, // blank
        }
    }
}

impl TryFrom<char> for Letter {
    type Error = ScrabbleError;

    fn try_from(c: char) -> crate::Result<Letter> {
        let upper = c.to_ascii_uppercase();
        match upper {
            'A'..='Z' | '_' => Ok(Letter(upper)),
            _ => Err(ScrabbleError::InvalidLetter(c)),
        }
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.0
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
