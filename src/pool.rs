use crate::tiles::{Letter, Tally, NLETTERS};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// count, points
type TileInfo = (u32, u32);

/// Standard english tile distribution, without blanks.
const ENGLISH: [TileInfo; NLETTERS] = [
    (9, 1),  // A
    (2, 3),  // B
    (2, 3),  // C
    (4, 2),  // D
    (12, 1), // E
    (2, 4),  // F
    (3, 2),  // G
    (2, 4),  // H
    (9, 1),  // I
    (1, 8),  // J
    (1, 5),  // K
    (4, 1),  // L
    (2, 3),  // M
    (6, 1),  // N
    (8, 1),  // O
    (2, 3),  // P
    (1, 10), // Q
    (6, 1),  // R
    (4, 1),  // S
    (6, 1),  // T
    (4, 1),  // U
    (2, 4),  // V
    (2, 4),  // W
    (1, 8),  // X
    (2, 4),  // Y
    (1, 10), // Z
];

/// The letter tiles of a game: for each letter the number of tiles and the points per tile.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LetterPool {
    tiles: [TileInfo; NLETTERS],
}

impl Default for LetterPool {
    fn default() -> Self {
        Self::english()
    }
}

impl LetterPool {
    /// Return a new `LetterPool` with `(count, points)` for `A`..`Z`.
    pub fn new(tiles: [(u32, u32); NLETTERS]) -> LetterPool {
        LetterPool { tiles }
    }

    /// The standard english distribution of 98 tiles.
    /// ## Examples
    /// ```
    /// use rack_word_finder::LetterPool;
    /// let pool = LetterPool::english();
    /// assert_eq!(pool.total(), 98);
    /// assert_eq!(pool.word_points("QUIZ"), 22);
    /// ```
    pub fn english() -> LetterPool {
        LetterPool::new(ENGLISH)
    }

    /// Return the number of tiles for `letter`.
    pub fn count(&self, letter: Letter) -> u32 {
        self.tiles[letter.index()].0
    }

    /// Return the points for `letter`.
    pub fn points(&self, letter: Letter) -> u32 {
        self.tiles[letter.index()].1
    }

    /// Total number of tiles.
    pub fn total(&self) -> u32 {
        self.tiles.iter().map(|&(count, _)| count).sum()
    }

    /// Sum of the points of the letters in `word`. Characters that are not a letter score 0.
    pub fn word_points(&self, word: &str) -> u32 {
        word.bytes()
            .filter_map(Letter::from_byte)
            .map(|letter| self.points(letter))
            .sum()
    }

    /// Sum of the points of the letters in `tally`.
    pub fn tally_points(&self, tally: &Tally) -> u32 {
        tally
            .iter()
            .map(|(letter, n)| self.points(letter) * n as u32)
            .sum()
    }

    /// Iterate over `(letter, count, points)`.
    pub fn iter(&self) -> impl Iterator<Item = (Letter, u32, u32)> + '_ {
        Letter::all()
            .zip(self.tiles.iter())
            .map(|(letter, &(count, points))| (letter, count, points))
    }
}
