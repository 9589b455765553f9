use super::{Letter, NLETTERS};
use std::fmt;
use std::ops::Sub;

/// Count per letter `A`..`Z`.
///
/// Used for the rack, for the tiles consumed by a word, and as the private
/// scratch copy while checking a candidate.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tally([u8; NLETTERS]);

impl Tally {
    pub fn new() -> Tally {
        Tally([0; NLETTERS])
    }

    /// Count the letters in `word`. Bytes that are not `A`..`Z` are skipped.
    /// ## Examples
    /// ```
    /// use rack_word_finder::{Letter, Tally};
    /// use std::convert::TryFrom;
    /// let tally = Tally::from_word("BANANA");
    /// assert_eq!(tally.get(Letter::try_from('A')?), 3);
    /// assert_eq!(tally.total(), 6);
    /// # Ok::<(), rack_word_finder::Error>(())
    /// ```
    pub fn from_word(word: &str) -> Tally {
        let mut tally = Tally::new();
        for letter in word.bytes().filter_map(Letter::from_byte) {
            tally.add(letter);
        }
        tally
    }

    #[inline]
    pub fn get(&self, letter: Letter) -> u8 {
        self.0[letter.index()]
    }

    pub fn add(&mut self, letter: Letter) {
        let count = &mut self.0[letter.index()];
        *count = count.saturating_add(1);
    }

    /// Decrement the count for `letter` if it is positive.
    /// Returns false if there was none left.
    #[inline]
    pub fn take(&mut self, letter: Letter) -> bool {
        let count = &mut self.0[letter.index()];
        if *count > 0 {
            *count -= 1;
            true
        } else {
            false
        }
    }

    /// Total number of letters.
    pub fn total(&self) -> usize {
        self.0.iter().map(|&n| n as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&n| n == 0)
    }

    /// Check if every letter in `other` is available in `self`.
    pub fn contains(&self, other: &Tally) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(a, b)| a >= b)
    }

    /// Iterate over `(letter, count)` for letters with a nonzero count.
    pub fn iter(&self) -> impl Iterator<Item = (Letter, u8)> + '_ {
        Letter::all()
            .zip(self.0.iter().copied())
            .filter(|&(_, n)| n > 0)
    }
}

impl Sub for Tally {
    type Output = Self;
    fn sub(self, other: Self) -> Self::Output {
        let mut counts = self.0;
        for (a, b) in counts.iter_mut().zip(other.0.iter()) {
            *a = a.saturating_sub(*b);
        }
        Tally(counts)
    }
}

/// Letters in alphabetical order, each repeated by its count.
impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (letter, n) in self.iter() {
            for _ in 0..n {
                write!(f, "{}", letter)?;
            }
        }
        Ok(())
    }
}
