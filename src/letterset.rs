#[cfg(feature = "bitintr")]
use bitintr::Popcnt;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use crate::tiles::Letter;
use std::fmt;
use std::iter::FromIterator;

#[cfg(feature = "bitintr")]
#[inline(always)]
fn count_ones(n: u32) -> u32 {
    n.popcnt()
}

#[cfg(not(feature = "bitintr"))]
#[inline(always)]
fn count_ones(n: u32) -> u32 {
    n.count_ones()
}

/// A bitset of letters, e.g. the distinct letters of an anchor word
#[derive(Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LetterSet(u32);

impl LetterSet {
    pub fn new() -> LetterSet {
        LetterSet(0)
    }

    /// The distinct letters of `word`. Bytes that are not `A`..`Z` are ignored.
    pub fn from_word(word: &str) -> LetterSet {
        word.bytes().filter_map(Letter::from_byte).collect()
    }

    #[inline]
    pub fn contains(&self, letter: Letter) -> bool {
        self.0 & (1 << letter.index()) != 0
    }

    /// Insert `letter`, return true if it was already present.
    pub fn insert(&mut self, letter: Letter) -> bool {
        let bit = 1 << letter.index();
        let r = (self.0 & bit) != 0;
        self.0 |= bit;
        r
    }

    pub fn len(&self) -> usize {
        count_ones(self.0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Letter> + '_ {
        Letter::all().filter(move |&letter| self.contains(letter))
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s: String = self.iter().map(char::from).collect();
        write!(f, "{{{}}}", s)
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut set = LetterSet::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}
