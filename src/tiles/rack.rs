use super::{Letter, Tally, RACK_SIZE};
use crate::error::Error;
use std::convert::TryFrom;
use std::fmt;
use tinyvec::ArrayVec;

/// The letters of a rack as a list.
pub type RackLetters = ArrayVec<[Letter; RACK_SIZE]>;

/// The tiles a player holds: a multiset of at most [`RACK_SIZE`](crate::RACK_SIZE) letters.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rack {
    tally: Tally,
}

impl Rack {
    /// An empty rack
    pub fn new() -> Rack {
        Rack::default()
    }

    /// Create a rack from a string of letters.
    /// ## Errors
    /// If a character is not one of `A`..`Z`, or there are more than 7 letters.
    /// ## Examples
    /// ```
    /// use rack_word_finder::{Rack, Error};
    /// let rack = Rack::from_letters("GOD")?;
    /// assert_eq!(rack.len(), 3);
    /// assert_eq!(rack.to_string(), "DGO");
    /// assert!(Rack::from_letters("TOOMANYS").is_err());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_letters(letters: &str) -> Result<Rack, Error> {
        let mut rack = Rack::new();
        for ch in letters.chars() {
            rack.push(Letter::try_from(ch)?)?;
        }
        Ok(rack)
    }

    /// Create a rack from letter counts.
    /// ## Errors
    /// If the counts sum to more than 7.
    pub fn from_tally(tally: Tally) -> Result<Rack, Error> {
        let total = tally.total();
        if total > RACK_SIZE {
            return Err(Error::RackOverflow(total));
        }
        Ok(Rack { tally })
    }

    /// Put a tile on the rack.
    /// ## Errors
    /// If the rack is already full.
    pub fn push(&mut self, letter: Letter) -> Result<(), Error> {
        if self.len() >= RACK_SIZE {
            return Err(Error::RackOverflow(self.len() + 1));
        }
        self.tally.add(letter);
        Ok(())
    }

    /// Take the tiles in `used` off the rack.
    /// ## Errors
    /// If not all tiles are on the rack. The rack is unchanged in that case.
    pub fn remove(&mut self, used: &Tally) -> Result<(), Error> {
        if !self.tally.contains(used) {
            return Err(Error::MissingTiles((*used - self.tally).to_string()));
        }
        *self = Rack::from_tally(self.tally - *used)?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.tally.total()
    }

    pub fn is_empty(&self) -> bool {
        self.tally.is_empty()
    }

    /// Number of free places on the rack.
    pub fn free(&self) -> usize {
        RACK_SIZE - self.len()
    }

    /// Letter counts on the rack.
    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    /// The letters on the rack in alphabetical order.
    pub fn letters(&self) -> RackLetters {
        self.tally
            .iter()
            .flat_map(|(letter, n)| std::iter::repeat(letter).take(n as usize))
            .collect()
    }
}

/// The letters in alphabetical order.
impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for letter in self.letters() {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}
