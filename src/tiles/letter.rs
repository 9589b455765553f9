use super::NLETTERS;
use crate::error::Error;
use std::convert::TryFrom;
use std::fmt;

/// One of the letters `A`..`Z`, stored as index 0..26.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Letter(u8);

impl Letter {
    /// Letter for index 0..26, or None if out of range.
    pub fn from_index(index: usize) -> Option<Letter> {
        if index < NLETTERS {
            Some(Letter(index as u8))
        } else {
            None
        }
    }

    /// Letter for an uppercase ascii byte, or None.
    /// Lowercase is not accepted: words are expected to be normalized.
    #[inline]
    pub fn from_byte(byte: u8) -> Option<Letter> {
        match byte {
            b'A'..=b'Z' => Some(Letter(byte - b'A')),
            _ => None,
        }
    }

    /// Iterate over `A`..`Z`.
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..NLETTERS as u8).map(Letter)
    }

    /// Index 0..26 of the letter.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn to_char(self) -> char {
        (b'A' + self.0) as char
    }
}

impl TryFrom<char> for Letter {
    type Error = Error;
    fn try_from(ch: char) -> Result<Self, Self::Error> {
        if ch.is_ascii() {
            Letter::from_byte(ch as u8).ok_or(Error::InvalidLetter(ch))
        } else {
            Err(Error::InvalidLetter(ch))
        }
    }
}

impl TryFrom<u8> for Letter {
    type Error = Error;
    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Letter::from_byte(byte).ok_or(Error::InvalidLetter(byte as char))
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.to_char()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char() -> Result<(), Error> {
        let letter = Letter::try_from('Q')?;
        assert_eq!(letter.index(), 16);
        assert_eq!(letter.to_char(), 'Q');
        assert_eq!(Letter::try_from(b'A')?, Letter::from_index(0).unwrap());
        Ok(())
    }

    #[test]
    #[should_panic(expected = "InvalidLetter")]
    fn test_lowercase() {
        Letter::try_from('q').unwrap();
    }

    #[test]
    fn test_invalid() {
        assert!(Letter::try_from('é').is_err());
        assert!(Letter::try_from('*').is_err());
        assert_eq!(Letter::from_index(26), None);
        assert_eq!(Letter::from_byte(b'a'), None);
    }

    #[test]
    fn test_all() {
        let s: String = Letter::all().map(char::from).collect();
        assert_eq!(s, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }
}
