use crate::finder::Finder;
use crate::tiles::{Letter, Rack};
use crate::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs::read_to_string;

/// Result of scanning the dictionary for playable words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Playable<'a> {
    /// Playable words, in dictionary order
    Words(Vec<&'a str>),
    /// The dictionary was scanned, but no word can be played
    NoPlayableWord,
}

impl<'a> Playable<'a> {
    fn from_words(words: Vec<&'a str>) -> Playable<'a> {
        if words.is_empty() {
            Playable::NoPlayableWord
        } else {
            Playable::Words(words)
        }
    }

    /// The playable words; empty for `NoPlayableWord`.
    pub fn words(&self) -> &[&'a str] {
        match self {
            Playable::Words(words) => words,
            Playable::NoPlayableWord => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Playable::NoPlayableWord)
    }

    pub fn len(&self) -> usize {
        self.words().len()
    }
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// An ordered list of uppercase words.
pub struct Dictionary {
    words: Vec<String>,
    /// Path of the wordfile used to build the dictionary.
    /// Empty if the dictionary is not build from a file.
    pub wordfile: String,
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Dictionary: {} words from '{}'>",
            self.words.len(),
            self.wordfile
        )
    }
}

/// Trim and uppercase `word`, and check that it only has letters `A`..`Z`.
fn normalize(word: &str) -> Result<String, Error> {
    let word = word.trim().to_uppercase();
    if word.bytes().all(|b| Letter::from_byte(b).is_some()) {
        Ok(word)
    } else {
        Err(Error::InvalidWord(word))
    }
}

impl Dictionary {
    /// Read the dictionary from a file. The file must be encoded in utf-8 and
    /// have one word per line. Words are trimmed and converted to uppercase, blank lines are skipped.
    /// ## Errors
    /// Fails if the file can not be read, a word contains something other than a letter,
    /// or the file holds no words.
    pub fn from_file(wordfile: &str) -> Result<Dictionary, Error> {
        let contents = read_to_string(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let words = contents
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(normalize)
            .collect::<Result<Vec<String>, Error>>()?;
        let mut dictionary = Dictionary::new(words)?;
        dictionary.wordfile = String::from(wordfile);
        tracing::info!(
            "Loaded {} words ({} distinct) from '{}'",
            dictionary.len(),
            dictionary.distinct_count(),
            wordfile
        );
        Ok(dictionary)
    }

    /// Build a dictionary from a list of words.
    /// ## Errors
    /// If a word is not valid, or the list holds no words.
    /// ## Examples
    /// ```
    /// use rack_word_finder::{Dictionary, Error};
    /// let dictionary = Dictionary::from_words(&["cat", " dog "])?;
    /// assert_eq!(dictionary.words(), &["CAT", "DOG"]);
    /// assert!(Dictionary::from_words(&[]).is_err());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_words(words: &[&str]) -> Result<Dictionary, Error> {
        let words = words
            .iter()
            .filter(|word| !word.trim().is_empty())
            .map(|word| normalize(word))
            .collect::<Result<Vec<String>, Error>>()?;
        Dictionary::new(words)
    }

    fn new(words: Vec<String>) -> Result<Dictionary, Error> {
        if words.is_empty() {
            return Err(Error::EmptyDictionary);
        }
        Ok(Dictionary {
            words,
            wordfile: String::new(),
        })
    }

    #[cfg(all(feature = "serde", feature = "bincode"))]
    /// Deserialize the dictionary from a bincoded file.
    /// ## Errors
    /// - If the file can not be read.
    /// - If the contents can not be deserialized, or hold no words.
    pub fn deserialize_from(wordfile: &str) -> Result<Dictionary, Error> {
        use std::fs::File;
        use std::io::BufReader;
        let file = File::open(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let reader = BufReader::new(file);
        let mut dictionary: Dictionary = bincode::deserialize_from(reader)
            .map_err(|_| Error::WordfileDeserializeError(String::from(wordfile)))?;
        if dictionary.is_empty() {
            return Err(Error::EmptyDictionary);
        }
        dictionary.wordfile = String::from(wordfile);
        tracing::info!("Deserialized {} words from '{}'", dictionary.len(), wordfile);
        Ok(dictionary)
    }

    #[cfg(all(feature = "serde", feature = "bincode"))]
    /// Write the dictionary to a bincoded file.
    /// ## Errors
    /// If the file can not be created or written.
    pub fn serialize_to(&self, wordfile: &str) -> Result<(), Error> {
        use std::fs::File;
        use std::io::BufWriter;
        let file = File::create(wordfile).map_err(|source| Error::WriteError {
            path: String::from(wordfile),
            source,
        })?;
        bincode::serialize_into(BufWriter::new(file), self)
            .map_err(|_| Error::WordfileSerializeError(String::from(wordfile)))
    }

    /// The words, in the order they were read.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a dictionary created with one of the constructors.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns true if `word` is in the dictionary. Case is ignored.
    pub fn contains(&self, word: &str) -> bool {
        let word = word.to_uppercase();
        self.words.iter().any(|w| *w == word)
    }

    /// Return the number of distinct words.
    pub fn distinct_count(&self) -> usize {
        self.words.iter().collect::<HashSet<_>>().len()
    }

    /// Scan the dictionary for words that can be played with `rack`, extending or reusing `anchor`.
    /// ## Examples
    /// ```
    /// use rack_word_finder::{Dictionary, Playable, Rack, Error};
    /// let dictionary = Dictionary::from_words(&["CATS", "CAT", "DOG"])?;
    /// let rack = Rack::from_letters("S")?;
    /// assert_eq!(dictionary.find_playable_words("CAT", &rack), Playable::Words(vec!["CATS"]));
    /// assert_eq!(dictionary.find_playable_words("DOG", &Rack::new()), Playable::NoPlayableWord);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn find_playable_words(&self, anchor: &str, rack: &Rack) -> Playable<'_> {
        self.find_with(&Finder::new(anchor, rack))
    }

    /// Scan the dictionary with a configured `finder`.
    pub fn find_with(&self, finder: &Finder<'_>) -> Playable<'_> {
        Playable::from_words(finder.find_playable_words(&self.words))
    }
}
