use crate::letterset::LetterSet;
use crate::tiles::{Letter, Rack, Tally};
#[cfg(feature = "rayon")]
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Options for the word formation rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rules {
    /// If the anchor word is found in a candidate, but the remaining letters are not
    /// on the rack, also try to form the candidate by reusing one anchor letter.
    /// Off by default: a candidate containing the anchor word is only checked as an extension.
    pub reuse_after_short_rack: bool,
}

/// How a playable word is formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formation {
    /// The anchor word is extended with a prefix and/or suffix from the rack.
    Extension {
        /// tiles taken from the rack
        used: Tally,
    },
    /// The word is formed from rack tiles, plus at most one letter borrowed from the anchor word.
    Reuse {
        /// tiles taken from the rack
        used: Tally,
        /// the letter borrowed from the anchor word, if any
        borrowed: Option<Letter>,
    },
}

impl Formation {
    /// The tiles taken from the rack.
    pub fn used(&self) -> &Tally {
        match self {
            Formation::Extension { used } | Formation::Reuse { used, .. } => used,
        }
    }

    /// The letter borrowed from the anchor word, if any.
    pub fn borrowed(&self) -> Option<Letter> {
        match self {
            Formation::Extension { .. } => None,
            Formation::Reuse { borrowed, .. } => *borrowed,
        }
    }
}

/// Finds the words that can be played with a rack, given the anchor word on the board.
///
/// Words are expected to be uppercase `A`..`Z`. A character outside that range is
/// never on the rack, so a candidate that needs one is rejected.
///
/// ## Examples
/// ```
/// use rack_word_finder::{Finder, Rack, Error};
/// let rack = Rack::from_letters("S")?;
/// let finder = Finder::new("CAT", &rack);
/// assert!(finder.can_form_word("CATS"));
/// assert!(!finder.can_form_word("CAT"));
/// assert_eq!(finder.find_playable_words(&["CATS", "CAT", "DOG"]), vec!["CATS"]);
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Finder<'a> {
    anchor: &'a str,
    anchor_letters: LetterSet,
    rack: Tally,
    rules: Rules,
}

impl<'a> Finder<'a> {
    /// Create a finder for `anchor` (possibly empty) and `rack`.
    /// The finder keeps a copy of the rack counts; the rack itself is never modified.
    pub fn new(anchor: &'a str, rack: &Rack) -> Finder<'a> {
        Finder {
            anchor,
            anchor_letters: LetterSet::from_word(anchor),
            rack: *rack.tally(),
            rules: Rules::default(),
        }
    }

    /// Set the formation rules, and return the modified finder.
    pub fn with_rules(mut self, rules: Rules) -> Finder<'a> {
        self.rules = rules;
        self
    }

    pub fn anchor(&self) -> &str {
        self.anchor
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// Returns true if `candidate` can be played.
    pub fn can_form_word(&self, candidate: &str) -> bool {
        self.formation(candidate).is_some()
    }

    /// Return how `candidate` can be formed, or None if it can not be played.
    ///
    /// - A candidate equal to the anchor word is never playable.
    /// - If the anchor word occurs in the candidate (leftmost occurrence), the letters
    ///   before and after it must all come from the rack.
    /// - Otherwise every letter must come from the rack, except for one letter
    ///   that may be borrowed from the anchor word.
    pub fn formation(&self, candidate: &str) -> Option<Formation> {
        if candidate == self.anchor {
            return None;
        }
        if let Some(pos) = candidate.find(self.anchor) {
            let prefix = &candidate[..pos];
            let suffix = &candidate[pos + self.anchor.len()..];
            let formation = self.extension(prefix.bytes().chain(suffix.bytes()));
            if formation.is_some() || !self.rules.reuse_after_short_rack {
                return formation;
            }
        }
        self.reuse(candidate)
    }

    fn extension<I: Iterator<Item = u8>>(&self, leftover: I) -> Option<Formation> {
        let mut rack = self.rack;
        let mut used = Tally::new();
        for byte in leftover {
            match Letter::from_byte(byte) {
                Some(letter) if rack.take(letter) => used.add(letter),
                _ => return None,
            }
        }
        Some(Formation::Extension { used })
    }

    fn reuse(&self, candidate: &str) -> Option<Formation> {
        let mut rack = self.rack;
        let mut used = Tally::new();
        let mut borrowed = None;
        for byte in candidate.bytes() {
            match Letter::from_byte(byte) {
                Some(letter) if rack.take(letter) => used.add(letter),
                Some(letter) if borrowed.is_none() && self.anchor_letters.contains(letter) => {
                    borrowed = Some(letter)
                }
                _ => return None,
            }
        }
        Some(Formation::Reuse { used, borrowed })
    }

    /// Return all words in `dictionary` that can be played, in dictionary order.
    #[cfg(feature = "rayon")]
    pub fn find_playable_words<'d, S>(&self, dictionary: &'d [S]) -> Vec<&'d str>
    where
        S: AsRef<str> + Sync,
    {
        let words: Vec<&str> = dictionary
            .par_iter()
            .map(|word| word.as_ref())
            .filter(|word| self.can_form_word(word))
            .collect();
        tracing::debug!(
            anchor = self.anchor,
            scanned = dictionary.len(),
            found = words.len(),
            "parallel scan"
        );
        words
    }

    /// Return all words in `dictionary` that can be played, in dictionary order.
    #[cfg(not(feature = "rayon"))]
    pub fn find_playable_words<'d, S>(&self, dictionary: &'d [S]) -> Vec<&'d str>
    where
        S: AsRef<str> + Sync,
    {
        let words: Vec<&str> = dictionary
            .iter()
            .map(|word| word.as_ref())
            .filter(|word| self.can_form_word(word))
            .collect();
        tracing::debug!(
            anchor = self.anchor,
            scanned = dictionary.len(),
            found = words.len(),
            "scan"
        );
        words
    }

    /// Like [`find_playable_words`](Finder::find_playable_words), with the formation of each word.
    pub fn find_formations<'d, S: AsRef<str>>(
        &self,
        dictionary: &'d [S],
    ) -> Vec<(&'d str, Formation)> {
        dictionary
            .iter()
            .map(|word| word.as_ref())
            .filter_map(|word| self.formation(word).map(|formation| (word, formation)))
            .collect()
    }
}

/// Returns true if `candidate` can be formed from `rack`, extending or reusing `anchor`.
/// See [`Finder::formation`] for the rules.
/// ## Examples
/// ```
/// use rack_word_finder::{can_form_word, Rack, Error};
/// let rack = Rack::from_letters("B")?;
/// assert!(can_form_word("BAT", "AT", &rack));
/// assert!(!can_form_word("AT", "AT", &rack));
/// # Ok::<(), Error>(())
/// ```
pub fn can_form_word(candidate: &str, anchor: &str, rack: &Rack) -> bool {
    Finder::new(anchor, rack).can_form_word(candidate)
}

/// Return all words in `dictionary` that can be formed from `rack`, extending or reusing `anchor`.
/// The order of `dictionary` is preserved.
pub fn find_playable_words<'d, S>(dictionary: &'d [S], anchor: &str, rack: &Rack) -> Vec<&'d str>
where
    S: AsRef<str> + Sync,
{
    Finder::new(anchor, rack).find_playable_words(dictionary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    type Result<T> = std::result::Result<T, Error>;

    const WORDS: &[&str] = &[
        "AT", "BAT", "BATS", "CAT", "CATS", "SCAT", "TACT", "ACT", "TAB", "STAB", "BEAT",
        "TEA", "EAT", "SEAT", "DOG", "DOGS", "GOD", "ODE", "TOAD", "OATS", "COAT",
    ];

    fn find(dictionary: &[&str], anchor: &str, letters: &str) -> Result<Vec<String>> {
        let rack = Rack::from_letters(letters)?;
        let words = find_playable_words(dictionary, anchor, &rack);
        Ok(words.into_iter().map(String::from).collect())
    }

    #[test]
    fn test_extend_with_suffix() -> Result<()> {
        assert_eq!(find(&["CATS", "CAT", "DOG"], "CAT", "S")?, vec!["CATS"]);
        Ok(())
    }

    #[test]
    fn test_extension_without_tiles() -> Result<()> {
        assert!(find(&["SCAT", "CATS"], "CAT", "")?.is_empty());
        Ok(())
    }

    #[test]
    fn test_empty_anchor() -> Result<()> {
        assert_eq!(find(&["DOG", "DOGS"], "", "DOG")?, vec!["DOG"]);
        Ok(())
    }

    #[test]
    fn test_extend_with_prefix() -> Result<()> {
        assert_eq!(find(&["BAT"], "AT", "B")?, vec!["BAT"]);
        Ok(())
    }

    #[test]
    fn test_reuse_needs_letter_from_anchor() -> Result<()> {
        assert!(find(&["SEAT"], "TEA", "")?.is_empty());
        Ok(())
    }

    #[test]
    fn test_anchor_is_never_playable() -> Result<()> {
        for letters in &["", "CAT", "CATS", "ABCDEFG"] {
            let rack = Rack::from_letters(letters)?;
            assert!(!can_form_word("CAT", "CAT", &rack));
        }
        assert!(!can_form_word("", "", &Rack::new()));
        Ok(())
    }

    #[test]
    fn test_empty_anchor_needs_all_letters_on_rack() -> Result<()> {
        let rack = Rack::from_letters("TACS")?;
        let finder = Finder::new("", &rack);
        for &word in WORDS {
            let on_rack = rack.tally().contains(&Tally::from_word(word));
            assert_eq!(finder.can_form_word(word), on_rack, "{}", word);
        }
        Ok(())
    }

    #[test]
    fn test_borrow_only_one_letter() -> Result<()> {
        // T and A are both in the anchor, but only one may be borrowed
        let rack = Rack::from_letters("C")?;
        assert!(!can_form_word("TAC", "AT", &rack));
        let rack = Rack::from_letters("CA")?;
        assert!(can_form_word("TAC", "AT", &rack));
        // repeated letter in candidate, borrowed once
        let rack = Rack::from_letters("O")?;
        assert!(!can_form_word("TOT", "AT", &rack));
        Ok(())
    }

    #[test]
    fn test_reuse_formation() -> Result<()> {
        let rack = Rack::from_letters("CO")?;
        let finder = Finder::new("TEA", &rack);
        let formation = finder.formation("COT").unwrap();
        assert_eq!(formation.used().to_string(), "CO");
        assert_eq!(formation.borrowed().map(char::from), Some('T'));
        // all letters on rack: nothing borrowed
        let formation = finder.formation("CO").unwrap();
        assert_eq!(formation.borrowed(), None);
        Ok(())
    }

    #[test]
    fn test_extension_formation() -> Result<()> {
        let rack = Rack::from_letters("SCX")?;
        let finder = Finder::new("AT", &rack);
        let formation = finder.formation("SCAT").unwrap();
        assert_eq!(
            formation,
            Formation::Extension {
                used: Tally::from_word("SC")
            }
        );
        assert_eq!(formation.borrowed(), None);
        Ok(())
    }

    #[test]
    fn test_leftmost_occurrence() -> Result<()> {
        // "AT" occurs twice in "ATAT": the split is at the first, leftover "AT"
        let rack = Rack::from_letters("AT")?;
        let formation = Finder::new("AT", &rack).formation("ATAT").unwrap();
        assert_eq!(formation.used().to_string(), "AT");
        Ok(())
    }

    #[test]
    fn test_containment_does_not_fall_through() -> Result<()> {
        // "AT" is in "BATH", the leftover "BH" is not on the rack: no reuse attempted
        let rack = Rack::from_letters("B")?;
        let finder = Finder::new("AT", &rack);
        assert!(!finder.can_form_word("BATH"));
        assert!(!finder
            .with_rules(Rules {
                reuse_after_short_rack: true
            })
            .can_form_word("BATH"));
        Ok(())
    }

    #[test]
    fn test_reuse_after_short_rack_gives_same_words() -> Result<()> {
        // A word that contains the anchor and fails as extension can not succeed by
        // reuse either: reuse needs the same leftover letters plus all but one anchor letter.
        for &(anchor, letters) in &[("AT", "BCS"), ("TEA", "SB"), ("", "DOG"), ("O", "TAS")] {
            let rack = Rack::from_letters(letters)?;
            let strict = Finder::new(anchor, &rack);
            let relaxed = strict.clone().with_rules(Rules {
                reuse_after_short_rack: true,
            });
            assert_eq!(
                strict.find_playable_words(WORDS),
                relaxed.find_playable_words(WORDS)
            );
        }
        Ok(())
    }

    #[test]
    fn test_no_word_needs_reuse_after_short_rack() -> Result<()> {
        // Random anchors, racks and words over a small alphabet, so the anchor is often
        // found in a word whose leftover letters are not on the rack.
        let mut state: u32 = 2024;
        let mut next = move |n: usize| -> usize {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            ((state >> 16) as usize) % n
        };
        let mut random_word = |alphabet: &[u8], min: usize, max: usize| -> String {
            let len = min + next(max - min + 1);
            (0..len)
                .map(|_| alphabet[next(alphabet.len())] as char)
                .collect()
        };
        let mut short_rack = 0;
        for _ in 0..200 {
            let anchor = random_word(b"ABCD", 0, 3);
            let rack = Rack::from_letters(&random_word(b"ABCDE", 0, 7))?;
            let strict = Finder::new(&anchor, &rack);
            let relaxed = strict.clone().with_rules(Rules {
                reuse_after_short_rack: true,
            });
            for _ in 0..100 {
                let word = random_word(b"ABCDEF", 1, 6);
                let formation = strict.formation(&word);
                if formation.is_none() && word != anchor && word.contains(anchor.as_str()) {
                    short_rack += 1;
                }
                assert_eq!(
                    formation,
                    relaxed.formation(&word),
                    "anchor {} rack {} word {}",
                    anchor,
                    rack,
                    word
                );
            }
        }
        // the relaxed rule was tried many times
        assert!(short_rack > 100, "{}", short_rack);
        Ok(())
    }

    #[test]
    fn test_non_letters_are_rejected() -> Result<()> {
        let rack = Rack::from_letters("ABC")?;
        assert!(!can_form_word("ab", "", &rack));
        assert!(!can_form_word("A-B", "", &rack));
        assert!(!can_form_word("CÄB", "", &rack));
        Ok(())
    }

    #[test]
    fn test_rack_is_not_modified() -> Result<()> {
        let rack = Rack::from_letters("SBC")?;
        let before = rack;
        let words = find_playable_words(WORDS, "AT", &rack);
        assert!(!words.is_empty());
        assert_eq!(rack, before);
        Ok(())
    }

    #[test]
    fn test_idempotent_and_ordered() -> Result<()> {
        let rack = Rack::from_letters("SBCE")?;
        let finder = Finder::new("AT", &rack);
        let first = finder.find_playable_words(WORDS);
        let second = finder.find_playable_words(WORDS);
        assert_eq!(first, second);
        assert_eq!(
            first,
            vec!["BAT", "BATS", "CAT", "CATS", "SCAT", "BEAT", "EAT", "SEAT"]
        );
        Ok(())
    }

    #[test]
    fn test_find_formations_matches_words() -> Result<()> {
        let rack = Rack::from_letters("DOGS")?;
        let finder = Finder::new("O", &rack);
        let words: Vec<&str> = finder
            .find_formations(WORDS)
            .into_iter()
            .map(|(word, _)| word)
            .collect();
        assert_eq!(words, finder.find_playable_words(WORDS));
        Ok(())
    }

    #[test]
    fn test_string_dictionary() -> Result<()> {
        let dictionary: Vec<String> = WORDS.iter().map(|&w| String::from(w)).collect();
        let rack = Rack::from_letters("DGS")?;
        let words = find_playable_words(&dictionary, "O", &rack);
        assert_eq!(words, vec!["DOG", "DOGS", "GOD"]);
        Ok(())
    }
}
