//! A word finder for rack and anchor word games.
//! <br>
//! Given an anchor word that is already on the board and a rack of up to 7 letter tiles,
//! this crate finds every word in a dictionary that can be played. A word can be played if:
//! - it extends the anchor word with a prefix and/or suffix of rack tiles, or
//! - it is formed from rack tiles, borrowing at most one letter from the anchor word.
//!
//! The anchor word itself is never playable.
//! It can use the `rayon` crate to scan the dictionary in parallel; the order of the dictionary is kept.
//!
//! # How to use `rack_word_finder`
//! Load a [`Dictionary`] with one word per line, build a [`Rack`], and scan the dictionary
//! for an anchor word. For a complete game round with tile draws and scoring, see [`Game`].
//!
//! # Basic usage
//!  ```
//! # use rack_word_finder::{Dictionary, Playable, Rack, Error};
//! let dictionary = Dictionary::from_words(&["cats", "cat", "dog", "scat", "act"])?;
//! let rack = Rack::from_letters("SC")?;
//! let playable = dictionary.find_playable_words("CAT", &rack);
//! assert_eq!(playable, Playable::Words(vec!["CATS", "SCAT"]));
//! for word in playable.words() {
//!     println!("{}", word);
//! }
//! # Ok::<(), Error>(())
//! ```
mod dictionary;
mod error;
mod finder;
mod game;
mod letterset;
mod pool;
mod tilebag;
mod tiles;

pub use crate::dictionary::{Dictionary, Playable};
pub use crate::error::Error;
pub use crate::finder::{can_form_word, find_playable_words, Finder, Formation, Rules};
pub use crate::game::Game;
pub use crate::letterset::LetterSet;
pub use crate::pool::LetterPool;
pub use crate::tilebag::TileBag;
pub use crate::tiles::{Letter, Rack, RackLetters, Tally, NLETTERS, RACK_SIZE};
