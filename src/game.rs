use crate::dictionary::{Dictionary, Playable};
use crate::finder::{Finder, Rules};
use crate::pool::LetterPool;
use crate::tilebag::TileBag;
use crate::tiles::{Letter, Rack};
use crate::Error;
use rand::{rngs::StdRng, SeedableRng};
use std::cmp::Reverse;

/// The state of a game: the tiles left in the bag, the player's rack, the anchor word
/// on the board and the score so far.
///
/// ## Examples
/// ```
/// use rack_word_finder::{Dictionary, Game, LetterPool, Error};
/// let dictionary = Dictionary::from_words(&["cat", "cats", "scat"])?;
/// let mut game = Game::new(LetterPool::english(), 1)
///     .with_anchor("CAT")?
///     .with_rack("SXE")?;
/// let points = game.play("CATS", &dictionary)?;
/// assert_eq!(points, 6);
/// assert_eq!(game.anchor(), "CATS");
/// assert_eq!(game.rack().to_string(), "EX");
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    pool: LetterPool,
    bag: TileBag,
    rack: Rack,
    anchor: String,
    score: u32,
    rules: Rules,
    rng: StdRng,
}

impl Game {
    /// Start a game with a full bag of tiles from `pool`, an empty rack and no anchor word.
    /// The `seed` makes the tile draws reproducible.
    pub fn new(pool: LetterPool, seed: u64) -> Game {
        let bag = TileBag::from_pool(&pool);
        Game {
            pool,
            bag,
            rack: Rack::new(),
            anchor: String::new(),
            score: 0,
            rules: Rules::default(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Set the anchor word, and return the modified game.
    /// ## Errors
    /// If the word has characters other than `A`..`Z`.
    pub fn with_anchor(mut self, anchor: &str) -> Result<Game, Error> {
        if !anchor.bytes().all(|b| Letter::from_byte(b).is_some()) {
            return Err(Error::InvalidWord(String::from(anchor)));
        }
        self.anchor = String::from(anchor);
        Ok(self)
    }

    /// Set the rack, and return the modified game. The tiles are not taken from the bag.
    /// ## Errors
    /// If the letters are not a valid rack, see [`Rack::from_letters`].
    pub fn with_rack(mut self, letters: &str) -> Result<Game, Error> {
        self.rack = Rack::from_letters(letters)?;
        Ok(self)
    }

    /// Set the formation rules, and return the modified game.
    pub fn with_rules(mut self, rules: Rules) -> Game {
        self.rules = rules;
        self
    }

    pub fn pool(&self) -> &LetterPool {
        &self.pool
    }

    pub fn bag(&self) -> &TileBag {
        &self.bag
    }

    pub fn rack(&self) -> &Rack {
        &self.rack
    }

    pub fn anchor(&self) -> &str {
        &self.anchor
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Draw tiles from the bag until the rack is full or the bag is empty.
    /// Returns the number of tiles drawn.
    pub fn refill_rack(&mut self) -> usize {
        let drawn = self.bag.draw(self.rack.free(), &mut self.rng);
        for &letter in &drawn {
            // never more than the free places on the rack
            if let Err(err) = self.rack.push(letter) {
                tracing::warn!("{}", err);
                self.bag.return_tiles([letter]);
            }
        }
        tracing::debug!(rack = %self.rack, bag = self.bag.len(), "refill rack");
        drawn.len()
    }

    /// A finder for the current anchor word and rack.
    pub fn finder(&self) -> Finder<'_> {
        Finder::new(&self.anchor, &self.rack).with_rules(self.rules)
    }

    /// Scan `dictionary` for the words that can be played now.
    pub fn playable_words<'d>(&self, dictionary: &'d Dictionary) -> Playable<'d> {
        dictionary.find_with(&self.finder())
    }

    /// Play `word`: take the used tiles off the rack, add the points of the word to the score,
    /// and make it the new anchor word. Returns the points for the word.
    /// ## Errors
    /// - If `word` is not in `dictionary`.
    /// - If `word` can not be formed with the rack and anchor word.
    pub fn play(&mut self, word: &str, dictionary: &Dictionary) -> Result<u32, Error> {
        let word = word.to_uppercase();
        if !dictionary.contains(&word) {
            return Err(Error::UnknownWord(word));
        }
        let formation = match self.finder().formation(&word) {
            Some(formation) => formation,
            None => return Err(Error::NotPlayable(word)),
        };
        self.rack.remove(formation.used())?;
        let points = self.pool.word_points(&word);
        self.score += points;
        tracing::debug!(
            word = word.as_str(),
            points,
            tile_points = self.pool.tally_points(formation.used()),
            borrowed = ?formation.borrowed(),
            "play"
        );
        self.anchor = word;
        Ok(points)
    }

    /// Sort `words` by points, then length (both highest first), then alphabetically.
    pub fn rank_by_points<'w>(&self, words: &[&'w str]) -> Vec<(&'w str, u32)> {
        let mut ranked: Vec<(&str, u32)> = words
            .iter()
            .map(|&word| (word, self.pool.word_points(word)))
            .collect();
        ranked.sort_by_key(|&(word, points)| (Reverse(points), Reverse(word.len()), word));
        ranked
    }
}
