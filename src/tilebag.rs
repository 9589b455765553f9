use crate::pool::LetterPool;
use crate::tiles::Letter;
use multiset::HashMultiSet;
use rand::{seq::IteratorRandom, Rng};
use std::ops::Deref;
use std::ops::Sub;

/// Keeps track of the tiles that have not been drawn yet
#[derive(Debug, Clone)]
pub struct TileBag(HashMultiSet<Letter>);

impl Deref for TileBag {
    type Target = HashMultiSet<Letter>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Sub for TileBag {
    type Output = Self;
    fn sub(self, other: Self) -> Self::Output {
        Self(self.0 - other.0)
    }
}

impl Default for TileBag {
    fn default() -> Self {
        Self::new()
    }
}

impl TileBag {
    /// An empty bag
    pub fn new() -> Self {
        Self(HashMultiSet::new())
    }

    /// A full bag with all tiles from `pool`.
    pub fn from_pool(pool: &LetterPool) -> Self {
        let mut bag = HashMultiSet::new();
        for (letter, count, _points) in pool.iter() {
            if count > 0 {
                bag.insert_times(letter, count as usize);
            }
        }
        Self(bag)
    }

    /// A bag holding `tiles`.
    pub fn from_tiles<T: AsRef<[Letter]>>(tiles: T) -> TileBag {
        let mut bag = HashMultiSet::new();
        for &tile in tiles.as_ref() {
            bag.insert(tile);
        }
        Self(bag)
    }

    /// Draw up to `n` random tiles, and remove them from the bag.
    /// Returns fewer than `n` tiles if the bag runs out.
    pub fn draw<R: Rng>(&mut self, n: usize, rng: &mut R) -> Vec<Letter> {
        // sorted, so the draw only depends on the rng
        let mut tiles: Vec<Letter> = self.0.iter().cloned().collect();
        tiles.sort_unstable();
        let mut drawn = tiles.into_iter().choose_multiple(rng, n);
        drawn.sort_unstable();
        for tile in &drawn {
            self.0.remove(tile);
        }
        drawn
    }

    /// Put `tiles` back in the bag.
    pub fn return_tiles<T: AsRef<[Letter]>>(&mut self, tiles: T) {
        for &tile in tiles.as_ref() {
            self.0.insert(tile);
        }
    }
}

impl From<&LetterPool> for TileBag {
    fn from(pool: &LetterPool) -> Self {
        TileBag::from_pool(pool)
    }
}
