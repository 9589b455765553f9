//! Basic types for working with letter tiles.
mod letter;
mod rack;
mod tally;

/// Number of distinct letters `A`..`Z`
pub const NLETTERS: usize = 26;

/// Maximum number of tiles on a rack
pub const RACK_SIZE: usize = 7;

pub use letter::Letter;
pub use rack::{Rack, RackLetters};
pub use tally::Tally;
