use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading wordfile
    #[error("Wordfile \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Error creating or writing wordfile
    #[error("Wordfile \"{path}\" could not be written")]
    WriteError {
        path: String,
        source: std::io::Error,
    },

    /// Error deserializing bincoded wordfile
    #[cfg(all(feature = "serde", feature = "bincode"))]
    #[error("Wordfile {0} could not be deserialized")]
    WordfileDeserializeError(String),

    /// Error writing bincoded wordfile
    #[cfg(all(feature = "serde", feature = "bincode"))]
    #[error("Wordfile {0} could not be serialized")]
    WordfileSerializeError(String),

    /// Character is not one of `A`..`Z`
    #[error("Invalid letter '{0}'")]
    InvalidLetter(char),

    /// Word contains something other than letters
    #[error("Invalid word \"{0}\"")]
    InvalidWord(String),

    /// The dictionary holds no words after loading
    #[error("Dictionary is empty")]
    EmptyDictionary,

    /// Attempt to hold more tiles than fit on a rack
    #[error("Rack can not hold {0} tiles (max 7)")]
    RackOverflow(usize),

    /// Attempt to take tiles that are not on the rack
    #[error("Tiles \"{0}\" are not on the rack")]
    MissingTiles(String),

    /// Word is not in the dictionary
    #[error("Unknown word \"{0}\"")]
    UnknownWord(String),

    /// Word can not be formed from rack and anchor word
    #[error("Word \"{0}\" can not be played")]
    NotPlayable(String),
}
