//! Errors raised at the boundary, before any block gets processed.
//! The cipher, framer and chaining modes are total and never fail.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The key didn't split into exactly four words.
    #[error("key must be 4 comma-separated hex words, got {found}")]
    KeyArity { found: usize },

    /// The IV didn't split into exactly two words.
    #[error("IV must be 2 comma-separated hex words, got {found}")]
    IvArity { found: usize },

    /// A key or IV token that isn't a 32-bit hexadecimal number.
    #[error("{token:?} is not a 32-bit hexadecimal word")]
    InvalidHex { token: String },

    /// Ciphertext has to be a whole number of 8-byte blocks.
    #[error("ciphertext length {len} is not a multiple of 8 bytes")]
    RaggedCiphertext { len: usize },

    #[error("input file {} does not exist", path.display())]
    MissingInput { path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            Error::MissingInput { path }
        } else {
            Error::Io { path, source }
        }
    }
}
