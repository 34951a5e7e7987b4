//! Error types for the recoverable failure classes.
//!
//! Invariant violations (equipping without an owner, a second death) are
//! programming errors and panic instead of showing up here.

use thiserror::Error;

/// Problems with monster/item definition tables.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("definition table is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{list} list names `{name}`, which has no definition")]
    UndefinedKind { list: &'static str, name: String },

    #[error("monster `{name}`: {reason}")]
    InvalidMonster { name: String, reason: String },

    #[error("item `{name}`: {reason}")]
    InvalidItem { name: String, reason: String },

    #[error("no monster definition named `{0}`")]
    UnknownMonster(String),

    #[error("no item definition named `{0}`")]
    UnknownItem(String),
}

/// Malformed `XdY` dice strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiceError {
    #[error("dice string `{0}` has no `d` separator")]
    MissingSeparator(String),

    #[error("dice string `{0}` has a non-numeric part")]
    NotANumber(String),

    #[error("dice string `{0}` describes a die with no sides")]
    NoSides(String),

    #[error("dice string `{0}` can roll more than an i32 holds")]
    TooLarge(String),
}

/// Failures while writing or reading a saved snapshot.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("save file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not determine a save directory")]
    NoSaveDirectory,

    #[error("invalid save version: expected 0x{expected:016X}, got 0x{found:016X}")]
    BadVersion { expected: u64, found: u64 },

    #[error("save data is truncated")]
    Truncated,

    #[error("checksum verification failed")]
    ChecksumMismatch,

    #[error("snapshot encoding failed: {0}")]
    Encoding(#[from] bincode::Error),
}
