// Error types shared by the store, the console layer and the command loop.
// Recoverable errors become a message on screen; the rest end the session.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while handling phone book commands.
#[derive(Error, Debug)]
pub enum BookError {
    /// The requested save file does not exist.
    #[error("No such file: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The save file exists but is not a phone book.
    #[error("Cannot read {}: {reason}", .path.display())]
    MalformedSave { path: PathBuf, reason: String },

    /// User typed something that is not a number where an index was expected.
    #[error("Not a valid number: {0:?}")]
    InvalidIndex(String),

    /// A 1-based index outside the list.
    #[error("There is no entry number {index} (have {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("No such field: {0:?}")]
    UnknownField(String),

    #[error("No such command: {0:?}")]
    UnknownCommand(String),

    #[error("Personal number must not be empty")]
    EmptyPersonalPhone,

    #[error("A contact with personal number {0} already exists")]
    DuplicatePersonalPhone(String),

    /// Reading or writing in the saves directory failed.
    #[error("Cannot access {}: {source}", .path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Standard input reached end of file.
    #[error("Input closed")]
    InputClosed,

    /// Terminal I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BookError {
    pub(crate) fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BookError::Storage {
            path: path.into(),
            source,
        }
    }

    /// Whether the command loop should report this error and keep going.
    /// Only the terminal going away ends a session.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, BookError::InputClosed | BookError::Io(_))
    }
}

pub type BookResult<T> = Result<T, BookError>;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
