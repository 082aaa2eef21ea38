use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the ttf2tex application
#[derive(Debug)]
pub enum Error {
    /// IO operations errors
    Io(io::Error),
    /// Font file could not be prepared
    Font(String),
    /// Invalid file or directory path
    InvalidPath(PathBuf),
    /// Configuration errors
    Config(String),
    /// External converter or compiler could not be launched
    Tool { program: String, source: io::Error },
    /// Target document could not be read
    Document(String),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Tool { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Font(msg) => write!(f, "Font error: {}", msg),
            Error::InvalidPath(path) => write!(f, "Invalid path: {}", path.display()),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Tool { program, source } => {
                write!(f, "Could not run {}: {}", program, source)
            }
            Error::Document(msg) => write!(f, "Document error: {}", msg),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

/// Result type alias for ttf2tex operations
pub type Result<T> = std::result::Result<T, Error>;
