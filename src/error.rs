use thiserror::Error;

/// Classifies matcher errors for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Literal is not a 6-byte hardware address
    InvalidFormat,
    /// Referenced provider tag is not registered
    SourceNotFound,
    /// Batch text parse failed at a specific line
    ParseFailure,
    /// A provider could not deliver its initial data to a listener
    ProviderLoad,
    /// I/O error while reading a source
    Io,
}

/// MAC matcher error types
#[derive(Error, Debug)]
pub enum MatcherError {
    #[error("Invalid MAC address: {0}")]
    InvalidFormat(String),

    #[error("Cannot find provider {0}")]
    SourceNotFound(String),

    #[error("Parse error at line {line}: {source}")]
    ParseFailure {
        line: usize,
        #[source]
        source: Box<MatcherError>,
    },

    #[error("Failed to load data from provider {tag}: {source}")]
    ProviderLoad {
        tag: String,
        #[source]
        source: Box<MatcherError>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MatcherError {
    /// Returns the classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MatcherError::InvalidFormat(_) => ErrorKind::InvalidFormat,
            MatcherError::SourceNotFound(_) => ErrorKind::SourceNotFound,
            MatcherError::ParseFailure { .. } => ErrorKind::ParseFailure,
            MatcherError::ProviderLoad { .. } => ErrorKind::ProviderLoad,
            MatcherError::Io(_) => ErrorKind::Io,
        }
    }

    /// Line number of a batch parse failure, if this is one.
    pub fn line(&self) -> Option<usize> {
        match self {
            MatcherError::ParseFailure { line, .. } => Some(*line),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, MatcherError>;
