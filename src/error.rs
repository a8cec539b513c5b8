use thiserror::Error;

pub use color_eyre::eyre::eyre;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Malformed varint: no terminating byte or value exceeds 64 bits")]
    MalformedVarint,

    #[error("Truncated buffer: needed {needed} bytes, {available} available")]
    TruncatedBuffer { needed: usize, available: usize },

    #[error("{remaining} trailing bytes at position {position} cannot form a row")]
    TrailingBytes { position: usize, remaining: usize },

    #[error("Encoding error: invalid UTF-8 in length-prefixed string")]
    EncodingError,

    #[error("Unknown ClickHouse type: {0}")]
    UnknownType(String),

    #[error("Row {row} has {actual} values but {expected} column types were given")]
    RowWidthMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid value for {type_name}: {reason}")]
    InvalidValue { type_name: String, reason: String },

    #[error("Bad usage error: {0}")]
    BadUsageError(String),

    #[error("Bad config error: {0}")]
    BadConfigError(String),

    #[error("Library bug: {0}")]
    LibraryBug(color_eyre::Report),
}

impl Error {
    /// Wrap an error that only implements `Debug` (e.g. zerocopy cast errors)
    pub fn from_debug(err: impl std::fmt::Debug) -> Self {
        Error::LibraryBug(eyre!("{:?}", err))
    }

    pub(crate) fn invalid_value(type_name: &str, reason: impl Into<String>) -> Self {
        Error::InvalidValue {
            type_name: type_name.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<simdutf8::basic::Utf8Error> for Error {
    fn from(_: simdutf8::basic::Utf8Error) -> Self {
        Error::EncodingError
    }
}

impl From<std::convert::Infallible> for Error {
    fn from(err: std::convert::Infallible) -> Self {
        match err {}
    }
}

pub type Result<T> = std::result::Result<T, Error>;
