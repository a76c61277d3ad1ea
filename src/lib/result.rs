use std::{error, fmt, io};

use sqlite;

/// An error.
pub struct Error {
    kind: ErrorKind,
    message: String,
}

/// The type of an error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// The parameters are missing, malformed, or inconsistent.
    Configuration,
    /// The state of the simulation has become inconsistent.
    Internal,
    /// An output sink has failed.
    Output,
}

/// A result.
pub type Result<T> = ::std::result::Result<T, Error>;

impl Error {
    /// Create an error.
    #[inline]
    pub fn new<T: ToString>(kind: ErrorKind, message: T) -> Error {
        Error { kind: kind, message: message.to_string() }
    }

    /// Return the type.
    #[inline(always)]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{:?}({:?})", self.kind, self.message)
    }
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        self.message.fmt(formatter)
    }
}

impl error::Error for Error {
}

impl From<io::Error> for Error {
    #[inline]
    fn from(error: io::Error) -> Error {
        Error::new(ErrorKind::Output, error)
    }
}

impl From<sqlite::Error> for Error {
    #[inline]
    fn from(error: sqlite::Error) -> Error {
        Error::new(ErrorKind::Output, error)
    }
}
