use std::fmt;

use crate::stamp::SUBSEC_MAX;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    InvalidTimestamp { subsec: i64 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "io error: {err}"),
            Error::InvalidTimestamp { subsec } => {
                write!(f, "invalid timestamp: sub-seconds {subsec} exceed {SUBSEC_MAX}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::Io(value)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
