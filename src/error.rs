use std::error::Error as StdError;
use std::fmt::{Display, Formatter};
use std::io;

#[derive(Debug)]
pub enum Error {
    /// The string is not a color the CSS parser understands.
    InvalidColor {
        input: String,
        source: csscolorparser::ParseColorError,
    },
    /// Writing to the console failed.
    Io(io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidColor { input, source } => {
                write!(f, "invalid color {input:?}: {source}")
            }
            Error::Io(e) => write!(f, "console write failed: {e}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::InvalidColor { source, .. } => Some(source),
            Error::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}
