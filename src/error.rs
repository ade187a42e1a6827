// One small error type for the whole crate.
// Every variant states *where* things went wrong.
use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    InvalidArgument(String), // A value failed validation (e.g. inverted rectangle)
    Config(String),          // An environment setting could not be parsed
    WindowInit(String),      // Creating the window failed
    WindowUpdate(String),    // Updating the window buffer failed
    Export(String),          // Writing a snapshot image failed
}

impl Display for Error {
    // This decides how the error is printed to your console.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(s) => write!(f, "Invalid argument: {s}"),
            Error::Config(s) => write!(f, "Config error: {s}"),
            Error::WindowInit(s) => write!(f, "Window init error: {s}"),
            Error::WindowUpdate(s) => write!(f, "Window update error: {s}"),
            Error::Export(s) => write!(f, "Export error: {s}"),
        }
    }
}

impl std::error::Error for Error {}
