use failure::Fail;
use std::io::ErrorKind;
use std::path::Path;

/// The Error enum containing all Errors that may occur when running bundlefix
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Fail)]
pub enum Error {
    #[fail(display = "No such file: {}", _0)]
    FileNotFound(String),
    #[fail(display = "Permission denied: {}", _0)]
    PermissionDenied(String),
    #[fail(display = "Failed to decode the project file as UTF-8! Error: {}", _0)]
    Decode(String),
    #[fail(display = "Failed to read/write the project file! Error: {}", _0)]
    Io(String),
    #[fail(display = "Invalid bundle identifier pattern! Error: {}", _0)]
    Pattern(String),
    #[fail(display = "Failed to load the built-in defaults! Error: {}", _0)]
    Data(String),
    #[fail(display = "Didn't provide enough info for action {}", _0)]
    TooLittleInfo(String),
}

impl Error {
    /// Classifies an `io::Error` by its kind and attaches the path it happened on
    pub fn from_io(path: &Path, e: &std::io::Error) -> Self {
        classify_io(e.kind(), format!("{}: {}", path.display(), e))
    }
}

fn classify_io(kind: ErrorKind, msg: String) -> Error {
    match kind {
        ErrorKind::NotFound => Error::FileNotFound(msg),
        ErrorKind::PermissionDenied => Error::PermissionDenied(msg),
        ErrorKind::InvalidData => Error::Decode(msg),
        _ => Error::Io(msg),
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        classify_io(e.kind(), e.to_string())
    }
}

impl From<regex::Error> for Error {
    fn from(e: regex::Error) -> Self {
        Error::Pattern(e.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Data(e.to_string())
    }
}
