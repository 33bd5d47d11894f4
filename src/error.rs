use thiserror::Error;
use zip::result::ZipError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Custom(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Zip error: {0}")]
    Zip(ZipError),

    #[error("Invalid scaffold definition: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Scaffold definition not found: {0}")]
    DefinitionNotFound(String),

    #[error("Invalid root directory name: {0:?}")]
    InvalidRoot(String),

    #[error("Invalid entry path: {0:?}")]
    InvalidEntryPath(String),

    #[error("Duplicate entry path: {0:?}")]
    DuplicateEntry(String),
}

impl Error {
    pub fn custom<T: Into<String>>(msg: T) -> Self {
        Error::Custom(msg.into())
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Error::custom(err)
    }
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Error::custom(err)
    }
}

// The zip writer wraps write failures; unwrap them so the OS error is reported.
impl From<ZipError> for Error {
    fn from(err: ZipError) -> Self {
        match err {
            ZipError::Io(err) => Error::Io(err),
            err => Error::Zip(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_zip_io_error_is_unwrapped() {
        let err = Error::from(ZipError::Io(io::Error::new(
            io::ErrorKind::StorageFull,
            "No space left on device",
        )));
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.to_string(), "I/O error: No space left on device");
    }

    #[test]
    fn test_other_zip_errors_are_kept() {
        let err = Error::from(ZipError::FileNotFound);
        assert!(matches!(err, Error::Zip(ZipError::FileNotFound)));
    }

    #[test]
    fn test_from_message() {
        assert_eq!(Error::from("boom").to_string(), "boom");
        assert_eq!(Error::from(String::from("bang")).to_string(), "bang");
    }
}
