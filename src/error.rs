//! Diagnostic formatting errors

/// The error type for rejected diagnostic input
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    pub(crate) fn new(kind: ErrorKind, message: String) -> Self {
        Error { kind, message }
    }

    /// Returns the corresponding [ErrorKind] for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the message for this error.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", &self.kind)
        } else {
            write!(f, "{}: {}", &self.kind, &self.message)
        }
    }
}

impl std::error::Error for Error {}

/// A list of general categories of formatting input error.
#[non_exhaustive]
#[derive(Debug, displaydoc::Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKind {
    /// device name does not fit in the name buffer
    NameTooLong,
    /// packed data is not a whole number of entries
    InvalidLength,
    /// unknown address type
    InvalidAddressType,
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error {
            kind,
            message: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_message() {
        let err = Error::new(ErrorKind::NameTooLong, "31 bytes, limit is 30".to_string());
        assert_eq!(
            err.to_string(),
            "device name does not fit in the name buffer: 31 bytes, limit is 30"
        );
        assert_eq!(err.kind(), ErrorKind::NameTooLong);
    }

    #[test]
    fn display_without_message() {
        let err = Error::from(ErrorKind::InvalidAddressType);
        assert_eq!(err.to_string(), "unknown address type");
        assert!(err.message().is_empty());
    }
}
