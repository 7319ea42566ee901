use std::fmt::{self, Display, Formatter};

/// Errors raised when constructing or querying a receive window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The requested window capacity cannot hold a single sequence number.
    InvalidCapacity(usize),
    /// A first/max accessor was queried before any number was tracked.
    NotStarted,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidCapacity(requested) => {
                write!(f, "window capacity must be at least 1, got {}", requested)
            }
            ErrorKind::NotStarted => {
                write!(f, "no sequence number has been tracked yet")
            }
        }
    }
}

impl std::error::Error for ErrorKind {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ErrorKind::InvalidCapacity(0).to_string(),
            "window capacity must be at least 1, got 0"
        );
        assert_eq!(
            ErrorKind::NotStarted.to_string(),
            "no sequence number has been tracked yet"
        );
    }
}
