//! Error Types

use thiserror::Error;

/// Result type alias for routing operations
pub type Result<T> = std::result::Result<T, RouteError>;

/// Routing error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// Reverse lookup for a name that is not in the table
    #[error("Unknown route name: {0}")]
    UnknownName(String),

    /// Two entries share a name
    #[error("Duplicate route name: {0}")]
    DuplicateName(String),

    /// Two entries match the same path
    #[error("Duplicate route path: {0}")]
    DuplicatePath(String),

    /// Path pattern is not absolute
    #[error("Invalid route path: {0}")]
    InvalidPath(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl RouteError {
    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            Self::UnknownName(name) => format!("There is no page called '{name}'."),
            Self::DuplicateName(_) | Self::DuplicatePath(_) | Self::InvalidPath(_) => {
                "The application routes are misconfigured.".into()
            }
            Self::Config(msg) => format!("Invalid configuration: {msg}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_name_message() {
        let err = RouteError::UnknownName("settings".into());
        assert_eq!(err.to_string(), "Unknown route name: settings");
        assert!(err.user_message().contains("settings"));
    }
}
