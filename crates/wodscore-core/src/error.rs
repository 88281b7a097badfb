use thiserror::Error;

use crate::scheme::Scheme;

#[derive(Debug, Error)]
pub enum Error {
    /// Raw input failed the constraints of its scheme.
    #[error("Invalid {field} for scheme {scheme}: {message}")]
    Validation {
        scheme: Scheme,
        field: &'static str,
        message: String,
    },

    /// Unknown or unregistered scheme, or an incomplete scoring configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn validation(scheme: Scheme, field: &'static str, message: impl Into<String>) -> Self {
        Error::Validation {
            scheme,
            field,
            message: message.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_names_scheme_and_field() {
        let err = Error::validation(Scheme::Load, "value", "must not be negative");
        assert_eq!(
            err.to_string(),
            "Invalid value for scheme load: must not be negative"
        );
        assert!(err.is_validation());
        assert!(!err.is_configuration());
    }

    #[test]
    fn test_configuration_error() {
        let err = Error::Configuration("unknown scheme: emom".to_string());
        assert!(err.is_configuration());
        assert_eq!(err.to_string(), "Configuration error: unknown scheme: emom");
    }
}
