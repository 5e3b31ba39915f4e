//! Error types shared by the store, auth and consumption modules

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EcoError {
    /// Text entered for a reading could not be parsed as a number.
    #[error("Invalid input: '{input}' is not a number")]
    InvalidNumericInput { input: String },

    /// Registration attempted with a username that is already taken.
    #[error("Username '{0}' already exists")]
    DuplicateUsername(String),

    /// A form was submitted with a blank required field.
    #[error("Missing required field: {0}")]
    MissingRequiredField(&'static str),

    /// Login attempted with an unknown username or a wrong password.
    #[error("Invalid username or password.")]
    InvalidCredentials,

    /// The password hasher rejected its input or parameters.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// Underlying SQLite failure.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Filesystem failure (config, log, or database directory).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be resolved.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl EcoError {
    /// Whether the error is a user mistake to surface in a dialog, as opposed
    /// to a failure that should end the session.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            EcoError::InvalidNumericInput { .. }
                | EcoError::DuplicateUsername(_)
                | EcoError::MissingRequiredField(_)
                | EcoError::InvalidCredentials
        )
    }

    /// Title used when the error is shown in a dialog.
    pub fn dialog_title(&self) -> &'static str {
        match self {
            EcoError::InvalidNumericInput { .. } => "Invalid Input",
            EcoError::DuplicateUsername(_) => "Error",
            EcoError::MissingRequiredField(_) => "Input Error",
            EcoError::InvalidCredentials => "Failed",
            _ => "Failure",
        }
    }
}

pub type Result<T> = std::result::Result<T, EcoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_facing_errors_are_recoverable() {
        assert!(EcoError::InvalidNumericInput { input: "abc".into() }.is_user_facing());
        assert!(EcoError::DuplicateUsername("alice".into()).is_user_facing());
        assert!(EcoError::MissingRequiredField("Username").is_user_facing());
        assert!(!EcoError::Config("bad".into()).is_user_facing());
        assert!(!EcoError::PasswordHash("bad salt".into()).is_user_facing());
    }

    #[test]
    fn invalid_credentials_is_a_typed_login_failure() {
        let err = EcoError::InvalidCredentials;
        assert!(err.is_user_facing());
        assert_eq!(err.dialog_title(), "Failed");
        assert_eq!(err.to_string(), "Invalid username or password.");

        let boxed: Box<dyn std::error::Error> = err.into();
        assert!(matches!(
            boxed.downcast_ref::<EcoError>(),
            Some(EcoError::InvalidCredentials)
        ));
    }

    #[test]
    fn messages_name_the_offending_value() {
        let err = EcoError::InvalidNumericInput { input: "abc".into() };
        assert_eq!(err.to_string(), "Invalid input: 'abc' is not a number");
        let err = EcoError::DuplicateUsername("alice".into());
        assert_eq!(err.to_string(), "Username 'alice' already exists");
    }
}
