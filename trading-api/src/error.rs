use serde::Serialize;
use thiserror::Error;

/// Failure raised while dispatching a signal.
///
/// Both variants carry the offending action descriptor exactly as it appeared
/// in the configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignalError {
    /// A simple action name matched no registered action.
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    /// A parameterized action did not follow `setAlgoParam(<int>, <int>)`.
    #[error("Action: {0} is not configured correctly")]
    Configuration(String),
}

/// Coarse class of a [`SignalError`], used by transports to pick a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The request named something that does not exist.
    NotFound,
    /// The service is misconfigured; details stay in the logs.
    Internal,
}

impl SignalError {
    /// Returns the class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SignalError::UnknownAction(_) => ErrorKind::NotFound,
            SignalError::Configuration(_) => ErrorKind::Internal,
        }
    }

    /// Returns the message that may be shown to whoever sent the signal.
    ///
    /// Configuration problems are reported as a generic internal error so that
    /// parsing details never leave the service.
    pub fn public_message(&self) -> String {
        match self {
            SignalError::UnknownAction(_) => self.to_string(),
            SignalError::Configuration(_) => "Internal Error".to_string(),
        }
    }

    /// Returns the action descriptor that caused the error.
    pub fn descriptor(&self) -> &str {
        match self {
            SignalError::UnknownAction(d) | SignalError::Configuration(d) => d,
        }
    }
}
