//! Error types for the registration flow.

/// Top-level error type for the registration flow.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Failures of a single submission to the registration endpoint.
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("Request to registration endpoint failed: {0}")]
    Transport(String),

    #[error("Registration rejected: {}", .detail.as_deref().unwrap_or("no detail"))]
    Rejected { detail: Option<String> },

    #[error("Malformed response from registration endpoint: {0}")]
    MalformedResponse(String),

    #[error("Registration succeeded without a ticket id")]
    MissingTicketId,
}

impl RegistrationError {
    /// Text shown to the user when a submission fails.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { detail } => format!(
                "Error: {}",
                detail
                    .as_deref()
                    .filter(|d| !d.is_empty())
                    .unwrap_or("Could not process registration.")
            ),
            Self::Transport(_) | Self::MalformedResponse(_) | Self::MissingTicketId => {
                "An error occurred. Please try again.".to_string()
            }
        }
    }
}

/// Clipboard errors.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to write to clipboard: {0}")]
    WriteFailed(String),

    #[error("No ticket id to copy")]
    NothingToCopy,
}

/// Ticket rendering errors.
#[derive(Debug, thiserror::Error)]
pub enum TicketError {
    #[error("Failed to encode ticket code: {0}")]
    Encode(String),
}

/// Result type alias for the registration flow.
pub type Result<T> = std::result::Result<T, Error>;
