use marquee_core::validation::FieldViolation;

/// Failure category of a client call, preserved for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Server,
    Transport,
}

/// Errors from the entry service client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The service rejected the payload (400 with field details).
    #[error("{message}")]
    Validation {
        message: String,
        fields: Vec<FieldViolation>,
    },

    /// The entry does not exist (404).
    #[error("{message}")]
    NotFound { message: String },

    /// Any other non-success response, or a `success: false` envelope.
    #[error("Entry service error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not a usable envelope.
    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl ClientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::Validation { .. } => ErrorKind::Validation,
            ClientError::NotFound { .. } => ErrorKind::NotFound,
            ClientError::Server { .. } => ErrorKind::Server,
            ClientError::Transport(_) | ClientError::Malformed(_) => ErrorKind::Transport,
        }
    }

    /// Message suitable for a notification after `action` failed
    /// (e.g. `"add entry"`).
    pub fn user_message(&self, action: &str) -> String {
        match self {
            ClientError::Validation { fields, .. } if !fields.is_empty() => {
                let details: Vec<String> = fields
                    .iter()
                    .map(|f| format!("{}: {}", f.field, f.message))
                    .collect();
                format!("Could not {action}. {}", details.join("; "))
            }
            ClientError::Validation { message, .. } => format!("Could not {action}. {message}"),
            ClientError::NotFound { .. } => {
                format!("Could not {action}. The entry no longer exists.")
            }
            ClientError::Server { .. } => {
                format!("Failed to {action}. The server could not complete the request.")
            }
            ClientError::Transport(_) | ClientError::Malformed(_) => {
                format!("Failed to {action}. Please try again.")
            }
        }
    }
}
