//! Controller error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is caught at the operation boundary (generate, export) and
//! turned into a banner message. Nothing here is fatal to the controller.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced by controller operations and service clients.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ControllerError {
    /// The remote service answered with a non-success status.
    #[error("request failed with status {status}")]
    Transport { status: u16, message: Option<String> },

    /// The request never produced a response (connection refused, aborted fetch).
    #[error("request failed: {0}")]
    Network(String),

    /// The response status was success but the payload shape was invalid.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The operation cannot run in the current state; no request was sent.
    #[error("{0}")]
    Precondition(String),
}

impl ControllerError {
    /// Short stable label used as a structured log field.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport { .. } => "transport",
            Self::Network(_) => "network",
            Self::Malformed(_) => "malformed",
            Self::Precondition(_) => "precondition",
        }
    }

    /// Text shown to the user in the error banner.
    ///
    /// Server-supplied transport messages are surfaced verbatim; everything
    /// else except local precondition failures collapses to `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Transport { message: Some(message), .. } if !message.trim().is_empty() => message.clone(),
            Self::Precondition(message) => message.clone(),
            Self::Transport { .. } | Self::Network(_) | Self::Malformed(_) => fallback.to_owned(),
        }
    }
}
