//! Remote generation/export boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! The generation and export services are black boxes reached over HTTP.
//! This module owns the request/response contract; transports (`reqwest` in
//! [`crate::http`], `gloo-net` in the browser client) only move bytes and
//! hand the status/body to the parsers below.

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;

use serde::{Deserialize, Serialize};

use crate::error::ControllerError;
use crate::model::PresentationPreview;

pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate presentation";

// =============================================================================
// REQUESTS
// =============================================================================

/// Body of `POST /generate`. `timestamp` keeps distinct submissions from
/// sharing a cached response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    pub topic: String,
    pub style: String,
    pub timestamp: u64,
}

/// Body of `POST /export/*`.
#[derive(Debug, Serialize)]
pub struct ExportRequest<'a> {
    pub presentation: &'a PresentationPreview,
}

/// Headers sent with every generation request.
pub const NO_CACHE_HEADERS: [(&str, &str); 2] = [("Cache-Control", "no-cache, no-store"), ("Pragma", "no-cache")];

// =============================================================================
// EXPORT KIND
// =============================================================================

/// Binary artifact formats offered by the export service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportKind {
    Pdf,
    SlideDeck,
}

impl ExportKind {
    #[must_use]
    pub fn filename(self) -> &'static str {
        match self {
            Self::Pdf => "presentation.pdf",
            Self::SlideDeck => "presentation.pptx",
        }
    }

    #[must_use]
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::SlideDeck => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::SlideDeck => "PowerPoint",
        }
    }

    #[must_use]
    pub fn loading_message(self) -> String {
        format!("Generating {}…", self.label())
    }

    #[must_use]
    pub fn success_message(self) -> String {
        format!("{} downloaded successfully", self.label())
    }

    #[must_use]
    pub fn failure_message(self) -> String {
        format!("Failed to export {}", self.label())
    }
}

/// A downloaded export, ready to hand to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub kind: ExportKind,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    #[must_use]
    pub fn filename(&self) -> &'static str {
        self.kind.filename()
    }

    #[must_use]
    pub fn mime_type(&self) -> &'static str {
        self.kind.mime_type()
    }
}

// =============================================================================
// SERVICE TRAIT
// =============================================================================

/// Transport-agnostic access to the remote generation and export services.
///
/// Futures are not required to be `Send`: the controller runs on a single
/// logical thread (the browser event loop, or a current-thread runtime).
#[allow(async_fn_in_trait)]
pub trait PresentationService {
    /// # Errors
    ///
    /// Transport, network and malformed-response failures.
    async fn generate(&self, request: &GenerationRequest) -> Result<PresentationPreview, ControllerError>;

    /// # Errors
    ///
    /// Transport and network failures. The body of a failed export is not parsed.
    async fn export(&self, kind: ExportKind, presentation: &PresentationPreview) -> Result<Vec<u8>, ControllerError>;
}

// =============================================================================
// RESPONSE PARSING
// =============================================================================

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Pull the `error` string out of a failure body, if there is one.
#[must_use]
pub fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .filter(|message| !message.trim().is_empty())
}

/// Interpret a generation response.
///
/// # Errors
///
/// [`ControllerError::Transport`] for a non-2xx status, carrying the server's
/// `error` string when present. [`ControllerError::Malformed`] for a 2xx body
/// without `presentation` or `presentation.slides`, or with slides of the
/// wrong shape.
pub fn parse_generation_response(status: u16, body: &str) -> Result<PresentationPreview, ControllerError> {
    if !(200..300).contains(&status) {
        return Err(ControllerError::Transport { status, message: error_message(body) });
    }
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| ControllerError::Malformed(format!("response is not JSON: {e}")))?;
    let Some(presentation) = value.get("presentation").filter(|p| p.is_object()) else {
        return Err(ControllerError::Malformed("response has no `presentation`".to_owned()));
    };
    if presentation.get("slides").is_none_or(serde_json::Value::is_null) {
        return Err(ControllerError::Malformed("presentation has no `slides`".to_owned()));
    }
    PresentationPreview::deserialize(presentation).map_err(|e| ControllerError::Malformed(e.to_string()))
}

/// Interpret an export response status. Success bodies are opaque bytes.
///
/// # Errors
///
/// [`ControllerError::Transport`] without a message for any non-2xx status.
pub fn check_export_status(status: u16) -> Result<(), ControllerError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ControllerError::Transport { status, message: None })
    }
}
