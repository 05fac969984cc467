//! Controller configuration: endpoint paths and overlay timings.
//!
//! Every field has a default, so a host page can inject a partial JSON
//! object (or nothing at all).

use std::time::Duration;

use serde::Deserialize;

use crate::error::ControllerError;
use crate::service::ExportKind;

pub const DEFAULT_GENERATE_PATH: &str = "/generate";
pub const DEFAULT_PDF_EXPORT_PATH: &str = "/export/pdf";
pub const DEFAULT_SLIDE_DECK_EXPORT_PATH: &str = "/export/ppt";
pub const DEFAULT_ERROR_BANNER_MS: u64 = 5_000;
pub const DEFAULT_SUCCESS_BANNER_MS: u64 = 3_000;
pub const DEFAULT_LOADING_SETTLE_MS: u64 = 300;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Origin prefix for every endpoint. Empty means same-origin (browser).
    pub base_url: String,
    pub generate_path: String,
    pub pdf_export_path: String,
    pub slide_deck_export_path: String,
    pub error_banner_ms: u64,
    pub success_banner_ms: u64,
    pub loading_settle_ms: u64,
    /// Only honored by the native HTTP client; the browser path never times out.
    pub request_timeout_secs: Option<u64>,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            generate_path: DEFAULT_GENERATE_PATH.to_owned(),
            pdf_export_path: DEFAULT_PDF_EXPORT_PATH.to_owned(),
            slide_deck_export_path: DEFAULT_SLIDE_DECK_EXPORT_PATH.to_owned(),
            error_banner_ms: DEFAULT_ERROR_BANNER_MS,
            success_banner_ms: DEFAULT_SUCCESS_BANNER_MS,
            loading_settle_ms: DEFAULT_LOADING_SETTLE_MS,
            request_timeout_secs: None,
        }
    }
}

impl ControllerConfig {
    /// Parse overrides from a JSON object; absent keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::Malformed`] if the text is not a JSON object
    /// with correctly typed fields.
    pub fn from_json(raw: &str) -> Result<Self, ControllerError> {
        serde_json::from_str(raw).map_err(|e| ControllerError::Malformed(format!("config: {e}")))
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Full URL of the generation endpoint.
    #[must_use]
    pub fn generate_url(&self) -> String {
        endpoint(&self.base_url, &self.generate_path)
    }

    /// Full URL of the export endpoint for `kind`.
    #[must_use]
    pub fn export_url(&self, kind: ExportKind) -> String {
        let path = match kind {
            ExportKind::Pdf => &self.pdf_export_path,
            ExportKind::SlideDeck => &self.slide_deck_export_path,
        };
        endpoint(&self.base_url, path)
    }

    #[must_use]
    pub fn error_banner_delay(&self) -> Duration {
        Duration::from_millis(self.error_banner_ms)
    }

    #[must_use]
    pub fn success_banner_delay(&self) -> Duration {
        Duration::from_millis(self.success_banner_ms)
    }

    #[must_use]
    pub fn loading_settle_delay(&self) -> Duration {
        Duration::from_millis(self.loading_settle_ms)
    }
}

/// Join a base URL and a path with exactly one `/` between them.
#[must_use]
pub fn endpoint(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
