//! Native HTTP client for the generation/export services, built on `reqwest`.
//!
//! Used by native embeddings and the integration tests; the browser shell
//! has its own `gloo-net` transport. Both share the parsers in
//! [`crate::service`].

use std::time::Duration;

use crate::config::ControllerConfig;
use crate::error::ControllerError;
use crate::model::PresentationPreview;
use crate::service::{
    ExportKind, ExportRequest, GenerationRequest, NO_CACHE_HEADERS, PresentationService, check_export_status,
    parse_generation_response,
};

pub struct HttpService {
    http: reqwest::Client,
    generate_url: String,
    pdf_url: String,
    slide_deck_url: String,
}

impl HttpService {
    /// # Errors
    ///
    /// Returns [`ControllerError::Precondition`] if the underlying client
    /// cannot be constructed.
    pub fn new(config: &ControllerConfig) -> Result<Self, ControllerError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| ControllerError::Precondition(format!("HTTP client build failed: {e}")))?;
        Ok(Self {
            http,
            generate_url: config.generate_url(),
            pdf_url: config.export_url(ExportKind::Pdf),
            slide_deck_url: config.export_url(ExportKind::SlideDeck),
        })
    }

    fn export_url(&self, kind: ExportKind) -> &str {
        match kind {
            ExportKind::Pdf => &self.pdf_url,
            ExportKind::SlideDeck => &self.slide_deck_url,
        }
    }
}

impl PresentationService for HttpService {
    async fn generate(&self, request: &GenerationRequest) -> Result<PresentationPreview, ControllerError> {
        let mut builder = self.http.post(&self.generate_url).json(request);
        for (name, value) in NO_CACHE_HEADERS {
            builder = builder.header(name, value);
        }
        let response = builder
            .send()
            .await
            .map_err(|e| ControllerError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ControllerError::Network(e.to_string()))?;
        parse_generation_response(status, &body)
    }

    async fn export(&self, kind: ExportKind, presentation: &PresentationPreview) -> Result<Vec<u8>, ControllerError> {
        let response = self
            .http
            .post(self.export_url(kind))
            .json(&ExportRequest { presentation })
            .send()
            .await
            .map_err(|e| ControllerError::Network(e.to_string()))?;

        check_export_status(response.status().as_u16())?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ControllerError::Network(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}
