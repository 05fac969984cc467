//! Presentation backend calls from the browser.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs that fail with a network error, since generation
//! and export only happen in response to browser events.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures map to `ControllerError::Network`; status and body
//! interpretation is shared with the native client through
//! `deckview::service`, so both transports surface identical messages.

#![allow(clippy::unused_async)]

use deckview::{ControllerConfig, ControllerError, ExportKind, GenerationRequest, PresentationPreview, PresentationService};

/// Message carried by the SSR stubs.
pub const UNAVAILABLE_MESSAGE: &str = "presentation backend is only reachable from the browser";

/// `PresentationService` over `fetch`.
#[derive(Clone, Debug)]
pub struct BrowserApi {
    generate_url: String,
    pdf_url: String,
    slide_deck_url: String,
}

impl BrowserApi {
    pub fn new(config: &ControllerConfig) -> Self {
        Self {
            generate_url: config.generate_url(),
            pdf_url: config.export_url(ExportKind::Pdf),
            slide_deck_url: config.export_url(ExportKind::SlideDeck),
        }
    }

    pub fn generate_url(&self) -> &str {
        &self.generate_url
    }

    pub fn export_url(&self, kind: ExportKind) -> &str {
        match kind {
            ExportKind::Pdf => &self.pdf_url,
            ExportKind::SlideDeck => &self.slide_deck_url,
        }
    }
}

#[cfg(feature = "hydrate")]
fn network(err: &gloo_net::Error) -> ControllerError {
    ControllerError::Network(err.to_string())
}

#[cfg(feature = "hydrate")]
fn post(url: &str) -> gloo_net::http::RequestBuilder {
    deckview::service::NO_CACHE_HEADERS
        .iter()
        .fold(gloo_net::http::Request::post(url), |builder, (name, value)| builder.header(name, value))
}

impl PresentationService for BrowserApi {
    async fn generate(&self, request: &GenerationRequest) -> Result<PresentationPreview, ControllerError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = post(&self.generate_url)
                .json(request)
                .map_err(|e| network(&e))?
                .send()
                .await
                .map_err(|e| network(&e))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| network(&e))?;
            deckview::service::parse_generation_response(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ControllerError::Network(UNAVAILABLE_MESSAGE.to_owned()))
        }
    }

    async fn export(&self, kind: ExportKind, presentation: &PresentationPreview) -> Result<Vec<u8>, ControllerError> {
        #[cfg(feature = "hydrate")]
        {
            let body = deckview::service::ExportRequest { presentation };
            let resp = post(self.export_url(kind))
                .json(&body)
                .map_err(|e| network(&e))?
                .send()
                .await
                .map_err(|e| network(&e))?;
            deckview::service::check_export_status(resp.status())?;
            resp.binary().await.map_err(|e| network(&e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (kind, presentation);
            Err(ControllerError::Network(UNAVAILABLE_MESSAGE.to_owned()))
        }
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;
