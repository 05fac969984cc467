//! Preview controller: async orchestration of generate/navigate/export.
//!
//! DESIGN
//! ======
//! The controller owns one [`ControllerState`] behind `Rc<RefCell<_>>` and is
//! cheap to clone, so UI handlers can move a copy into a spawned task. State
//! is only borrowed between suspension points; no borrow is held across an
//! `.await`. After every mutation the optional observer receives a snapshot,
//! which is how the UI learns to re-render.
//!
//! Side effects that belong to the environment (clock, timers, downloads)
//! go through [`Host`]; network calls go through [`PresentationService`].

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::config::ControllerConfig;
use crate::error::ControllerError;
use crate::service::{ExportArtifact, ExportKind, GENERATION_FAILED_MESSAGE, GenerationRequest, PresentationService};
use crate::state::{ControllerState, Direction, Overlay, OverlayId};

/// Environment hooks the controller needs from its embedding.
#[allow(async_fn_in_trait)]
pub trait Host {
    /// Wall-clock milliseconds, used to make generation requests unique.
    fn now_ms(&self) -> u64;

    /// Suspend the current operation.
    async fn sleep(&self, delay: Duration);

    /// Run `callback` once after `delay` without blocking the caller.
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>);

    /// Offer an exported file to the user.
    fn deliver_download(&self, artifact: &ExportArtifact);
}

/// Result of one `submit_generation_request` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Committed,
    Failed(ControllerError),
    /// A newer request was issued before this one resolved; its result was dropped.
    Stale,
}

/// Result of one `request_export` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Delivered(ExportKind),
    Failed(ControllerError),
}

type Observer = Rc<dyn Fn(&ControllerState)>;

pub struct PreviewController<S, H> {
    state: Rc<RefCell<ControllerState>>,
    service: Rc<S>,
    host: Rc<H>,
    config: Rc<ControllerConfig>,
    observer: Option<Observer>,
}

impl<S, H> Clone for PreviewController<S, H> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
            service: Rc::clone(&self.service),
            host: Rc::clone(&self.host),
            config: Rc::clone(&self.config),
            observer: self.observer.clone(),
        }
    }
}

impl<S, H> PreviewController<S, H>
where
    S: PresentationService + 'static,
    H: Host + 'static,
{
    #[must_use]
    pub fn new(service: S, host: H, config: ControllerConfig) -> Self {
        Self {
            state: Rc::new(RefCell::new(ControllerState::new())),
            service: Rc::new(service),
            host: Rc::new(host),
            config: Rc::new(config),
            observer: None,
        }
    }

    /// Register a callback that receives a snapshot after every state change.
    #[must_use]
    pub fn with_observer(mut self, observer: impl Fn(&ControllerState) + 'static) -> Self {
        self.observer = Some(Rc::new(observer));
        self
    }

    #[must_use]
    pub fn snapshot(&self) -> ControllerState {
        self.state.borrow().clone()
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&ControllerState) -> R) -> R {
        f(&self.state.borrow())
    }

    #[must_use]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    #[must_use]
    pub fn service(&self) -> &S {
        &self.service
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    // =========================================================================
    // OPERATIONS
    // =========================================================================

    /// Request a new presentation and, if this is still the latest request
    /// when it resolves, replace the preview with it.
    pub async fn submit_generation_request(&self, topic: &str, style: &str) -> GenerationOutcome {
        let ticket = self.update(ControllerState::begin_generation);
        let request = GenerationRequest { topic: topic.to_owned(), style: style.to_owned(), timestamp: self.host.now_ms() };
        tracing::info!(topic, style, seq = ticket.seq(), "requesting presentation");

        match self.service.generate(&request).await {
            Ok(preview) => {
                let slides = preview.slide_count();
                if self.update(|state| state.commit_generation(ticket, preview)) {
                    tracing::info!(seq = ticket.seq(), slides, "presentation ready");
                    GenerationOutcome::Committed
                } else {
                    tracing::debug!(seq = ticket.seq(), "discarding stale generation response");
                    GenerationOutcome::Stale
                }
            }
            Err(err) => {
                log_failure("generate", &err);
                let message = err.user_message(GENERATION_FAILED_MESSAGE);
                match self.update(|state| state.fail_generation(ticket, message)) {
                    Some(banner) => {
                        self.schedule_dismiss(banner, self.config.error_banner_delay());
                        GenerationOutcome::Failed(err)
                    }
                    None => {
                        tracing::debug!(seq = ticket.seq(), "discarding stale generation failure");
                        GenerationOutcome::Stale
                    }
                }
            }
        }
    }

    /// Move one slide in `direction`, clamped. Returns whether the index changed.
    pub fn navigate_slide(&self, direction: Direction) -> bool {
        self.update(|state| state.navigate(direction))
    }

    /// Export the current preview and hand the artifact to the host.
    pub async fn request_export(&self, kind: ExportKind) -> ExportOutcome {
        let begun = self.update(|state| state.begin_export(kind.loading_message()));
        let (ticket, presentation) = match begun {
            Ok(begun) => begun,
            Err(err) => {
                tracing::warn!(kind = kind.label(), error = %err, "export refused");
                let message = err.user_message(&kind.failure_message());
                // A pending generation keeps its loading overlay.
                let banner = self.update(|state| {
                    (!state.is_generating()).then(|| state.show_overlay(Overlay::Error(message)))
                });
                if let Some(banner) = banner {
                    self.schedule_dismiss(banner, self.config.error_banner_delay());
                }
                return ExportOutcome::Failed(err);
            }
        };
        tracing::info!(kind = kind.label(), seq = ticket.seq(), "exporting presentation");

        let (banner, linger, outcome) = match self.service.export(kind, &presentation).await {
            Ok(bytes) => {
                let artifact = ExportArtifact { kind, bytes };
                tracing::info!(kind = kind.label(), bytes = artifact.bytes.len(), "export ready");
                self.host.deliver_download(&artifact);
                (Overlay::Success(kind.success_message()), self.config.success_banner_delay(), ExportOutcome::Delivered(kind))
            }
            Err(err) => {
                log_failure("export", &err);
                let message = err.user_message(&kind.failure_message());
                (Overlay::Error(message), self.config.error_banner_delay(), ExportOutcome::Failed(err))
            }
        };

        // Loading stays visible for the settle delay, then the banner replaces it.
        self.host.sleep(self.config.loading_settle_delay()).await;
        match self.update(|state| state.finish_export(ticket, banner)) {
            Some(id) => self.schedule_dismiss(id, linger),
            None => tracing::debug!(seq = ticket.seq(), "export banner suppressed by newer work"),
        }
        outcome
    }

    /// Go back to the input form.
    pub fn start_over(&self) {
        self.update(ControllerState::start_over);
    }

    /// Remove the overlay if it is still `id`.
    pub fn dismiss_overlay(&self, id: OverlayId) {
        let changed = self.state.borrow_mut().dismiss_overlay(id);
        if changed {
            self.notify();
        }
    }

    // =========================================================================
    // INTERNALS
    // =========================================================================

    fn update<R>(&self, f: impl FnOnce(&mut ControllerState) -> R) -> R {
        let result = {
            let mut state = self.state.borrow_mut();
            f(&mut state)
        };
        self.notify();
        result
    }

    fn notify(&self) {
        if let Some(observer) = &self.observer {
            let snapshot = self.snapshot();
            observer(&snapshot);
        }
    }

    fn schedule_dismiss(&self, id: OverlayId, delay: Duration) {
        let controller = self.clone();
        self.host
            .schedule(delay, Box::new(move || controller.dismiss_overlay(id)));
    }
}

fn log_failure(operation: &'static str, err: &ControllerError) {
    match err {
        ControllerError::Malformed(detail) => {
            tracing::warn!(operation, error.kind = err.kind(), %detail, "service returned a malformed response");
        }
        _ => tracing::warn!(operation, error.kind = err.kind(), error = %err, "service request failed"),
    }
}
