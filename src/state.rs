//! Controller state and its named transitions.
//!
//! DESIGN
//! ======
//! All mutation goes through methods on [`ControllerState`], so the slide
//! index bound, the single-overlay rule and the stale-response rule are
//! enforced in one place. Methods are synchronous; the async controller
//! calls them between suspension points.
//!
//! Every overlay gets a fresh [`OverlayId`]. Timers dismiss by id, so a timer
//! that fires after its overlay was replaced does nothing.
//!
//! Generations and exports each carry a sequence number in a
//! [`RequestTicket`]. Only the most recently issued ticket of each kind may
//! commit results.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use crate::error::ControllerError;
use crate::model::{PresentationPreview, Slide, Theme};

pub const GENERATING_MESSAGE: &str = "Generating your presentation…";
pub const NOTHING_TO_EXPORT_MESSAGE: &str = "Generate a presentation before exporting.";
pub const GENERATION_PENDING_MESSAGE: &str = "Wait for the presentation to finish generating before exporting.";

// =============================================================================
// ENUMS
// =============================================================================

/// Top-level page. Exactly one is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Input,
    Preview,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Transient feedback layered over the current page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Overlay {
    Loading(String),
    Error(String),
    Success(String),
}

impl Overlay {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Loading(message) | Self::Error(message) | Self::Success(message) => message,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OverlayId(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveOverlay {
    pub id: OverlayId,
    pub overlay: Overlay,
}

/// Handle for one in-flight request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket {
    seq: u64,
    loading: OverlayId,
}

impl RequestTicket {
    #[must_use]
    pub fn seq(self) -> u64 {
        self.seq
    }

    /// The loading overlay shown when the request started.
    #[must_use]
    pub fn loading_overlay(self) -> OverlayId {
        self.loading
    }
}

// =============================================================================
// CONTROLLER STATE
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ControllerState {
    page: Page,
    preview: Option<PresentationPreview>,
    slide_index: usize,
    overlay: Option<ActiveOverlay>,
    /// Colors currently applied to the preview surface. Survives a preview
    /// without a theme.
    surface_theme: Option<Theme>,
    next_overlay_id: u64,
    generation_seq: u64,
    pending_generation: Option<u64>,
    export_seq: u64,
}

impl ControllerState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn page(&self) -> Page {
        self.page
    }

    #[must_use]
    pub fn preview(&self) -> Option<&PresentationPreview> {
        self.preview.as_ref()
    }

    #[must_use]
    pub fn slide_index(&self) -> usize {
        self.slide_index
    }

    #[must_use]
    pub fn current_slide(&self) -> Option<&Slide> {
        self.preview.as_ref()?.slide(self.slide_index)
    }

    #[must_use]
    pub fn overlay(&self) -> Option<&ActiveOverlay> {
        self.overlay.as_ref()
    }

    #[must_use]
    pub fn surface_theme(&self) -> Option<&Theme> {
        self.surface_theme.as_ref()
    }

    /// `true` while the latest generation request is unresolved. The preview
    /// render is cleared for that time.
    #[must_use]
    pub fn is_generating(&self) -> bool {
        self.pending_generation.is_some()
    }

    // -------------------------------------------------------------------------
    // Overlays
    // -------------------------------------------------------------------------

    /// Replace whatever overlay is visible with `overlay`.
    pub fn show_overlay(&mut self, overlay: Overlay) -> OverlayId {
        self.next_overlay_id += 1;
        let id = OverlayId(self.next_overlay_id);
        self.overlay = Some(ActiveOverlay { id, overlay });
        id
    }

    /// Remove the overlay if it is still `id`. Returns whether anything changed.
    pub fn dismiss_overlay(&mut self, id: OverlayId) -> bool {
        if self.overlay.as_ref().is_some_and(|active| active.id == id) {
            self.overlay = None;
            true
        } else {
            false
        }
    }

    // -------------------------------------------------------------------------
    // Generation
    // -------------------------------------------------------------------------

    /// Show the generating overlay, hide the current render, and issue a ticket
    /// that supersedes any earlier generation.
    pub fn begin_generation(&mut self) -> RequestTicket {
        self.generation_seq += 1;
        self.pending_generation = Some(self.generation_seq);
        let loading = self.show_overlay(Overlay::Loading(GENERATING_MESSAGE.to_owned()));
        RequestTicket { seq: self.generation_seq, loading }
    }

    #[must_use]
    pub fn is_latest_generation(&self, ticket: RequestTicket) -> bool {
        ticket.seq == self.generation_seq
    }

    /// Replace the preview wholesale. Returns `false` (and changes nothing)
    /// when a newer generation has been issued since `ticket`.
    pub fn commit_generation(&mut self, ticket: RequestTicket, preview: PresentationPreview) -> bool {
        if !self.is_latest_generation(ticket) {
            return false;
        }
        if let Some(theme) = &preview.theme {
            self.surface_theme = Some(theme.clone());
        }
        self.preview = Some(preview);
        self.slide_index = 0;
        self.page = Page::Preview;
        self.pending_generation = None;
        self.dismiss_overlay(ticket.loading);
        true
    }

    /// Return to the input page and show an error banner. Returns `None` for
    /// a stale ticket.
    pub fn fail_generation(&mut self, ticket: RequestTicket, message: String) -> Option<OverlayId> {
        if !self.is_latest_generation(ticket) {
            return None;
        }
        self.page = Page::Input;
        self.pending_generation = None;
        Some(self.show_overlay(Overlay::Error(message)))
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    /// Move one slide, clamped to the deck. Returns whether the index changed.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        let Some(preview) = &self.preview else {
            return false;
        };
        let next = match direction {
            Direction::Previous => self.slide_index.saturating_sub(1),
            Direction::Next => (self.slide_index + 1).min(preview.last_index()),
        };
        let moved = next != self.slide_index;
        self.slide_index = next;
        moved
    }

    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        self.preview.is_some() && self.slide_index > 0
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.preview.as_ref().is_some_and(|p| self.slide_index < p.last_index())
    }

    /// Leave the preview for the input form. The model stays until the next
    /// successful generation replaces it.
    pub fn start_over(&mut self) {
        self.page = Page::Input;
    }

    // -------------------------------------------------------------------------
    // Export
    // -------------------------------------------------------------------------

    /// Show the export overlay without clearing the render, and hand back a
    /// snapshot of the preview to send.
    ///
    /// # Errors
    ///
    /// [`ControllerError::Precondition`] when there is no preview, or while a
    /// generation owns the loading overlay. State is left untouched in both
    /// cases.
    pub fn begin_export(&mut self, loading_message: String) -> Result<(RequestTicket, PresentationPreview), ControllerError> {
        if self.is_generating() {
            return Err(ControllerError::Precondition(GENERATION_PENDING_MESSAGE.to_owned()));
        }
        let Some(preview) = self.preview.clone() else {
            return Err(ControllerError::Precondition(NOTHING_TO_EXPORT_MESSAGE.to_owned()));
        };
        self.export_seq += 1;
        let loading = self.show_overlay(Overlay::Loading(loading_message));
        Ok((RequestTicket { seq: self.export_seq, loading }, preview))
    }

    #[must_use]
    pub fn is_latest_export(&self, ticket: RequestTicket) -> bool {
        ticket.seq == self.export_seq
    }

    /// Show the outcome banner for an export. Returns `None` for a stale
    /// ticket, or while a generation owns the loading overlay.
    pub fn finish_export(&mut self, ticket: RequestTicket, banner: Overlay) -> Option<OverlayId> {
        if !self.is_latest_export(ticket) || self.is_generating() {
            return None;
        }
        Some(self.show_overlay(banner))
    }
}
