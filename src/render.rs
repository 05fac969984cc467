//! View derivation: pure functions from controller state to view models.
//!
//! The Leptos shell turns these into markup; nothing here touches the DOM.
//! Rendering the same state twice yields equal values.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::model::{PresentationPreview, SlideBody, Theme};
use crate::state::{ControllerState, Overlay, OverlayId, Page};

// =============================================================================
// VIEW MODELS
// =============================================================================

/// Body of the currently selected slide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SlideView {
    Title { title: String, subtitle: String },
    /// `header` is row 0; `rows` are the remaining rows, ragged as received.
    Table { title: String, header: Vec<String>, rows: Vec<Vec<String>> },
    Bullets { title: String, points: Vec<String> },
}

/// Previous/Next enabled state and the slide counter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavView {
    pub counter: String,
    pub can_previous: bool,
    pub can_next: bool,
}

/// Everything the preview page shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewView {
    pub title: String,
    pub subtitle: String,
    /// `None` for an empty deck.
    pub slide: Option<SlideView>,
    pub notes: Option<String>,
    pub nav: NavView,
    /// CSS custom properties for the surface theme, if any.
    pub surface_style: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayTone {
    Loading,
    Error,
    Success,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverlayView {
    pub id: OverlayId,
    pub tone: OverlayTone,
    pub message: String,
}

// =============================================================================
// RENDERING
// =============================================================================

/// Derive the view for slide `index`. Each arm reads only its own variant.
#[must_use]
pub fn render_slide(preview: &PresentationPreview, index: usize) -> Option<SlideView> {
    let slide = preview.slide(index)?;
    let title = slide.title.clone();
    let view = match &slide.body {
        SlideBody::Title => SlideView::Title { title, subtitle: preview.subtitle.clone() },
        SlideBody::Table { rows } => {
            let mut rows = rows.iter().cloned();
            let header = rows.next().unwrap_or_default();
            SlideView::Table { title, header, rows: rows.collect() }
        }
        SlideBody::Bullets { points } => SlideView::Bullets { title, points: points.clone() },
    };
    Some(view)
}

#[must_use]
pub fn render_navigation(preview: &PresentationPreview, index: usize) -> NavView {
    let total = preview.slide_count();
    if total == 0 {
        return NavView { counter: "No slides".to_owned(), can_previous: false, can_next: false };
    }
    NavView {
        counter: format!("Slide {} of {total}", index + 1),
        can_previous: index > 0,
        can_next: index < preview.last_index(),
    }
}

/// Theme colors as CSS custom properties. Tokens that are not hex colors are
/// left out so the stylesheet default applies.
#[must_use]
pub fn theme_style(theme: &Theme) -> String {
    [
        ("--primary-color", &theme.primary_color),
        ("--accent-color", &theme.accent_color),
        ("--background-color", &theme.background_color),
        ("--secondary-color", &theme.secondary_color),
    ]
    .into_iter()
    .filter_map(|(name, value)| normalize_hex_color(value).map(|color| format!("{name}: {color};")))
    .collect::<Vec<_>>()
    .join(" ")
}

/// The preview page view, or `None` when the preview is not on screen: wrong
/// page, no model yet, or a generation is pending and the render is cleared.
#[must_use]
pub fn render_preview(state: &ControllerState) -> Option<PreviewView> {
    if state.page() != Page::Preview || state.is_generating() {
        return None;
    }
    let preview = state.preview()?;
    let index = state.slide_index();
    Some(PreviewView {
        title: preview.title.clone(),
        subtitle: preview.subtitle.clone(),
        slide: render_slide(preview, index),
        notes: preview.slide(index).and_then(|slide| slide.notes.clone()),
        nav: render_navigation(preview, index),
        surface_style: state.surface_theme().map(theme_style).filter(|style| !style.is_empty()),
    })
}

#[must_use]
pub fn render_overlay(state: &ControllerState) -> Option<OverlayView> {
    let active = state.overlay()?;
    let tone = match active.overlay {
        Overlay::Loading(_) => OverlayTone::Loading,
        Overlay::Error(_) => OverlayTone::Error,
        Overlay::Success(_) => OverlayTone::Success,
    };
    Some(OverlayView { id: active.id, tone, message: active.overlay.message().to_owned() })
}

/// Parse `#RGB` or `#RRGGBB` into canonical lowercase `#rrggbb`.
#[must_use]
pub fn normalize_hex_color(raw: &str) -> Option<String> {
    let hex = raw.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let expanded = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect::<String>(),
        6 => hex.to_owned(),
        _ => return None,
    };
    Some(format!("#{}", expanded.to_ascii_lowercase()))
}
