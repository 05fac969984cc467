//! Overlay layer: the blocking loading indicator and the dismissible banners.
//!
//! At most one overlay is visible. Banners carry a close button that
//! dismisses them by id, so a click never removes a newer banner that
//! replaced the one the user was looking at.

use leptos::prelude::*;

use deckview::render::{OverlayTone, OverlayView, render_overlay};
use deckview::{ControllerState, Overlay};

use crate::app::ControllerHandle;

/// CSS classes for an overlay of the given tone.
pub fn overlay_class(tone: OverlayTone) -> &'static str {
    match tone {
        OverlayTone::Loading => "overlay overlay--loading",
        OverlayTone::Error => "banner banner--error",
        OverlayTone::Success => "banner banner--success",
    }
}

/// ARIA role: errors interrupt, everything else is announced politely.
pub fn overlay_role(tone: OverlayTone) -> &'static str {
    match tone {
        OverlayTone::Error => "alert",
        OverlayTone::Loading | OverlayTone::Success => "status",
    }
}

/// Whether a blocking operation is in flight.
pub fn is_busy(state: &ControllerState) -> bool {
    state
        .overlay()
        .is_some_and(|active| matches!(active.overlay, Overlay::Loading(_)))
}

#[component]
pub fn OverlayHost() -> impl IntoView {
    let snapshot = expect_context::<RwSignal<ControllerState>>();
    let controller = expect_context::<ControllerHandle>();
    let current = Memo::new(move |_| snapshot.with(render_overlay));

    move || {
        current.get().map(|OverlayView { id, tone, message }| {
            let is_loading = tone == OverlayTone::Loading;
            view! {
                <div class=overlay_class(tone) role=overlay_role(tone)>
                    {is_loading.then(|| view! { <span class="overlay__spinner"></span> })}
                    <span class="overlay__message">{message}</span>
                    {(!is_loading)
                        .then(|| {
                            view! {
                                <button
                                    class="banner__close"
                                    aria-label="Dismiss"
                                    on:click=move |_| controller.get_value().dismiss_overlay(id)
                                >
                                    "×"
                                </button>
                            }
                        })}
                </div>
            }
        })
    }
}

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;
