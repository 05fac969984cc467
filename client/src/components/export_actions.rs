//! Export buttons for the current preview.

use leptos::prelude::*;

use deckview::{ControllerState, ExportKind};

use crate::app::ControllerHandle;
use crate::components::overlay::is_busy;

/// Button caption for an export kind.
pub fn export_button_label(kind: ExportKind) -> String {
    format!("Download {}", kind.label())
}

#[component]
pub fn ExportActions() -> impl IntoView {
    let snapshot = expect_context::<RwSignal<ControllerState>>();
    let controller = expect_context::<ControllerHandle>();
    let busy = move || snapshot.with(is_busy);

    let export = move |kind: ExportKind| {
        #[cfg(feature = "hydrate")]
        {
            let controller = controller.get_value();
            leptos::task::spawn_local(async move {
                let outcome = controller.request_export(kind).await;
                leptos::logging::log!("export {}: {outcome:?}", kind.label());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (kind, controller);
        }
    };

    view! {
        <div class="preview__actions">
            <button class="btn btn--primary" disabled=busy on:click=move |_| export(ExportKind::Pdf)>
                {export_button_label(ExportKind::Pdf)}
            </button>
            <button class="btn" disabled=busy on:click=move |_| export(ExportKind::SlideDeck)>
                {export_button_label(ExportKind::SlideDeck)}
            </button>
        </div>
    }
}

#[cfg(test)]
#[path = "export_actions_test.rs"]
mod export_actions_test;
