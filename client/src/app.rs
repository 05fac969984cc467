//! Root application component and controller context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use deckview::{ControllerState, Page, PreviewController};

use crate::components::overlay::OverlayHost;
use crate::net::api::BrowserApi;
use crate::pages::{input::InputPage, preview::PreviewPage};
use crate::util::host::BrowserHost;

/// The controller as wired for the browser.
pub type Controller = PreviewController<BrowserApi, BrowserHost>;

/// Context handle for the controller. The controller holds `Rc`s, so it
/// lives in local (non-`Send`) arena storage.
pub type ControllerHandle = StoredValue<Controller, LocalStorage>;

/// HTML shell rendered by the hosting server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the controller, mirrors its state into a signal after every
/// change, and shows exactly one page plus the overlay layer.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = crate::util::config::load_config();
    let snapshot = RwSignal::new(ControllerState::new());
    let controller = PreviewController::new(BrowserApi::new(&config), BrowserHost, config)
        .with_observer(move |state| snapshot.set(state.clone()));

    provide_context(snapshot);
    provide_context::<ControllerHandle>(StoredValue::new_local(controller));

    let on_input_page = move || snapshot.with(|state| state.page() == Page::Input);

    view! {
        <Stylesheet id="leptos" href="/pkg/deckview.css"/>
        <Title text="Presentation Generator"/>

        <main class="app">
            <Show when=on_input_page fallback=|| view! { <PreviewPage/> }>
                <InputPage/>
            </Show>
            <OverlayHost/>
        </main>
    }
}
