//! Preview page: title block, current slide, navigation, notes and exports.
//!
//! The whole surface derives from `deckview::render::render_preview`, which
//! yields nothing while a generation is in flight; the page then shows an
//! empty placeholder under the loading overlay.

use leptos::prelude::*;

use deckview::ControllerState;
use deckview::render::{PreviewView, render_preview};

use crate::app::ControllerHandle;
use crate::components::export_actions::ExportActions;
use crate::components::slide_nav::SlideNav;
use crate::components::slide_view::SlideContent;

#[component]
pub fn PreviewPage() -> impl IntoView {
    let snapshot = expect_context::<RwSignal<ControllerState>>();
    let current = Memo::new(move |_| snapshot.with(render_preview));

    view! {
        <section class="preview-page">
            {move || match current.get() {
                Some(preview) => view! { <PreviewSurface preview=preview/> }.into_any(),
                None => view! { <div class="preview-page__placeholder"></div> }.into_any(),
            }}
        </section>
    }
}

#[component]
fn PreviewSurface(preview: PreviewView) -> impl IntoView {
    let controller = expect_context::<ControllerHandle>();
    let PreviewView { title, subtitle, slide, notes, nav, surface_style } = preview;

    view! {
        <div class="preview" style=surface_style.unwrap_or_default()>
            <header class="preview__header">
                <div class="preview__heading">
                    <h2 class="preview__title">{title}</h2>
                    <p class="preview__subtitle">{subtitle}</p>
                </div>
                <button class="btn" on:click=move |_| controller.get_value().start_over()>
                    "New presentation"
                </button>
            </header>
            <div class="preview__slide">
                {match slide {
                    Some(slide) => view! { <SlideContent slide=slide/> }.into_any(),
                    None => view! { <p class="preview__empty">"This presentation has no slides."</p> }.into_any(),
                }}
            </div>
            <SlideNav nav=nav/>
            {notes
                .map(|notes| {
                    view! {
                        <aside class="preview__notes">
                            <h4>"Speaker notes"</h4>
                            <p>{notes}</p>
                        </aside>
                    }
                })}
            <ExportActions/>
        </div>
    }
}
