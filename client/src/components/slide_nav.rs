//! Previous/Next controls and the slide counter.

use leptos::prelude::*;

use deckview::Direction;
use deckview::render::NavView;

use crate::app::ControllerHandle;

#[component]
pub fn SlideNav(nav: NavView) -> impl IntoView {
    let controller = expect_context::<ControllerHandle>();
    let step = move |direction: Direction| {
        controller.get_value().navigate_slide(direction);
    };

    view! {
        <nav class="slide-nav">
            <button
                class="btn slide-nav__prev"
                disabled=!nav.can_previous
                on:click=move |_| step(Direction::Previous)
            >
                "Previous"
            </button>
            <span class="slide-nav__counter">{nav.counter}</span>
            <button
                class="btn slide-nav__next"
                disabled=!nav.can_next
                on:click=move |_| step(Direction::Next)
            >
                "Next"
            </button>
        </nav>
    }
}
