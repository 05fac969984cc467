//! Input page: topic and style form that starts a generation.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use leptos::prelude::*;

use deckview::ControllerState;

use crate::app::ControllerHandle;

/// Style sent when the user leaves the select untouched.
pub const DEFAULT_STYLE: &str = "corporate";

/// `(value, label)` pairs for the style select.
pub const STYLE_OPTIONS: &[(&str, &str)] = &[
    ("corporate", "Corporate"),
    ("creative", "Creative"),
    ("academic", "Academic"),
    ("minimal", "Minimal"),
];

/// Trim the topic and reject blank input.
///
/// # Errors
///
/// Returns a user-facing hint when the topic is empty after trimming.
pub fn validate_topic(raw: &str) -> Result<String, &'static str> {
    let topic = raw.trim();
    if topic.is_empty() {
        return Err("Enter a topic to generate a presentation.");
    }
    Ok(topic.to_owned())
}

/// Map an arbitrary select value onto a known style.
pub fn normalize_style(raw: &str) -> &'static str {
    STYLE_OPTIONS
        .iter()
        .find(|(value, _)| *value == raw)
        .map_or(DEFAULT_STYLE, |(value, _)| value)
}

#[component]
pub fn InputPage() -> impl IntoView {
    let snapshot = expect_context::<RwSignal<ControllerState>>();
    let controller = expect_context::<ControllerHandle>();
    let topic = RwSignal::new(String::new());
    let style = RwSignal::new(DEFAULT_STYLE.to_owned());
    let hint = RwSignal::new(None::<&'static str>);
    let generating = move || snapshot.with(ControllerState::is_generating);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let topic_value = match validate_topic(&topic.get()) {
            Ok(value) => value,
            Err(message) => {
                hint.set(Some(message));
                return;
            }
        };
        hint.set(None);
        let style_value = normalize_style(&style.get());

        #[cfg(feature = "hydrate")]
        {
            let controller = controller.get_value();
            leptos::task::spawn_local(async move {
                let outcome = controller.submit_generation_request(&topic_value, style_value).await;
                leptos::logging::log!("generation finished: {outcome:?}");
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (topic_value, style_value, controller);
        }
    };

    view! {
        <section class="input-page">
            <h1 class="input-page__title">"Presentation Generator"</h1>
            <p class="input-page__lede">"Describe a topic and get a ready-to-present slide deck."</p>
            <form class="input-form" on:submit=on_submit>
                <label class="input-form__field">
                    <span>"Topic"</span>
                    <input
                        class="input-form__topic"
                        type="text"
                        placeholder="e.g. The history of Mars exploration"
                        prop:value=move || topic.get()
                        on:input=move |ev| topic.set(event_target_value(&ev))
                    />
                </label>
                <label class="input-form__field">
                    <span>"Style"</span>
                    <select
                        class="input-form__style"
                        prop:value=move || style.get()
                        on:change=move |ev| style.set(event_target_value(&ev))
                    >
                        {STYLE_OPTIONS
                            .iter()
                            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                {move || hint.get().map(|message| view! { <p class="input-form__hint">{message}</p> })}
                <button class="btn btn--primary" type="submit" disabled=generating>
                    "Generate presentation"
                </button>
            </form>
        </section>
    }
}
