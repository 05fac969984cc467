//! Runtime configuration injected by the embedding page.
//!
//! The page may carry `<meta name="deckview-config" content='{...}'>` with a
//! JSON object of `ControllerConfig` overrides. Anything missing or invalid
//! falls back to the defaults: same-origin endpoints and stock banner timings.

use deckview::ControllerConfig;

/// `name` of the meta tag carrying configuration overrides.
pub const CONFIG_META_NAME: &str = "deckview-config";

/// Load controller configuration from the document, or defaults.
pub fn load_config() -> ControllerConfig {
    #[cfg(feature = "hydrate")]
    {
        if let Some(raw) = read_meta_content() {
            return config_from_meta(&raw);
        }
    }
    ControllerConfig::default()
}

/// Parse meta content, logging and falling back to defaults on bad JSON.
pub fn config_from_meta(raw: &str) -> ControllerConfig {
    match ControllerConfig::from_json(raw) {
        Ok(config) => config,
        Err(e) => {
            leptos::logging::warn!("ignoring {CONFIG_META_NAME}: {e}");
            ControllerConfig::default()
        }
    }
}

#[cfg(feature = "hydrate")]
fn read_meta_content() -> Option<String> {
    let selector = format!("meta[name=\"{CONFIG_META_NAME}\"]");
    let document = web_sys::window()?.document()?;
    match document.query_selector(&selector) {
        Ok(element) => element?.get_attribute("content"),
        Err(e) => {
            leptos::logging::warn!("config lookup failed: {e:?}");
            None
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
