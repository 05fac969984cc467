//! Browser implementation of the controller's environment hooks.
//!
//! Clock comes from `Date.now()`, delays from `gloo-timers`, and downloads
//! are delivered by wrapping the bytes in a `Blob`, pointing a temporary
//! `<a download>` at its object URL and clicking it.
//!
//! Outside the browser (SSR, native tests) every hook is inert.

use std::time::Duration;

use deckview::{ExportArtifact, Host};

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHost;

/// Clamp a delay to the `u32` milliseconds `setTimeout` accepts.
pub fn timeout_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

impl Host for BrowserHost {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn now_ms(&self) -> u64 {
        #[cfg(feature = "hydrate")]
        {
            js_sys::Date::now() as u64
        }
        #[cfg(not(feature = "hydrate"))]
        {
            0
        }
    }

    async fn sleep(&self, delay: Duration) {
        #[cfg(feature = "hydrate")]
        {
            gloo_timers::future::sleep(delay).await;
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = delay;
        }
    }

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) {
        #[cfg(feature = "hydrate")]
        {
            gloo_timers::callback::Timeout::new(timeout_millis(delay), callback).forget();
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (delay, callback);
        }
    }

    fn deliver_download(&self, artifact: &ExportArtifact) {
        #[cfg(feature = "hydrate")]
        {
            if let Err(e) = trigger_download(artifact) {
                leptos::logging::warn!("download of {} failed: {e:?}", artifact.filename());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = artifact;
        }
    }
}

#[cfg(feature = "hydrate")]
fn trigger_download(artifact: &ExportArtifact) -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::{JsCast, JsValue};

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(artifact.bytes.as_slice()));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(artifact.mime_type());
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(artifact.filename());
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;

    web_sys::Url::revoke_object_url(&url)
}

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;
