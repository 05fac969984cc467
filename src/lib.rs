//! # deckview
//!
//! Client-side controller for the "generate, preview, export" presentation
//! workflow. Owns the presentation model and the page/overlay state machine,
//! derives slide views, and orchestrates calls to the remote generation and
//! export endpoints.
//!
//! DESIGN
//! ======
//! The crate is UI-toolkit agnostic. `state` holds pure, synchronous
//! transitions; `render` derives view models from that state; `controller`
//! sequences the async operations over two seams: [`service::PresentationService`]
//! for the network and [`controller::Host`] for timers and downloads. The
//! Leptos shell in `client/` implements both seams for the browser.

pub mod config;
pub mod controller;
pub mod error;
#[cfg(feature = "http")]
pub mod http;
pub mod model;
pub mod render;
pub mod service;
pub mod state;

pub use config::ControllerConfig;
pub use controller::{ExportOutcome, GenerationOutcome, Host, PreviewController};
pub use error::ControllerError;
pub use model::{PresentationPreview, Slide, SlideBody, Theme};
pub use service::{ExportArtifact, ExportKind, GenerationRequest, PresentationService};
pub use state::{ControllerState, Direction, Overlay, OverlayId, Page};
