//! Top-level pages. Exactly one is visible, selected by `ControllerState::page`.

pub mod input;
pub mod preview;
