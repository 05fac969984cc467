//! Reusable view components for the preview page and overlay layer.

pub mod export_actions;
pub mod overlay;
pub mod slide_nav;
pub mod slide_view;
