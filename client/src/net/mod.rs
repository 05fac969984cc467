//! Network layer for browser-to-backend communication.

pub mod api;
