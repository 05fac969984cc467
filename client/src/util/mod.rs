//! Browser utilities: runtime configuration and the controller host.

pub mod config;
pub mod host;
