//! Cross-cutting concerns shared by adapters and the binary.

pub mod config;
#[cfg(test)]
pub(crate) mod log_capture;
pub mod provider;

pub use config::AppConfig;
pub use provider::{Provider, build_provider};
