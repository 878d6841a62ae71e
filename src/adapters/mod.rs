//! Infrastructure adapters. Implement ports.
//!
//! AI provider (outbound) and HTTP server (inbound). Map errors to DomainError.

pub mod ai;
pub mod http;
