//! Port traits. API boundaries for the hexagon.
//!
//! - Inbound: Called by the HTTP adapter into the application
//! - Outbound: Called by application into the completion provider

pub mod inbound;
pub mod outbound;

pub use inbound::AdvicePort;
pub use outbound::CompletionPort;
