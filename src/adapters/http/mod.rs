//! HTTP adapter. Exposes the advice port over axum.
//!
//! Routes: `GET /`, `GET /check`, `POST|OPTIONS /ask` and the deprecated `/get_wine_advice` alias.

pub mod cors;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;

use crate::ports::AdvicePort;
use std::sync::Arc;

pub use cors::CorsPolicy;
pub use router::build_router;

/// Shared, read-only handler state. Built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub advice: Arc<dyn AdvicePort>,
    pub cors: Arc<CorsPolicy>,
}

impl AppState {
    pub fn new(advice: Arc<dyn AdvicePort>, cors: CorsPolicy) -> Self {
        Self {
            advice,
            cors: Arc::new(cors),
        }
    }
}
