//! CORS policy for the ask routes.
//!
//! Production runs with an explicit allow-list of storefront origins; `Permissive` is for development.

use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CONTENT_TYPE, VARY,
};
use axum::http::{HeaderMap, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Storefront origins allowed by default.
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "https://freethecork.com",
    "https://www.freethecork.com",
    "https://8d1741-3.myshopify.com",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsPolicy {
    /// Only these exact origins (scheme + host + optional port, no trailing slash).
    AllowList(Vec<String>),
    /// Any origin.
    Permissive,
}

impl Default for CorsPolicy {
    fn default() -> Self {
        CorsPolicy::allow_list(DEFAULT_ALLOWED_ORIGINS.iter().copied())
    }
}

impl CorsPolicy {
    /// Build an allow-list; entries are trimmed, trailing slashes dropped, blanks skipped.
    pub fn allow_list<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let list = origins
            .into_iter()
            .map(|o| o.as_ref().trim().trim_end_matches('/').to_string())
            .filter(|o| !o.is_empty())
            .collect();
        CorsPolicy::AllowList(list)
    }

    pub fn allows(&self, origin: &str) -> bool {
        match self {
            CorsPolicy::Permissive => true,
            CorsPolicy::AllowList(list) => list.iter().any(|o| o == origin),
        }
    }

    /// Layer for the actual (non-preflight) ask requests.
    pub fn layer(&self) -> CorsLayer {
        let base = CorsLayer::new()
            .allow_methods([Method::POST, Method::OPTIONS])
            .allow_headers([CONTENT_TYPE]);
        match self {
            CorsPolicy::Permissive => base.allow_origin(Any),
            CorsPolicy::AllowList(_) => {
                let policy = self.clone();
                base.allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _| {
                        origin.to_str().map(|o| policy.allows(o)).unwrap_or(false)
                    },
                ))
            }
        }
    }

    /// Headers for the explicit `OPTIONS` handler. Empty when the origin is not allowed.
    pub fn preflight_headers(&self, origin: Option<&HeaderValue>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        let allowed_origin = match (self, origin) {
            (CorsPolicy::Permissive, _) => Some(HeaderValue::from_static("*")),
            (CorsPolicy::AllowList(_), Some(o)) if o.to_str().is_ok_and(|s| self.allows(s)) => {
                headers.insert(VARY, HeaderValue::from_static("origin"));
                Some(o.clone())
            }
            _ => None,
        };
        if let Some(value) = allowed_origin {
            headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, value);
            headers.insert(
                ACCESS_CONTROL_ALLOW_METHODS,
                HeaderValue::from_static("POST,OPTIONS"),
            );
            headers.insert(
                ACCESS_CONTROL_ALLOW_HEADERS,
                HeaderValue::from_static("content-type"),
            );
        }
        headers
    }
}
