//! Router assembly: routes, CORS on the ask routes, panic catching and request tracing.

use super::AppState;
use super::error::panic_response;
use super::handlers::{ask, ask_deprecated, check, home, preflight};
use axum::Router;
use axum::routing::{get, options, post};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

pub fn build_router(state: AppState) -> Router {
    // CORS wraps only POST; OPTIONS goes to the explicit preflight handler.
    let cors = state.cors.layer();
    let ask_routes = Router::new()
        .route("/ask", options(preflight).merge(post(ask).layer(cors.clone())))
        .route(
            "/get_wine_advice",
            options(preflight).merge(post(ask_deprecated).layer(cors)),
        );

    Router::new()
        .route("/", get(home))
        .route("/check", get(check))
        .merge(ask_routes)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAiAdapter;
    use crate::adapters::http::CorsPolicy;
    use crate::adapters::http::error::GENERIC_ERROR_MESSAGE;
    use crate::adapters::http::handlers::WELCOME_TEXT;
    use crate::domain::{DomainError, Persona};
    use crate::shared::log_capture::LogCapture;
    use crate::usecases::{
        AdviceGenerator, AdviceService, DEFAULT_FALLBACK_ADVICE, TopicClassifier,
    };
    use axum::body::Body;
    use axum::http::header::ACCESS_CONTROL_ALLOW_ORIGIN;
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(mock: Arc<MockAiAdapter>, classify: bool, cors: CorsPolicy) -> Router {
        let classifier = classify.then(|| TopicClassifier::new(mock.clone()));
        let service = AdviceService::new(
            classifier,
            AdviceGenerator::new(mock, Persona::default()),
            DEFAULT_FALLBACK_ADVICE,
        );
        build_router(AppState::new(Arc::new(service), cors))
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(res: Response) -> Value {
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_empty_object_is_400_without_provider_call() {
        let mock = Arc::new(MockAiAdapter::scripted(vec![]));
        let res = app(mock.clone(), true, CorsPolicy::default())
            .oneshot(post_json("/ask", &json!({})))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(res).await, json!({ "error": "No input provided" }));
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_question_is_400() {
        let mock = Arc::new(MockAiAdapter::scripted(vec![]));
        let res = app(mock.clone(), true, CorsPolicy::default())
            .oneshot(post_json("/ask", &json!({ "question": "" })))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(res).await["error"], "No input provided");
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_malformed_or_missing_body_is_400() {
        let mock = Arc::new(MockAiAdapter::scripted(vec![]));
        let router = app(mock.clone(), true, CorsPolicy::default());

        let malformed = Request::builder()
            .method("POST")
            .uri("/ask")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let res = router.clone().oneshot(malformed).await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(res).await["error"], "No input provided");

        let absent = Request::builder()
            .method("POST")
            .uri("/ask")
            .body(Body::empty())
            .unwrap();
        let res = router.oneshot(absent).await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(res).await["error"], "No input provided");

        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_rejected_body_and_empty_question_log_at_same_level() {
        let logs = LogCapture::default();
        let _guard = logs.install();
        let router = app(
            Arc::new(MockAiAdapter::scripted(vec![])),
            true,
            CorsPolicy::default(),
        );

        let malformed = Request::builder()
            .method("POST")
            .uri("/ask")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        router.clone().oneshot(malformed).await.unwrap();
        let rejected: Vec<String> = logs
            .lines()
            .into_iter()
            .filter(|l| l.contains("No input provided"))
            .collect();
        assert_eq!(rejected.len(), 1);
        assert!(rejected[0].contains("ERROR"));

        router
            .oneshot(post_json("/ask", &json!({"question": ""})))
            .await
            .unwrap();
        let all: Vec<String> = logs
            .lines()
            .into_iter()
            .filter(|l| l.contains("No input provided"))
            .collect();
        assert_eq!(all.len(), 2);
        assert!(all.iter().all(|l| l.contains("ERROR")));
    }

    #[tokio::test]
    async fn test_in_domain_question_returns_trimmed_advice() {
        let mock = Arc::new(MockAiAdapter::scripted(vec![
            Ok("Yes".to_string()),
            Ok("  A Cabernet Sauvignon or Malbec.\n".to_string()),
        ]));
        let res = app(mock.clone(), true, CorsPolicy::default())
            .oneshot(post_json(
                "/ask",
                &json!({ "question": "What wine pairs well with steak?" }),
            ))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            body_json(res).await,
            json!({ "advice": "A Cabernet Sauvignon or Malbec." })
        );
        assert_eq!(mock.call_count(), 2);
    }

    #[tokio::test]
    async fn test_classification_disabled_makes_one_call() {
        let mock = Arc::new(MockAiAdapter::scripted(vec![Ok("Pinot Noir.".to_string())]));
        let res = app(mock.clone(), false, CorsPolicy::default())
            .oneshot(post_json("/ask", &json!({ "question": "Wine with salmon?" })))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_json(res).await["advice"], "Pinot Noir.");
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_out_of_domain_returns_fallback() {
        let mock = Arc::new(MockAiAdapter::scripted(vec![Ok("No".to_string())]));
        let res = app(mock.clone(), true, CorsPolicy::default())
            .oneshot(post_json("/ask", &json!({ "question": "How tall is Everest?" })))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_json(res).await["advice"], DEFAULT_FALLBACK_ADVICE);
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_provider_failure_is_generic_500() {
        for script in [
            vec![Err(DomainError::Provider(
                "API error 401: Incorrect API key sk-live-123".to_string(),
            ))],
            vec![
                Ok("yes".to_string()),
                Err(DomainError::Provider(
                    "HTTP request failed: dns error sk-live-123".to_string(),
                )),
            ],
        ] {
            let mock = Arc::new(MockAiAdapter::scripted(script));
            let res = app(mock, true, CorsPolicy::default())
                .oneshot(post_json("/ask", &json!({ "question": "Merlot with pizza?" })))
                .await
                .unwrap();

            assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
            let json = body_json(res).await;
            assert_eq!(json, json!({ "error": GENERIC_ERROR_MESSAGE }));
            assert!(!json.to_string().contains("sk-live-123"));
        }
    }

    #[tokio::test]
    async fn test_deprecated_route_and_field() {
        let mock = Arc::new(MockAiAdapter::scripted(vec![
            Ok("Yes".to_string()),
            Ok("Chianti.".to_string()),
        ]));
        let res = app(mock.clone(), true, CorsPolicy::default())
            .oneshot(post_json(
                "/get_wine_advice",
                &json!({ "query": "Wine for lasagna?" }),
            ))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_json(res).await["advice"], "Chianti.");
        assert_eq!(mock.calls()[0].user, "Wine for lasagna?");
    }

    #[tokio::test]
    async fn test_options_ask_always_ok() {
        let mock = Arc::new(MockAiAdapter::scripted(vec![]));
        let req = Request::builder()
            .method("OPTIONS")
            .uri("/ask")
            .header("content-type", "application/json")
            .body(Body::from("definitely not json"))
            .unwrap();
        let res = app(mock.clone(), true, CorsPolicy::default())
            .oneshot(req)
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_json(res).await, json!({ "status": "ok" }));
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_browser_preflight_from_allowed_origin() {
        let mock = Arc::new(MockAiAdapter::scripted(vec![]));
        let req = Request::builder()
            .method("OPTIONS")
            .uri("/ask")
            .header("origin", "https://www.freethecork.com")
            .header("access-control-request-method", "POST")
            .body(Body::empty())
            .unwrap();
        let res = app(mock, true, CorsPolicy::default())
            .oneshot(req)
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            res.headers()[ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://www.freethecork.com"
        );
        assert_eq!(body_json(res).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_post_cors_headers_follow_allow_list() {
        let router = app(
            Arc::new(MockAiAdapter::scripted(vec![])),
            false,
            CorsPolicy::default(),
        );

        let mut allowed = post_json("/ask", &json!({ "question": "Port with stilton?" }));
        allowed
            .headers_mut()
            .insert("origin", "https://8d1741-3.myshopify.com".parse().unwrap());
        let res = router.clone().oneshot(allowed).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            res.headers()[ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://8d1741-3.myshopify.com"
        );

        let mut denied = post_json("/ask", &json!({ "question": "Port with stilton?" }));
        denied
            .headers_mut()
            .insert("origin", "https://evil.example".parse().unwrap());
        let res = router.oneshot(denied).await.unwrap();
        assert!(res.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }

    #[tokio::test]
    async fn test_permissive_cors_allows_any_origin() {
        let router = app(
            Arc::new(MockAiAdapter::scripted(vec![])),
            false,
            CorsPolicy::Permissive,
        );
        let mut req = post_json("/ask", &json!({ "question": "Cava with tapas?" }));
        req.headers_mut()
            .insert("origin", "http://localhost:5173".parse().unwrap());
        let res = router.oneshot(req).await.unwrap();
        assert_eq!(res.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[tokio::test]
    async fn test_check_ignores_provider() {
        let mock = Arc::new(MockAiAdapter::scripted(vec![Err(DomainError::Provider(
            "down".to_string(),
        ))]));
        let req = Request::builder()
            .uri("/check")
            .body(Body::empty())
            .unwrap();
        let res = app(mock.clone(), true, CorsPolicy::default())
            .oneshot(req)
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_json(res).await, json!({ "status": "Server is running" }));
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_home_welcome_text() {
        let req = Request::builder().uri("/").body(Body::empty()).unwrap();
        let res = app(
            Arc::new(MockAiAdapter::scripted(vec![])),
            true,
            CorsPolicy::default(),
        )
        .oneshot(req)
        .await
        .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], WELCOME_TEXT.as_bytes());
    }

    #[tokio::test]
    async fn test_panicking_handler_is_generic_500() {
        async fn boom() -> &'static str {
            panic!("secret internal state")
        }

        let router: Router = Router::new()
            .route("/boom", get(boom))
            .layer(CatchPanicLayer::custom(panic_response));
        let req = Request::builder().uri("/boom").body(Body::empty()).unwrap();
        let res = router.oneshot(req).await.unwrap();

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(res).await;
        assert_eq!(json["error"], GENERIC_ERROR_MESSAGE);
        assert!(!json.to_string().contains("secret"));
    }
}
