pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::profile::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/profiles", post(handlers::handle_generate_profile))
        .route("/api/v1/questions", post(handlers::handle_answer_question))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::profile::generator::tests::StubService;
    use crate::profile::ProfileGenerator;

    const VALID_PROFILE: &str = r#"[{"section": "Profile Summary", "content": "Jane leads.", "sources": "CV"}]"#;

    fn router_with(stub: Arc<StubService>) -> Router {
        build_router(AppState {
            generator: ProfileGenerator::new(stub),
        })
    }

    async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let response = router_with(StubService::replying(""))
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "profiler");
    }

    #[tokio::test]
    async fn test_profile_returns_raw_text_and_parsed_sections() {
        let stub = StubService::replying(VALID_PROFILE);
        let (status, body) = post_json(
            router_with(stub.clone()),
            "/api/v1/profiles",
            json!({
                "chunks": ["cv text"],
                "metadata": [{"file_type": "CV", "filename": "cv.pdf", "name": "Jane"}]
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["profile"], VALID_PROFILE);
        assert_eq!(body["sections"][0]["section"], "Profile Summary");

        let recorded = stub.recorded();
        let prompt = &recorded[0].prompt;
        assert!(prompt.contains("- CV\n"));
        assert!(prompt.contains("name: Jane"));
        assert!(!prompt.contains("cv.pdf"));
    }

    #[tokio::test]
    async fn test_profile_unparseable_output_still_succeeds() {
        let (status, body) = post_json(
            router_with(StubService::replying("Sorry, I cannot help with that.")),
            "/api/v1/profiles",
            json!({"chunks": ["A"]}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["profile"], "Sorry, I cannot help with that.");
        assert!(body["sections"].is_null());
    }

    #[tokio::test]
    async fn test_profile_over_item_cap_still_returns_sections() {
        let overlong = serde_json::to_string(&json!([{
            "section": "Key Strengths",
            "content": "1. a\n\n2. b\n\n3. c\n\n4. d\n\n5. e\n\n6. f",
            "sources": "360"
        }]))
        .unwrap();
        let (status, body) = post_json(
            router_with(StubService::replying(&overlong)),
            "/api/v1/profiles",
            json!({"chunks": ["A"]}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["profile"], overlong.as_str());
        assert_eq!(body["sections"][0]["section"], "Key Strengths");
    }

    #[tokio::test]
    async fn test_profile_rejects_mismatched_metadata() {
        let stub = StubService::replying(VALID_PROFILE);
        let (status, body) = post_json(
            router_with(stub.clone()),
            "/api/v1/profiles",
            json!({"chunks": ["a", "b"], "metadata": [{"file_type": "CV"}]}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(stub.recorded().is_empty());
    }

    #[tokio::test]
    async fn test_question_returns_answer() {
        let stub = StubService::replying("Her biggest strength is clarity.");
        let (status, body) = post_json(
            router_with(stub.clone()),
            "/api/v1/questions",
            json!({"chunks": ["doc1", "doc2"], "question": "What is X's biggest strength?"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["answer"], "Her biggest strength is clarity.");
        assert!(stub.recorded()[0]
            .prompt
            .contains("Question: What is X's biggest strength?"));
    }

    #[tokio::test]
    async fn test_question_rejects_blank_question() {
        let stub = StubService::replying("unused");
        let (status, body) = post_json(
            router_with(stub.clone()),
            "/api/v1/questions",
            json!({"chunks": ["doc1"], "question": "   "}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(stub.recorded().is_empty());
    }

    #[tokio::test]
    async fn test_upstream_failure_maps_to_bad_gateway() {
        let (status, body) = post_json(
            router_with(StubService::failing(401)),
            "/api/v1/questions",
            json!({"chunks": ["doc1"], "question": "why?"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "LLM_ERROR");
    }

    #[tokio::test]
    async fn test_upstream_rate_limit_maps_to_429() {
        let stub = StubService::failing(429);
        let (status, body) = post_json(
            router_with(stub.clone()),
            "/api/v1/profiles",
            json!({"chunks": ["A"]}),
        )
        .await;

        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(body["error"]["code"], "RATE_LIMITED");
        assert_eq!(stub.recorded().len(), 1);
    }
}
