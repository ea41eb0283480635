pub mod health;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::document::handlers;
use crate::state::AppState;
use crate::suggestions::handlers as suggestion_handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Sessions
        .route("/api/v1/sessions", post(handlers::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(handlers::handle_get_session).delete(handlers::handle_delete_session),
        )
        // Document mutators
        .route(
            "/api/v1/sessions/:id/sections",
            put(handlers::handle_update_section),
        )
        .route(
            "/api/v1/sessions/:id/entries",
            post(handlers::handle_add_entry),
        )
        .route(
            "/api/v1/sessions/:id/entries/:entry_id",
            patch(handlers::handle_update_entry),
        )
        .route(
            "/api/v1/sessions/:id/entries/:section/:entry_id",
            delete(handlers::handle_remove_entry),
        )
        .route(
            "/api/v1/sessions/:id/skills/:kind",
            post(handlers::handle_add_skill),
        )
        .route(
            "/api/v1/sessions/:id/skills/:kind/:index",
            delete(handlers::handle_remove_skill),
        )
        // Wizard
        .route(
            "/api/v1/sessions/:id/steps/next",
            post(handlers::handle_next_step),
        )
        .route(
            "/api/v1/sessions/:id/steps/previous",
            post(handlers::handle_previous_step),
        )
        // Derived views
        .route("/api/v1/sessions/:id/preview", get(handlers::handle_preview))
        .route("/api/v1/sessions/:id/export", get(handlers::handle_export))
        // Suggestions
        .route(
            "/api/v1/sessions/:id/suggestions",
            post(suggestion_handlers::handle_generate_suggestions),
        )
        .route(
            "/api/v1/sessions/:id/suggestions/apply",
            post(suggestion_handlers::handle_apply_suggestion),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::document::session::SessionStore;
    use crate::suggestions::StaticSuggestionSource;

    fn router_with_delay(delay: Duration) -> Router {
        build_router(AppState {
            sessions: SessionStore::new(),
            suggestions: Arc::new(StaticSuggestionSource::new(delay)),
        })
    }

    fn test_router() -> Router {
        router_with_delay(Duration::ZERO)
    }

    fn request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
        let builder = Request::builder().method(method).uri(uri);
        match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
        app.clone().oneshot(request(method, uri, body)).await.unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn new_session(app: &Router) -> String {
        let response = send(app, Method::POST, "/api/v1/sessions", None).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        json_body(response).await["session_id"]
            .as_str()
            .unwrap()
            .to_string()
    }

    #[tokio::test]
    async fn test_health() {
        let app = test_router();
        let response = send(&app, Method::GET, "/health", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], json!("ok"));
    }

    #[tokio::test]
    async fn test_new_session_is_blank_with_empty_preview() {
        let app = test_router();
        let id = new_session(&app).await;

        let view = json_body(send(&app, Method::GET, &format!("/api/v1/sessions/{id}"), None).await).await;
        assert_eq!(view["step"]["progress"], json!(25.0));
        assert_eq!(view["document"]["experience"], json!([]));

        let preview =
            json_body(send(&app, Method::GET, &format!("/api/v1/sessions/{id}/preview"), None).await)
                .await;
        assert_eq!(preview["sections"].as_array().unwrap().len(), 1);
        assert_eq!(preview["sections"][0]["kind"], json!("empty"));
    }

    #[tokio::test]
    async fn test_unknown_session_is_404() {
        let app = test_router();
        let response = send(
            &app,
            Method::GET,
            "/api/v1/sessions/00000000-0000-0000-0000-000000000000/preview",
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["error"]["code"], json!("NOT_FOUND"));
    }

    #[tokio::test]
    async fn test_entry_lifecycle() {
        let app = test_router();
        let id = new_session(&app).await;

        let response = send(
            &app,
            Method::POST,
            &format!("/api/v1/sessions/{id}/entries"),
            Some(json!({ "section": "experience" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let entry_id = json_body(response).await["id"].as_str().unwrap().to_string();

        let updated = json_body(
            send(
                &app,
                Method::PATCH,
                &format!("/api/v1/sessions/{id}/entries/{entry_id}"),
                Some(json!({
                    "section": "experience",
                    "change": { "field": "company", "value": "Acme" }
                })),
            )
            .await,
        )
        .await;
        assert_eq!(updated["changed"], json!(true));
        assert_eq!(updated["document"]["experience"][0]["company"], json!("Acme"));

        let missing = json_body(
            send(
                &app,
                Method::PATCH,
                &format!("/api/v1/sessions/{id}/entries/nope"),
                Some(json!({
                    "section": "experience",
                    "change": { "field": "company", "value": "Other" }
                })),
            )
            .await,
        )
        .await;
        assert_eq!(missing["changed"], json!(false));

        let removed = json_body(
            send(
                &app,
                Method::DELETE,
                &format!("/api/v1/sessions/{id}/entries/experience/{entry_id}"),
                None,
            )
            .await,
        )
        .await;
        assert_eq!(removed["changed"], json!(true));
        assert_eq!(removed["document"]["experience"], json!([]));
    }

    #[tokio::test]
    async fn test_update_section_and_export() {
        let app = test_router();
        let id = new_session(&app).await;

        let response = send(
            &app,
            Method::PUT,
            &format!("/api/v1/sessions/{id}/sections"),
            Some(json!({
                "section": "personalInfo",
                "value": { "fullName": "Jane Doe", "email": "jane@example.com" }
            })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = send(&app, Method::GET, &format!("/api/v1/sessions/{id}/export"), None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert_eq!(text, "Jane Doe\njane@example.com\n");
    }

    #[tokio::test]
    async fn test_skills_trim_and_remove() {
        let app = test_router();
        let id = new_session(&app).await;

        let added = json_body(
            send(
                &app,
                Method::POST,
                &format!("/api/v1/sessions/{id}/skills/technical"),
                Some(json!({ "text": "  React  " })),
            )
            .await,
        )
        .await;
        assert_eq!(added["document"]["skills"]["technical"], json!(["React"]));

        let blank = json_body(
            send(
                &app,
                Method::POST,
                &format!("/api/v1/sessions/{id}/skills/technical"),
                Some(json!({ "text": "   " })),
            )
            .await,
        )
        .await;
        assert_eq!(blank["changed"], json!(false));

        let out_of_range = json_body(
            send(
                &app,
                Method::DELETE,
                &format!("/api/v1/sessions/{id}/skills/technical/7"),
                None,
            )
            .await,
        )
        .await;
        assert_eq!(out_of_range["changed"], json!(false));

        for index in ["-1", "first"] {
            let response = send(
                &app,
                Method::DELETE,
                &format!("/api/v1/sessions/{id}/skills/technical/{index}"),
                None,
            )
            .await;
            assert_eq!(response.status(), StatusCode::OK);
            let body = json_body(response).await;
            assert_eq!(body["changed"], json!(false));
            assert_eq!(body["document"]["skills"]["technical"], json!(["React"]));
        }

        let removed = json_body(
            send(
                &app,
                Method::DELETE,
                &format!("/api/v1/sessions/{id}/skills/technical/0"),
                None,
            )
            .await,
        )
        .await;
        assert_eq!(removed["document"]["skills"]["technical"], json!([]));
    }

    #[tokio::test]
    async fn test_step_navigation_clamps() {
        let app = test_router();
        let id = new_session(&app).await;

        let back = json_body(
            send(&app, Method::POST, &format!("/api/v1/sessions/{id}/steps/previous"), None).await,
        )
        .await;
        assert_eq!(back["index"], json!(0));

        let mut last = Value::Null;
        for _ in 0..6 {
            last = json_body(
                send(&app, Method::POST, &format!("/api/v1/sessions/{id}/steps/next"), None).await,
            )
            .await;
        }
        assert_eq!(last["index"], json!(3));
        assert_eq!(last["title"], json!("Skills"));
        assert_eq!(last["progress"], json!(100.0));
    }

    #[tokio::test]
    async fn test_suggestions_require_api_key() {
        let app = test_router();
        let id = new_session(&app).await;

        let response = send(
            &app,
            Method::POST,
            &format!("/api/v1/sessions/{id}/suggestions"),
            Some(json!({ "api_key": "  " })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = send(
            &app,
            Method::POST,
            &format!("/api/v1/sessions/{id}/suggestions"),
            Some(json!({ "api_key": "sk-test" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["suggestions"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_apply_summary_suggestion() {
        let app = test_router();
        let id = new_session(&app).await;

        let body = json_body(
            send(
                &app,
                Method::POST,
                &format!("/api/v1/sessions/{id}/suggestions/apply"),
                Some(json!({ "target": "summary", "text": "Led a team of 5 engineers" })),
            )
            .await,
        )
        .await;
        assert_eq!(body["applied"], json!(true));
        assert_eq!(
            body["document"]["personalInfo"]["summary"],
            json!("Led a team of 5 engineers")
        );
    }

    #[tokio::test]
    async fn test_delete_session() {
        let app = test_router();
        let id = new_session(&app).await;
        let response = send(&app, Method::DELETE, &format!("/api/v1/sessions/{id}"), None).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let response = send(&app, Method::GET, &format!("/api/v1/sessions/{id}"), None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_skill_kind_is_json_validation_error() {
        let app = test_router();
        let id = new_session(&app).await;

        let response = send(
            &app,
            Method::POST,
            &format!("/api/v1/sessions/{id}/skills/hobbies"),
            Some(json!({ "text": "Chess" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await["error"]["code"],
            json!("VALIDATION_ERROR")
        );

        let response = send(
            &app,
            Method::DELETE,
            &format!("/api/v1/sessions/{id}/entries/projects/123"),
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await["error"]["code"],
            json!("VALIDATION_ERROR")
        );
    }

    #[tokio::test]
    async fn test_update_section_rejects_malformed_lists() {
        let app = test_router();
        let id = new_session(&app).await;
        let uri = format!("/api/v1/sessions/{id}/sections");

        let response = send(
            &app,
            Method::PUT,
            &uri,
            Some(json!({
                "section": "skills",
                "value": { "technical": ["", "  Rust  "], "soft": [] }
            })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await["error"]["code"],
            json!("VALIDATION_ERROR")
        );

        let response = send(
            &app,
            Method::PUT,
            &uri,
            Some(json!({
                "section": "experience",
                "value": [
                    { "id": "job-1", "company": "Acme" },
                    { "id": "job-1", "company": "Globex" }
                ]
            })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let view = json_body(send(&app, Method::GET, &format!("/api/v1/sessions/{id}"), None).await).await;
        assert_eq!(view["document"]["skills"]["technical"], json!([]));
        assert_eq!(view["document"]["experience"], json!([]));
    }

    #[tokio::test(start_paused = true)]
    async fn test_mutation_completes_while_suggestions_pending() {
        let app = router_with_delay(Duration::from_secs(2));
        let id = new_session(&app).await;

        let pending = tokio::spawn(app.clone().oneshot(request(
            Method::POST,
            &format!("/api/v1/sessions/{id}/suggestions"),
            Some(json!({ "api_key": "sk-test" })),
        )));
        for _ in 0..5 {
            tokio::task::yield_now().await;
        }

        let started = tokio::time::Instant::now();
        let response = send(
            &app,
            Method::POST,
            &format!("/api/v1/sessions/{id}/skills/technical"),
            Some(json!({ "text": "Rust" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await["document"]["skills"]["technical"],
            json!(["Rust"])
        );
        assert!(started.elapsed() < Duration::from_secs(2));
        assert!(!pending.is_finished());

        let response = pending.await.unwrap().unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await["suggestions"].as_array().unwrap().len(),
            4
        );
        assert!(started.elapsed() >= Duration::from_secs(2));
    }
}
