use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use oasis_login::{app, templates::SUCCESS_MESSAGE};
use serde_json::{json, Value};
use std::path::Path;
use tempfile::TempDir;
use tower::ServiceExt;

fn test_app() -> Router {
    app::router(Path::new("./static"))
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn post_login(form: &str) -> (StatusCode, String) {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/login")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    (status, body_string(response).await)
}

async fn post_validate(body: Value) -> (StatusCode, Value) {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/validate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body = body_string(response).await;
    (status, serde_json::from_str(&body).unwrap_or(Value::Null))
}

#[tokio::test]
async fn test_login_page_renders_pristine_form() {
    for uri in ["/", "/login"] {
        let response = test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let page = body_string(response).await;
        assert!(page.contains("<title>Neomorphic Oasis | Login</title>"));
        assert!(page.contains("Welcome Back"));
        assert!(page.contains(r#"data-submitted="false""#));
        assert_eq!(page.matches("aria-live=\"assertive\">\u{a0}</span>").count(), 2);
        assert!(!page.contains(SUCCESS_MESSAGE));
    }
}

#[tokio::test]
async fn test_valid_login_is_acknowledged_once() {
    let (status, page) = post_login("email=a%40b.com&password=12345678").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page.matches(SUCCESS_MESSAGE).count(), 1);
    assert!(page.contains(r#"value="a@b.com""#));
    assert_eq!(page.matches(r#"aria-invalid="false""#).count(), 2);
}

#[tokio::test]
async fn test_invalid_login_renders_both_errors() {
    let (status, page) = post_login("email=&password=1234567").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!page.contains(SUCCESS_MESSAGE));
    assert!(page.contains("Please enter your email or username."));
    assert!(page.contains("Password must be at least 8 characters."));
    assert!(page.contains(r#"aria-describedby="login-email-error""#));
    assert!(page.contains(r#"data-submitted="true""#));
}

#[tokio::test]
async fn test_missing_fields_count_as_empty() {
    let (status, page) = post_login("").await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("Please enter your email or username."));
    assert!(page.contains("Please enter your password."));
}

#[tokio::test]
async fn test_validate_is_silent_before_submit() {
    let (status, errors) = post_validate(json!({
        "email": "",
        "password": "",
        "submitted": false,
        "field": "password",
        "value": "123",
    }))
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(errors, json!({}));
}

#[tokio::test]
async fn test_validate_clears_password_error_after_submit() {
    let (_, errors) = post_validate(json!({
        "email": "a@b.com",
        "password": "1234567",
        "submitted": true,
        "field": "password",
        "value": "12345678",
    }))
    .await;
    assert_eq!(errors, json!({}));

    let (_, errors) = post_validate(json!({
        "email": "a@b.com",
        "password": "12345678",
        "submitted": true,
        "field": "email",
        "value": "  ",
    }))
    .await;
    assert_eq!(
        errors,
        json!({ "email": "Please enter your email or username." })
    );
}

#[tokio::test]
async fn test_validate_rejects_unknown_field() {
    let (status, _) = post_validate(json!({
        "email": "",
        "password": "",
        "submitted": true,
        "field": "username",
        "value": "x",
    }))
    .await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_static_files_are_served() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir_all(temp_dir.path().join("css")).unwrap();
    std::fs::write(temp_dir.path().join("css/oasis.css"), "body { margin: 0; }").unwrap();

    let response = app::router(temp_dir.path())
        .oneshot(
            Request::builder()
                .uri("/static/css/oasis.css")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "body { margin: 0; }");
}

#[tokio::test]
async fn test_rejected_login_does_not_echo_password() {
    let (_, page) = post_login("email=&password=hunter2hunter2").await;
    assert!(page.contains("Please enter your email or username."));
    assert!(!page.contains("hunter2hunter2"));
}
