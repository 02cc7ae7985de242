//! Endpoint tests against a server bound to an ephemeral port

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};
use tempfile::TempDir;

use super::*;
use crate::content::sample_content;
use crate::provider::{BaseLocation, ContentProvider, RemoteSource};

async fn spawn_server(site: Portfolio) -> (String, Arc<ServerState>) {
    let content = site.load_static_content().unwrap();
    let state = Arc::new(ServerState::new(site, content));
    let app = router(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .unwrap();
    });

    (format!("http://{}", addr), state)
}

fn valid_form() -> Value {
    json!({
        "name": "John Smith",
        "email": "john.smith@example.com",
        "subject": "Business Partnership Inquiry",
        "message": "I am interested in discussing a partnership. Could we schedule a call?",
        "inquiryType": "Business Partnership"
    })
}

#[tokio::test]
async fn test_health() {
    let dir = TempDir::new().unwrap();
    let (base, _) = spawn_server(Portfolio::new(dir.path()).unwrap()).await;

    let body: Value = reqwest::get(format!("{}/health", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body, json!({"status": "healthy", "service": "portfolio-api"}));
}

#[tokio::test]
async fn test_content_endpoints_use_envelope() {
    let dir = TempDir::new().unwrap();
    let (base, _) = spawn_server(Portfolio::new(dir.path()).unwrap()).await;
    let sample = sample_content();

    let profile: Value = reqwest::get(format!("{}/api/profile", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(profile["success"], json!(true));
    assert_eq!(profile["data"]["personal"]["name"], json!(sample.profile.name));

    let experience: Value = reqwest::get(format!("{}/api/experience", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        experience["data"].as_array().unwrap().len(),
        sample.experience.len()
    );

    let expertise: Value = reqwest::get(format!("{}/api/expertise", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(expertise["data"]["title"], json!(sample.expertise.title));
}

#[tokio::test]
async fn test_remote_provider_against_server() {
    let dir = TempDir::new().unwrap();
    let (base, _) = spawn_server(Portfolio::new(dir.path()).unwrap()).await;

    let remote = RemoteSource::new(BaseLocation::Fixed(base), Duration::from_secs(5));
    let content = ContentProvider::from_remote(remote).resolve().await.unwrap();
    assert_eq!(*content, sample_content());
}

#[tokio::test]
async fn test_index_renders_page() {
    let dir = TempDir::new().unwrap();
    let (base, _) = spawn_server(Portfolio::new(dir.path()).unwrap()).await;

    let response = reqwest::get(format!("{}/", base)).await.unwrap();
    assert!(response.status().is_success());
    let html = response.text().await.unwrap();
    assert!(html.contains(r#"<section id="testimonials""#));
}

#[tokio::test]
async fn test_fallback_serves_public_files() {
    let dir = TempDir::new().unwrap();
    let site = Portfolio::new(dir.path()).unwrap();
    std::fs::create_dir_all(site.public_dir.join("images")).unwrap();
    std::fs::write(site.public_dir.join("images/me.txt"), "hello").unwrap();
    let (base, _) = spawn_server(site).await;

    let found = reqwest::get(format!("{}/images/me.txt", base)).await.unwrap();
    assert_eq!(found.text().await.unwrap(), "hello");

    let missing = reqwest::get(format!("{}/nope.txt", base)).await.unwrap();
    assert_eq!(missing.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_contact_submission_lifecycle() {
    let dir = TempDir::new().unwrap();
    let (base, _) = spawn_server(Portfolio::new(dir.path()).unwrap()).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/contact", base))
        .header("user-agent", "portfolio-tests")
        .json(&valid_form())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], json!(true));
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let list: Value = client
        .get(format!("{}/api/contact", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list[0]["id"], json!(id));
    assert_eq!(list[0]["status"], json!("new"));
    assert_eq!(list[0]["userAgent"], json!("portfolio-tests"));
    assert_eq!(list[0]["ipAddress"], json!("127.0.0.1"));

    let updated = client
        .patch(format!("{}/api/contact/{}/status?status=read", base, id))
        .send()
        .await
        .unwrap();
    assert_eq!(updated.status(), reqwest::StatusCode::OK);

    let missing = client
        .patch(format!("{}/api/contact/unknown/status?status=read", base))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_contact_validation_errors() {
    let dir = TempDir::new().unwrap();
    let (base, _) = spawn_server(Portfolio::new(dir.path()).unwrap()).await;
    let client = reqwest::Client::new();

    let mut short = valid_form();
    short["message"] = json!("Too short");
    let response = client
        .post(format!("{}/api/contact", base))
        .json(&short)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json().await.unwrap();
    assert!(body["detail"].as_str().unwrap().starts_with("message"));

    let mut unknown_kind = valid_form();
    unknown_kind["inquiryType"] = json!("Spam");
    let response = client
        .post(format!("{}/api/contact", base))
        .json(&unknown_kind)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json().await.unwrap();
    assert!(body["detail"].as_str().unwrap().contains("Spam"));
}

#[tokio::test]
async fn test_contact_accepts_form_post() {
    let dir = TempDir::new().unwrap();
    let (base, state) = spawn_server(Portfolio::new(dir.path()).unwrap()).await;
    let client = reqwest::Client::new();

    let fields = [
        ("name", "John Smith"),
        ("email", "john.smith@example.com"),
        ("inquiryType", "Other"),
        ("subject", "Question from the page"),
        ("message", "Sent straight from the rendered contact form."),
    ];
    let response = client
        .post(format!("{}/api/contact", base))
        .form(&fields)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let stored = state.inbox.lock().await.list();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].subject, "Question from the page");

    let response = client
        .post(format!("{}/api/contact", base))
        .form(&[("name", "John Smith")])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json().await.unwrap();
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn test_contact_rate_limit() {
    let dir = TempDir::new().unwrap();
    let (base, _) = spawn_server(Portfolio::new(dir.path()).unwrap()).await;
    let client = reqwest::Client::new();

    for _ in 0..3 {
        let response = client
            .post(format!("{}/api/contact", base))
            .json(&valid_form())
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);
    }

    let response = client
        .post(format!("{}/api/contact", base))
        .json(&valid_form())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn test_reload_picks_up_content_file() {
    let dir = TempDir::new().unwrap();
    crate::commands::init::init_site(dir.path()).unwrap();
    let site = Portfolio::new(dir.path()).unwrap();
    let content_path = site.source_dir.join("content.yml");
    let (base, state) = spawn_server(site).await;

    let mut changed = sample_content();
    changed.profile.name = "Renamed Person".to_string();
    std::fs::write(&content_path, serde_yaml::to_string(&changed).unwrap()).unwrap();
    reload(&state).await.unwrap();

    let profile: Value = reqwest::get(format!("{}/api/profile", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(profile["data"]["personal"]["name"], json!("Renamed Person"));

    // A broken file leaves the served content untouched
    std::fs::write(&content_path, "profile: [").unwrap();
    assert!(reload(&state).await.is_err());
    assert_eq!(state.content().await.profile.name, "Renamed Person");
}

#[tokio::test]
async fn test_reload_applies_rate_limit_changes() {
    let dir = TempDir::new().unwrap();
    let site = Portfolio::new(dir.path()).unwrap();
    let config_path = site.config_path();
    let (base, state) = spawn_server(site).await;
    let client = reqwest::Client::new();

    std::fs::write(&config_path, "contact:\n  rate_limit_max: 1\n").unwrap();
    reload(&state).await.unwrap();

    let statuses = [reqwest::StatusCode::OK, reqwest::StatusCode::TOO_MANY_REQUESTS];
    for expected in statuses {
        let response = client
            .post(format!("{}/api/contact", base))
            .json(&valid_form())
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), expected);
    }
}
