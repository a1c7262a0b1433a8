//! API Integration Tests
//!
//! Each test starts a stand-in generation backend and an API server
//! persisting into its own temporary directory.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, blob_path, fixtures::*, StubBackend, TestServer,
};
use reqwest::StatusCode;
use serde_json::{json, Value};
use tempfile::TempDir;

async fn setup() -> (StubBackend, TempDir, TestServer) {
    let backend = StubBackend::start().await.expect("Failed to start backend");
    let dir = TempDir::new().expect("Failed to create storage dir");
    let server = TestServer::start(&backend, dir.path())
        .await
        .expect("Failed to start server");
    (backend, dir, server)
}

async fn generate_one(server: &TestServer, backend: &StubBackend, prompt: &str) -> EmojiDto {
    backend.reply_json(200, &images_body(&[backend.image_url("a.png")]));
    let response = server
        .post("/api/v1/generate", &GenerateRequest::new(prompt))
        .await
        .unwrap();
    let mut generated: GenerateDto = assert_json(response, StatusCode::CREATED).await.unwrap();
    generated.items.remove(0)
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let (_backend, _dir, server) = setup().await;

    let response = server.get("/health").await.expect("Request failed");
    assert!(response.headers().contains_key("x-request-id"));
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");
}

// ============================================================================
// Generation Tests
// ============================================================================

#[tokio::test]
async fn test_generate_like_unlike() {
    let (backend, dir, server) = setup().await;

    let item = generate_one(&server, &backend, "happy cat").await;
    assert_eq!(backend.prompts(), vec!["happy cat".to_string()]);
    assert_eq!(item.prompt, "happy cat");
    assert_eq!(item.like_count, 0);
    assert!(!item.liked);
    assert!(blob_path(dir.path()).exists());

    let response = server
        .post_empty(&format!("/api/v1/items/{}/like", item.id))
        .await
        .unwrap();
    let like: LikeDto = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(like.id, item.id);
    assert!(like.liked);
    assert_eq!(like.like_count, 1);
    assert_eq!(like.message, "Emoji liked!");

    let response = server
        .get(&format!("/api/v1/items/{}/liked", item.id))
        .await
        .unwrap();
    let liked: LikedDto = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(liked.liked);

    let response = server
        .post_empty(&format!("/api/v1/items/{}/like", item.id))
        .await
        .unwrap();
    let unlike: LikeDto = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!unlike.liked);
    assert_eq!(unlike.like_count, 0);
    assert_eq!(unlike.message, "Emoji unliked");
}

#[tokio::test]
async fn test_newest_batch_first() {
    let (backend, _dir, server) = setup().await;

    let first = generate_one(&server, &backend, "cat").await;
    backend.reply_json(
        200,
        &images_body(&[backend.image_url("b.png"), backend.image_url("c.png")]),
    );
    let response = server
        .post("/api/v1/generate", &GenerateRequest::new("dog"))
        .await
        .unwrap();
    let second: GenerateDto = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(second.message, "Emoji generated successfully!");

    let response = server.get("/api/v1/gallery").await.unwrap();
    let gallery: GalleryDto = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!gallery.is_loading);
    let ids: Vec<&str> = gallery.items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec![second.items[0].id.as_str(), second.items[1].id.as_str(), first.id.as_str()]);
}

#[tokio::test]
async fn test_generate_rejects_empty_prompt() {
    let (backend, _dir, server) = setup().await;

    for prompt in ["", "   "] {
        let response = server
            .post("/api/v1/generate", &GenerateRequest::new(prompt))
            .await
            .unwrap();
        let error: ErrorDto = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(error.error.code, "VALIDATION_ERROR");
    }
    assert!(backend.prompts().is_empty());
}

#[tokio::test]
async fn test_generate_backend_error() {
    let (backend, dir, server) = setup().await;
    backend.reply_json(500, &json!({ "error": "Model overloaded" }));

    let response = server
        .post("/api/v1/generate", &GenerateRequest::new("cat"))
        .await
        .unwrap();
    let error: ErrorDto = assert_json(response, StatusCode::BAD_GATEWAY).await.unwrap();
    assert_eq!(error.error.code, "GENERATION_FAILED");
    assert_eq!(error.error.message, "Model overloaded");
    assert!(!blob_path(dir.path()).exists());

    backend.reply_raw(502, "<html>bad gateway</html>");
    let response = server
        .post("/api/v1/generate", &GenerateRequest::new("cat"))
        .await
        .unwrap();
    let error: ErrorDto = assert_json(response, StatusCode::BAD_GATEWAY).await.unwrap();
    assert_eq!(error.error.message, "Failed to generate emoji");
}

#[tokio::test]
async fn test_generate_without_images() {
    let (backend, _dir, server) = setup().await;
    backend.reply_json(200, &json!({ "images": [] }));

    let response = server
        .post("/api/v1/generate", &GenerateRequest::new("cat"))
        .await
        .unwrap();
    let error: ErrorDto = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
    assert_eq!(error.error.code, "NO_IMAGES");
    assert_eq!(
        error.error.message,
        "No emoji was generated. Please try a different prompt."
    );

    let response = server.get("/api/v1/gallery").await.unwrap();
    let gallery: GalleryDto = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(gallery.items.is_empty());
    assert!(!gallery.is_loading);
}

// ============================================================================
// Item Tests
// ============================================================================

#[tokio::test]
async fn test_like_unknown_item_is_ignored() {
    let (_backend, dir, server) = setup().await;

    let unknown = uuid::Uuid::new_v4();
    let response = server
        .post_empty(&format!("/api/v1/items/{unknown}/like"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.post_empty("/api/v1/items/garbage/like").await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get("/api/v1/items/garbage/liked").await.unwrap();
    let liked: LikedDto = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(liked.id, "garbage");
    assert!(!liked.liked);

    assert!(!blob_path(dir.path()).exists());
}

#[tokio::test]
async fn test_download() {
    let (backend, _dir, server) = setup().await;
    let item = generate_one(&server, &backend, "cat").await;

    let response = server
        .get(&format!("/api/v1/items/{}/download", item.id))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "image/png");
    assert_eq!(
        response.headers()["content-disposition"],
        "attachment; filename=\"emoji.png\""
    );
    assert_eq!(&response.bytes().await.unwrap()[..], PNG_BYTES);

    let unknown = uuid::Uuid::new_v4();
    let response = server
        .get(&format!("/api/v1/items/{unknown}/download"))
        .await
        .unwrap();
    let error: ErrorDto = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error.message, "Emoji not found");
}

// ============================================================================
// Persistence Tests
// ============================================================================

#[tokio::test]
async fn test_gallery_survives_restart() {
    let (backend, dir, server) = setup().await;
    let item = generate_one(&server, &backend, "happy cat").await;
    let response = server
        .post_empty(&format!("/api/v1/items/{}/like", item.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
    server.shutdown();

    let server = TestServer::start(&backend, dir.path()).await.unwrap();
    let response = server.get("/api/v1/gallery").await.unwrap();
    let gallery: GalleryDto = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(gallery.items.len(), 1);
    assert_eq!(gallery.items[0].id, item.id);
    assert_eq!(gallery.items[0].url, item.url);
    assert_eq!(gallery.items[0].created_at, item.created_at);
    assert_eq!(gallery.items[0].like_count, 1);
    assert!(gallery.items[0].liked);

    let blob: Value =
        serde_json::from_str(&std::fs::read_to_string(blob_path(dir.path())).unwrap()).unwrap();
    assert_eq!(blob["version"], 2);
    assert_eq!(blob["state"]["likedIds"], json!([item.id]));
}

#[tokio::test]
async fn test_legacy_blob_is_migrated() {
    let backend = StubBackend::start().await.unwrap();
    let dir = TempDir::new().unwrap();
    let id = uuid::Uuid::new_v4().to_string();
    std::fs::write(
        blob_path(dir.path()),
        legacy_v0_blob(&id, "https://cdn.example.com/old.png"),
    )
    .unwrap();

    let server = TestServer::start(&backend, dir.path()).await.unwrap();
    let response = server.get("/api/v1/gallery").await.unwrap();
    let gallery: GalleryDto = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(gallery.items.len(), 1);
    assert_eq!(gallery.items[0].id, id);
    assert_eq!(gallery.items[0].prompt, "old cat");
    assert_eq!(gallery.items[0].like_count, 1);
    assert!(gallery.items[0].liked);

    let response = server.get(&format!("/api/v1/items/{id}/liked")).await.unwrap();
    let liked: LikedDto = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(liked.liked);
}

#[tokio::test]
async fn test_unreadable_blob_is_discarded() {
    let backend = StubBackend::start().await.unwrap();
    let dir = TempDir::new().unwrap();
    std::fs::write(blob_path(dir.path()), "{not json").unwrap();

    let server = TestServer::start(&backend, dir.path()).await.unwrap();
    assert!(!blob_path(dir.path()).exists());

    let response = server.get("/api/v1/gallery").await.unwrap();
    let gallery: GalleryDto = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(gallery.items.is_empty());

    std::fs::write(blob_path(dir.path()), r#"{"version":99,"state":{}}"#).unwrap();
    let server = TestServer::start(&backend, dir.path()).await.unwrap();
    assert!(!blob_path(dir.path()).exists());
    server.shutdown();

    std::fs::write(blob_path(dir.path()), [0xff, 0xfe]).unwrap();
    let server = TestServer::start(&backend, dir.path()).await.unwrap();
    assert!(!blob_path(dir.path()).exists());
    let response = server.get("/api/v1/gallery").await.unwrap();
    let gallery: GalleryDto = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(gallery.items.is_empty());
}
