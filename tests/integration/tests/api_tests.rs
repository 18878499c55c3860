//! API Integration Tests
//!
//! Each test spawns the server on an ephemeral port over an in-memory store.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, fixtures::*, TestServer,
};
use modlog_common::AppConfig;
use modlog_store::InMemoryLogRepository;
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start(InMemoryLogRepository::new())
        .await
        .expect("Failed to start server");

    let response = server.get("/health").await.expect("Request failed");
    let health: HealthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(health.status, "ok");
    assert!(!health.version.is_empty());
}

#[tokio::test]
async fn test_request_id_header() {
    let server = TestServer::start(InMemoryLogRepository::new()).await.unwrap();

    let response = server
        .client
        .get(format!("{}/health", server.base_url()))
        .header("x-request-id", "trace-me")
        .send()
        .await
        .unwrap();

    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "trace-me"
    );
}

// ============================================================================
// Rendering Tests
// ============================================================================

#[tokio::test]
async fn test_rendered_entries() {
    let repo = InMemoryLogRepository::new();
    repo.extend("pics", mixed_records());
    let server = TestServer::start(repo).await.unwrap();

    let response = server.get_log("pics", None).await.unwrap();
    let page: LogPageResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(page.sub, "pics");
    assert_eq!(page.page, 1);
    assert_eq!(page.entries.len(), 5);

    let codes: Vec<i32> = page.entries.iter().map(|e| e.action).collect();
    assert_eq!(codes, vec![999, 30, 52, 22, 20]);

    // Unknown code falls back
    let unknown = &page.entries[0];
    assert_eq!(unknown.action_text, "[Type 999] future action");
    assert_eq!(unknown.moderator["kind"], "hidden");

    // Transfer links the new owner from the description
    let transfer = &page.entries[1];
    assert_eq!(
        transfer.action_text,
        r#"Transferred the sub to <a href="/u/heir">heir</a>"#
    );
    assert!(transfer.target.is_none());

    // Deleted post: deleted moderator, trailing link, no target
    let deleted = &page.entries[2];
    assert_eq!(deleted.action_text, "Deleted a post with reason `spam`");
    assert_eq!(deleted.moderator["kind"], "deleted");
    assert_eq!(deleted.moderator["label"], "[Deleted]");
    assert!(deleted.target.is_none());
    let link = deleted.trailing_link.as_ref().unwrap();
    assert_eq!(link.label, "Link");
    assert_eq!(link.url, "https://example.com/p/1");

    // One day ban: escaped reason, duplicated target, no trailing link
    let ban = &page.entries[3];
    assert_eq!(
        ban.action_text,
        r#"Temporarily banned <a href="/u/troll">troll</a> for 1 day with reason `&lt;script&gt;`"#
    );
    assert!(!ban.action_text.contains("1 days"));
    let target = ban.target.as_ref().unwrap();
    assert_eq!(target.name, "troll");
    assert_eq!(target.url, "/u/troll");
    assert!(ban.trailing_link.is_none());

    // Plain action
    let created = &page.entries[4];
    assert_eq!(created.action_text, "Created the sub");
    assert_eq!(created.moderator["name"], "founder");
    assert_eq!(created.timestamp_iso, "2023-11-14T22:13:20Z");
    assert_eq!(created.timestamp_display, "2023-11-14 22:13:20 UTC");
}

#[tokio::test]
async fn test_sub_names_are_case_insensitive() {
    let server = TestServer::start(repo_with_filler("Pics", 3)).await.unwrap();

    let response = server.get_log("pICS", Some(1)).await.unwrap();
    let page: LogPageResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(page.entries.len(), 3);
}

// ============================================================================
// Pagination Tests
// ============================================================================

#[tokio::test]
async fn test_pagination_walk() {
    let server = TestServer::start(repo_with_filler("pics", 120)).await.unwrap();

    let first: LogPageResponse =
        assert_json(server.get_log("pics", Some(1)).await.unwrap(), StatusCode::OK)
            .await
            .unwrap();
    assert_eq!(first.entries.len(), 50);
    assert!(!first.has_previous);
    assert!(first.has_next);
    assert_eq!(first.previous_url, None);
    assert_eq!(first.next_url.as_deref(), Some("/s/pics/log/2"));

    let second: LogPageResponse =
        assert_json(server.get_log("pics", Some(2)).await.unwrap(), StatusCode::OK)
            .await
            .unwrap();
    assert_eq!(second.entries.len(), 50);
    assert!(second.has_previous);
    assert!(second.has_next);

    let third: LogPageResponse =
        assert_json(server.get_log("pics", Some(3)).await.unwrap(), StatusCode::OK)
            .await
            .unwrap();
    assert_eq!(third.entries.len(), 20);
    assert!(third.has_previous);
    assert!(!third.has_next);
    assert_eq!(third.previous_url.as_deref(), Some("/s/pics/log/2"));
    assert_eq!(third.next_url, None);

    // Pages do not overlap
    let last_of_first = first.entries.last().unwrap();
    let first_of_second = second.entries.first().unwrap();
    assert!(last_of_first.timestamp_iso > first_of_second.timestamp_iso);
}

#[tokio::test]
async fn test_exact_multiple_reports_next_page() {
    let server = TestServer::start(repo_with_filler("pics", 50)).await.unwrap();

    let first: LogPageResponse =
        assert_json(server.get_log("pics", None).await.unwrap(), StatusCode::OK)
            .await
            .unwrap();
    assert!(first.has_next);

    let second: LogPageResponse =
        assert_json(server.get_log("pics", Some(2)).await.unwrap(), StatusCode::OK)
            .await
            .unwrap();
    assert!(second.entries.is_empty());
    assert!(second.has_previous);
    assert!(!second.has_next);
}

#[tokio::test]
async fn test_forty_nine_records_have_no_next() {
    let server = TestServer::start(repo_with_filler("pics", 49)).await.unwrap();

    let page: LogPageResponse =
        assert_json(server.get_log("pics", None).await.unwrap(), StatusCode::OK)
            .await
            .unwrap();

    assert_eq!(page.entries.len(), 49);
    assert!(!page.has_next);
}

// ============================================================================
// Error Tests
// ============================================================================

#[tokio::test]
async fn test_unknown_sub() {
    let server = TestServer::start(InMemoryLogRepository::new()).await.unwrap();

    let response = server.get_log("nope", None).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();

    assert_eq!(body.error.code, "UNKNOWN_SUB");
    assert!(body.error.message.contains("nope"));
}

#[tokio::test]
async fn test_invalid_page_numbers() {
    let server = TestServer::start(repo_with_filler("pics", 1)).await.unwrap();

    for page in ["0", "-2", "two"] {
        let response = server
            .get(&format!("/api/v1/s/pics/log/{page}"))
            .await
            .unwrap();
        let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(body.error.code, "INVALID_PATH_PARAMETER", "page {page}");
    }
}

#[tokio::test]
async fn test_unknown_route() {
    let server = TestServer::start(InMemoryLogRepository::new()).await.unwrap();

    let response = server.get("/api/v1/subs").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Configuration Tests
// ============================================================================

#[tokio::test]
async fn test_seeded_server_with_base_url() {
    let seed = TempSeedFile::write(&seed_json(&[
        ("pics", filler_records(51)),
        ("empty", Vec::new()),
    ]))
    .unwrap();

    let mut config = AppConfig::default();
    config.modlog.seed_file = Some(seed.path.display().to_string());
    config.modlog.base_url = "https://mods.example.com".to_string();

    let server = TestServer::start_with_config(config).await.unwrap();

    let page: LogPageResponse =
        assert_json(server.get_log("pics", None).await.unwrap(), StatusCode::OK)
            .await
            .unwrap();
    assert_eq!(page.entries.len(), 50);
    assert_eq!(
        page.next_url.as_deref(),
        Some("https://mods.example.com/s/pics/log/2")
    );
    assert_eq!(
        page.entries[0].moderator["url"],
        "https://mods.example.com/u/mod"
    );

    let empty: LogPageResponse =
        assert_json(server.get_log("empty", None).await.unwrap(), StatusCode::OK)
            .await
            .unwrap();
    assert!(empty.entries.is_empty());
}

#[tokio::test]
async fn test_missing_seed_file_fails_startup() {
    let mut config = AppConfig::default();
    config.modlog.seed_file = Some("/nonexistent/modlog-seed.json".to_string());

    assert!(TestServer::start_with_config(config).await.is_err());
}
