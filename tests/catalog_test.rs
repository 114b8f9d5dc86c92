//! Integration tests for the flat catalog collections, the dashboard,
//! and the media upload endpoint.

mod helpers;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use helpers::TestApp;

#[tokio::test]
async fn book_crud_round_trip() {
    let app = TestApp::new();
    let token = app.login().await;

    let response = app
        .request(
            "POST",
            "/api/books",
            Some(json!({
                "title": "Amrit Vachan",
                "author": "Sant Shri",
                "description": "Collected sayings",
                "language": "hi",
                "status": "Draft",
                "chapters": [
                    { "title": "Part One", "content": "...", "order": 1 }
                ],
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    let id = response.body["data"]["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "PUT",
            &format!("/api/books/{id}"),
            Some(json!({ "status": "Published" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "Published");
    // Untouched fields survive the merge.
    assert_eq!(response.body["data"]["title"], "Amrit Vachan");
    assert_eq!(
        response.body["data"]["chapters"].as_array().unwrap().len(),
        1
    );

    let response = app
        .request("DELETE", &format!("/api/books/{id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", &format!("/api/books/{id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn bhajan_list_supports_search_and_paging() {
    let app = TestApp::new();
    let token = app.login().await;

    for title in ["Aarti Sangrah", "Morning Aarti", "Evening Dhun"] {
        let response = app
            .request(
                "POST",
                "/api/bhajans",
                Some(json!({
                    "title": title,
                    "lyrics": "...",
                    "status": "Published",
                })),
                Some(&token),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
    }

    let response = app
        .request("GET", "/api/bhajans?search=aarti", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["totalItems"], 2);

    let response = app
        .request("GET", "/api/bhajans?page=2&per_page=2", None, Some(&token))
        .await;
    assert_eq!(response.body["data"]["totalItems"], 3);
    assert_eq!(response.body["data"]["totalPages"], 2);
    assert_eq!(response.body["data"]["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn dashboard_counts_collections() {
    let app = TestApp::new();
    let token = app.login().await;

    app.request(
        "POST",
        "/api/wallpapers",
        Some(json!({
            "title": "Lotus",
            "imageUrl": "memory://satsang/x/lotus.jpg",
            "status": "Published",
        })),
        Some(&token),
    )
    .await;
    app.request(
        "POST",
        "/api/admin-users",
        Some(json!({
            "email": "editor@satsang.app",
            "role": "Editor",
            "active": true,
        })),
        Some(&token),
    )
    .await;

    let response = app.request("GET", "/api/dashboard", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["wallpapers"], 1);
    assert_eq!(response.body["data"]["adminUsers"], 1);
    assert_eq!(response.body["data"]["books"], 0);
    assert_eq!(response.body["data"]["audioCategories"], 0);
}

#[tokio::test]
async fn media_upload_returns_durable_url() {
    let app = TestApp::new();
    let token = app.login().await;

    let boundary = "putra-boundary";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"chant.mp3\"\r\n\
         Content-Type: audio/mpeg\r\n\r\n\
         fake-audio-bytes\r\n\
         --{boundary}--\r\n"
    );

    let request = Request::builder()
        .method("POST")
        .uri("/api/media/upload")
        .header("Authorization", format!("Bearer {token}"))
        .header(
            "Content-Type",
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let url = body["data"]["url"].as_str().unwrap();
    assert!(url.starts_with("memory://"));
    assert_eq!(body["data"]["fileName"], "chant.mp3");
    assert_eq!(body["data"]["sizeBytes"], 16);
}
