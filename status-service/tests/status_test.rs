mod common;

use chrono::{DateTime, Utc};
use common::TestApp;
use reqwest::Client;
use status_service::models::StatusCheck;
use status_service::services::StatusStore;
use std::collections::HashSet;
use uuid::Uuid;

#[tokio::test]
async fn create_returns_persisted_record() {
    let app = TestApp::spawn().await;

    let response = app.post_status("agent-1").await;

    assert_eq!(response.status(), 201);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["client_name"], "agent-1");

    let id = body["id"].as_str().expect("id is a string");
    assert_eq!(Uuid::parse_str(id).unwrap().get_version_num(), 4);

    let timestamp = body["timestamp"].as_str().expect("timestamp is a string");
    assert!(timestamp.ends_with('Z'));
    let parsed = DateTime::parse_from_rfc3339(timestamp).expect("RFC 3339 timestamp");
    assert!(parsed.with_timezone(&Utc) <= Utc::now());

    assert_eq!(app.store.len().await, 1);
}

#[tokio::test]
async fn created_record_appears_unchanged_in_list() {
    let app = TestApp::spawn().await;

    let created: serde_json::Value = app.post_status("agent-1").await.json().await.unwrap();

    let response = app.get_status().await;
    assert_eq!(response.status(), 200);
    let listed: Vec<serde_json::Value> = response.json().await.unwrap();

    assert!(listed.contains(&created));
}

#[tokio::test]
async fn each_create_issues_a_fresh_id() {
    let app = TestApp::spawn().await;

    let mut ids = HashSet::new();
    for i in 0..20 {
        let body: serde_json::Value = app
            .post_status(&format!("agent-{}", i))
            .await
            .json()
            .await
            .unwrap();
        ids.insert(body["id"].as_str().unwrap().to_string());
    }

    assert_eq!(ids.len(), 20);
}

#[tokio::test]
async fn list_preserves_insertion_order() {
    let app = TestApp::spawn().await;
    for name in ["first", "second", "third"] {
        app.post_status(name).await;
    }

    let listed: Vec<serde_json::Value> = app.get_status().await.json().await.unwrap();
    let names: Vec<&str> = listed
        .iter()
        .map(|c| c["client_name"].as_str().unwrap())
        .collect();

    assert_eq!(names, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn list_is_capped_at_one_thousand() {
    let app = TestApp::spawn().await;
    for i in 0..1005 {
        app.store
            .insert_status_check(&StatusCheck::new(format!("bulk-{}", i)))
            .await
            .unwrap();
    }

    let listed: Vec<serde_json::Value> = app.get_status().await.json().await.unwrap();

    assert_eq!(listed.len(), 1000);
}

#[tokio::test]
async fn list_is_empty_on_a_fresh_store() {
    let app = TestApp::spawn().await;

    let response = app.get_status().await;

    assert_eq!(response.status(), 200);
    let listed: Vec<serde_json::Value> = response.json().await.unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn missing_client_name_is_rejected_before_storage() {
    let app = TestApp::spawn().await;

    let response = Client::new()
        .post(app.url("/api/status"))
        .json(&serde_json::json!({}))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_client_error());
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn invalid_bodies_are_client_errors() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let cases = [
        (r#"{"client_name":""}"#, 422),
        (r#"{"client_name":42}"#, 422),
        (r#"{"client_name":"#, 400),
    ];

    for (body, expected) in cases {
        let response = client
            .post(app.url("/api/status"))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), expected, "body: {}", body);
    }

    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn create_fails_with_server_error_when_database_is_down() {
    let app = TestApp::spawn().await;
    app.store.set_available(false);

    let response = app.post_status("agent-1").await;

    assert_eq!(response.status(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Database error");
}

#[tokio::test]
async fn list_fails_with_server_error_when_database_is_down() {
    let app = TestApp::spawn().await;
    app.store.set_available(false);

    let response = app.get_status().await;

    assert_eq!(response.status(), 500);
}
