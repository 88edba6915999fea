//! Notification feed workflow: tabs, server-acknowledged read-state,
//! and deletion.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use assert_matches::assert_matches;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::{delete, get, put};
use axum::{Json, Router};
use givehub_client::ApiError;
use givehub_core::CoreError;
use givehub_workflow::{NotificationFeed, NotificationTab, WorkflowError};
use serde_json::{json, Value};
use tokio_util::sync::CancellationToken;

use common::client_for;

fn notification_json(id: &str, is_read: bool) -> Value {
    json!({
        "_id": id,
        "recipient": "u7",
        "type": "application",
        "title": "Application update",
        "message": "Your application has been approved.",
        "relatedTo": { "model": "Application", "id": "a1" },
        "isRead": is_read,
        "createdAt": "2024-05-03T12:00:00Z"
    })
}

fn feed_json() -> Value {
    json!({
        "success": true,
        "data": [
            notification_json("n1", false),
            notification_json("n2", true),
            notification_json("n3", false),
        ]
    })
}

/// Feed plus ack endpoints; `fail_acks` turns every PUT/DELETE into a
/// 500 so tests can watch local state stay put.
fn feed_router(fail_acks: bool) -> Router {
    let ack = move || async move {
        if fail_acks {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "Database unavailable" })),
            )
        } else {
            (StatusCode::OK, Json(json!({ "success": true })))
        }
    };

    Router::new()
        .route("/api/notifications", get(|| async { Json(feed_json()) }))
        .route(
            "/api/notifications/unread-count",
            get(|| async { Json(json!({ "success": true, "data": { "count": 7 } })) }),
        )
        .route("/api/notifications/{id}/read", put(move |Path(_id): Path<String>| ack()))
        .route("/api/notifications/mark-all-read", put(ack))
        .route("/api/notifications/{id}", delete(move |Path(_id): Path<String>| ack()))
}

#[tokio::test]
async fn tabs_partition_the_loaded_feed() {
    let mut feed = NotificationFeed::new(client_for(feed_router(false)).await);
    feed.refresh().await.unwrap();

    assert_eq!(feed.notifications().len(), 3);
    assert_eq!(feed.unread_count(), 2);

    let unread: Vec<&str> = feed
        .filter(NotificationTab::Unread)
        .iter()
        .map(|n| n.id.as_str())
        .collect();
    assert_eq!(unread, ["n1", "n3"]);

    let read: Vec<&str> = feed
        .filter(NotificationTab::Read)
        .iter()
        .map(|n| n.id.as_str())
        .collect();
    assert_eq!(read, ["n2"]);

    assert_eq!(feed.filter(NotificationTab::All).len(), 3);
}

#[tokio::test]
async fn mark_read_flips_the_flag_after_the_ack() {
    let mut feed = NotificationFeed::new(client_for(feed_router(false)).await);
    feed.refresh().await.unwrap();

    feed.mark_read("n1").await.unwrap();

    assert_eq!(feed.unread_count(), 1);
    let n1 = feed.notifications().iter().find(|n| n.id == "n1").unwrap();
    assert!(n1.is_read);
}

#[tokio::test]
async fn a_failed_ack_leaves_the_entry_unread() {
    let mut feed = NotificationFeed::new(client_for(feed_router(true)).await);
    feed.refresh().await.unwrap();

    let err = feed.mark_read("n1").await.unwrap_err();

    assert_matches!(err, WorkflowError::Api(ApiError::Api { status: 500, .. }));
    assert_eq!(err.to_string(), "Database unavailable");
    assert_eq!(feed.unread_count(), 2);
    let n1 = feed.notifications().iter().find(|n| n.id == "n1").unwrap();
    assert!(!n1.is_read);
}

#[tokio::test]
async fn mark_all_read_clears_the_whole_feed() {
    let mut feed = NotificationFeed::new(client_for(feed_router(false)).await);
    feed.refresh().await.unwrap();

    feed.mark_all_read().await.unwrap();

    assert_eq!(feed.unread_count(), 0);
    assert!(feed.filter(NotificationTab::Unread).is_empty());
    assert_eq!(feed.filter(NotificationTab::Read).len(), 3);
}

#[tokio::test]
async fn delete_removes_the_entry_after_the_server_confirms() {
    let mut feed = NotificationFeed::new(client_for(feed_router(false)).await);
    feed.refresh().await.unwrap();

    feed.delete("n2").await.unwrap();

    assert_eq!(feed.notifications().len(), 2);
    assert!(feed.notifications().iter().all(|n| n.id != "n2"));
}

#[tokio::test]
async fn a_failed_delete_keeps_the_entry() {
    let mut feed = NotificationFeed::new(client_for(feed_router(true)).await);
    feed.refresh().await.unwrap();

    feed.delete("n2").await.unwrap_err();

    assert_eq!(feed.notifications().len(), 3);
}

#[tokio::test]
async fn an_unknown_id_is_refused_without_a_request() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);

    let router = Router::new()
        .route("/api/notifications", get(|| async { Json(feed_json()) }))
        .route(
            "/api/notifications/{id}/read",
            put(move |Path(_id): Path<String>| {
                let counter = Arc::clone(&counter);
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Json(json!({ "success": true }))
                }
            }),
        );
    let mut feed = NotificationFeed::new(client_for(router).await);
    feed.refresh().await.unwrap();

    let err = feed.mark_read("n9").await.unwrap_err();

    assert_matches!(err, WorkflowError::Core(CoreError::NotFound { .. }));
    assert_eq!(err.to_string(), "Entity not found: Notification with id n9");
    assert_eq!(hits.load(Ordering::SeqCst), 0);
    assert_eq!(feed.unread_count(), 2);
}

#[tokio::test]
async fn the_badge_count_comes_from_its_own_endpoint() {
    let feed = NotificationFeed::new(client_for(feed_router(false)).await);

    // Nothing loaded locally; the endpoint still answers.
    assert_eq!(feed.fetch_unread_count().await.unwrap(), 7);
    assert_eq!(feed.unread_count(), 0);
}

#[tokio::test]
async fn a_cancelled_feed_stops_refreshing() {
    let cancel = CancellationToken::new();
    let mut feed =
        NotificationFeed::with_cancellation(client_for(feed_router(false)).await, cancel.clone());

    cancel.cancel();

    let err = feed.refresh().await.unwrap_err();
    assert_matches!(err, WorkflowError::Cancelled);
    assert!(feed.notifications().is_empty());
}

#[tokio::test]
async fn hit_counters_do_not_drift_on_repeat_refresh() {
    // Two refreshes load the same snapshot; state is replaced, not
    // appended.
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);

    let router = Router::new().route(
        "/api/notifications",
        get(move || {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Json(feed_json())
            }
        }),
    );
    let mut feed = NotificationFeed::new(client_for(router).await);

    feed.refresh().await.unwrap();
    feed.refresh().await.unwrap();

    assert_eq!(hits.load(Ordering::SeqCst), 2);
    assert_eq!(feed.notifications().len(), 3);
}
