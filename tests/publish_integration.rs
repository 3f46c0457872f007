//! Publishing through a topic with a recording transport

mod common;

use chrono::{TimeZone, Utc};
use common::{topic_builder, RecordingTransport, UnreachableTransport};
use ntfy_publish::protocol::headers as header;
use ntfy_publish::request::{BodyTransfer, PublishMethod};
use ntfy_publish::{Action, Attachment, Message, NtfyError, Outcome, Priority, Topic};
use std::time::Duration;
use tempfile::TempDir;

#[tokio::test]
async fn test_publish_success() {
    let transport = RecordingTransport::new();
    let topic = topic_builder("alerts", &transport).build().unwrap();

    let outcome = topic.publish(&Message::new("hello")).await.unwrap();
    let response = outcome.get_or_invalid_state().unwrap();
    assert_eq!(response.id, "sPs71M8A2T");
    assert_eq!(response.time, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());

    let recorded = transport.last();
    assert_eq!(recorded.request.method(), PublishMethod::Post);
    assert_eq!(recorded.request.url().as_str(), "https://ntfy.sh/alerts");
    assert_eq!(recorded.request.headers().get(header::MESSAGE), Some("hello"));
    assert!(recorded.body.is_empty());
}

#[tokio::test]
async fn test_server_error_is_an_outcome() {
    let transport = RecordingTransport::new();
    transport.respond(
        404,
        r#"{"code":40401,"http":404,"error":"page not found","link":"https://ntfy.sh/docs/publish/"}"#,
    );
    let topic = topic_builder("alerts", &transport).build().unwrap();

    let outcome = topic.publish(&Message::new("hello")).await.unwrap();
    match &outcome {
        Outcome::Error(error) => {
            assert_eq!(error.code, 40401);
            assert_eq!(error.http, 404);
            assert_eq!(error.error, "page not found");
        }
        Outcome::Success(response) => panic!("Expected error outcome, got {:?}", response),
    }

    let mut factory_calls = 0;
    let value = outcome.get_or_raise(|message| {
        factory_calls += 1;
        message.to_string()
    });
    assert_eq!(value.unwrap_err(), "Error outcome does not have a value");
    assert_eq!(factory_calls, 1);
}

#[tokio::test]
async fn test_file_attachment_is_uploaded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.txt");
    std::fs::write(&path, b"quarterly numbers").unwrap();

    let transport = RecordingTransport::new();
    let topic = topic_builder("alerts", &transport).build().unwrap();
    let message = Message::builder()
        .body("see attached")
        .attachment(Attachment::file(&path))
        .build();

    assert!(topic.publish(&message).await.unwrap().is_success());

    let recorded = transport.last();
    assert_eq!(recorded.request.method(), PublishMethod::Put);
    assert_eq!(recorded.request.body(), &BodyTransfer::File(path.clone()));
    assert_eq!(recorded.request.headers().get(header::FILENAME), Some("report.txt"));
    assert_eq!(recorded.request.headers().get(header::MESSAGE), Some("see attached"));
    assert_eq!(recorded.body, b"quarterly numbers");
}

#[tokio::test]
async fn test_missing_attachment_fails_before_transport() {
    let transport = RecordingTransport::new();
    let topic = topic_builder("alerts", &transport).build().unwrap();
    let message = Message::builder()
        .attachment(Attachment::file("/no/such/file.bin"))
        .build();

    match topic.publish(&message).await {
        Err(NtfyError::AttachmentNotFound { path }) => {
            assert_eq!(path.to_str(), Some("/no/such/file.bin"));
        }
        other => panic!("Expected AttachmentNotFound, got {:?}", other),
    }
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_scheduled_delivery_and_auth() {
    let transport = RecordingTransport::new();
    let topic = topic_builder("alerts", &transport)
        .host("https://ntfy.example.com")
        .username("username")
        .password("password")
        .build()
        .unwrap();

    let at = Utc.with_ymd_and_hms(2030, 1, 1, 9, 0, 0).unwrap();
    topic.schedule_at(&Message::new("wake up"), at).await.unwrap();

    let recorded = transport.last();
    let headers = recorded.request.headers();
    assert_eq!(headers.get(header::DELAY), Some("1893488400"));
    assert_eq!(
        headers.get(header::AUTHORIZATION),
        Some("Basic dXNlcm5hbWU6cGFzc3dvcmQ=")
    );
    assert_eq!(
        headers.names().last().copied(),
        Some(header::AUTHORIZATION)
    );
}

#[tokio::test]
async fn test_schedule_in_sets_future_delay() {
    let transport = RecordingTransport::new();
    let topic = topic_builder("alerts", &transport).build().unwrap();

    let before = Utc::now().timestamp();
    topic
        .schedule_in(&Message::new("later"), Duration::from_secs(600))
        .await
        .unwrap();

    let delay: i64 = transport
        .last()
        .request
        .headers()
        .get(header::DELAY)
        .unwrap()
        .parse()
        .unwrap();
    assert!(delay >= before + 600);
    assert!(delay <= Utc::now().timestamp() + 600);
}

#[tokio::test]
async fn test_rich_message_headers() {
    let transport = RecordingTransport::new();
    let topic = topic_builder("alerts", &transport).build().unwrap();
    let message = Message::builder()
        .title("Größe")
        .body("disk almost full")
        .priority(Priority::Max)
        .tags(["warning", "skull"])
        .add_action(Action::view("Open portal", "https://home.nest.com/"))
        .add_action(
            Action::http("Close door", "https://api.nest.com/")
                .set_header("Authorization", "Bearer zAzsx1sk..")
                .body("{\"action\": \"close\"}"),
        )
        .cache(false)
        .build();

    topic.publish(&message).await.unwrap();

    let recorded = transport.last();
    let headers = recorded.request.headers();
    assert_eq!(headers.get(header::TITLE), Some("=?UTF-8?B?R3LDtsOfZQ==?="));
    assert_eq!(headers.get(header::PRIORITY), Some("MAX"));
    assert_eq!(headers.get(header::TAGS), Some("warning,skull"));
    assert_eq!(headers.get(header::CACHE), Some("no"));
    assert!(!headers.contains(header::FIREBASE));

    let actions = headers.get(header::ACTIONS).unwrap();
    assert!(actions.starts_with("action=view,label=Open portal,url=https://home.nest.com/;"));
    assert!(actions.contains("action=http,label=Close door,url=https://api.nest.com/"));
    assert!(actions.contains("headers.Authorization=Bearer zAzsx1sk.."));
}

#[tokio::test]
async fn test_transport_failure_is_an_error() {
    let topic = Topic::builder("alerts")
        .transport(UnreachableTransport)
        .timeout(Duration::from_secs(1))
        .build()
        .unwrap();

    match topic.publish(&Message::new("hello")).await {
        Err(err @ NtfyError::Timeout { .. }) => assert_eq!(err.category(), "transport"),
        other => panic!("Expected Timeout, got {:?}", other),
    }
}

#[test]
fn test_conflicting_auth_fails_before_network() {
    let transport = RecordingTransport::new();
    let result = topic_builder("alerts", &transport)
        .token("tk_abc")
        .username("phil")
        .build();

    assert!(matches!(result, Err(NtfyError::ConflictingAuth)));
    assert!(transport.requests().is_empty());
}

#[test]
fn test_blocking_publish() {
    let transport = RecordingTransport::new();
    transport.respond(500, r#"{"code":50001,"http":500,"error":"internal error"}"#);
    let topic = topic_builder("alerts", &transport).build().unwrap().blocking();

    let first = topic.publish(&Message::new("one")).unwrap();
    assert_eq!(first.error().map(|e| e.code), Some(50001));

    let second = topic.publish(&Message::new("two")).unwrap();
    assert!(second.is_success());
    assert_eq!(transport.requests().len(), 2);
}

#[tokio::test]
async fn test_concurrent_publishes_share_topic() {
    let transport = RecordingTransport::new();
    let topic = topic_builder("alerts", &transport).build().unwrap();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let topic = topic.clone();
            tokio::spawn(async move { topic.publish(&Message::new(format!("message {i}"))).await })
        })
        .collect();

    for handle in handles {
        assert!(handle.await.unwrap().unwrap().is_success());
    }
    assert_eq!(transport.requests().len(), 8);
}
