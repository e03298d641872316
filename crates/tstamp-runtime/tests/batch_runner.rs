use serde_json::json;
use tstamp_runtime::{BatchOutcome, BatchRunner, Endpoints, Error, HttpMethod};
use tstamp_testing::fixtures::{provider_group, sample_record};
use tstamp_testing::{PageEvent, RecordingPage, RecordingTelemetry, ScriptedTransport};

const LIST_URL: &str = "http://localhost/api/verify/";
const DATA_URL: &str = "http://localhost/api/verify/data/";
const ADD_URL: &str = "http://localhost/api/add/";

fn endpoints() -> Endpoints {
    Endpoints {
        verify_list: LIST_URL.to_string(),
        verify_data: DATA_URL.to_string(),
        add: ADD_URL.to_string(),
        method: HttpMethod::Post,
    }
}

fn listing() -> serde_json::Value {
    json!({
        "provider_list": [
            {"provider": "osfstorage", "provider_file_list": [
                {"file_id": "a", "file_path": "/a.txt", "size": 1, "created": "c", "modified": "m", "file_version": 1},
                {"file_id": "b", "file_path": "/b.txt", "size": 2, "created": "c", "modified": "m", "file_version": 1}
            ]},
            {"provider": "s3", "provider_file_list": [
                {"file_id": "c", "file_path": "/c.txt", "size": 3, "created": "c", "modified": "m", "file_version": 2}
            ]}
        ]
    })
}

#[tokio::test]
async fn test_verify_all_succeed_reloads_once() {
    let transport = ScriptedTransport::new().respond(LIST_URL, listing());
    let page = RecordingPage::new();
    let telemetry = RecordingTelemetry::new();
    let endpoints = endpoints();

    let outcome = BatchRunner::new(&transport, &page, &telemetry, &endpoints)
        .run_verify()
        .await
        .unwrap();

    assert_eq!(outcome, BatchOutcome::Completed { total: 3 });
    assert_eq!(
        page.statuses(),
        vec![
            "Storage files list gathering ...",
            "Verification files : 1 / 3 ...",
            "Verification files : 2 / 3 ...",
            "Verification files : 3 / 3 ...",
            "Verification (100%) and Refreshing...",
        ]
    );
    assert_eq!(page.reload_count(), 1);
    assert_eq!(page.events().last(), Some(&PageEvent::Reload));
    assert_eq!(page.controls_enabled(), Some(false));
    assert!(telemetry.messages().is_empty());
}

#[tokio::test]
async fn test_verify_sends_one_request_per_file() {
    let transport = ScriptedTransport::new().respond(LIST_URL, listing());
    let page = RecordingPage::new();
    let telemetry = RecordingTelemetry::new();
    let endpoints = endpoints();

    BatchRunner::new(&transport, &page, &telemetry, &endpoints)
        .run_verify()
        .await
        .unwrap();

    let sent = transport.sent();
    assert_eq!(sent.len(), 4);
    assert_eq!(sent[0].url, LIST_URL);
    assert!(sent[0].fields.is_empty());

    let last = &sent[3];
    assert_eq!(last.url, DATA_URL);
    let names: Vec<&str> = last.fields.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(
        names,
        vec!["provider", "file_id", "file_path", "size", "created", "modified", "file_version"]
    );
    assert_eq!(last.field_value("provider"), Some("s3"));
    assert_eq!(last.field_value("size"), Some("3"));
    assert_eq!(last.field_value("file_version"), Some("2"));
}

#[tokio::test]
async fn test_verify_last_failure_is_surfaced() {
    let transport = ScriptedTransport::new()
        .respond(LIST_URL, listing())
        .fail("/b.txt", "error", "Internal Server Error")
        .delay("/b.txt", 2);
    let page = RecordingPage::new();
    let telemetry = RecordingTelemetry::new();
    let endpoints = endpoints();

    let outcome = BatchRunner::new(&transport, &page, &telemetry, &endpoints)
        .run_verify()
        .await
        .unwrap();

    match outcome {
        BatchOutcome::Failed { file_path, counter } => {
            assert_eq!(file_path, "/b.txt");
            assert_eq!((counter.success(), counter.fail()), (2, 1));
        }
        other => panic!("unexpected outcome: {:?}", other),
    }

    let messages = telemetry.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].0, "Timestamp Add Error: /b.txt");
    assert_eq!(messages[0].1.url, DATA_URL);
    assert_eq!(messages[0].1.status, "error");
    assert_eq!(messages[0].1.error, "Internal Server Error");

    assert_eq!(page.last_status().as_deref(), Some("Error: /b.txt"));
    assert_eq!(page.controls_enabled(), Some(true));
    assert_eq!(page.reload_count(), 0);
}

#[tokio::test]
async fn test_verify_earlier_failures_are_counted_silently() {
    let transport = ScriptedTransport::new()
        .respond(LIST_URL, listing())
        .fail("/a.txt", "error", "Bad Gateway")
        .fail("/c.txt", "parsererror", "expected value")
        .delay("/c.txt", 1);
    let page = RecordingPage::new();
    let telemetry = RecordingTelemetry::new();
    let endpoints = endpoints();

    BatchRunner::new(&transport, &page, &telemetry, &endpoints)
        .run_verify()
        .await
        .unwrap();

    let messages = telemetry.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].0, "Timestamp Add Error: /c.txt");
    assert_eq!(messages[0].1.status, "parsererror");
    assert_eq!(page.last_status().as_deref(), Some("Error: /c.txt"));
}

#[tokio::test]
async fn test_verify_success_settling_after_failure_still_reports() {
    let transport = ScriptedTransport::new()
        .respond(LIST_URL, listing())
        .fail("/a.txt", "error", "Not Found")
        .delay("/c.txt", 3);
    let page = RecordingPage::new();
    let telemetry = RecordingTelemetry::new();
    let endpoints = endpoints();

    let outcome = BatchRunner::new(&transport, &page, &telemetry, &endpoints)
        .run_verify()
        .await
        .unwrap();

    assert!(matches!(outcome, BatchOutcome::Failed { ref file_path, .. } if file_path == "/a.txt"));
    assert_eq!(telemetry.messages().len(), 1);
    assert_eq!(page.controls_enabled(), Some(true));
    assert_eq!(page.reload_count(), 0);
}

#[tokio::test]
async fn test_verify_list_failure() {
    let transport = ScriptedTransport::new().fail(LIST_URL, "error", "Service Unavailable");
    let page = RecordingPage::new();
    let telemetry = RecordingTelemetry::new();
    let endpoints = endpoints();

    let outcome = BatchRunner::new(&transport, &page, &telemetry, &endpoints)
        .run_verify()
        .await
        .unwrap();

    assert_eq!(
        outcome,
        BatchOutcome::ListUnavailable {
            status: "error".to_string(),
            error: "Service Unavailable".to_string(),
        }
    );
    assert_eq!(transport.sent().len(), 1);

    let messages = telemetry.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].0, "Timestamp Add Error");
    assert_eq!(messages[0].1.url, LIST_URL);

    assert_eq!(
        page.events(),
        vec![
            PageEvent::Controls(false),
            PageEvent::Status("Storage files list gathering ...".to_string()),
            PageEvent::Controls(true),
            PageEvent::Status("Error: Storage files list gathering failed".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_verify_malformed_list_is_a_parse_failure() {
    let transport =
        ScriptedTransport::new().respond(LIST_URL, json!({"provider_list": "not a list"}));
    let page = RecordingPage::new();
    let telemetry = RecordingTelemetry::new();
    let endpoints = endpoints();

    let outcome = BatchRunner::new(&transport, &page, &telemetry, &endpoints)
        .run_verify()
        .await
        .unwrap();

    assert!(matches!(outcome, BatchOutcome::ListUnavailable { ref status, .. } if status == "parsererror"));
    assert_eq!(page.controls_enabled(), Some(true));
}

#[tokio::test]
async fn test_verify_empty_listing_reloads() {
    let transport = ScriptedTransport::new().respond(LIST_URL, json!({"provider_list": []}));
    let page = RecordingPage::new();
    let telemetry = RecordingTelemetry::new();
    let endpoints = endpoints();

    let outcome = BatchRunner::new(&transport, &page, &telemetry, &endpoints)
        .run_verify()
        .await
        .unwrap();

    assert_eq!(outcome, BatchOutcome::Completed { total: 0 });
    assert_eq!(page.reload_count(), 1);
}

#[tokio::test]
async fn test_verify_files_without_list_fetch() {
    let transport = ScriptedTransport::new();
    let page = RecordingPage::new();
    let telemetry = RecordingTelemetry::new();
    let endpoints = endpoints();
    let groups = vec![provider_group("box", &["/x.pdf", "/y.pdf"])];

    let outcome = BatchRunner::new(&transport, &page, &telemetry, &endpoints)
        .verify_files(&groups)
        .await
        .unwrap();

    assert_eq!(outcome, BatchOutcome::Completed { total: 2 });
    assert_eq!(transport.sent()[1].field_value("file_id"), Some("box-2"));
}

#[tokio::test]
async fn test_verify_requires_endpoints() {
    let transport = ScriptedTransport::new();
    let page = RecordingPage::new();
    let telemetry = RecordingTelemetry::new();
    let endpoints = Endpoints::default();

    let result = BatchRunner::new(&transport, &page, &telemetry, &endpoints)
        .run_verify()
        .await;

    assert!(matches!(result, Err(Error::Config(_))));
    assert!(page.events().is_empty());
    assert!(transport.sent().is_empty());
}

#[tokio::test]
async fn test_add_empty_selection_is_a_no_op() {
    let transport = ScriptedTransport::new();
    let page = RecordingPage::new();
    let telemetry = RecordingTelemetry::new();
    let endpoints = endpoints();

    let outcome = BatchRunner::new(&transport, &page, &telemetry, &endpoints)
        .run_add(&[])
        .await
        .unwrap();

    assert_eq!(outcome, BatchOutcome::NothingSelected);
    assert!(page.events().is_empty());
    assert!(transport.sent().is_empty());
    assert!(telemetry.messages().is_empty());
}

#[tokio::test]
async fn test_add_all_succeed() {
    let transport = ScriptedTransport::new();
    let page = RecordingPage::new();
    let telemetry = RecordingTelemetry::new();
    let endpoints = endpoints();
    let (one, two) = (sample_record(1), sample_record(2));

    let outcome = BatchRunner::new(&transport, &page, &telemetry, &endpoints)
        .run_add(&[&one, &two])
        .await
        .unwrap();

    assert_eq!(outcome, BatchOutcome::Completed { total: 2 });
    assert_eq!(
        page.statuses(),
        vec![
            "Addtimestamp loading ...",
            "Adding Timestamp files : 1 / 2 ...",
            "Adding Timestamp files : 2 / 2 ...",
            "Added Timestamp (100%) and Refreshing...",
        ]
    );
    assert_eq!(page.reload_count(), 1);

    let sent = transport.sent();
    assert_eq!(
        sent[0].fields,
        vec![
            ("provider".to_string(), "osfstorage".to_string()),
            ("file_id".to_string(), "F1".to_string()),
            ("file_path".to_string(), "/data/file1.txt".to_string()),
            ("file_version".to_string(), "1".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_add_reports_every_failure() {
    let transport = ScriptedTransport::new()
        .fail("/data/file1.txt", "error", "Forbidden")
        .fail("/data/file3.txt", "error", "Forbidden");
    let page = RecordingPage::new();
    let telemetry = RecordingTelemetry::new();
    let endpoints = endpoints();
    let records = [sample_record(1), sample_record(2), sample_record(3)];
    let selected: Vec<_> = records.iter().collect();

    let outcome = BatchRunner::new(&transport, &page, &telemetry, &endpoints)
        .run_add(&selected)
        .await
        .unwrap();

    match outcome {
        BatchOutcome::Failed { file_path, counter } => {
            assert_eq!(file_path, "/data/file1.txt");
            assert_eq!((counter.success(), counter.fail()), (1, 2));
        }
        other => panic!("unexpected outcome: {:?}", other),
    }

    let messages: Vec<String> = telemetry.messages().into_iter().map(|(m, _)| m).collect();
    assert_eq!(
        messages,
        vec![
            "Timestamp Add Error: /data/file1.txt",
            "Timestamp Add Error: /data/file3.txt",
        ]
    );
    assert_eq!(transport.sent().len(), 3);
    assert_eq!(page.last_status().as_deref(), Some("Error : Timestamp Add Failed"));
    assert_eq!(page.controls_enabled(), Some(true));
    assert_eq!(page.reload_count(), 0);
}
