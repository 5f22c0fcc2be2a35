use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use checktime_core::{
    ApiClient, ApiRequest, Navigator, NoticeKind, Notifier, Outcome, Payload, ResponseOptions,
};

#[derive(Default)]
struct RecordingNotifier {
    notices: Mutex<Vec<(String, NoticeKind)>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, kind: NoticeKind, _duration: Duration) {
        self.notices
            .lock()
            .unwrap()
            .push((message.to_string(), kind));
    }
}

impl RecordingNotifier {
    fn notices(&self) -> Vec<(String, NoticeKind)> {
        self.notices.lock().unwrap().clone()
    }
}

#[derive(Default)]
struct RecordingNavigator {
    targets: Mutex<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, url: &str) {
        self.targets.lock().unwrap().push(url.to_string());
    }
}

fn client_for(uri: &str) -> (ApiClient, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let client = ApiClient::new(uri, notifier.clone()).unwrap();
    (client, notifier)
}

#[tokio::test]
async fn test_json_body_and_default_content_type() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/overrides"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"date": "2024-01-05", "is_day_off": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let (client, notifier) = client_for(&server.uri());
    let outcome = client
        .submit(
            ApiRequest::post("/api/overrides").json(&json!({"date": "2024-01-05", "is_day_off": true})),
            ResponseOptions::new().success_message("Saved"),
        )
        .await;

    assert!(outcome.is_success());
    assert!(outcome.result().success);
    assert_eq!(
        notifier.notices(),
        vec![("Saved".to_string(), NoticeKind::Success)]
    );
}

#[tokio::test]
async fn test_caller_header_overrides_default() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/upload"))
        .and(header("content-type", "application/vnd.checktime+json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _notifier) = client_for(&server.uri());
    let outcome = client
        .submit(
            ApiRequest::post("/upload")
                .header("Content-Type", "application/vnd.checktime+json")
                .json(&json!({"x": 1})),
            ResponseOptions::new(),
        )
        .await;

    assert!(outcome.is_success());
}

#[tokio::test]
async fn test_error_body_message_wins_over_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/overrides"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "success": false,
            "message": "already exists"
        })))
        .mount(&server)
        .await;

    let (client, notifier) = client_for(&server.uri());
    let outcome = client
        .submit(
            ApiRequest::post("/api/overrides").json(&json!({"date": "2024-01-05"})),
            ResponseOptions::new()
                .success_message("Saved")
                .error_message("could not save"),
        )
        .await;

    match outcome {
        Outcome::Failure(result) => {
            assert!(!result.success);
            assert_eq!(result.message.as_deref(), Some("already exists"));
        }
        Outcome::Success(_) => panic!("409 must not be a success"),
    }
    assert_eq!(
        notifier.notices(),
        vec![("already exists".to_string(), NoticeKind::Error)]
    );
}

#[tokio::test]
async fn test_error_without_body_message_uses_option() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/holidays/api/delete/2024-01-05"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"success": false})))
        .mount(&server)
        .await;

    let (client, notifier) = client_for(&server.uri());
    let outcome = client
        .submit(
            ApiRequest::delete("/holidays/api/delete/2024-01-05"),
            ResponseOptions::new().error_message("could not delete"),
        )
        .await;

    assert!(!outcome.is_success());
    assert_eq!(
        notifier.notices(),
        vec![("could not delete".to_string(), NoticeKind::Error)]
    );
}

#[tokio::test]
async fn test_no_content_is_success_without_parsing() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/overrides/2024-01-05"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let (client, notifier) = client_for(&server.uri());
    let outcome = client
        .submit(
            ApiRequest::delete("/api/overrides/2024-01-05"),
            ResponseOptions::new().success_message("Deleted"),
        )
        .await;

    assert!(outcome.is_success());
    assert!(outcome.result().success);
    assert_eq!(
        notifier.notices(),
        vec![("Deleted".to_string(), NoticeKind::Success)]
    );
}

#[tokio::test]
async fn test_method_not_allowed_is_hard_error() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/holidays/api/add"))
        .respond_with(ResponseTemplate::new(405).set_body_string("<html>nope</html>"))
        .mount(&server)
        .await;

    let (client, notifier) = client_for(&server.uri());
    let outcome = client
        .submit(
            ApiRequest::put("/holidays/api/add").json(&json!({})),
            ResponseOptions::new().success_message("Saved"),
        )
        .await;

    match outcome {
        Outcome::Failure(result) => {
            let message = result.message.unwrap();
            assert!(message.contains("405"), "message was: {message}");
        }
        Outcome::Success(_) => panic!("405 must not be a success"),
    }

    let notices = notifier.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].1, NoticeKind::Error);
    assert!(notices[0].0.contains("405"));
}

#[tokio::test]
async fn test_non_json_error_uses_status_line() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(
            ResponseTemplate::new(500)
                .insert_header("content-type", "text/plain")
                .set_body_string("boom"),
        )
        .mount(&server)
        .await;

    let (client, notifier) = client_for(&server.uri());
    let outcome = client
        .submit(ApiRequest::get("/broken"), ResponseOptions::new())
        .await;

    match outcome {
        Outcome::Failure(result) => {
            assert_eq!(result.message.as_deref(), Some("500 Internal Server Error"));
        }
        Outcome::Success(_) => panic!("500 must not be a success"),
    }
    assert_eq!(
        notifier.notices(),
        vec![("500 Internal Server Error".to_string(), NoticeKind::Error)]
    );
}

#[tokio::test]
async fn test_non_json_success_is_quiet_without_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/partial"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html")
                .set_body_string("<div>calendar</div>"),
        )
        .mount(&server)
        .await;

    let (client, notifier) = client_for(&server.uri());
    let outcome = client
        .submit(ApiRequest::get("/partial"), ResponseOptions::new())
        .await;

    assert!(outcome.is_success());
    assert!(notifier.notices().is_empty());
}

#[tokio::test]
async fn test_malformed_json_body_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/garbled"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("{not json", "application/json"),
        )
        .mount(&server)
        .await;

    let (client, notifier) = client_for(&server.uri());
    let outcome = client
        .submit(ApiRequest::get("/garbled"), ResponseOptions::new())
        .await;

    match outcome {
        Outcome::Failure(result) => {
            assert_eq!(
                result.message.as_deref(),
                Some("Error parsing server response")
            );
        }
        Outcome::Success(_) => panic!("malformed body must not be a success"),
    }
    assert_eq!(notifier.notices().len(), 1);
}

#[tokio::test]
async fn test_timeout_produces_failure_not_panic() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": true}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let notifier = Arc::new(RecordingNotifier::default());
    let client = ApiClient::new(&server.uri(), notifier.clone())
        .unwrap()
        .with_timeout(Duration::from_millis(250));

    let outcome = client
        .submit(ApiRequest::get("/slow"), ResponseOptions::new())
        .await;

    match outcome {
        Outcome::Failure(result) => {
            assert_eq!(result.message.as_deref(), Some("Request timed out"));
        }
        Outcome::Success(_) => panic!("timed-out request must not be a success"),
    }
    assert_eq!(
        notifier.notices(),
        vec![(
            "Request timed out. Please try again.".to_string(),
            NoticeKind::Error
        )]
    );
}

#[tokio::test]
async fn test_connection_refused_is_transport_failure() {
    // Port 1 is never listening
    let (client, notifier) = client_for("http://127.0.0.1:1");

    let outcome = client
        .submit(
            ApiRequest::get("/anything"),
            ResponseOptions::new().error_message("server unreachable"),
        )
        .await;

    match outcome {
        Outcome::Failure(result) => {
            assert!(!result.success);
            assert!(result.message.is_some());
        }
        Outcome::Success(_) => panic!("refused connection must not be a success"),
    }
    assert_eq!(
        notifier.notices(),
        vec![("server unreachable".to_string(), NoticeKind::Error)]
    );
}

#[tokio::test]
async fn test_redirect_fires_after_delay_not_before() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "redirect_url": "/x"
        })))
        .mount(&server)
        .await;

    let navigator = Arc::new(RecordingNavigator::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let client = ApiClient::new(&server.uri(), notifier)
        .unwrap()
        .with_navigator(navigator.clone());

    let outcome = client
        .submit(
            ApiRequest::post("/login").json(&json!({"user": "admin"})),
            ResponseOptions::new(),
        )
        .await;

    // The outcome arrives immediately, before any navigation
    assert!(outcome.is_success());
    assert!(navigator.targets.lock().unwrap().is_empty());

    tokio::time::sleep(Duration::from_millis(700)).await;
    assert!(navigator.targets.lock().unwrap().is_empty());

    tokio::time::sleep(Duration::from_millis(600)).await;
    assert_eq!(*navigator.targets.lock().unwrap(), vec!["/x".to_string()]);
}

#[tokio::test]
async fn test_extra_fields_pass_through() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/schedules/api/add"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "period": {
                "id": 7,
                "name": "Summer",
                "start_date": "2024-06-01",
                "end_date": "2024-08-31",
                "is_active": true
            }
        })))
        .mount(&server)
        .await;

    let (client, _notifier) = client_for(&server.uri());
    let outcome = client
        .submit(
            ApiRequest::post("/schedules/api/add").json(&json!({"name": "Summer"})),
            ResponseOptions::new(),
        )
        .await;

    let period: serde_json::Value = outcome.result().field("period").unwrap();
    assert_eq!(period["id"], 7);
    assert_eq!(period["name"], "Summer");
}

struct MultipartContentType;

impl wiremock::Match for MultipartContentType {
    fn matches(&self, request: &wiremock::Request) -> bool {
        request
            .headers
            .get("content-type")
            .and_then(|value| value.to_str().ok())
            .map(|value| value.starts_with("multipart/form-data"))
            .unwrap_or(false)
    }
}

#[tokio::test]
async fn test_multipart_body_keeps_form_content_type() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/import"))
        .and(MultipartContentType)
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let form = reqwest::multipart::Form::new().text("description", "imported holidays");
    let (client, _notifier) = client_for(&server.uri());

    let request = ApiRequest::post("/import").multipart(form);
    assert!(matches!(request.body, Some(Payload::Multipart(_))));

    let outcome = client.submit(request, ResponseOptions::new()).await;
    assert!(outcome.is_success());
}
