//! The CheckTime API client.
//!
//! [`ApiClient::submit`] issues one HTTP request and reduces whatever happens
//! to it into an [`Outcome`]. It never fails: transport errors, timeouts,
//! unexpected content types, malformed bodies and server-reported failures
//! all come back as `Outcome::Failure` carrying a normalized [`ApiResult`].
//! Exactly one notice is shown per call (success or error), through the
//! configured [`Notifier`].

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;
use url::Url;

use crate::error::CheckTimeResult;
use crate::i18n;
use crate::notify::{NoticeKind, Notifier, DEFAULT_NOTICE_DURATION};
use crate::request::{ApiRequest, Payload};
use crate::result::{ApiResult, Outcome};

/// Deadline for a whole request/response exchange.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Pause between a successful response carrying a `redirect_url` and the
/// navigation to it, so the success notice is seen first.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(1);

const TIMEOUT_MESSAGE: &str = "Request timed out";
const TIMEOUT_NOTICE: &str = "Request timed out. Please try again.";
const PARSE_ERROR_MESSAGE: &str = "Error parsing server response";
const CONNECT_ERROR_FALLBACK: &str = "An error occurred while connecting to the server";
const GENERIC_ERROR_FALLBACK: &str = "An error occurred";
const METHOD_NOT_ALLOWED_MESSAGE: &str =
    "405 Method Not Allowed - The requested method is not supported for this endpoint";

/// Follows `redirect_url` fields from successful responses.
///
/// The CLI opens the target in a browser; tests record it. Navigation happens
/// on a spawned task [`REDIRECT_DELAY`] after the response is handled.
pub trait Navigator: Send + Sync {
    fn navigate(&self, url: &str);
}

/// Notification text accompanying a [`submit`](ApiClient::submit) call.
#[derive(Debug, Clone, Default)]
pub struct ResponseOptions {
    /// Shown as a success notice when the call succeeds. No success notice is
    /// shown when this is absent.
    pub success_message: Option<String>,
    /// Shown as the error notice when the server reports a failure without
    /// its own `message`, and on transport failures.
    pub error_message: Option<String>,
}

impl ResponseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success_message(mut self, message: impl Into<String>) -> Self {
        self.success_message = Some(message.into());
        self
    }

    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }
}

/// HTTP client for a single CheckTime server.
///
/// Cheap to share by reference; each [`submit`](Self::submit) call owns its
/// own deadline and shares no state with concurrent calls.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    notifier: Arc<dyn Notifier>,
    navigator: Option<Arc<dyn Navigator>>,
    timeout: Duration,
}

impl ApiClient {
    pub fn new(base_url: &str, notifier: Arc<dyn Notifier>) -> CheckTimeResult<Self> {
        Ok(ApiClient {
            http: reqwest::Client::new(),
            base_url: Url::parse(base_url)?,
            notifier,
            navigator: None,
            timeout: REQUEST_TIMEOUT,
        })
    }

    pub fn with_navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    /// Override the request deadline. Mainly useful for tests.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The underlying HTTP client, for plain fetches that bypass the
    /// notification machinery (translation loads, silent lookups).
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Issue a request and reduce the outcome to an [`Outcome`].
    ///
    /// Every code path returns; nothing is propagated as an error. See the
    /// module docs for the classification rules.
    pub async fn submit(&self, request: ApiRequest, options: ResponseOptions) -> Outcome {
        let url = self.resolve_url(&request.url);
        tracing::debug!(method = %request.method, %url, "submitting request");

        let is_multipart = matches!(request.body, Some(Payload::Multipart(_)));

        let mut headers = HeaderMap::new();
        if !is_multipart {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        for (name, value) in &request.headers {
            match (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                // insert, not append: caller-supplied values win over the default
                (Ok(name), Ok(value)) => {
                    headers.insert(name, value);
                }
                _ => tracing::warn!(header = %name, "skipping invalid header"),
            }
        }

        let mut builder = self
            .http
            .request(request.method, url)
            .timeout(self.timeout)
            .headers(headers);

        builder = match request.body {
            // Serialized up front so the wire payload is exactly the JSON text
            Some(Payload::Json(value)) => builder.body(value.to_string()),
            Some(Payload::Multipart(form)) => builder.multipart(form),
            None => builder,
        };

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) if e.is_timeout() => return self.timed_out(),
            Err(e) => {
                tracing::error!(error = %e, "transport failure");
                let notice = options
                    .error_message
                    .as_deref()
                    .unwrap_or(CONNECT_ERROR_FALLBACK);
                self.notify_error(notice);
                return Outcome::Failure(ApiResult::failure(e.to_string()));
            }
        };

        self.interpret(response, options).await
    }

    /// Classify an HTTP response per the CheckTime wire contract.
    async fn interpret(&self, response: reqwest::Response, options: ResponseOptions) -> Outcome {
        let status = response.status();

        // No-content success carries nothing worth parsing
        if status == StatusCode::NO_CONTENT {
            if let Some(message) = &options.success_message {
                self.notify_success(message);
            }
            return Outcome::Success(ApiResult::ok());
        }

        // Hard error regardless of whatever body the server attached
        if status == StatusCode::METHOD_NOT_ALLOWED {
            tracing::error!("{}", METHOD_NOT_ALLOWED_MESSAGE);
            self.notify_error(METHOD_NOT_ALLOWED_MESSAGE);
            return Outcome::Failure(ApiResult::failure(METHOD_NOT_ALLOWED_MESSAGE));
        }

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.contains("application/json"))
            .unwrap_or(false);

        if !is_json {
            if !status.is_success() {
                let message = match status.canonical_reason() {
                    Some(reason) => format!("{} {}", status.as_u16(), reason),
                    None => status.as_u16().to_string(),
                };
                tracing::error!(status = status.as_u16(), "non-JSON error response");
                self.notify_error(&message);
                return Outcome::Failure(ApiResult::failure(message));
            }

            // Succeeding non-JSON response: nothing to pass through
            if let Some(message) = &options.success_message {
                self.notify_success(message);
            }
            return Outcome::Success(ApiResult::ok());
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) if e.is_timeout() => return self.timed_out(),
            Err(e) => {
                tracing::error!(error = %e, "failed to read response body");
                self.notify_error(PARSE_ERROR_MESSAGE);
                return Outcome::Failure(ApiResult::failure(PARSE_ERROR_MESSAGE));
            }
        };

        let data: ApiResult = match serde_json::from_str(&body) {
            Ok(data) => data,
            Err(e) => {
                tracing::error!(error = %e, "failed to parse response body");
                self.notify_error(PARSE_ERROR_MESSAGE);
                return Outcome::Failure(ApiResult::failure(PARSE_ERROR_MESSAGE));
            }
        };

        // Logical success mixes the HTTP status with the body's own marker:
        // a 2xx status is accepted even when the body carries no `success`
        // field at all.
        let logically_ok = status.is_success() && (data.success || status.as_u16() < 300);

        if logically_ok {
            if let Some(message) = &options.success_message {
                self.notify_success(message);
            }
            if let Some(target) = data.redirect_url.clone() {
                self.schedule_navigation(target);
            }
            let mut data = data;
            data.success = true;
            Outcome::Success(data)
        } else {
            let message = data
                .message
                .clone()
                .or(options.error_message)
                .unwrap_or_else(|| i18n::translate_or("error_operation", GENERIC_ERROR_FALLBACK));
            self.notify_error(&message);
            Outcome::Failure(data)
        }
    }

    fn timed_out(&self) -> Outcome {
        tracing::error!("request timed out after {:?}", self.timeout);
        self.notify_error(TIMEOUT_NOTICE);
        Outcome::Failure(ApiResult::failure(TIMEOUT_MESSAGE))
    }

    /// Navigate to `target` after [`REDIRECT_DELAY`], without blocking the
    /// caller. Dropped silently when no navigator is configured.
    fn schedule_navigation(&self, target: String) {
        let Some(navigator) = self.navigator.clone() else {
            tracing::debug!(%target, "no navigator configured, ignoring redirect");
            return;
        };
        tokio::spawn(async move {
            tokio::time::sleep(REDIRECT_DELAY).await;
            navigator.navigate(&target);
        });
    }

    fn notify_success(&self, message: &str) {
        self.notifier
            .notify(message, NoticeKind::Success, DEFAULT_NOTICE_DURATION);
    }

    fn notify_error(&self, message: &str) {
        self.notifier
            .notify(message, NoticeKind::Error, DEFAULT_NOTICE_DURATION);
    }

    /// Resolve a request URL against the base URL. Full URLs pass through;
    /// anything unjoinable is handed to the transport as-is so the failure
    /// surfaces through the normal error path.
    fn resolve_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        self.base_url
            .join(path)
            .map(|url| url.to_string())
            .unwrap_or_else(|_| path.to_string())
    }
}
