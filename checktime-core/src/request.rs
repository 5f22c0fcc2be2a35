//! Request descriptors accepted by [`ApiClient::submit`](crate::ApiClient::submit).

use std::collections::HashMap;

use reqwest::multipart::Form;
use reqwest::Method;
use serde::Serialize;

/// The body of an outgoing request.
pub enum Payload {
    /// A structured value, serialized to a JSON string before transmission.
    Json(serde_json::Value),
    /// A pre-built multipart form, transmitted as-is. The transport supplies
    /// the boundary content type, so the JSON default header is not applied.
    Multipart(Form),
}

/// Describes a single request: URL, verb, headers and optional body.
///
/// `url` may be a path relative to the client's base URL or a full
/// `http(s)://` URL. Caller-supplied headers win over the default
/// `Content-Type: application/json`.
pub struct ApiRequest {
    pub url: String,
    pub method: Method,
    pub headers: HashMap<String, String>,
    pub body: Option<Payload>,
}

impl ApiRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        ApiRequest {
            url: url.into(),
            method,
            headers: HashMap::new(),
            body: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::POST, url)
    }

    pub fn put(url: impl Into<String>) -> Self {
        Self::new(Method::PUT, url)
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::DELETE, url)
    }

    /// Attach a JSON body.
    ///
    /// Serialization of a plain data type cannot realistically fail; if it
    /// ever does the request is sent without a body and the server's
    /// rejection flows through the normal failure path.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(value) => self.body = Some(Payload::Json(value)),
            Err(e) => tracing::error!(error = %e, "failed to serialize request body"),
        }
        self
    }

    /// Attach a pre-built multipart form body.
    pub fn multipart(mut self, form: Form) -> Self {
        self.body = Some(Payload::Multipart(form));
        self
    }

    /// Set a header, overriding the default for that name.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}
