//! Backend API
//!
//! Every screen talks to the REST backend through the `Backend` trait.
//! `ApiClient` is the real implementation; it folds transport failures,
//! HTTP error statuses and `{ error: true }` envelopes into one `AppError`.
//! Typed endpoint wrappers live in the submodules, organized by resource.

mod auth;
mod campaign;
mod chat;
mod content;
mod declaration;
mod drug_request;
mod medication;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};

pub use auth::*;
pub use campaign::*;
pub use chat::*;
pub use content::*;
pub use declaration::*;
pub use drug_request::*;
pub use medication::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// Transport seam. Returns the envelope's `data` on success.
#[async_trait(?Send)]
pub trait Backend {
    async fn request(&self, method: HttpMethod, path: &str, body: Option<Value>) -> AppResult<Value>;
}

/// `{ error, message?, data }`
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    error: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Value,
}

/// Turn a raw status + body into the envelope's `data` or an `AppError`
pub fn parse_envelope(status: u16, body: &str) -> AppResult<Value> {
    let envelope = if body.trim().is_empty() {
        None
    } else {
        serde_json::from_str::<Envelope>(body).ok()
    };

    if !(200..300).contains(&status) {
        return Err(AppError::Http {
            status,
            message: envelope.and_then(|e| e.message),
        });
    }

    match envelope {
        Some(e) if e.error => Err(AppError::Backend { message: e.message }),
        Some(e) => Ok(e.data),
        None if body.trim().is_empty() => Ok(Value::Null),
        None => Err(AppError::Decode(format!("unexpected response body: {}", truncate(body, 120)))),
    }
}

/// Percent-encode a query-string value
pub fn encode_query(value: &str) -> String {
    percent_encoding::utf8_percent_encode(value, percent_encoding::NON_ALPHANUMERIC).to_string()
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

// ========================
// Typed helpers
// ========================

pub async fn get<T: DeserializeOwned, B: Backend + ?Sized>(backend: &B, path: &str) -> AppResult<T> {
    let data = backend.request(HttpMethod::Get, path, None).await?;
    Ok(serde_json::from_value(data)?)
}

pub async fn send<T: DeserializeOwned, B: Backend + ?Sized>(
    backend: &B,
    method: HttpMethod,
    path: &str,
    body: &impl Serialize,
) -> AppResult<T> {
    let body = serde_json::to_value(body)?;
    let data = backend.request(method, path, Some(body)).await?;
    Ok(serde_json::from_value(data)?)
}

/// Mutation whose response payload is not needed
pub async fn execute<B: Backend + ?Sized>(
    backend: &B,
    method: HttpMethod,
    path: &str,
    body: Option<Value>,
) -> AppResult<()> {
    backend.request(method, path, body).await.map(|_| ())
}

// ========================
// HTTP client
// ========================

pub struct ApiClient {
    http: reqwest::Client,
    config: AppConfig,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: AppConfig, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            token,
        }
    }

    fn method(method: HttpMethod) -> reqwest::Method {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

#[async_trait(?Send)]
impl Backend for ApiClient {
    async fn request(&self, method: HttpMethod, path: &str, body: Option<Value>) -> AppResult<Value> {
        let url = self.config.endpoint(path);
        log::debug!("{} {}", method.as_str(), url);

        let mut builder = self.http.request(Self::method(method), &url);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        let result = parse_envelope(status, &text);
        if let Err(e) = &result {
            log::warn!("{} {} failed: {}", method.as_str(), path, e);
        }
        result
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted in-memory backend for workflow tests

    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    #[derive(Debug, Clone, PartialEq)]
    pub struct Call {
        pub method: HttpMethod,
        pub path: String,
        pub body: Option<Value>,
    }

    #[derive(Default)]
    pub struct FakeBackend {
        pub calls: RefCell<Vec<Call>>,
        responses: RefCell<VecDeque<AppResult<Value>>>,
        /// Paths that always fail regardless of the script
        failing: RefCell<Vec<String>>,
    }

    impl FakeBackend {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(self, result: AppResult<Value>) -> Self {
            self.responses.borrow_mut().push_back(result);
            self
        }

        pub fn fail_path(self, path: &str) -> Self {
            self.failing.borrow_mut().push(path.to_string());
            self
        }

        pub fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }

        pub fn paths(&self) -> Vec<String> {
            self.calls.borrow().iter().map(|c| c.path.clone()).collect()
        }
    }

    #[async_trait(?Send)]
    impl Backend for FakeBackend {
        async fn request(&self, method: HttpMethod, path: &str, body: Option<Value>) -> AppResult<Value> {
            self.calls.borrow_mut().push(Call { method, path: path.to_string(), body });
            if self.failing.borrow().iter().any(|p| p == path) {
                return Err(AppError::Http { status: 500, message: Some("Lỗi máy chủ".into()) });
            }
            self.responses.borrow_mut().pop_front().unwrap_or(Ok(Value::Null))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_success_returns_data() {
        let data = parse_envelope(200, r#"{"error":false,"data":[{"id":1}]}"#).unwrap();
        assert_eq!(data, json!([{"id": 1}]));
    }

    #[test]
    fn test_envelope_error_flag_on_200() {
        let err = parse_envelope(200, r#"{"error":true,"message":"Không có quyền"}"#).unwrap_err();
        assert_eq!(err, AppError::Backend { message: Some("Không có quyền".into()) });
    }

    #[test]
    fn test_http_error_keeps_backend_message() {
        let err = parse_envelope(400, r#"{"error":true,"message":"Sai dữ liệu"}"#).unwrap_err();
        assert_eq!(err, AppError::Http { status: 400, message: Some("Sai dữ liệu".into()) });

        let err = parse_envelope(502, "<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(err, AppError::Http { status: 502, message: None });
    }

    #[test]
    fn test_encode_query() {
        assert_eq!(encode_query("abc-123"), "abc%2D123");
        assert_eq!(encode_query("a b&c"), "a%20b%26c");
    }

    #[test]
    fn test_empty_body_is_null_data() {
        assert_eq!(parse_envelope(204, "").unwrap(), Value::Null);
    }

    #[test]
    fn test_non_json_success_is_decode_error() {
        assert!(matches!(parse_envelope(200, "ok"), Err(AppError::Decode(_))));
    }

    #[tokio::test]
    async fn test_get_decodes_data() {
        let backend = testing::FakeBackend::new().respond(Ok(json!({"id": 3, "title": "Bài viết"})));
        let post: crate::models::BlogPost = get(&backend, "/blog/3").await.unwrap();
        assert_eq!(post.title, "Bài viết");
        assert_eq!(backend.paths(), vec!["/blog/3"]);
    }

    #[tokio::test]
    async fn test_get_shape_mismatch_is_decode_error() {
        let backend = testing::FakeBackend::new().respond(Ok(json!("not a list")));
        let result: AppResult<Vec<crate::models::BlogPost>> = get(&backend, "/blog").await;
        assert!(matches!(result, Err(AppError::Decode(_))));
    }

    #[tokio::test]
    async fn test_specialist_exams_listing() {
        let backend = testing::FakeBackend::new().respond(Ok(json!([
            {"id": 1, "name": "Răng hàm mặt"},
            {"id": 2, "name": "Mắt"}
        ])));
        let exams = list_specialist_exams(&backend).await.unwrap();
        assert_eq!(exams.len(), 2);
        assert_eq!(exams[1].name, "Mắt");
        assert_eq!(backend.paths(), vec!["/special-exam"]);
    }
}
