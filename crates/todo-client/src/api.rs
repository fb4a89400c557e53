//! Blocking HTTP transport for the REST API.

use serde::de::DeserializeOwned;
use thiserror::Error;
use todo_domain::{NewTodo, Todo, TodoPatch};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

/// The four REST calls. A trait so the view can be driven by a fake in
/// tests.
pub trait TodoApi {
    fn fetch(&self) -> Result<Vec<Todo>, ApiError>;
    fn create(&self, new: &NewTodo) -> Result<Todo, ApiError>;
    fn update(&self, id: &str, patch: &TodoPatch) -> Result<Todo, ApiError>;
    fn delete(&self, id: &str) -> Result<Todo, ApiError>;
}

pub struct HttpTodoApi {
    base_url: String,
}

impl HttpTodoApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Base URL from `TODO_API_URL`, falling back to localhost.
    pub fn from_env() -> Self {
        let base = std::env::var("TODO_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn decode<T: DeserializeOwned>(resp: ureq::Response) -> Result<T, ApiError> {
        resp.into_json().map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl TodoApi for HttpTodoApi {
    fn fetch(&self) -> Result<Vec<Todo>, ApiError> {
        let resp = ureq::get(&self.url("/todos")).call().map_err(into_api_error)?;
        Self::decode(resp)
    }

    fn create(&self, new: &NewTodo) -> Result<Todo, ApiError> {
        let resp = ureq::post(&self.url("/todos"))
            .send_json(new)
            .map_err(into_api_error)?;
        Self::decode(resp)
    }

    fn update(&self, id: &str, patch: &TodoPatch) -> Result<Todo, ApiError> {
        let resp = ureq::put(&self.url(&format!("/todos/{id}")))
            .send_json(patch)
            .map_err(into_api_error)?;
        Self::decode(resp)
    }

    fn delete(&self, id: &str) -> Result<Todo, ApiError> {
        let resp = ureq::delete(&self.url(&format!("/todos/{id}")))
            .call()
            .map_err(into_api_error)?;
        Self::decode(resp)
    }
}

fn into_api_error(e: ureq::Error) -> ApiError {
    match e {
        ureq::Error::Status(status, resp) => {
            // The server answers errors as {"error": "..."}.
            let message = resp
                .into_json::<serde_json::Value>()
                .ok()
                .and_then(|v| v["error"].as_str().map(str::to_string))
                .unwrap_or_else(|| "request rejected".to_string());
            ApiError::Status { status, message }
        }
        ureq::Error::Transport(t) => ApiError::Transport(t.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed_from_base_url() {
        let api = HttpTodoApi::new("http://example.com/");
        assert_eq!(api.base_url(), "http://example.com");
        assert_eq!(api.url("/todos"), "http://example.com/todos");
    }

    #[test]
    fn not_found_predicate_matches_only_404() {
        let nf = ApiError::Status { status: 404, message: "not found".into() };
        let bad = ApiError::Status { status: 400, message: "bad request".into() };
        assert!(nf.is_not_found());
        assert!(!bad.is_not_found());
        assert!(!ApiError::Transport("connection refused".into()).is_not_found());
    }
}
