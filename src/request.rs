//! Incoming HTTP request type.

use http::HeaderMap;

/// An incoming HTTP request as seen by an action.
///
/// Pages are served for `GET` only, so the body is never read; actions get
/// the request line and headers.
#[derive(Debug)]
pub struct Request {
    method: http::Method,
    path: String,
    headers: HeaderMap,
}

impl Request {
    /// Builds a request without headers. Mostly useful for calling actions
    /// directly in tests.
    pub fn new(method: http::Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), headers: HeaderMap::new() }
    }

    pub(crate) fn from_parts(parts: http::request::Parts) -> Self {
        Self {
            path: parts.uri.path().to_owned(),
            method: parts.method,
            headers: parts.headers,
        }
    }

    pub fn method(&self) -> &http::Method { &self.method }
    pub fn path(&self) -> &str { &self.path }

    /// Case-insensitive header lookup. Non-UTF-8 values are treated as absent.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}
