//! HTTP transport seam.
//!
//! The dispatcher talks to an `HttpTransport`; production wiring uses
//! `ReqwestTransport`, tests can substitute a recording fake.

pub mod http;

use async_trait::async_trait;
use bytes::Bytes;

use socialrest_core::error::Result;
use socialrest_core::protocol::Method;

pub use http::ReqwestTransport;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const AUTHORIZATION: &str = "Authorization";
pub const APPLICATION_JSON: &str = "application/json";

/// Fully built request, ready for the wire.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    /// Path relative to the transport's base URL.
    pub path: String,
    pub headers: Vec<(&'static str, String)>,
    /// Serialized JSON; `None` sends no body at all.
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Raw response, before classification.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    /// Canonical reason phrase for `status`, if known.
    pub reason: Option<String>,
    pub body: Bytes,
}

#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse>;
}
