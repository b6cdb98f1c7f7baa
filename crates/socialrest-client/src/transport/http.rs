//! reqwest-backed transport.
//!
//! No request timeout is installed; only an optional connect timeout from
//! config. Every reqwest failure maps to `SocialRestError::Transport`.

use std::time::Duration;

use async_trait::async_trait;

use socialrest_core::error::{Result, SocialRestError};
use socialrest_core::protocol::Method;

use crate::config::ClientSection;
use crate::transport::{HttpRequest, HttpResponse, HttpTransport};

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::build(base_url.into(), None)
    }

    pub fn from_config(cfg: &ClientSection) -> Result<Self> {
        let connect_timeout =
            (cfg.connect_timeout_ms > 0).then(|| Duration::from_millis(cfg.connect_timeout_ms));
        Self::build(cfg.base_url.clone(), connect_timeout)
    }

    fn build(base_url: String, connect_timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(t) = connect_timeout {
            builder = builder.connect_timeout(t);
        }
        let client = builder
            .build()
            .map_err(|e| SocialRestError::Internal(format!("http client build failed: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn to_reqwest(m: Method) -> reqwest::Method {
    match m {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse> {
        let url = format!("{}{}", self.base_url, req.path);

        let mut rb = self.client.request(to_reqwest(req.method), &url);
        for (name, value) in &req.headers {
            rb = rb.header(*name, value);
        }
        if let Some(body) = req.body {
            rb = rb.body(body);
        }

        let resp = rb
            .send()
            .await
            .map_err(|e| SocialRestError::Transport(format!("request to {url} failed: {e}")))?;

        let status = resp.status();
        let body = resp
            .bytes()
            .await
            .map_err(|e| SocialRestError::Transport(format!("reading response body failed: {e}")))?;

        Ok(HttpResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().map(str::to_string),
            body,
        })
    }
}
