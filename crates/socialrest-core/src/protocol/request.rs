//! Request descriptor (one HTTP call, immutable once built).

use std::fmt;

use serde_json::Value;

/// HTTP methods the API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Description of one HTTP call.
///
/// Defaults: auth required, not a login request, no body. Fields are private so
/// a descriptor cannot be mutated after the call site hands it over.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    path: String,
    method: Method,
    body: Option<Value>,
    requires_auth: bool,
    is_login: bool,
}

impl RequestDescriptor {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method,
            body: None,
            requires_auth: true,
            is_login: false,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Attach a JSON body.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Mark the endpoint as public (no bearer header, no credential check).
    pub fn public(mut self) -> Self {
        self.requires_auth = false;
        self
    }

    /// Mark as the login call; the token in its response becomes the session token.
    ///
    /// Leaves `requires_auth` alone: a login call passes the credential check
    /// either way, and still carries a held token when it requires auth.
    pub fn login(mut self) -> Self {
        self.is_login = true;
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    pub fn requires_auth(&self) -> bool {
        self.requires_auth
    }

    pub fn is_login(&self) -> bool {
        self.is_login
    }

    /// True when the call must not be sent without a held token.
    pub fn needs_credential(&self) -> bool {
        self.requires_auth && !self.is_login
    }
}
