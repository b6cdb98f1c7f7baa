use std::sync::RwLock;

use socialrest_core::protocol::SessionToken;

/// In-memory holder of at most one live session token.
#[derive(Debug, Default)]
pub struct SessionContext {
    token: RwLock<Option<SessionToken>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            token: RwLock::new(None),
        }
    }

    pub fn token(&self) -> Option<SessionToken> {
        // A poisoned lock still holds a consistent Option; read through it.
        match self.token.read() {
            Ok(g) => g.clone(),
            Err(p) => p.into_inner().clone(),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        match self.token.read() {
            Ok(g) => g.is_some(),
            Err(p) => p.into_inner().is_some(),
        }
    }

    /// Replace any held token.
    pub fn store(&self, token: SessionToken) {
        let mut g = match self.token.write() {
            Ok(g) => g,
            Err(p) => p.into_inner(),
        };
        let replaced = g.replace(token).is_some();
        tracing::debug!(replaced, "session token stored");
    }

    pub fn clear(&self) {
        let mut g = match self.token.write() {
            Ok(g) => g,
            Err(p) => p.into_inner(),
        };
        let had = g.take().is_some();
        tracing::debug!(had, "session token cleared");
    }
}
