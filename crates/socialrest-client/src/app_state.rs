//! Shared application state for the socialrest client.
//!
//! Wires config, the session context, the transport, and the dispatcher so the
//! binary and integration tests run catalogued actions the same way.

use std::sync::Arc;

use socialrest_core::error::Result;
use socialrest_core::protocol::ResponseOutcome;

use crate::actions::{Action, ActionContext};
use crate::config::ClientConfig;
use crate::context::SessionContext;
use crate::dispatch::RequestDispatcher;
use crate::transport::{HttpTransport, ReqwestTransport};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    session: Arc<SessionContext>,
    dispatcher: Arc<RequestDispatcher>,
}

struct AppStateInner {
    cfg: ClientConfig,
}

impl AppState {
    /// Build application state with the reqwest transport from `cfg.client`.
    pub fn new(cfg: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::from_config(&cfg.client)?;
        tracing::debug!(base_url = transport.base_url(), "http transport ready");
        Ok(Self::with_transport(cfg, Arc::new(transport)))
    }

    pub fn with_transport(cfg: ClientConfig, transport: Arc<dyn HttpTransport>) -> Self {
        let session = Arc::new(SessionContext::new());
        let dispatcher = Arc::new(RequestDispatcher::new(transport, Arc::clone(&session)));

        Self {
            inner: Arc::new(AppStateInner { cfg }),
            session,
            dispatcher,
        }
    }

    pub fn cfg(&self) -> &ClientConfig {
        &self.inner.cfg
    }

    pub fn session(&self) -> Arc<SessionContext> {
        Arc::clone(&self.session)
    }

    pub fn dispatcher(&self) -> Arc<RequestDispatcher> {
        Arc::clone(&self.dispatcher)
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    /// Build the action's request from config fixtures and dispatch it.
    pub async fn run_action(&self, action: Action) -> ResponseOutcome {
        let cfg = self.cfg();
        let cx = ActionContext::new(&cfg.credentials, &cfg.fixtures);
        let desc = action.request(&cx);
        self.dispatcher.dispatch(&desc).await
    }
}
