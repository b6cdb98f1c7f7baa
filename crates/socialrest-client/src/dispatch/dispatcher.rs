use std::sync::Arc;

use serde_json::Value;
use tokio::sync::Mutex;

use socialrest_core::error::{Result, SocialRestError};
use socialrest_core::protocol::{classify, Classified, RequestDescriptor, ResponseOutcome, SessionToken};

use crate::context::SessionContext;
use crate::transport::{HttpRequest, HttpTransport, APPLICATION_JSON, AUTHORIZATION, CONTENT_TYPE};

/// Observable dispatcher state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchState {
    Idle,
    Busy,
}

/// Executes request descriptors against the API and applies login/logout
/// effects to the injected session.
///
/// Calls on one dispatcher are serialized: a second call waits for the first
/// to produce its outcome, so the token is never read and written by two
/// overlapping calls on the same instance.
pub struct RequestDispatcher {
    transport: Arc<dyn HttpTransport>,
    session: Arc<SessionContext>,
    gate: Mutex<()>,
}

impl RequestDispatcher {
    pub fn new(transport: Arc<dyn HttpTransport>, session: Arc<SessionContext>) -> Self {
        Self {
            transport,
            session,
            gate: Mutex::new(()),
        }
    }

    pub fn session(&self) -> Arc<SessionContext> {
        Arc::clone(&self.session)
    }

    pub fn state(&self) -> DispatchState {
        match self.gate.try_lock() {
            Ok(_) => DispatchState::Idle,
            Err(_) => DispatchState::Busy,
        }
    }

    /// Run one call and fold any error into a displayable failure.
    pub async fn dispatch(&self, desc: &RequestDescriptor) -> ResponseOutcome {
        let outcome = ResponseOutcome::from_result(self.execute(desc).await);
        if let ResponseOutcome::Failure(msg) = &outcome {
            tracing::warn!(method = %desc.method(), path = desc.path(), error = %msg, "REST call failed");
        }
        outcome
    }

    /// Run one call, keeping the error taxonomy.
    pub async fn execute(&self, desc: &RequestDescriptor) -> Result<Value> {
        let _busy = self.gate.lock().await;

        tracing::info!(method = %desc.method(), path = desc.path(), "sending REST request");

        let token = self.session.token();
        if desc.needs_credential() && token.is_none() {
            return Err(SocialRestError::MissingCredential);
        }

        let req = build_request(desc, token.as_ref())?;
        let resp = self.transport.send(req).await?;
        tracing::debug!(status = resp.status, bytes = resp.body.len(), "response received");

        let classified = classify(desc, resp.status, resp.reason.as_deref(), &resp.body)?;
        match &classified {
            Classified::Login { token, .. } => self.session.store(token.clone()),
            Classified::Logout(_) => self.session.clear(),
            Classified::Data(_) => {}
        }

        Ok(classified.into_payload())
    }
}

/// Build the wire request: JSON content type always, bearer header only for
/// auth-requiring calls with a held token, body only when present.
pub fn build_request(desc: &RequestDescriptor, token: Option<&SessionToken>) -> Result<HttpRequest> {
    let mut headers = vec![(CONTENT_TYPE, APPLICATION_JSON.to_string())];
    if desc.requires_auth() {
        if let Some(t) = token {
            headers.push((AUTHORIZATION, t.bearer()));
        }
    }

    let body = desc
        .body()
        .map(serde_json::to_string)
        .transpose()
        .map_err(|e| SocialRestError::Internal(format!("json encode failed: {e}")))?;

    Ok(HttpRequest {
        method: desc.method(),
        path: desc.path().to_string(),
        headers,
        body,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex as StdMutex;
    use std::time::Duration;

    use async_trait::async_trait;
    use bytes::Bytes;
    use serde_json::json;
    use tokio::sync::{Notify, Semaphore};

    use socialrest_core::error::ErrorKind;
    use socialrest_core::protocol::paths;
    use socialrest_core::protocol::Method;

    use super::*;
    use crate::transport::HttpResponse;

    /// Replays canned responses in order and records every request.
    struct RecordingTransport {
        replies: StdMutex<Vec<HttpResponse>>,
        seen: StdMutex<Vec<HttpRequest>>,
    }

    impl RecordingTransport {
        fn new(replies: Vec<(u16, &str)>) -> Arc<Self> {
            let replies = replies
                .into_iter()
                .rev()
                .map(|(status, body)| HttpResponse {
                    status,
                    reason: None,
                    body: Bytes::from(body.to_string()),
                })
                .collect();
            Arc::new(Self {
                replies: StdMutex::new(replies),
                seen: StdMutex::new(Vec::new()),
            })
        }

        fn seen(&self) -> Vec<HttpRequest> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl HttpTransport for RecordingTransport {
        async fn send(&self, req: HttpRequest) -> Result<HttpResponse> {
            self.seen.lock().unwrap().push(req);
            self.replies
                .lock()
                .unwrap()
                .pop()
                .ok_or_else(|| SocialRestError::Transport("no canned reply".into()))
        }
    }

    fn dispatcher(t: &Arc<RecordingTransport>) -> RequestDispatcher {
        RequestDispatcher::new(t.clone(), Arc::new(SessionContext::new()))
    }

    fn login() -> RequestDescriptor {
        RequestDescriptor::post(paths::LOGIN)
            .with_body(json!({ "email": "helena.hills@social.com", "password": "password789" }))
            .public()
            .login()
    }

    #[tokio::test]
    async fn protected_call_without_token_sends_nothing() {
        let t = RecordingTransport::new(vec![]);
        let d = dispatcher(&t);

        for desc in [
            RequestDescriptor::get(paths::ME),
            RequestDescriptor::post(paths::LOGOUT),
            RequestDescriptor::delete(paths::post(101)),
            RequestDescriptor::put(paths::comment(2)).with_body(json!({ "text": "x" })),
        ] {
            let err = d.execute(&desc).await.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MissingCredential);
        }
        assert!(t.seen().is_empty());
        assert_eq!(d.state(), DispatchState::Idle);
    }

    #[tokio::test]
    async fn login_token_is_attached_to_later_calls() {
        let t = RecordingTransport::new(vec![
            (200, r#"{"token":"abc","user":{"id":3}}"#),
            (200, r#"{"id":3,"username":"helena"}"#),
        ]);
        let d = dispatcher(&t);

        let out = d.dispatch(&login()).await;
        assert_eq!(
            out,
            ResponseOutcome::Success(json!({ "message": "Login successful!", "user": { "id": 3 } }))
        );
        assert!(d.session().is_logged_in());

        let out = d.dispatch(&RequestDescriptor::get(paths::ME)).await;
        assert_eq!(out.payload().unwrap()["username"], "helena");

        let seen = t.seen();
        assert_eq!(seen.len(), 2);
        assert!(seen[0].header(AUTHORIZATION).is_none());
        assert_eq!(seen[1].header(AUTHORIZATION), Some("Bearer abc"));
        assert_eq!(seen[1].header(CONTENT_TYPE), Some(APPLICATION_JSON));
    }

    #[tokio::test]
    async fn public_call_carries_no_bearer_even_when_logged_in() {
        let t = RecordingTransport::new(vec![(200, "[]")]);
        let d = dispatcher(&t);
        d.session().store(SessionToken::new("abc"));

        d.execute(&RequestDescriptor::get(paths::POSTS).public()).await.unwrap();

        let seen = t.seen();
        assert!(seen[0].header(AUTHORIZATION).is_none());
        assert_eq!(seen[0].header(CONTENT_TYPE), Some(APPLICATION_JSON));
        assert!(seen[0].body.is_none());
    }

    #[tokio::test]
    async fn body_is_serialized_json() {
        let t = RecordingTransport::new(vec![(201, r#"{"id":500}"#)]);
        let d = dispatcher(&t);
        d.session().store(SessionToken::new("abc"));

        let desc = RequestDescriptor::post(paths::GROUPS).with_body(json!({ "title": "g" }));
        d.execute(&desc).await.unwrap();

        let seen = t.seen();
        assert_eq!(seen[0].method, Method::Post);
        assert_eq!(seen[0].path, "/api/groups");
        let body: Value = serde_json::from_str(seen[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({ "title": "g" }));
    }

    #[tokio::test]
    async fn logout_clears_token_regardless_of_body() {
        let t = RecordingTransport::new(vec![(200, r#"{"bye":true}"#)]);
        let d = dispatcher(&t);
        d.session().store(SessionToken::new("abc"));

        let out = d.dispatch(&RequestDescriptor::post(paths::LOGOUT)).await;
        assert_eq!(
            out,
            ResponseOutcome::Success(json!({ "message": "Logout successful! Token cleared." }))
        );
        assert!(!d.session().is_logged_in());
        assert_eq!(t.seen()[0].header(AUTHORIZATION), Some("Bearer abc"));
    }

    #[tokio::test]
    async fn http_failure_is_reported_and_keeps_token() {
        let t = RecordingTransport::new(vec![(404, "Not found")]);
        let d = dispatcher(&t);
        d.session().store(SessionToken::new("abc"));

        let out = d.dispatch(&RequestDescriptor::delete(paths::post(9999))).await;
        let msg = out.failure_message().unwrap();
        assert!(msg.contains("404"));
        assert!(msg.contains("Not found"));
        assert!(d.session().is_logged_in());
        assert_eq!(d.state(), DispatchState::Idle);
    }

    #[tokio::test]
    async fn transport_failure_is_reported() {
        let t = RecordingTransport::new(vec![]);
        let d = dispatcher(&t);

        let err = d
            .execute(&RequestDescriptor::get(paths::GROUPS).public())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(t.seen().len(), 1);
    }

    #[tokio::test]
    async fn empty_success_body_yields_sentinel() {
        let t = RecordingTransport::new(vec![(200, "")]);
        let d = dispatcher(&t);
        d.session().store(SessionToken::new("abc"));

        let out = d.dispatch(&RequestDescriptor::post(paths::post_like(101))).await;
        assert_eq!(
            out,
            ResponseOutcome::Success(json!({ "message": "No content or successful operation." }))
        );
    }

    #[tokio::test]
    async fn auth_requiring_login_passes_check_without_token() {
        let t = RecordingTransport::new(vec![(200, r#"{"token":"abc"}"#)]);
        let d = dispatcher(&t);

        let desc = RequestDescriptor::post(paths::LOGIN).login();
        assert!(desc.requires_auth());
        d.execute(&desc).await.unwrap();

        let seen = t.seen();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].header(AUTHORIZATION).is_none());
        assert_eq!(d.session().token(), Some(SessionToken::new("abc")));
    }

    #[tokio::test]
    async fn auth_requiring_login_carries_held_token() {
        let t = RecordingTransport::new(vec![(200, r#"{"token":"fresh"}"#)]);
        let d = dispatcher(&t);
        d.session().store(SessionToken::new("stale"));

        d.execute(&RequestDescriptor::post(paths::LOGIN).login()).await.unwrap();

        assert_eq!(t.seen()[0].header(AUTHORIZATION), Some("Bearer stale"));
        assert_eq!(d.session().token(), Some(SessionToken::new("fresh")));
    }

    /// Holds every request until the test releases it, tracking overlap.
    struct GatedTransport {
        release: Semaphore,
        started: Notify,
        calls: AtomicUsize,
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
    }

    impl GatedTransport {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                release: Semaphore::new(0),
                started: Notify::new(),
                calls: AtomicUsize::new(0),
                in_flight: AtomicUsize::new(0),
                max_in_flight: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl HttpTransport for GatedTransport {
        async fn send(&self, _req: HttpRequest) -> Result<HttpResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);
            self.started.notify_one();

            self.release.acquire().await.unwrap().forget();

            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            Ok(HttpResponse {
                status: 200,
                reason: None,
                body: Bytes::from_static(b"[]"),
            })
        }
    }

    #[tokio::test]
    async fn overlapping_calls_are_serialized() {
        let t = GatedTransport::new();
        let d = Arc::new(RequestDispatcher::new(t.clone(), Arc::new(SessionContext::new())));
        let desc = RequestDescriptor::get(paths::POSTS).public();

        let first = tokio::spawn({
            let (d, desc) = (d.clone(), desc.clone());
            async move { d.execute(&desc).await }
        });
        t.started.notified().await;
        assert_eq!(d.state(), DispatchState::Busy);

        let second = tokio::spawn({
            let (d, desc) = (d.clone(), desc.clone());
            async move { d.execute(&desc).await }
        });
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(t.calls.load(Ordering::SeqCst), 1);

        t.release.add_permits(1);
        first.await.unwrap().unwrap();

        t.started.notified().await;
        assert_eq!(d.state(), DispatchState::Busy);
        t.release.add_permits(1);
        second.await.unwrap().unwrap();

        assert_eq!(t.calls.load(Ordering::SeqCst), 2);
        assert_eq!(t.max_in_flight.load(Ordering::SeqCst), 1);
        assert_eq!(d.state(), DispatchState::Idle);
    }
}
