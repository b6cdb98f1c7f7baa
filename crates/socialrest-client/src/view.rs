//! Presentation adapter (loading / error / data).
//!
//! The dispatcher returns a `ResponseOutcome`; this adapter owns the display
//! transitions so the dispatcher stays free of rendering concerns.

use serde_json::Value;

use socialrest_core::protocol::ResponseOutcome;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ViewState {
    loading: bool,
    error: Option<String>,
    data: Option<Value>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the busy state: previous error and data are cleared.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
        self.data = None;
    }

    /// Leave the busy state with exactly one of error/data set.
    pub fn finish(&mut self, outcome: ResponseOutcome) {
        self.loading = false;
        match outcome {
            ResponseOutcome::Success(v) => self.data = Some(v),
            ResponseOutcome::Failure(m) => self.error = Some(m),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    pub fn render(&self) -> String {
        if self.loading {
            return "Loading...".to_string();
        }
        if let Some(e) = &self.error {
            return format!("Error: {e}");
        }
        match &self.data {
            Some(v) => {
                let pretty = serde_json::to_string_pretty(v).unwrap_or_else(|_| v.to_string());
                format!("Data:\n{pretty}")
            }
            None => String::new(),
        }
    }
}

pub fn auth_status_line(logged_in: bool) -> String {
    let status = if logged_in { "Logged In" } else { "Logged Out" };
    format!("Auth Status: {status}")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn begin_clears_previous_result() {
        let mut v = ViewState::new();
        v.finish(ResponseOutcome::Failure("REST API Error: boom".into()));
        v.begin();
        assert!(v.is_loading());
        assert!(v.error().is_none());
        assert_eq!(v.render(), "Loading...");
    }

    #[test]
    fn finish_sets_one_of_error_or_data() {
        let mut v = ViewState::new();
        v.begin();
        v.finish(ResponseOutcome::Success(json!({ "id": 1 })));
        assert!(!v.is_loading());
        assert!(v.error().is_none());
        assert_eq!(v.data(), Some(&json!({ "id": 1 })));
        assert!(v.render().starts_with("Data:\n{"));

        v.begin();
        v.finish(ResponseOutcome::Failure("REST API Error: HTTP Error: 404 - Not found".into()));
        assert!(v.data().is_none());
        assert_eq!(v.render(), "Error: REST API Error: HTTP Error: 404 - Not found");
    }

    #[test]
    fn auth_status() {
        assert_eq!(auth_status_line(true), "Auth Status: Logged In");
        assert_eq!(auth_status_line(false), "Auth Status: Logged Out");
    }
}
