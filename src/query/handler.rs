//! Query submission handler

use crate::api::QueryBackend;
use crate::query::form::{QueryForm, ResponseContent};

/// How a submission ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    /// Query was empty after trimming; nothing happened
    Skipped,
    /// Server answered and the answer is displayed
    Answered,
    /// Request failed and the inline error is displayed
    Failed,
}

/// Trim a raw query; `None` means there is nothing to submit
pub fn prepare_query(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Restores the idle affordances when dropped, so cleanup also runs when
/// the submission future is dropped mid-request or a panic unwinds.
struct SubmissionGuard<'a> {
    form: &'a mut QueryForm,
}

impl<'a> SubmissionGuard<'a> {
    fn begin(form: &'a mut QueryForm) -> Self {
        form.begin_submission();
        Self { form }
    }
}

impl Drop for SubmissionGuard<'_> {
    fn drop(&mut self) {
        self.form.end_submission();
    }
}

/// Submits queries to a backend and renders the outcome into a form
pub struct QueryHandler<B> {
    backend: B,
}

impl<B: QueryBackend> QueryHandler<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Ask the backend once and turn the result into display content
    pub async fn resolve(&self, query: &str) -> ResponseContent {
        match self.backend.ask(query).await {
            Ok(answer) => {
                tracing::info!(len = answer.len(), "query answered");
                ResponseContent::answer(answer)
            }
            Err(e) => {
                tracing::error!(error = %e.detail(), "query failed");
                ResponseContent::error(&e)
            }
        }
    }

    /// Run the whole flow against the form's current input
    pub async fn submit(&self, form: &mut QueryForm) -> SubmitStatus {
        let Some(query) = prepare_query(&form.input).map(str::to_owned) else {
            tracing::debug!("ignoring empty query");
            return SubmitStatus::Skipped;
        };

        let guard = SubmissionGuard::begin(form);
        let content = self.resolve(&query).await;
        let status = if content.is_error() {
            SubmitStatus::Failed
        } else {
            SubmitStatus::Answered
        };
        guard.form.show_content(content);

        status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::MockQueryBackend;
    use crate::error::TripMateError;
    use crate::query::form::SUBMIT_LABEL;

    fn assert_idle(form: &QueryForm) {
        assert!(form.submit_enabled());
        assert_eq!(form.submit_label(), SUBMIT_LABEL);
        assert!(!form.loading());
    }

    #[test]
    fn test_prepare_query() {
        assert_eq!(prepare_query("  Tokyo in April \n"), Some("Tokyo in April"));
        assert_eq!(prepare_query(""), None);
        assert_eq!(prepare_query(" \t\n "), None);
    }

    #[tokio::test]
    async fn test_whitespace_query_makes_no_call() {
        let mut backend = MockQueryBackend::new();
        backend.expect_ask().never();
        let handler = QueryHandler::new(backend);

        let mut form = QueryForm::with_input("   \t ");
        let before = form.clone();
        let status = handler.submit(&mut form).await;

        assert_eq!(status, SubmitStatus::Skipped);
        assert_eq!(form, before);
    }

    #[tokio::test]
    async fn test_trimmed_query_is_sent_once() {
        let mut backend = MockQueryBackend::new();
        backend
            .expect_ask()
            .withf(|query| query == "3 days in Kyoto")
            .times(1)
            .returning(|_| Ok("## Day 1\n\nFushimi Inari".to_string()));
        let handler = QueryHandler::new(backend);

        let mut form = QueryForm::with_input("  3 days in Kyoto  ");
        let status = handler.submit(&mut form).await;

        assert_eq!(status, SubmitStatus::Answered);
        assert!(form.results_visible());
        assert!(form.content().html().contains("<h2>Day 1</h2>"));
        assert_idle(&form);
    }

    #[tokio::test]
    async fn test_answer_is_sanitized() {
        let mut backend = MockQueryBackend::new();
        backend.expect_ask().times(1).returning(|_| {
            Ok("Pack light.\n\n<script>document.cookie</script>".to_string())
        });
        let handler = QueryHandler::new(backend);

        let mut form = QueryForm::with_input("packing list");
        handler.submit(&mut form).await;

        let html = form.content().html();
        assert!(html.contains("Pack light."));
        assert!(!html.contains("<script"));
        assert!(!html.contains("document.cookie"));
    }

    #[tokio::test]
    async fn test_server_error_is_shown_inline() {
        let mut backend = MockQueryBackend::new();
        backend
            .expect_ask()
            .times(1)
            .returning(|_| Err(TripMateError::RequestFailed("Server Error: 500".to_string())));
        let handler = QueryHandler::new(backend);

        let mut form = QueryForm::with_input("Paris");
        let status = handler.submit(&mut form).await;

        assert_eq!(status, SubmitStatus::Failed);
        assert!(form.results_visible());
        assert!(form.content().is_error());
        assert!(form.content().html().contains("Server Error: 500"));
        assert_idle(&form);
    }

    #[tokio::test]
    async fn test_resubmit_after_failure() {
        let mut backend = MockQueryBackend::new();
        let mut seq = mockall::Sequence::new();
        backend
            .expect_ask()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(TripMateError::RequestFailed("connection refused".to_string())));
        backend
            .expect_ask()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok("Welcome back".to_string()));
        let handler = QueryHandler::new(backend);

        let mut form = QueryForm::with_input("Oslo");
        assert_eq!(handler.submit(&mut form).await, SubmitStatus::Failed);
        assert_eq!(handler.submit(&mut form).await, SubmitStatus::Answered);
        assert!(!form.content().is_error());
        assert_idle(&form);
    }

    #[test]
    fn test_guard_restores_on_drop() {
        let mut form = QueryForm::with_input("Cairo");
        {
            let guard = SubmissionGuard::begin(&mut form);
            assert!(guard.form.loading());
        }
        assert_idle(&form);
    }
}
