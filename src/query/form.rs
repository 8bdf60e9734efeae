//! Query form state
//!
//! Holds the query text plus every affordance the submission flow toggles:
//! the submit control (enabled flag and label), the loading indicator, and
//! the results region (visibility and content).

use crate::error::TripMateError;
use crate::render::{error_html, error_message, markdown_to_safe_html};

/// Submit label while idle
pub const SUBMIT_LABEL: &str = "Start Journey";

/// Submit label while a request is in flight
pub const BUSY_LABEL: &str = "Planning Trip...";

/// What the results region currently holds
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResponseContent {
    /// Nothing submitted yet
    #[default]
    Empty,
    /// Answer from the server
    Answer {
        /// Markup source as returned by the server
        markdown: String,
        /// Sanitized HTML rendering of `markdown`
        html: String,
    },
    /// Inline error shown in place of an answer
    Error {
        /// Short failure detail, e.g. `Server Error: 500`
        detail: String,
        /// Plain-text error sentence
        message: String,
        /// Escaped HTML paragraph carrying `message`
        html: String,
    },
}

impl ResponseContent {
    /// Build an answer from the server's markup
    pub fn answer(markdown: impl Into<String>) -> Self {
        let markdown = markdown.into();
        let html = markdown_to_safe_html(&markdown);
        ResponseContent::Answer { markdown, html }
    }

    /// Build the inline error for a failed request
    pub fn error(err: &TripMateError) -> Self {
        let detail = err.detail();
        ResponseContent::Error {
            message: error_message(&detail),
            html: error_html(&detail),
            detail,
        }
    }

    /// HTML for the display region (empty when nothing was submitted)
    pub fn html(&self) -> &str {
        match self {
            ResponseContent::Empty => "",
            ResponseContent::Answer { html, .. } | ResponseContent::Error { html, .. } => html,
        }
    }

    /// Whether this is an error region
    pub fn is_error(&self) -> bool {
        matches!(self, ResponseContent::Error { .. })
    }
}

/// The query input and its surrounding affordances
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryForm {
    /// Text typed into the query control
    pub input: String,
    submit_enabled: bool,
    submit_label: &'static str,
    loading: bool,
    results_visible: bool,
    content: ResponseContent,
}

impl Default for QueryForm {
    fn default() -> Self {
        Self {
            input: String::new(),
            submit_enabled: true,
            submit_label: SUBMIT_LABEL,
            loading: false,
            results_visible: false,
            content: ResponseContent::Empty,
        }
    }
}

impl QueryForm {
    /// Create an idle form with the given query text
    pub fn with_input(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    pub fn submit_label(&self) -> &'static str {
        self.submit_label
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    pub fn content(&self) -> &ResponseContent {
        &self.content
    }

    /// True while a request is in flight
    pub fn is_busy(&self) -> bool {
        !self.submit_enabled
    }

    /// Enter the in-flight state: control disabled, loader on, results hidden
    pub fn begin_submission(&mut self) {
        self.submit_enabled = false;
        self.submit_label = BUSY_LABEL;
        self.loading = true;
        self.results_visible = false;
    }

    /// Replace the results region content and reveal it
    pub fn show_content(&mut self, content: ResponseContent) {
        self.content = content;
        self.results_visible = true;
    }

    /// Restore the idle affordances. Content and visibility are left alone.
    pub fn end_submission(&mut self) {
        self.submit_enabled = true;
        self.submit_label = SUBMIT_LABEL;
        self.loading = false;
    }
}
