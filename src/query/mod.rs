//! Query submission
//!
//! The form state a user interacts with and the handler that submits a
//! query, renders the answer and restores the form afterwards.

pub mod form;
pub mod handler;

pub use form::{QueryForm, ResponseContent};
pub use handler::{prepare_query, QueryHandler, SubmitStatus};
