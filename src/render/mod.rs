//! Answer rendering
//!
//! Server answers are markdown. This module turns them into:
//! - sanitized HTML for the display region and `--format html`
//! - styled terminal text for the TUI and plain CLI output

pub mod html;
pub mod terminal;

pub use html::{error_html, error_message, markdown_to_safe_html};
pub use terminal::{markdown_to_text, text_to_plain};
