//! Markup to sanitized HTML

use std::iter;

use pulldown_cmark::{html, Event, Options, Parser};

/// Markdown extensions the server's answers rely on (itineraries use tables
/// and checklists)
fn markdown_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
}

/// Convert markdown to HTML. The result is NOT safe to display.
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, markdown_options());
    let mut output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}

/// Strip scripts, event handlers and unsafe URLs from HTML.
///
/// Checklist boxes survive with their checked state, always disabled.
pub fn sanitize(html: &str) -> String {
    ammonia::Builder::default()
        .add_tags(&["input"])
        .add_tag_attributes("input", &["type", "checked"])
        .set_tag_attribute_value("input", "disabled", "")
        .clean(html)
        .to_string()
}

/// Convert markdown to HTML that is safe to inject into a page
pub fn markdown_to_safe_html(markdown: &str) -> String {
    sanitize(&markdown_to_html(markdown))
}

/// The user-visible failure sentence shown in place of an answer
pub fn error_message(detail: &str) -> String {
    format!("⚠️ Something went wrong: {}. Please try again.", detail)
}

/// Inline error paragraph for the display region, with the detail escaped
pub fn error_html(detail: &str) -> String {
    let mut escaped = String::new();
    html::push_html(&mut escaped, iter::once(Event::Text(error_message(detail).into())));
    format!(r#"<p class="error">{}</p>"#, escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_is_converted() {
        let html = markdown_to_safe_html("# Day 1\n\nVisit **Colosseum**");
        assert!(html.contains("<h1>Day 1</h1>"));
        assert!(html.contains("<strong>Colosseum</strong>"));
    }

    #[test]
    fn test_script_tags_are_stripped() {
        let html = markdown_to_safe_html("Hello\n\n<script>alert('x')</script>\n\nBye");
        assert!(!html.contains("<script"));
        assert!(!html.contains("alert"));
        assert!(html.contains("Hello"));
        assert!(html.contains("Bye"));
    }

    #[test]
    fn test_event_handlers_are_stripped() {
        let html = markdown_to_safe_html(r#"<img src="x.png" onerror="alert(1)">"#);
        assert!(!html.contains("onerror"));
    }

    #[test]
    fn test_javascript_links_are_stripped() {
        let html = markdown_to_safe_html("[book now](javascript:alert(1))");
        assert!(!html.contains("javascript:"));
        assert!(html.contains("book now"));
    }

    #[test]
    fn test_tables_are_rendered() {
        let html = markdown_to_safe_html("| Day | City |\n|---|---|\n| 1 | Rome |");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>Rome</td>"));
    }

    #[test]
    fn test_checklist_state_survives() {
        let html = markdown_to_safe_html("- [x] book flight\n- [ ] book hotel");
        assert_eq!(html.matches("<input").count(), 2);
        assert_eq!(html.matches("checked").count(), 1);
        assert!(html.contains("disabled"));
        assert!(html.contains("book flight"));
    }

    #[test]
    fn test_raw_inputs_cannot_submit_or_script() {
        let html = sanitize(r#"<input type="text" name="card" onfocus="alert(1)">"#);
        assert!(!html.contains("onfocus"));
        assert!(!html.contains("name="));
        assert!(html.contains("disabled"));
    }

    #[test]
    fn test_error_html_contains_detail() {
        let html = error_html("Server Error: 500");
        assert!(html.starts_with(r#"<p class="error">"#));
        assert!(html.contains("Something went wrong: Server Error: 500. Please try again."));
    }

    #[test]
    fn test_error_html_escapes_detail() {
        let html = error_html("<b>boom</b>");
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;b&gt;"));
    }
}
