//! Markup to styled terminal text
//!
//! Walks pulldown-cmark events instead of emitting HTML. Raw HTML blocks and
//! inline tags are dropped, so nothing active ever reaches the terminal.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::prelude::*;

/// Width of the horizontal rule and code-block fences
const RULE_WIDTH: usize = 40;

/// Convert markdown string to styled ratatui Text
pub fn markdown_to_text(input: &str) -> Text<'static> {
    if input.trim().is_empty() {
        return Text::raw("(no content)");
    }

    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let mut writer = TextWriter::default();
    for event in Parser::new_ext(input, options) {
        writer.handle(event);
    }
    writer.finish()
}

/// Flatten styled text into plain lines (for piped CLI output)
pub fn text_to_plain(text: &Text<'_>) -> String {
    text.lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Accumulates lines while tracking nested inline styles and list state
#[derive(Default)]
struct TextWriter {
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    styles: Vec<Style>,
    /// One entry per open list: next number for ordered lists
    lists: Vec<Option<u64>>,
    quote_depth: usize,
    in_code_block: bool,
}

impl TextWriter {
    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => {
                if self.in_code_block {
                    self.push_code_block(&text);
                } else {
                    self.push_text(text.into_string());
                }
            }
            Event::Code(code) => {
                self.current.push(Span::styled(
                    code.into_string(),
                    Style::default().fg(Color::Green).bg(Color::Black),
                ));
            }
            Event::SoftBreak => self.push_text(" ".to_string()),
            Event::HardBreak => self.flush_line(),
            Event::Rule => {
                self.flush_line();
                self.lines.push(Line::from(Span::styled(
                    "─".repeat(RULE_WIDTH),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            Event::TaskListMarker(done) => {
                let marker = if done { "[x] " } else { "[ ] " };
                self.current
                    .push(Span::styled(marker, Style::default().fg(Color::Yellow)));
            }
            // Raw HTML, footnotes and math are not rendered
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Heading { level, .. } => {
                self.flush_line();
                self.styles.push(heading_style(level));
            }
            // Inside a list item the bullet is already on the current line
            Tag::Paragraph if !self.lists.is_empty() => {}
            Tag::Paragraph => self.flush_line(),
            Tag::BlockQuote { .. } => {
                self.flush_line();
                self.quote_depth += 1;
                self.styles.push(
                    Style::default()
                        .fg(Color::Gray)
                        .add_modifier(Modifier::ITALIC),
                );
            }
            Tag::CodeBlock(kind) => {
                self.flush_line();
                let lang = match kind {
                    pulldown_cmark::CodeBlockKind::Fenced(lang) => lang.into_string(),
                    pulldown_cmark::CodeBlockKind::Indented => String::new(),
                };
                let label = if lang.is_empty() {
                    "───── code ─────".to_string()
                } else {
                    format!("───── {} ─────", lang)
                };
                self.lines.push(Line::from(Span::styled(
                    label,
                    Style::default().fg(Color::DarkGray),
                )));
                self.in_code_block = true;
            }
            Tag::List(start) => {
                self.flush_line();
                self.lists.push(start);
            }
            Tag::Item => {
                self.flush_line();
                let indent = "  ".repeat(self.lists.len().max(1));
                let bullet = match self.lists.last_mut() {
                    Some(Some(n)) => {
                        let label = format!("{}{}. ", indent, n);
                        *n += 1;
                        label
                    }
                    _ => format!("{}• ", indent),
                };
                self.current
                    .push(Span::styled(bullet, Style::default().fg(Color::Yellow)));
            }
            Tag::Emphasis => self.push_modifier(Modifier::ITALIC),
            Tag::Strong => self.push_modifier(Modifier::BOLD),
            Tag::Strikethrough => self.push_modifier(Modifier::CROSSED_OUT),
            Tag::Link { .. } => {
                let style = self
                    .style()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::UNDERLINED);
                self.styles.push(style);
            }
            Tag::TableRow { .. } | Tag::TableHead { .. } => self.flush_line(),
            Tag::TableCell { .. } => {
                if !self.current.is_empty() {
                    self.current
                        .push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
                }
            }
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Heading { .. } => {
                self.flush_line();
                self.styles.pop();
            }
            TagEnd::Paragraph => {
                self.flush_line();
                if self.lists.is_empty() {
                    self.lines.push(Line::from(""));
                }
            }
            TagEnd::BlockQuote { .. } => {
                self.flush_line();
                self.quote_depth = self.quote_depth.saturating_sub(1);
                self.styles.pop();
            }
            TagEnd::CodeBlock { .. } => {
                self.in_code_block = false;
                self.lines.push(Line::from(Span::styled(
                    "─".repeat(16),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            TagEnd::List { .. } => {
                self.flush_line();
                self.lists.pop();
                if self.lists.is_empty() {
                    self.lines.push(Line::from(""));
                }
            }
            TagEnd::Item => self.flush_line(),
            TagEnd::Emphasis
            | TagEnd::Strong
            | TagEnd::Strikethrough
            | TagEnd::Link { .. } => {
                self.styles.pop();
            }
            TagEnd::TableHead { .. } | TagEnd::TableRow { .. } => self.flush_line(),
            TagEnd::Table { .. } => {
                self.flush_line();
                self.lines.push(Line::from(""));
            }
            _ => {}
        }
    }

    fn style(&self) -> Style {
        self.styles.last().copied().unwrap_or_default()
    }

    fn push_modifier(&mut self, modifier: Modifier) {
        let style = self.style().add_modifier(modifier);
        self.styles.push(style);
    }

    fn push_text(&mut self, text: String) {
        let style = self.style();
        self.current.push(Span::styled(text, style));
    }

    fn push_code_block(&mut self, text: &str) {
        for line in text.lines() {
            self.lines.push(Line::from(Span::styled(
                format!("  {}", line),
                Style::default().fg(Color::Green),
            )));
        }
    }

    fn flush_line(&mut self) {
        if self.current.is_empty() {
            return;
        }
        let mut spans = Vec::with_capacity(self.current.len() + 1);
        if self.quote_depth > 0 {
            spans.push(Span::styled(
                "│ ".repeat(self.quote_depth),
                Style::default().fg(Color::DarkGray),
            ));
        }
        spans.append(&mut self.current);
        self.lines.push(Line::from(spans));
    }

    fn finish(mut self) -> Text<'static> {
        self.flush_line();
        while self
            .lines
            .last()
            .is_some_and(|line| line.spans.iter().all(|s| s.content.is_empty()))
        {
            self.lines.pop();
        }
        if self.lines.is_empty() {
            return Text::raw("(no content)");
        }
        Text::from(self.lines)
    }
}

fn heading_style(level: HeadingLevel) -> Style {
    match level {
        HeadingLevel::H1 => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        HeadingLevel::H2 => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        _ => Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(md: &str) -> String {
        text_to_plain(&markdown_to_text(md))
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(plain("   \n"), "(no content)");
    }

    #[test]
    fn test_html_is_dropped() {
        let out = plain("Hello <b>there</b>\n\n<script>alert(1)</script>");
        assert!(!out.contains("<b>"));
        assert!(!out.contains("script"));
        assert!(out.contains("Hello"));
        assert!(out.contains("there"));
    }

    #[test]
    fn test_html_only_input_has_no_content() {
        assert_eq!(plain("<div></div>"), "(no content)");
    }

    #[test]
    fn test_lists_get_markers() {
        let out = plain("- Rome\n- Florence\n\n1. Fly\n2. Drive");
        assert!(out.contains("  • Rome"));
        assert!(out.contains("  • Florence"));
        assert!(out.contains("  1. Fly"));
        assert!(out.contains("  2. Drive"));
    }

    #[test]
    fn test_heading_is_styled() {
        let text = markdown_to_text("# Itinerary");
        let span = &text.lines[0].spans[0];
        assert_eq!(span.content, "Itinerary");
        assert!(span.style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(span.style.fg, Some(Color::Cyan));
    }

    #[test]
    fn test_link_shows_text_only() {
        let out = plain("[Hotel](https://example.com/hotel)");
        assert_eq!(out, "Hotel");
    }

    #[test]
    fn test_quote_is_prefixed() {
        let out = plain("> pack light");
        assert!(out.starts_with("│ pack light"));
    }

    #[test]
    fn test_code_block_is_fenced() {
        let out = plain("```text\nbudget = 1200\n```");
        assert!(out.contains("───── text ─────"));
        assert!(out.contains("  budget = 1200"));
    }
}
