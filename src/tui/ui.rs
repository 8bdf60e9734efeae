//! Main UI renderer

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::api::QueryBackend;
use crate::tui::app::App;
use crate::tui::theme::Theme;

const SPINNER: &[&str] = &["\u{25d0}", "\u{25d3}", "\u{25d1}", "\u{25d2}"]; // ◐ ◓ ◑ ◒

/// Render the UI
pub fn render<B: QueryBackend + 'static>(frame: &mut Frame, app: &App<B>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Query input
            Constraint::Length(1), // Submit control
            Constraint::Min(0),    // Results
            Constraint::Length(2), // Status bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0], app);
    render_input(frame, chunks[1], app);
    render_submit(frame, chunks[2], app);
    render_results(frame, chunks[3], app);
    render_status_bar(frame, chunks[4], app);

    if app.show_help {
        render_help_overlay(frame);
    }
}

/// Render the header
fn render_header<B>(frame: &mut Frame, area: Rect, app: &App<B>) {
    let title = format!(" Trip Mate │ {} ", app.endpoint_label);

    let header = Paragraph::new(title)
        .style(Theme::header())
        .block(Block::default().borders(Borders::BOTTOM));

    frame.render_widget(header, area);
}

/// Render the query input with a horizontally scrolled cursor
fn render_input<B>(frame: &mut Frame, area: Rect, app: &App<B>) {
    let inner_width = area.width.saturating_sub(2) as usize;
    let offset = input_scroll_offset(app.cursor, inner_width);

    let input = Paragraph::new(app.form.input.as_str())
        .scroll((0, u16::try_from(offset).unwrap_or(u16::MAX)))
        .block(
            Block::default()
                .title(" Where do you want to go? ")
                .borders(Borders::ALL)
                .border_style(Theme::normal()),
        );
    frame.render_widget(input, area);

    if !app.show_help {
        let x = area.x + 1 + u16::try_from(app.cursor - offset).unwrap_or(0);
        frame.set_cursor_position(Position::new(x, area.y + 1));
    }
}

/// First visible char so the cursor stays inside `width` columns
fn input_scroll_offset(cursor: usize, width: usize) -> usize {
    if width == 0 {
        return cursor;
    }
    (cursor + 1).saturating_sub(width)
}

/// Render the submit control and loading indicator
fn render_submit<B>(frame: &mut Frame, area: Rect, app: &App<B>) {
    let mut spans = vec![
        Span::raw(" "),
        Span::styled(
            format!(" {} ", app.form.submit_label()),
            Theme::button(app.form.submit_enabled()),
        ),
    ];

    if app.form.loading() {
        let frame_char = SPINNER[app.tick_counter as usize % SPINNER.len()];
        spans.push(Span::raw(" "));
        spans.push(Span::styled(frame_char, Theme::spinner()));
    } else {
        spans.push(Span::styled("  [Enter]", Theme::muted()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the results region, or a hint while it is hidden
fn render_results<B: QueryBackend + 'static>(frame: &mut Frame, area: Rect, app: &App<B>) {
    if !app.form.results_visible() {
        let hint = if app.form.loading() {
            "Planning your trip, this can take a moment..."
        } else {
            "Describe your trip and press Enter, e.g. \"5 days in Japan in spring, mid budget\""
        };
        let placeholder = Paragraph::new(hint)
            .style(Theme::muted())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).border_style(Theme::muted()));
        frame.render_widget(placeholder, area);
        return;
    }

    let is_error = app.form.content().is_error();
    let title = if is_error { " Error " } else { " Your Trip " };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Theme::result_border(is_error));
    app.results_viewport.set(block.inner(area));

    let results = app
        .results_paragraph()
        .scroll((app.result_scroll, 0))
        .block(block);
    frame.render_widget(results, area);
}

/// Render the status bar
fn render_status_bar<B>(frame: &mut Frame, area: Rect, app: &App<B>) {
    let status_text = app
        .status_message
        .clone()
        .unwrap_or_else(|| " [Enter] Submit │ [↑/↓] Scroll │ [F1] Help │ [Esc] Quit ".to_string());

    let status = Paragraph::new(status_text)
        .style(Theme::status_bar())
        .block(Block::default().borders(Borders::TOP));

    frame.render_widget(status, area);
}

/// Render the help overlay
fn render_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    let popup_width = (area.width * 60 / 100).min(56);
    let popup_height = (area.height * 70 / 100).min(13);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let keys = [
        ("Enter", "Submit the query"),
        ("← / →", "Move cursor"),
        ("Home / End", "Jump to start / end"),
        ("Ctrl+U", "Clear the query"),
        ("↑ / ↓", "Scroll results"),
        ("PgUp / PgDn", "Scroll results by page"),
        ("F1", "Toggle this help"),
        ("Esc / Ctrl+C", "Quit"),
    ];

    let text: Vec<Line> = keys
        .into_iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("  {:14}", key), Style::default().fg(Theme::PRIMARY)),
                Span::raw(desc),
            ])
        })
        .collect();

    let help = Paragraph::new(text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Theme::SECONDARY)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(help, popup_area);
}
