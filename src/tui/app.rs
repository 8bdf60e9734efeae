//! Main TUI application state and logic

use std::cell::Cell;
use std::io::{self, Stdout};
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use futures::FutureExt;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::api::{QueryBackend, TripMateClient};
use crate::error::{Result, TripMateError};
use crate::query::{prepare_query, QueryForm, QueryHandler, ResponseContent};
use crate::render::markdown_to_text;
use crate::tui::event::{is_help_key, is_quit_key, is_submit_key, AppEvent, EventHandler};
use crate::tui::theme::Theme;
use crate::tui::ui;

/// Lines moved by PageUp/PageDown in the results region
const PAGE_SCROLL: u16 = 10;

/// Message type for async operation results
#[derive(Debug)]
pub enum AsyncMessage {
    /// The in-flight query finished, successfully or not
    QueryResolved(ResponseContent),
}

/// Main TUI application
pub struct App<B = TripMateClient> {
    /// Whether the app is running
    pub running: bool,
    /// Query input and its affordances
    pub form: QueryForm,
    /// Cursor position in the input, in chars
    pub cursor: usize,
    /// Results region rendered for the terminal
    pub result_text: Text<'static>,
    /// First visible row of the results region
    pub result_scroll: u16,
    /// Inner area of the results region as last drawn
    pub results_viewport: Cell<Rect>,
    /// Status message to display
    pub status_message: Option<String>,
    /// Whether to show the help overlay
    pub show_help: bool,
    /// Tick counter for spinner animation
    pub tick_counter: u64,
    /// Endpoint shown in the header
    pub endpoint_label: String,

    // ─────────────────────────────────────────────────────────────────────────
    // Async communication
    // ─────────────────────────────────────────────────────────────────────────
    /// Sender for async messages (cloned into tasks)
    pub async_tx: mpsc::Sender<AsyncMessage>,
    /// Receiver for async messages
    pub async_rx: mpsc::Receiver<AsyncMessage>,

    handler: Arc<QueryHandler<B>>,
}

impl App<TripMateClient> {
    /// Create an app talking to a Trip Mate server
    pub fn new(client: TripMateClient) -> Self {
        let label = client.endpoint().to_string();
        Self::with_backend(client, label)
    }
}

impl<B: QueryBackend + 'static> App<B> {
    /// Create an app over any query backend
    pub fn with_backend(backend: B, endpoint_label: impl Into<String>) -> Self {
        let (async_tx, async_rx) = mpsc::channel(8);

        Self {
            running: true,
            form: QueryForm::default(),
            cursor: 0,
            result_text: Text::default(),
            result_scroll: 0,
            results_viewport: Cell::new(Rect::default()),
            status_message: None,
            show_help: false,
            tick_counter: 0,
            endpoint_label: endpoint_label.into(),
            async_tx,
            async_rx,
            handler: Arc::new(QueryHandler::new(backend)),
        }
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode().map_err(|e| TripMateError::Terminal(e.to_string()))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)
            .map_err(|e| TripMateError::Terminal(e.to_string()))?;
        let backend = CrosstermBackend::new(stdout);
        let terminal =
            Terminal::new(backend).map_err(|e| TripMateError::Terminal(e.to_string()))?;
        Ok(terminal)
    }

    /// Restore terminal to normal state
    fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode().map_err(|e| TripMateError::Terminal(e.to_string()))?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .map_err(|e| TripMateError::Terminal(e.to_string()))?;
        terminal
            .show_cursor()
            .map_err(|e| TripMateError::Terminal(e.to_string()))?;
        Ok(())
    }

    /// Run the TUI application
    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.event_loop(&mut terminal).await;
        Self::restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let mut events = EventHandler::new(Duration::from_millis(250));

        while self.running {
            terminal
                .draw(|frame| ui::render(frame, self))
                .map_err(|e| TripMateError::Terminal(e.to_string()))?;

            tokio::select! {
                Some(msg) = self.async_rx.recv() => self.handle_async_message(msg),
                event = events.next() => match event {
                    Some(AppEvent::Key(key)) => self.handle_key_event(key),
                    // Terminal resize is handled automatically by ratatui
                    Some(AppEvent::Resize(_, _)) => {}
                    Some(AppEvent::Tick) => {
                        self.tick_counter = self.tick_counter.wrapping_add(1);
                    }
                    None => self.running = false,
                },
            }
        }

        Ok(())
    }

    /// Handle async message from background tasks
    pub fn handle_async_message(&mut self, msg: AsyncMessage) {
        match msg {
            AsyncMessage::QueryResolved(content) => {
                self.result_text = content_to_text(&content);
                self.status_message = Some(match &content {
                    ResponseContent::Error { detail, .. } => format!(" Request failed: {}", detail),
                    _ => " Your trip plan is ready".to_string(),
                });
                self.form.show_content(content);
                self.form.end_submission();
                // Bring the new answer into view
                self.result_scroll = 0;
            }
        }
    }

    /// Handle a key press
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.show_help {
            if is_help_key(&key) || key.code == KeyCode::Esc {
                self.show_help = false;
            }
            return;
        }

        if is_quit_key(&key) {
            self.running = false;
            return;
        }

        if is_help_key(&key) {
            self.show_help = true;
            return;
        }

        if is_submit_key(&key) {
            self.submit_query();
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('u') if ctrl => {
                self.form.input.clear();
                self.cursor = 0;
            }
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.insert_char(c)
            }
            KeyCode::Backspace => self.delete_before_cursor(),
            KeyCode::Delete => self.delete_at_cursor(),
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.input_len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.input_len(),
            KeyCode::Up => self.scroll_up(1),
            KeyCode::Down => self.scroll_down(1),
            KeyCode::PageUp => self.scroll_up(PAGE_SCROLL),
            KeyCode::PageDown => self.scroll_down(PAGE_SCROLL),
            _ => {}
        }
    }

    /// Spawn a task that submits the current input
    pub fn submit_query(&mut self) {
        if !self.form.submit_enabled() {
            return; // Already in flight
        }

        let Some(query) = prepare_query(&self.form.input).map(str::to_owned) else {
            return;
        };

        self.form.begin_submission();
        self.status_message = Some(format!(" Planning: {}", truncate(&query, 60)));
        tracing::info!(query = %query, "submitting query");

        let handler = Arc::clone(&self.handler);
        let tx = self.async_tx.clone();

        tokio::spawn(async move {
            // A panic must still hand control back to the form
            let content = AssertUnwindSafe(handler.resolve(&query))
                .catch_unwind()
                .await
                .unwrap_or_else(|_| {
                    tracing::error!("query task panicked");
                    ResponseContent::error(&TripMateError::RequestFailed(
                        "internal error".to_string(),
                    ))
                });
            let _ = tx.send(AsyncMessage::QueryResolved(content)).await;
        });
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Input editing
    // ─────────────────────────────────────────────────────────────────────────

    fn input_len(&self) -> usize {
        self.form.input.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.form
            .input
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.form.input.len())
    }

    fn insert_char(&mut self, c: char) {
        let idx = self.byte_index(self.cursor);
        self.form.input.insert(idx, c);
        self.cursor += 1;
    }

    fn delete_before_cursor(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let idx = self.byte_index(self.cursor);
        self.form.input.remove(idx);
    }

    fn delete_at_cursor(&mut self) {
        if self.cursor < self.input_len() {
            let idx = self.byte_index(self.cursor);
            self.form.input.remove(idx);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Results scrolling
    // ─────────────────────────────────────────────────────────────────────────

    /// Results wrapped to the viewport width, as the region draws them
    pub fn results_paragraph(&self) -> Paragraph<'static> {
        Paragraph::new(self.result_text.clone()).wrap(Wrap { trim: false })
    }

    /// Last scroll offset that still fills the viewport
    fn max_scroll(&self) -> u16 {
        let viewport = self.results_viewport.get();
        let max = if viewport.width == 0 {
            // Not drawn yet, fall back to logical lines
            self.result_text.lines.len().saturating_sub(1)
        } else {
            self.results_paragraph()
                .line_count(viewport.width)
                .saturating_sub(usize::from(viewport.height.max(1)))
        };
        u16::try_from(max).unwrap_or(u16::MAX)
    }

    fn scroll_up(&mut self, lines: u16) {
        self.result_scroll = self.result_scroll.saturating_sub(lines);
    }

    fn scroll_down(&mut self, lines: u16) {
        self.result_scroll = self
            .result_scroll
            .saturating_add(lines)
            .min(self.max_scroll());
    }
}

/// Terminal rendering of the results region
fn content_to_text(content: &ResponseContent) -> Text<'static> {
    match content {
        ResponseContent::Empty => Text::default(),
        ResponseContent::Answer { markdown, .. } => markdown_to_text(markdown),
        ResponseContent::Error { message, .. } => {
            Text::from(Line::from(Span::styled(message.clone(), Theme::error())))
        }
    }
}

/// Truncate a string to max chars with ellipsis
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}
