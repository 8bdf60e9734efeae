//! Event handling for TUI

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;
use tokio::time::interval;

/// Application events
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Keyboard event
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick event for spinner animation
    Tick,
}

/// Event handler for the TUI
pub struct EventHandler {
    rx: mpsc::Receiver<AppEvent>,
    /// Handle to the event task for cleanup
    _task: tokio::task::JoinHandle<()>,
}

impl EventHandler {
    /// Create a new event handler
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel(100);

        let task = tokio::spawn(async move {
            let mut tick_interval = interval(tick_rate);

            loop {
                tokio::select! {
                    _ = tick_interval.tick() => {
                        if tx.send(AppEvent::Tick).await.is_err() {
                            break;
                        }
                    }
                    result = tokio::task::spawn_blocking(|| {
                        event::poll(Duration::from_millis(50)).unwrap_or(false)
                    }) => {
                        // Only read if poll() returned true (event is ready)
                        if !result.unwrap_or(false) {
                            continue;
                        }
                        let app_event = match event::read() {
                            // Release/repeat events would double every keystroke on Windows
                            Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                                Some(AppEvent::Key(key))
                            }
                            Ok(CrosstermEvent::Resize(w, h)) => Some(AppEvent::Resize(w, h)),
                            Ok(_) => None,
                            Err(e) => {
                                tracing::warn!(error = %e, "failed to read terminal event");
                                None
                            }
                        };

                        if let Some(event) = app_event {
                            if tx.send(event).await.is_err() {
                                break;
                            }
                        }
                    }
                }
            }
        });

        Self { rx, _task: task }
    }

    /// Get the next event
    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }
}

/// Quit keys. Plain letters are query text, so only Esc and Ctrl+C quit.
pub fn is_quit_key(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Esc,
            ..
        } | KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        }
    )
}

/// Help toggle key
pub fn is_help_key(key: &KeyEvent) -> bool {
    key.code == KeyCode::F(1)
}

/// Key that submits the query
pub fn is_submit_key(key: &KeyEvent) -> bool {
    key.code == KeyCode::Enter && !key.modifiers.contains(KeyModifiers::ALT)
}
