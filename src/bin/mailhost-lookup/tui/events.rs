//! Terminal events and key mapping

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use mailhost_lookup::LookupReport;
use tokio::sync::mpsc;

/// Result of a lookup task: the report, or the error message to log.
pub type LookupOutcome = Result<LookupReport, String>;

#[derive(Debug, Clone)]
pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    LookupComplete(Box<LookupOutcome>),
    Resize(u16, u16),
}

/// Polls the terminal on a blocking thread and forwards events over a
/// channel, so the render loop never blocks on input.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
    tx: mpsc::UnboundedSender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let event_tx = tx.clone();

        tokio::task::spawn_blocking(move || {
            loop {
                let app_event = if event::poll(tick_rate).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key)) => AppEvent::Key(key),
                        Ok(Event::Resize(w, h)) => AppEvent::Resize(w, h),
                        _ => continue,
                    }
                } else {
                    AppEvent::Tick
                };
                // le récepteur a disparu : l'interface est fermée
                if event_tx.send(app_event).is_err() {
                    break;
                }
            }
        });

        Self { rx, tx }
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }

    /// Sender for lookup tasks reporting back to the UI.
    pub fn sender(&self) -> mpsc::UnboundedSender<AppEvent> {
        self.tx.clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Cancel,
    Enter,
    Tab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Backspace,
    Delete,
    Char(char),
    None,
}

fn is_quit_chord(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('q' | 'w' | 'c'))
}

impl KeyAction {
    /// Focus on the button: `q` quits.
    pub fn from_navigation(key: KeyEvent) -> Self {
        match key.code {
            _ if is_quit_chord(&key) => KeyAction::Quit,
            KeyCode::Char('q') if key.modifiers.is_empty() => KeyAction::Quit,
            KeyCode::Char(' ') => KeyAction::Enter,
            _ => Self::common(key),
        }
    }

    /// Focus on the text input: every printable character is typed.
    pub fn from_input(key: KeyEvent) -> Self {
        if is_quit_chord(&key) {
            return KeyAction::Quit;
        }
        Self::common(key)
    }

    fn common(key: KeyEvent) -> Self {
        match key.code {
            KeyCode::Esc => KeyAction::Cancel,
            KeyCode::Enter => KeyAction::Enter,
            KeyCode::Tab | KeyCode::BackTab => KeyAction::Tab,
            KeyCode::Up => KeyAction::Up,
            KeyCode::Down => KeyAction::Down,
            KeyCode::Left => KeyAction::Left,
            KeyCode::Right => KeyAction::Right,
            KeyCode::Home => KeyAction::Home,
            KeyCode::End => KeyAction::End,
            KeyCode::PageUp => KeyAction::PageUp,
            KeyCode::PageDown => KeyAction::PageDown,
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Delete => KeyAction::Delete,
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                KeyAction::Char(c)
            }
            _ => KeyAction::None,
        }
    }
}
