//! TUI state and event loop

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use mailhost_lookup::{InputMode, LookupOptions, lookup_with_options, validate_with_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use super::events::{AppEvent, EventHandler, KeyAction, LookupOutcome};
use super::input::InputState;
use super::log::{LogKind, OutputLog};
use crate::output::render_human;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Button,
}

pub struct App {
    pub input: InputState,
    pub focus: Focus,
    pub log: OutputLog,
    pub mode: InputMode,
    pub options: LookupOptions,
    /// Token of the lookup in flight, if any.
    pub pending: Option<CancellationToken>,
    pub spinner: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(mode: InputMode, options: LookupOptions) -> Self {
        let mut input = InputState::default().with_placeholder("user@example.com");
        input.focused = true;
        Self {
            input,
            focus: Focus::Input,
            log: OutputLog::default(),
            mode,
            options,
            pending: None,
            spinner: 0,
            should_quit: false,
        }
    }

    pub fn is_input_mode(&self) -> bool {
        self.focus == Focus::Input
    }

    pub fn handle_key(&mut self, action: KeyAction, event_tx: &mpsc::UnboundedSender<AppEvent>) {
        match action {
            KeyAction::Quit => {
                self.cancel_lookup();
                self.should_quit = true;
            }
            KeyAction::Cancel => self.cancel_lookup(),
            KeyAction::Tab => self.toggle_focus(),
            KeyAction::Enter => self.start_lookup(event_tx),
            KeyAction::Up => self.log.scroll_up(1),
            KeyAction::Down => self.log.scroll_down(1),
            KeyAction::PageUp => self.log.scroll_up(10),
            KeyAction::PageDown => self.log.scroll_down(10),
            _ if self.focus == Focus::Input => self.edit(action),
            _ => {}
        }
    }

    fn edit(&mut self, action: KeyAction) {
        match action {
            KeyAction::Char(c) => self.input.insert(c),
            KeyAction::Backspace => self.input.delete_backward(),
            KeyAction::Delete => self.input.delete_forward(),
            KeyAction::Left => self.input.move_left(),
            KeyAction::Right => self.input.move_right(),
            KeyAction::Home => self.input.move_home(),
            KeyAction::End => self.input.move_end(),
            _ => {}
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Input => Focus::Button,
            Focus::Button => Focus::Input,
        };
        self.input.focused = self.focus == Focus::Input;
    }

    /// Validates the input and spawns the lookup; the report comes back
    /// as [`AppEvent::LookupComplete`].
    pub fn start_lookup(&mut self, event_tx: &mpsc::UnboundedSender<AppEvent>) {
        if self.pending.is_some() {
            self.log
                .push(LogKind::Error, "A lookup is already running (Esc to cancel)");
            return;
        }

        self.log.clear();
        let input = self.input.value.trim().to_string();
        let domain = match validate_with_mode(&input, self.mode) {
            Ok(domain) => domain,
            Err(err) => {
                self.log.push(LogKind::Error, err.to_string());
                return;
            }
        };

        self.log.push(
            LogKind::Heading,
            format!("Looking up email hosting information for: {input} (domain: {domain})..."),
        );

        let token = CancellationToken::new();
        self.pending = Some(token.clone());
        let options = self.options.clone();
        let tx = event_tx.clone();
        tokio::spawn(async move {
            let outcome: LookupOutcome = lookup_with_options(&domain, &options, &token)
                .await
                .map_err(|err| err.to_string());
            // l'interface a pu être fermée entre-temps
            let _ = tx.send(AppEvent::LookupComplete(Box::new(outcome)));
        });
    }

    pub fn cancel_lookup(&mut self) {
        if let Some(token) = self.pending.as_ref() {
            token.cancel();
            self.log.push(LogKind::Error, "Lookup cancelled.");
        }
    }

    pub fn handle_lookup_complete(&mut self, outcome: LookupOutcome) {
        self.pending = None;
        match outcome {
            Ok(report) => {
                let kind = if report.is_partial() {
                    LogKind::Info
                } else {
                    LogKind::Success
                };
                self.log.push(LogKind::Info, "");
                self.log.push_block(kind, &render_human(&report));
            }
            Err(message) => self.log.push(LogKind::Error, format!("Error: {message}")),
        }
    }

    pub fn tick(&mut self) {
        if self.pending.is_some() {
            self.spinner = self.spinner.wrapping_add(1);
        }
    }
}

/// Owns the terminal, the event source and the [`App`]; restores the
/// terminal on drop.
pub struct TuiRunner {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    events: EventHandler,
    app: App,
}

impl TuiRunner {
    pub fn new(app: App) -> Result<Self> {
        enable_raw_mode().context("enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout)).context("terminal init")?;

        Ok(Self {
            terminal,
            events: EventHandler::new(Duration::from_millis(100)),
            app,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let event_tx = self.events.sender();

        loop {
            self.terminal
                .draw(|f| super::ui::draw(f, &self.app))
                .context("draw")?;

            match self.events.next().await {
                Some(AppEvent::Key(key)) => {
                    let action = if self.app.is_input_mode() {
                        KeyAction::from_input(key)
                    } else {
                        KeyAction::from_navigation(key)
                    };
                    self.app.handle_key(action, &event_tx);
                }
                Some(AppEvent::Tick) => self.app.tick(),
                Some(AppEvent::LookupComplete(outcome)) => {
                    self.app.handle_lookup_complete(*outcome)
                }
                Some(AppEvent::Resize(_, _)) => {}
                None => break,
            }

            if self.app.should_quit {
                break;
            }
        }

        Ok(())
    }
}

impl Drop for TuiRunner {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> (App, mpsc::UnboundedSender<AppEvent>, mpsc::UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (App::new(InputMode::Email, LookupOptions::default()), tx, rx)
    }

    fn type_text(app: &mut App, tx: &mpsc::UnboundedSender<AppEvent>, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyAction::Char(c), tx);
        }
    }

    #[test]
    fn typing_fills_the_input_until_focus_moves() {
        let (mut app, tx, _rx) = app();
        type_text(&mut app, &tx, "q@x");
        assert_eq!(app.input.value, "q@x");
        assert!(!app.should_quit);

        app.handle_key(KeyAction::Tab, &tx);
        assert_eq!(app.focus, Focus::Button);
        assert!(!app.input.focused);
        type_text(&mut app, &tx, "zz");
        assert_eq!(app.input.value, "q@x");
    }

    #[test]
    fn quit_action_sets_flag() {
        let (mut app, tx, _rx) = app();
        app.handle_key(KeyAction::Quit, &tx);
        assert!(app.should_quit);
    }

    #[test]
    fn invalid_input_is_logged_without_lookup() {
        let (mut app, tx, mut rx) = app();
        type_text(&mut app, &tx, "not-an-email");
        app.handle_key(KeyAction::Enter, &tx);

        assert!(app.pending.is_none());
        assert_eq!(
            app.log.lines().last().map(|l| l.text.as_str()),
            Some("Invalid email address: not-an-email")
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn failed_lookup_is_logged_as_error() {
        let (mut app, _tx, _rx) = app();
        app.pending = Some(CancellationToken::new());
        app.handle_lookup_complete(Err(
            "Failed to resolve MX records for nosuchdomain.invalid: no record found".to_string(),
        ));

        assert!(app.pending.is_none());
        let last = app.log.lines().last().unwrap();
        assert_eq!(last.kind, LogKind::Error);
        assert_eq!(
            last.text,
            "Error: Failed to resolve MX records for nosuchdomain.invalid: no record found"
        );
    }

    #[test]
    fn cancel_fires_the_pending_token() {
        let (mut app, tx, _rx) = app();
        let token = CancellationToken::new();
        app.pending = Some(token.clone());

        app.handle_key(KeyAction::Cancel, &tx);
        assert!(token.is_cancelled());
        assert_eq!(
            app.log.lines().last().map(|l| l.text.as_str()),
            Some("Lookup cancelled.")
        );
    }

    #[test]
    fn enter_is_refused_while_a_lookup_runs() {
        let (mut app, tx, _rx) = app();
        app.pending = Some(CancellationToken::new());
        type_text(&mut app, &tx, "user@example.com");
        app.handle_key(KeyAction::Enter, &tx);
        assert!(
            app.log
                .lines()
                .last()
                .is_some_and(|l| l.text.starts_with("A lookup is already running"))
        );
    }
}
