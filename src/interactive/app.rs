//! TUI application state and event loop

use super::rendering;
use crate::config::GameConfig;
use crate::dictionary::Dictionary;
use crate::error::SessionInitError;
use crate::game::{InputEvent, Outcome, Session, SessionEvent, Signal, SignalSink};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{debug, info};

/// How long a rejected row wobbles
pub const SHAKE_DURATION: Duration = Duration::from_millis(400);

const TICK: Duration = Duration::from_millis(30);
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    pub session: Session,
    events: mpsc::UnboundedReceiver<SessionEvent>,
    signals: mpsc::UnboundedReceiver<Signal>,
    pub messages: Vec<Message>,
    pub shake: Option<Shake>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// A row currently playing its rejection animation
#[derive(Debug, Clone, Copy)]
pub struct Shake {
    pub row: usize,
    pub started: Instant,
}

impl App {
    /// Start a session and wire its signals into the app
    ///
    /// # Errors
    ///
    /// Returns `SessionInitError` if no target word could be fetched.
    pub async fn start(
        dictionary: Arc<dyn Dictionary>,
        config: &GameConfig,
    ) -> Result<Self, SessionInitError> {
        let (sink, signals) = SignalSink::channel();
        let (session, events) = Session::start(dictionary, config, sink).await?;

        let mut app = Self {
            session,
            events,
            signals,
            messages: Vec::new(),
            shake: None,
            should_quit: false,
        };
        app.add_message("Type a word and press Enter", MessageStyle::Info);
        Ok(app)
    }

    /// Feed finished timers and lookups to the session, then react to its signals
    pub fn pump(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.session.handle(event);
        }
        while let Ok(signal) = self.signals.try_recv() {
            self.on_signal(signal);
        }
        if self
            .shake
            .is_some_and(|s| s.started.elapsed() >= SHAKE_DURATION)
        {
            self.shake = None;
        }
    }

    fn on_signal(&mut self, signal: Signal) {
        match signal {
            Signal::RowShake { row, verdict } => {
                self.shake = Some(Shake {
                    row,
                    started: Instant::now(),
                });
                self.add_message(verdict.message(), MessageStyle::Error);
            }
            Signal::LookupFailed { .. } => {
                self.add_message(
                    "Could not reach the dictionary, press Enter to retry",
                    MessageStyle::Error,
                );
            }
            Signal::SessionEnded { outcome } => {
                let style = if outcome.is_won() {
                    MessageStyle::Success
                } else {
                    MessageStyle::Error
                };
                let text = match outcome {
                    Outcome::Won { guesses: 1 } => "Genius! Solved in 1 guess".to_string(),
                    Outcome::Won { guesses } => format!("Solved in {guesses} guesses!"),
                    Outcome::Lost { answer } => format!("Out of guesses. The word was {answer}"),
                };
                self.add_message(&text, style);
            }
            Signal::CellFilled { .. }
            | Signal::FocusMoved { .. }
            | Signal::RowLocked { .. }
            | Signal::RowActivated { .. } => {}
        }
    }

    /// Translate one terminal event into session input
    pub fn handle_terminal_event(&mut self, event: &Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(*key),
            Event::FocusGained => self.session.handle(InputEvent::FocusReclaim),
            Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
                self.session.handle(InputEvent::FocusReclaim);
            }
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            _ if self.session.is_over() => {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Enter) {
                    self.should_quit = true;
                }
            }
            KeyCode::Char(ch) => {
                if let Some(at) = self.session.focus() {
                    self.session.handle(InputEvent::Character { at, ch });
                }
            }
            KeyCode::Backspace | KeyCode::Delete => {
                if let Some(at) = self.session.focus() {
                    self.session.handle(InputEvent::Delete { at });
                }
            }
            KeyCode::Enter => {
                if let Some(at) = self.session.focus() {
                    self.session.handle(InputEvent::Submit { row: at.row });
                }
            }
            other => debug!(?other, "Unmapped key"),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Horizontal offset for `row` while it is shaking
    #[must_use]
    pub fn shake_offset(&self, row: usize) -> u16 {
        match self.shake {
            Some(shake) if shake.row == row => {
                let phase = shake.started.elapsed().as_millis() / 50;
                if phase % 2 == 0 { 2 } else { 0 }
            }
            _ => 1,
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails, if the session cannot
/// start, or if there's an I/O error during rendering or event handling.
pub async fn run_tui(dictionary: Arc<dyn Dictionary>, config: &GameConfig) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, dictionary, config).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    res
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    dictionary: Arc<dyn Dictionary>,
    config: &GameConfig,
) -> Result<()> {
    let source = dictionary.name().to_string();
    terminal.draw(|f| rendering::loading(f, &source))?;

    let mut app = App::start(dictionary, config).await?;
    info!(source, "TUI session ready");

    loop {
        app.pump();
        terminal.draw(|f| rendering::ui(f, &app))?;

        if app.should_quit {
            if let Some(share) = app.session.share_text() {
                info!(%share, "Game finished");
            }
            return Ok(());
        }

        if event::poll(TICK)? {
            let event = event::read()?;
            app.handle_terminal_event(&event);
        }
        tokio::task::yield_now().await;
    }
}
