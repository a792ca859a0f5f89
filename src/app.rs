//! Application state and core logic

use crate::client::{PortalApi, PortalClient};
use crate::config::PortalConfig;
use crate::state::{AppState, FieldId, FieldKind, SubmitOutcome};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};

/// Window for the double Ctrl+C quit
const QUIT_WINDOW: Duration = Duration::from_millis(750);

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User configuration
    pub config: PortalConfig,
    /// Portal client, boxed so tests can inject a fake transport
    client: Box<dyn PortalApi>,
    /// Whether the app should quit
    quit: bool,
    /// Timestamp of last Ctrl+C press for double-tap quit
    last_ctrl_c: Option<Instant>,
}

impl App {
    /// Create a new App instance and run startup work
    pub async fn new() -> Result<Self> {
        let config = PortalConfig::load().unwrap_or_default();
        let client = PortalClient::new(&config)?;
        let mut app = Self::with_client(Box::new(client), config);
        app.startup().await;
        Ok(app)
    }

    /// Build an App around an existing client without touching the network
    pub fn with_client(client: Box<dyn PortalApi>, config: PortalConfig) -> Self {
        Self {
            state: AppState::new(),
            config,
            client,
            quit: false,
            last_ctrl_c: None,
        }
    }

    /// One-shot startup work: connectivity probe plus the single primary
    /// card fetch.
    pub async fn startup(&mut self) {
        self.state.backend_connected = self.client.check_connection().await;
        self.load_primary_card().await;
    }

    /// The card fetch. Success replaces the billing panel's content
    /// wholesale; any failure (transport, status, decode) leaves it exactly
    /// as it was, with no retry.
    async fn load_primary_card(&mut self) {
        match self.client.primary_card().await {
            Ok(card) => self.state.card = Some(card),
            Err(e) => {
                tracing::debug!(error = %e, "primary card fetch failed; billing panel left as-is");
            }
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Double Ctrl+C to quit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            let now = Instant::now();
            let double = self
                .last_ctrl_c
                .is_some_and(|t| now.duration_since(t) < QUIT_WINDOW);
            if double {
                self.quit = true;
            } else {
                self.last_ctrl_c = Some(now);
                self.state.status_message = Some("Press Ctrl+C again to quit".to_string());
            }
            return Ok(());
        }
        self.last_ctrl_c = None;

        // Submit check
        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.submit();
            return Ok(());
        }

        match key.code {
            KeyCode::Esc => {
                self.state.status_message = None;
            }
            KeyCode::Tab | KeyCode::Down => self.state.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.state.focus_prev(),
            KeyCode::Left => self.cycle_select(false),
            KeyCode::Right => self.cycle_select(true),
            KeyCode::Backspace => {
                if let Some(field) = self.focused_field_mut() {
                    field.pop_char();
                }
            }
            KeyCode::Char(c) => self.handle_char(c),
            _ => {}
        }

        Ok(())
    }

    /// Printable input: space cycles a focused select, everything else
    /// edits text fields.
    fn handle_char(&mut self, c: char) {
        let is_select = self
            .focused_field_mut()
            .map(|f| matches!(f.kind, FieldKind::Select { .. }))
            .unwrap_or(false);
        if is_select {
            if c == ' ' {
                self.cycle_select(true);
            }
        } else if let Some(field) = self.focused_field_mut() {
            field.push_char(c);
        }
    }

    fn focused_field_mut(&mut self) -> Option<&mut crate::state::FormField> {
        let id = self.state.focused_field()?;
        self.state.document.field_mut(id)
    }

    /// Cycle the focused select's value and re-run the dependency rules for
    /// it. Text fields ignore left/right.
    fn cycle_select(&mut self, forward: bool) {
        let Some(id) = self.state.focused_field() else {
            return;
        };
        {
            let Some(field) = self.state.document.field_mut(id) else {
                return;
            };
            if !matches!(field.kind, FieldKind::Select { .. }) {
                return;
            }
            if forward {
                field.cycle_next();
            } else {
                field.cycle_prev();
            }
        }
        self.discriminator_changed(id);
    }

    /// Re-evaluate the dependency rules gated by a changed select and start
    /// reveal/collapse transitions for any group that toggled.
    fn discriminator_changed(&mut self, id: FieldId) {
        let transitions = self.state.engine.apply(&mut self.state.document, id);
        if !transitions.is_empty() {
            let animate = self.config.animations_enabled();
            self.state.start_transitions(&transitions, animate);
        }
    }

    /// The required-on-submit check. The form itself is never POSTed from
    /// here; this only reports whether submission would be allowed.
    fn submit(&mut self) {
        let missing = self.state.document.missing_required();
        if missing.is_empty() {
            self.state.status_message = Some("Form complete - ready to submit".to_string());
            self.state.last_submit = Some(SubmitOutcome::Ready);
        } else {
            self.state.status_message = Some(format!("Missing required: {}", missing.join(", ")));
            self.state.last_submit = Some(SubmitOutcome::MissingFields(missing));
        }
    }
}
