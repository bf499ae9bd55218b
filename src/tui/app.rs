//! Application State
//!
//! Terminal form state: the text field, the query form behind it, and the
//! channel the background request reports back on.

use crate::client::SharedAgentClient;
use crate::form::QueryForm;
use crate::render::ResultView;
use crate::tui::event::AppAction;
use crate::tui::theme::Theme;
use crate::tui::widgets;
use crate::types::{AgentResponse, ClientResult};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use tui_textarea::TextArea;

const PLACEHOLDER: &str = "Ask the agent...";

/// Current view/screen
#[derive(Debug, Clone, PartialEq, Default)]
pub enum View {
    #[default]
    Form,
    Help,
}

/// Events from the background request
#[derive(Debug)]
pub enum AppEvent {
    /// The in-flight request finished
    Completed(ClientResult<AgentResponse>),
}

/// Main application state
pub struct App {
    // UI State
    pub view: View,
    pub should_quit: bool,
    pub theme: Theme,
    pub spinner_frame: usize,

    // Form State
    pub form: QueryForm,
    pub input: TextArea<'static>,
    pub scroll_offset: u16,
    pub max_scroll: u16,

    client: SharedAgentClient,

    // Async communication
    event_rx: mpsc::Receiver<AppEvent>,
    event_tx: mpsc::Sender<AppEvent>,
}

impl App {
    /// Create a new application instance
    pub fn new(client: SharedAgentClient, trim_query: bool) -> Self {
        let (tx, rx) = mpsc::channel(16);
        let theme = Theme::default();

        Self {
            view: View::Form,
            should_quit: false,
            theme,
            spinner_frame: 0,
            form: QueryForm::new().with_trimmed_payload(trim_query),
            input: Self::empty_input(&theme),
            scroll_offset: 0,
            max_scroll: 0,
            client,
            event_rx: rx,
            event_tx: tx,
        }
    }

    fn empty_input(theme: &Theme) -> TextArea<'static> {
        let mut input = TextArea::default();
        input.set_cursor_line_style(ratatui::style::Style::default());
        input.set_placeholder_text(PLACEHOLDER);
        input.set_placeholder_style(theme.placeholder());
        input
    }

    /// Where queries are sent, for the header
    pub fn endpoint(&self) -> String {
        self.client.endpoint()
    }

    /// Drain completions from the background request
    pub fn poll_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
    }

    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Completed(outcome) => {
                if self.form.finish(outcome) {
                    self.scroll_offset = 0;
                }
            }
        }
    }

    /// Handle a user action
    pub fn handle_action(&mut self, action: AppAction) {
        if self.view == View::Help && !matches!(action, AppAction::Tick) {
            // Any key closes help
            self.view = View::Form;
            if matches!(action, AppAction::Quit | AppAction::ForceQuit) {
                self.should_quit = true;
            }
            return;
        }

        match action {
            AppAction::Quit | AppAction::ForceQuit => {
                self.should_quit = true;
            }
            AppAction::Submit => self.submit_query(),
            AppAction::Clear => {
                if self.form.clear() {
                    self.input = Self::empty_input(&self.theme);
                    self.scroll_offset = 0;
                }
            }
            AppAction::ToggleTheme => {
                self.theme = self.theme.toggled();
                self.input.set_placeholder_style(self.theme.placeholder());
                debug!(mode = ?self.theme.mode, "Theme toggled");
            }
            AppAction::ToggleHelp => {
                self.view = View::Help;
            }
            AppAction::Escape => {}
            AppAction::ScrollUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
            }
            AppAction::ScrollDown => {
                if self.scroll_offset < self.max_scroll {
                    self.scroll_offset += 1;
                }
            }
            AppAction::ScrollPageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
            }
            AppAction::ScrollPageDown => {
                self.scroll_offset = (self.scroll_offset + 10).min(self.max_scroll);
            }
            AppAction::Input(key_event) => {
                // The field stays editable while a request is in flight
                self.input.input(key_event);
                self.form.set_query(self.input.lines().join("\n"));
            }
            AppAction::Tick => {
                self.spinner_frame = self.spinner_frame.wrapping_add(1);
            }
        }
    }

    /// Submit the current query, if the form allows it
    fn submit_query(&mut self) {
        let Some(request) = self.form.begin_submit() else {
            debug!("Submit ignored: blank query or request in flight");
            return;
        };
        info!("Submitting query");
        self.scroll_offset = 0;

        let client = self.client.clone();
        let tx = self.event_tx.clone();

        tokio::spawn(async move {
            let outcome = client.query(&request).await;
            if tx.send(AppEvent::Completed(outcome)).await.is_err() {
                warn!("Form closed before the agent answered");
            }
        });
    }

    /// Update max scroll for a results viewport of the given inner size
    pub fn update_scroll_bounds(&mut self, viewport_width: u16, viewport_height: u16) {
        let view = ResultView::from_form(&self.form);
        let content_height =
            widgets::result_lines(&view, &self.theme, viewport_width as usize, 0).len();
        let content_height = u16::try_from(content_height).unwrap_or(u16::MAX);

        self.max_scroll = content_height.saturating_sub(viewport_height);
        if self.scroll_offset > self.max_scroll {
            self.scroll_offset = self.max_scroll;
        }
    }
}
