//! Submit Button
//!
//! The form's submit control: enabled only when the query has text and no
//! request is in flight.

use crate::form::QueryForm;
use crate::tui::theme::Theme;
use chrono::Utc;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button caption for the current form state
pub fn button_label(form: &QueryForm) -> String {
    match form.started_at() {
        Some(started) => {
            let secs = (Utc::now() - started).num_seconds().max(0);
            format!("Asking... {}s", secs)
        }
        None => "Ask Agent".to_string(),
    }
}

/// Render the submit button
pub fn render_submit(frame: &mut Frame, area: Rect, form: &QueryForm, theme: &Theme) {
    let enabled = form.can_submit();
    let style = if enabled {
        theme.button()
    } else {
        theme.button_disabled()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if enabled {
            theme.border_focused()
        } else {
            theme.border()
        });

    let paragraph = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", button_label(form)),
        style,
    )))
    .alignment(Alignment::Center)
    .block(block);

    frame.render_widget(paragraph, area);
}
