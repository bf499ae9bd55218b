//! UI Rendering
//!
//! Main UI layout and rendering logic for the TUI.

use crate::form::SubmissionState;
use crate::render::ResultView;
use crate::tui::app::{App, View};
use crate::tui::theme::{Icons, Theme};
use crate::tui::widgets;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Width of the submit button column
const BUTTON_WIDTH: u16 = 20;

/// Split the screen into header, input row, results and status bar
pub fn layout(area: Rect) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Input + button
            Constraint::Min(5),    // Results
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

/// Inner area of the results pane, used for scroll bounds
pub fn results_inner(area: Rect) -> Rect {
    results_block(&Theme::default()).inner(layout(area)[2])
}

/// Render the main UI
pub fn render(frame: &mut Frame, app: &App) {
    let [header, input_row, results, status] = layout(frame.area());

    render_header(frame, header, app);
    render_input_row(frame, input_row, app);
    render_results(frame, results, app);
    render_status_bar(frame, status, app);

    if app.view == View::Help {
        render_help(frame, &app.theme);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let title = Paragraph::new(Line::from(vec![
        Span::styled("Developer Research Agent", theme.title()),
        Span::raw("  "),
        Span::styled(app.endpoint(), theme.text_dim()),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border()),
    );

    frame.render_widget(title, area);
}

fn render_input_row(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(BUTTON_WIDTH)])
        .split(area);

    let block = Block::default()
        .title(" Query ")
        .borders(Borders::ALL)
        .border_style(if app.view == View::Form {
            theme.border_focused()
        } else {
            theme.border()
        });
    let inner = block.inner(chunks[0]);
    frame.render_widget(block, chunks[0]);
    frame.render_widget(&app.input, inner);

    widgets::render_submit(frame, chunks[1], &app.form, theme);
}

fn results_block(theme: &Theme) -> Block<'static> {
    Block::default()
        .title(" Results ")
        .borders(Borders::ALL)
        .border_style(theme.border())
}

fn render_results(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let block = results_block(theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let view = ResultView::from_form(&app.form);
    let lines = if view.is_empty() {
        vec![Line::from(Span::styled(
            "Type a question about developer tools and press Enter.",
            theme.text_dim(),
        ))]
    } else {
        widgets::result_lines(&view, theme, inner.width as usize, app.spinner_frame)
    };

    let paragraph = Paragraph::new(lines).scroll((app.scroll_offset, 0));
    frame.render_widget(paragraph, inner);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let status = match app.form.state() {
        SubmissionState::Idle => Span::styled("Ready", theme.text_secondary()),
        SubmissionState::Submitting { .. } => Span::styled("Asking the agent...", theme.active()),
        SubmissionState::Succeeded(response) => Span::styled(
            format!("{} {} companies", Icons::COMPLETE, response.companies().len()),
            theme.complete(),
        ),
        SubmissionState::Failed { .. } => Span::styled(
            format!("{} Backend is not reachable", Icons::ERROR),
            theme.error(),
        ),
    };

    let shortcuts = vec![
        Span::styled(" [Enter]", theme.shortcut_key()),
        Span::styled(" Ask ", theme.shortcut_desc()),
        Span::styled("[Ctrl+L]", theme.shortcut_key()),
        Span::styled(" Clear ", theme.shortcut_desc()),
        Span::styled("[Ctrl+T]", theme.shortcut_key()),
        Span::styled(" Theme ", theme.shortcut_desc()),
        Span::styled("[Ctrl+Q]", theme.shortcut_key()),
        Span::styled(" Quit ", theme.shortcut_desc()),
        Span::styled("[F1]", theme.shortcut_key()),
        Span::styled(" Help", theme.shortcut_desc()),
    ];

    let line = Line::from(
        std::iter::once(status)
            .chain(std::iter::once(Span::raw(" │ ")))
            .chain(shortcuts)
            .collect::<Vec<_>>(),
    );

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the help modal
fn render_help(frame: &mut Frame, theme: &Theme) {
    let area = centered_rect(60, 60, frame.area());
    frame.render_widget(Clear, area);

    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("{:<13}", key), theme.shortcut_key()),
            Span::styled(desc, theme.text()),
        ])
    };

    let help_lines = vec![
        Line::from(Span::styled("Keyboard Shortcuts", theme.heading())),
        Line::from(""),
        entry("Enter", "Ask the agent"),
        entry("Ctrl+L", "Clear query and results"),
        entry("Ctrl+T", "Toggle dark/light theme"),
        entry("Ctrl+Q", "Quit application"),
        entry("Ctrl+C", "Force quit"),
        entry("↑/↓", "Scroll results"),
        entry("PageUp/Down", "Scroll page"),
        entry("F1 / Ctrl+H", "Show this help"),
        Line::from(""),
        Line::from(Span::styled("Press any key to close", theme.text_dim())),
    ];

    let paragraph = Paragraph::new(help_lines).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(theme.border_focused()),
    );

    frame.render_widget(paragraph, area);
}

/// Helper to create a centered rect
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_inner_excludes_chrome() {
        let inner = results_inner(Rect::new(0, 0, 100, 40));
        // 3 header + 3 input + 1 status bar, minus the results border
        assert_eq!(inner.height, 40 - 7 - 2);
        assert_eq!(inner.width, 98);
    }
}
