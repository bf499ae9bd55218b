//! Results Widget
//!
//! Turns a [`ResultView`] into styled, pre-wrapped lines for the results pane.
//! Lines are wrapped here rather than by the paragraph so the scroll bounds
//! can be computed from the line count.

use crate::render::{FieldValue, ResultView, Section};
use crate::tui::theme::{Icons, Theme};
use ratatui::text::{Line, Span};

const INDENT: usize = 2;

/// Build the lines of the results pane for a viewport `width` columns wide.
pub fn result_lines(
    view: &ResultView,
    theme: &Theme,
    width: usize,
    spinner_frame: usize,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if view.busy {
        let spinner = Icons::SPINNER[spinner_frame % Icons::SPINNER.len()];
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", spinner), theme.active()),
            Span::styled("Asking the agent...", theme.text_secondary()),
        ]));
        return lines;
    }

    if let Some(status) = &view.status {
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", Icons::ERROR), theme.warning()),
            Span::styled(status.clone(), theme.warning()),
        ]));
        lines.push(Line::from(""));
    }

    for section in &view.sections {
        match section {
            Section::Error(message) => {
                labeled(&mut lines, 0, "Error", message, theme.error_label(), theme.error(), width);
            }
            Section::Analysis(analysis) => {
                lines.push(Line::from(Span::styled("Analysis:", theme.heading())));
                for chunk in wrap_text(analysis, width.saturating_sub(INDENT)) {
                    lines.push(Line::from(vec![
                        Span::raw(" ".repeat(INDENT)),
                        Span::styled(chunk, theme.text()),
                    ]));
                }
            }
            Section::Companies(cards) => {
                lines.push(Line::from(Span::styled("Companies:", theme.heading())));
                for (i, card) in cards.iter().enumerate() {
                    for (j, field) in card.fields.iter().enumerate() {
                        let value_style = match field.value {
                            FieldValue::Link(_) => theme.link(),
                            FieldValue::Text(_) => theme.text(),
                        };
                        let start = lines.len();
                        labeled(
                            &mut lines,
                            INDENT * 2,
                            field.label,
                            field.value.as_str(),
                            theme.label(),
                            value_style,
                            width,
                        );
                        if j == 0 {
                            // Bullet in front of each company's first line
                            if let Some(first) = lines.get_mut(start) {
                                first.spans[0] = Span::styled(
                                    format!("{}{} ", " ".repeat(INDENT), Icons::DOT),
                                    theme.title(),
                                );
                            }
                        }
                    }
                    if i + 1 < cards.len() {
                        lines.push(Line::from(""));
                    }
                }
            }
        }
        lines.push(Line::from(""));
    }

    lines
}

/// Push `Label: value`, wrapping the value under itself.
fn labeled(
    lines: &mut Vec<Line<'static>>,
    indent: usize,
    label: &str,
    value: &str,
    label_style: ratatui::style::Style,
    value_style: ratatui::style::Style,
    width: usize,
) {
    let prefix = format!("{}: ", label);
    let hang = indent + prefix.chars().count();
    let chunks = wrap_text(value, width.saturating_sub(hang).max(10));

    if chunks.is_empty() {
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(indent)),
            Span::styled(prefix, label_style),
        ]));
        return;
    }

    for (i, chunk) in chunks.into_iter().enumerate() {
        let lead = if i == 0 {
            vec![
                Span::raw(" ".repeat(indent)),
                Span::styled(prefix.clone(), label_style),
            ]
        } else {
            vec![Span::raw(" ".repeat(hang))]
        };
        let mut spans = lead;
        spans.push(Span::styled(chunk, value_style));
        lines.push(Line::from(spans));
    }
}

/// Wrap text to `max_width` characters, preferring to break at whitespace or
/// after `,` `.` `;`. Embedded newlines start new lines.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut out = Vec::new();

    for line in text.lines() {
        if line.is_empty() {
            out.push(String::new());
            continue;
        }

        let mut remaining = line;
        while !remaining.is_empty() {
            if remaining.chars().count() <= max_width {
                out.push(remaining.to_string());
                break;
            }

            let limit = remaining
                .char_indices()
                .nth(max_width)
                .map(|(idx, _)| idx)
                .unwrap_or(remaining.len());

            let split_at = remaining[..limit]
                .char_indices()
                .filter(|(idx, ch)| *idx > 0 && (ch.is_whitespace() || matches!(ch, ',' | '.' | ';')))
                .map(|(idx, ch)| if ch.is_whitespace() { idx } else { idx + ch.len_utf8() })
                .last()
                .unwrap_or(limit);

            let (chunk, rest) = remaining.split_at(split_at);
            out.push(chunk.trim_end().to_string());
            remaining = rest.trim_start();
        }
    }

    out
}
