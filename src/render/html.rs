//! HTML Rendering
//!
//! Renders the result view as an HTML fragment, and the whole form as a
//! standalone page for the web server. All agent-supplied text is escaped.

use super::{FieldValue, ResultView, Section};
use crate::form::QueryForm;
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write;

/// Render the result area (status line, busy indicator, response).
pub fn render_fragment(view: &ResultView) -> String {
    let mut out = String::new();

    let status = view.status.as_deref().unwrap_or_default();
    let _ = writeln!(out, r#"<div class="backend-status">{}</div>"#, encode_text(status));

    if view.busy {
        out.push_str("<div class=\"loader\"><div class=\"loader-spinner\"></div></div>\n");
        return out;
    }

    if view.sections.is_empty() {
        return out;
    }

    out.push_str("<div class=\"agent-response\">\n");
    for section in &view.sections {
        match section {
            Section::Error(message) => {
                let _ = writeln!(
                    out,
                    r#"<div class="agent-error"><strong>Error:</strong> {}</div>"#,
                    encode_text(message)
                );
            }
            Section::Analysis(analysis) => {
                let _ = writeln!(
                    out,
                    "<div class=\"agent-analysis\"><strong>Analysis:</strong><div>{}</div></div>",
                    encode_text(analysis)
                );
            }
            Section::Companies(cards) => {
                out.push_str("<div class=\"agent-companies\"><strong>Companies:</strong>\n<ul>\n");
                for card in cards {
                    out.push_str("<li>\n");
                    for field in &card.fields {
                        let _ = writeln!(
                            out,
                            "<div><strong>{}:</strong> {}</div>",
                            field.label,
                            render_value(&field.value)
                        );
                    }
                    out.push_str("</li>\n");
                }
                out.push_str("</ul>\n</div>\n");
            }
        }
    }
    out.push_str("</div>\n");

    out
}

fn render_value(value: &FieldValue) -> String {
    match value {
        FieldValue::Link(url) if is_web_url(url) => format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
            encode_double_quoted_attribute(url),
            encode_text(url)
        ),
        // Anything that is not http(s) stays inert text
        FieldValue::Link(text) | FieldValue::Text(text) => encode_text(text).into_owned(),
    }
}

fn is_web_url(url: &str) -> bool {
    reqwest::Url::parse(url)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// Render the full page: heading, form and result area.
pub fn render_page(form: &QueryForm) -> String {
    let view = ResultView::from_form(form);
    let disabled = if form.can_submit() { "" } else { " disabled" };
    let button = if form.is_loading() { "Asking..." } else { "Ask Agent" };

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Developer Research Agent</title>
  <style>
    body {{ font-family: Arial, sans-serif; margin: 2rem auto; max-width: 48rem; color: #1d1d1f; }}
    .agent-form {{ display: flex; gap: 0.5rem; margin: 1rem 0; }}
    .agent-form input {{ flex: 1; padding: 0.5rem; }}
    .agent-form button {{ padding: 0.5rem 1rem; }}
    .backend-status {{ color: #b45309; min-height: 1.2em; }}
    .agent-error {{ color: red; }}
    .agent-companies {{ margin-top: 1em; }}
    .agent-companies li {{ margin-bottom: 1em; text-align: left; }}
    .loader {{ display: flex; justify-content: center; padding: 1rem; }}
    .loader-spinner {{ width: 2rem; height: 2rem; border: 3px solid #ddd; border-top-color: #0984e3; border-radius: 50%; animation: spin 1s linear infinite; }}
    @keyframes spin {{ to {{ transform: rotate(360deg); }} }}
  </style>
</head>
<body>
  <div class="agent-container">
    <h1>Developer Research Agent</h1>
    <form method="post" action="/" class="agent-form" id="agentForm">
      <input type="text" name="query" id="query" value="{query}" placeholder="Ask the agent..." autocomplete="off" />
      <button type="submit" id="submit"{disabled}>{button}</button>
    </form>
    <div id="results">
{fragment}    </div>
  </div>
  <script>
    const input = document.getElementById('query');
    const button = document.getElementById('submit');
    const results = document.getElementById('results');
    input.addEventListener('input', () => {{
      button.disabled = !input.value.trim();
    }});
    document.getElementById('agentForm').addEventListener('submit', (e) => {{
      if (!input.value.trim() || button.disabled) {{
        e.preventDefault();
        return;
      }}
      button.disabled = true;
      button.textContent = 'Asking...';
      results.innerHTML = '<div class="backend-status"></div><div class="loader"><div class="loader-spinner"></div></div>';
    }});
  </script>
</body>
</html>
"#,
        query = encode_double_quoted_attribute(form.query()),
        disabled = disabled,
        button = button,
        fragment = render_fragment(&view),
    )
}
