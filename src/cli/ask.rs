// One-shot query

use super::OutputFormat;
use crate::client::AgentClient;
use crate::form::{QueryForm, SubmissionState};
use crate::render::{html, text, ResultView};
use std::io::Write;

/// Run one submission cycle and write the rendering to `out`.
///
/// Returns `false` when nothing useful came back: a blank query or an
/// unreachable backend.
pub async fn run<W: Write>(
    client: &dyn AgentClient,
    query: &str,
    trim_query: bool,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<bool> {
    let mut form = QueryForm::new().with_trimmed_payload(trim_query);
    form.set_query(query);

    if !form.submit(client).await {
        writeln!(out, "Please enter a query.")?;
        return Ok(false);
    }

    match format {
        OutputFormat::Text => write!(out, "{}", text::render(&ResultView::from_form(&form)))?,
        OutputFormat::Html => write!(out, "{}", html::render_fragment(&ResultView::from_form(&form)))?,
        OutputFormat::Json => {
            if let Some(result) = form.agent_result() {
                writeln!(out, "{}", serde_json::to_string_pretty(result.as_ref())?)?;
            }
        }
    }

    Ok(!matches!(form.state(), SubmissionState::Failed { .. }))
}
