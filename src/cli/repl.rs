// Prompt loop

use crate::client::AgentClient;
use crate::form::QueryForm;
use crate::render::{text, ResultView};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tracing::debug;

const PROMPT: &str = "\nDeveloper Tools Query: ";

/// Read queries line by line until EOF, `quit` or `exit`.
///
/// Each line is one submission cycle; blank lines are skipped.
pub async fn run<R, W>(
    client: &dyn AgentClient,
    trim_query: bool,
    input: R,
    out: &mut W,
) -> anyhow::Result<()>
where
    R: AsyncRead + Unpin,
    W: Write,
{
    let mut lines = BufReader::new(input).lines();
    let mut form = QueryForm::new().with_trimmed_payload(trim_query);

    writeln!(out, "Developer Tools Research Agent")?;

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let trimmed = line.trim();
        if matches!(trimmed.to_lowercase().as_str(), "quit" | "exit") {
            break;
        }

        form.set_query(line.as_str());
        if !form.submit(client).await {
            debug!("Skipping blank line");
            continue;
        }

        writeln!(out, "\nResults for: {}", trimmed)?;
        writeln!(out, "{}", "=".repeat(60))?;
        write!(out, "{}", text::render(&ResultView::from_form(&form)))?;
    }

    Ok(())
}
