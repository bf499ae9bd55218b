// Plain-text rendering for the prompt loop and `ask`

use super::{ResultView, Section};
use std::fmt::Write;

const INDENT: &str = "   ";

/// Render the view as plain text, one labeled line per item.
pub fn render(view: &ResultView) -> String {
    let mut out = String::new();

    if view.busy {
        out.push_str("Asking...\n");
        return out;
    }

    if let Some(status) = &view.status {
        let _ = writeln!(out, "{}", status);
    }

    for section in &view.sections {
        match section {
            Section::Error(message) => {
                let _ = writeln!(out, "Error: {}", message);
            }
            Section::Analysis(analysis) => {
                let _ = writeln!(out, "Analysis:");
                for line in analysis.lines() {
                    let _ = writeln!(out, "{}{}", INDENT, line);
                }
            }
            Section::Companies(cards) => {
                let _ = writeln!(out, "Companies:");
                for (i, card) in cards.iter().enumerate() {
                    let number = format!("{}. ", i + 1);
                    for (j, field) in card.fields.iter().enumerate() {
                        let lead = if j == 0 {
                            number.clone()
                        } else {
                            " ".repeat(number.len())
                        };
                        let _ = writeln!(
                            out,
                            "{}{}{}: {}",
                            INDENT,
                            lead,
                            field.label,
                            field.value.as_str()
                        );
                    }
                    if i + 1 < cards.len() {
                        out.push('\n');
                    }
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::QueryForm;
    use crate::types::ClientError;

    fn view_of(body: &str) -> ResultView {
        let mut form = QueryForm::new();
        form.set_query("q");
        form.begin_submit();
        form.finish(Ok(serde_json::from_str(body).unwrap()));
        ResultView::from_form(&form)
    }

    #[test]
    fn test_render_companies() {
        let text = render(&view_of(
            r#"{"analysis":"Pick one.\nOr both.","companies":[
                {"name":"Acme","website":"https://acme.test","is_open_source":true},
                {"name":"Globex","api_available":true}
            ]}"#,
        ));

        assert_eq!(
            text,
            "Analysis:\n\
             \x20  Pick one.\n\
             \x20  Or both.\n\
             Companies:\n\
             \x20  1. Name: Acme\n\
             \x20     Website: https://acme.test\n\
             \x20     Open Source: Yes\n\
             \n\
             \x20  2. Name: Globex\n\
             \x20     API: Available\n"
        );
    }

    #[test]
    fn test_render_failure() {
        let mut form = QueryForm::new();
        form.set_query("q");
        form.begin_submit();
        form.finish(Err(ClientError::Endpoint("bad".to_string())));

        assert_eq!(
            render(&ResultView::from_form(&form)),
            "Backend is not reachable\nError: Error contacting agent backend\n"
        );
    }

    #[test]
    fn test_render_busy() {
        let mut form = QueryForm::new();
        form.set_query("q");
        form.begin_submit();
        assert_eq!(render(&ResultView::from_form(&form)), "Asking...\n");
    }
}
