//! Result Rendering
//!
//! Turns a [`QueryForm`] into a [`ResultView`]: a small, backend-neutral
//! description of what should be on screen. The text, HTML and terminal
//! renderers all draw from the same view so they agree on what is shown,
//! in which order, and under which label.

pub mod html;
pub mod text;

use crate::form::QueryForm;
use crate::types::{AgentResponse, Company};

/// Everything the result area shows for one form state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultView {
    /// A request is in flight; nothing else is rendered
    pub busy: bool,
    /// Connectivity status line
    pub status: Option<String>,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    Error(String),
    Analysis(String),
    Companies(Vec<CompanyCard>),
}

impl Section {
    pub fn label(&self) -> &'static str {
        match self {
            Section::Error(_) => "Error",
            Section::Analysis(_) => "Analysis",
            Section::Companies(_) => "Companies",
        }
    }
}

/// One company entry: its present fields, in display order
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyCard {
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub label: &'static str,
    pub value: FieldValue,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    /// Opens in a new browsing context without referrer/opener access
    Link(String),
}

impl FieldValue {
    pub fn as_str(&self) -> &str {
        match self {
            FieldValue::Text(s) | FieldValue::Link(s) => s,
        }
    }
}

impl ResultView {
    pub fn from_form(form: &QueryForm) -> Self {
        if form.is_loading() {
            return Self {
                busy: true,
                ..Self::default()
            };
        }

        Self {
            busy: false,
            status: form.backend_msg().map(str::to_string),
            sections: form
                .agent_result()
                .map(|result| sections_for(&result))
                .unwrap_or_default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.busy && self.status.is_none() && self.sections.is_empty()
    }
}

fn sections_for(result: &AgentResponse) -> Vec<Section> {
    let mut sections = Vec::new();

    if let Some(error) = non_empty(&result.error) {
        sections.push(Section::Error(error.to_string()));
    }
    if let Some(analysis) = non_empty(&result.analysis) {
        sections.push(Section::Analysis(analysis.to_string()));
    }
    if !result.companies().is_empty() {
        sections.push(Section::Companies(
            result.companies().iter().map(CompanyCard::from_company).collect(),
        ));
    }

    sections
}

impl CompanyCard {
    pub fn from_company(company: &Company) -> Self {
        let mut fields = vec![Field::text("Name", company.name.clone().unwrap_or_default())];

        if let Some(website) = non_empty(&company.website) {
            fields.push(Field {
                label: "Website",
                value: FieldValue::Link(website.to_string()),
            });
        }
        if let Some(pricing) = non_empty(&company.pricing_model) {
            fields.push(Field::text("Pricing", pricing));
        }
        if let Some(open_source) = company.is_open_source {
            fields.push(Field::text("Open Source", if open_source { "Yes" } else { "No" }));
        }
        if let Some(stack) = joined(&company.tech_stack) {
            fields.push(Field::text("Tech Stack", stack));
        }
        if let Some(languages) = joined(&company.language_support) {
            fields.push(Field::text("Language Support", languages));
        }
        if let Some(api) = company.api_available {
            fields.push(Field::text("API", if api { "Available" } else { "Not Available" }));
        }
        if let Some(integrations) = joined(&company.integration_capabilities) {
            fields.push(Field::text("Integrations", integrations));
        }
        if let Some(description) = non_empty(&company.description) {
            fields.push(Field::text("Description", description));
        }

        Self { fields }
    }

    pub fn get(&self, label: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|f| f.label == label).map(|f| &f.value)
    }
}

impl Field {
    fn text(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: FieldValue::Text(value.into()),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn joined(values: &Option<Vec<String>>) -> Option<String> {
    values
        .as_ref()
        .filter(|v| !v.is_empty())
        .map(|v| v.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ClientError;

    fn settled(body: &str) -> QueryForm {
        let mut form = QueryForm::new();
        form.set_query("q");
        form.begin_submit();
        form.finish(Ok(serde_json::from_str(body).unwrap()));
        form
    }

    #[test]
    fn test_idle_renders_nothing() {
        assert!(ResultView::from_form(&QueryForm::new()).is_empty());
    }

    #[test]
    fn test_busy_suppresses_stale_result() {
        let mut form = settled(r#"{"analysis":"old"}"#);
        form.begin_submit();

        let view = ResultView::from_form(&form);
        assert!(view.busy);
        assert!(view.status.is_none());
        assert!(view.sections.is_empty());
    }

    #[test]
    fn test_analysis_without_companies() {
        let view = ResultView::from_form(&settled(r#"{"analysis":"X","companies":[]}"#));
        assert_eq!(view.sections, vec![Section::Analysis("X".to_string())]);
    }

    #[test]
    fn test_single_company_shows_only_present_fields() {
        let view = ResultView::from_form(&settled(
            r#"{"companies":[{"name":"Acme","website":"https://acme.test","is_open_source":true}]}"#,
        ));

        let Section::Companies(cards) = &view.sections[0] else {
            panic!("expected companies section, got {:?}", view.sections);
        };
        assert_eq!(cards.len(), 1);
        assert_eq!(
            cards[0].fields,
            vec![
                Field::text("Name", "Acme"),
                Field {
                    label: "Website",
                    value: FieldValue::Link("https://acme.test".to_string()),
                },
                Field::text("Open Source", "Yes"),
            ]
        );
    }

    #[test]
    fn test_null_name_renders_empty() {
        let view = ResultView::from_form(&settled(
            r#"{"analysis":"A","companies":[{"name":null,"website":null,"is_open_source":null}]}"#,
        ));

        let Section::Companies(cards) = &view.sections[1] else {
            panic!("expected companies section, got {:?}", view.sections);
        };
        assert_eq!(cards[0].fields, vec![Field::text("Name", "")]);
    }

    #[test]
    fn test_full_company_labels_and_formatting() {
        let view = ResultView::from_form(&settled(
            r#"{"companies":[{
                "name":"Supabase",
                "pricing_model":"Freemium",
                "is_open_source":false,
                "tech_stack":["Postgres","Elixir"],
                "language_support":["JavaScript","Python","Dart"],
                "api_available":false,
                "integration_capabilities":["Vercel"],
                "description":"Backend as a service"
            }]}"#,
        ));

        let Section::Companies(cards) = &view.sections[0] else {
            panic!("expected companies section");
        };
        let card = &cards[0];
        assert_eq!(card.get("Pricing").unwrap().as_str(), "Freemium");
        assert_eq!(card.get("Open Source").unwrap().as_str(), "No");
        assert_eq!(card.get("Tech Stack").unwrap().as_str(), "Postgres, Elixir");
        assert_eq!(
            card.get("Language Support").unwrap().as_str(),
            "JavaScript, Python, Dart"
        );
        assert_eq!(card.get("API").unwrap().as_str(), "Not Available");
        assert_eq!(card.get("Integrations").unwrap().as_str(), "Vercel");
        assert_eq!(card.get("Description").unwrap().as_str(), "Backend as a service");
        assert!(card.get("Website").is_none());
    }

    #[test]
    fn test_null_and_empty_fields_are_skipped() {
        let view = ResultView::from_form(&settled(
            r#"{"analysis":"","companies":[{
                "name":"Bare",
                "website":"",
                "is_open_source":null,
                "api_available":null,
                "tech_stack":[],
                "language_support":null
            }]}"#,
        ));

        assert_eq!(view.sections.len(), 1);
        let Section::Companies(cards) = &view.sections[0] else {
            panic!("expected companies section");
        };
        assert_eq!(cards[0].fields, vec![Field::text("Name", "Bare")]);
    }

    #[test]
    fn test_companies_keep_input_order() {
        let view = ResultView::from_form(&settled(
            r#"{"companies":[{"name":"Zeta"},{"name":"Alpha"},{"name":"Mu"}]}"#,
        ));
        let Section::Companies(cards) = &view.sections[0] else {
            panic!("expected companies section");
        };
        let names: Vec<_> = cards.iter().map(|c| c.get("Name").unwrap().as_str()).collect();
        assert_eq!(names, ["Zeta", "Alpha", "Mu"]);
    }

    #[test]
    fn test_failure_view() {
        let mut form = QueryForm::new();
        form.set_query("q");
        form.begin_submit();
        form.finish(Err(ClientError::Status(reqwest::StatusCode::NOT_FOUND)));

        let view = ResultView::from_form(&form);
        assert!(!view.busy);
        assert_eq!(view.status.as_deref(), Some("Backend is not reachable"));
        assert_eq!(
            view.sections,
            vec![Section::Error("Error contacting agent backend".to_string())]
        );
    }

    #[test]
    fn test_error_and_analysis_both_render() {
        let view = ResultView::from_form(&settled(r#"{"error":"partial","analysis":"some"}"#));
        let labels: Vec<_> = view.sections.iter().map(Section::label).collect();
        assert_eq!(labels, ["Error", "Analysis"]);
        assert!(view.status.is_none());
    }
}
