use std::sync::Arc;
use wiki_core::{Error, Explanation, Result, SummaryModel};
use crate::sentences::normalize_to_five;

/// Turns a search term into a five-sentence explanation using an external
/// summary source.
#[derive(Debug, Clone)]
pub struct Explainer {
    model: Arc<dyn SummaryModel>,
}

impl Explainer {
    pub fn new(model: Arc<dyn SummaryModel>) -> Self {
        Self { model }
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    pub async fn explain(&self, term: &str) -> Result<Explanation> {
        let term = term.trim();
        if term.is_empty() {
            return Err(Error::invalid_argument("Begriff darf nicht leer sein"));
        }

        let summary = self.model.fetch_summary(term).await?;
        // A whitespace-only extract yields no sentence and counts as missing.
        let sentences = summary
            .text()
            .and_then(normalize_to_five)
            .ok_or_else(|| Error::not_found("Keine Erklärung verfügbar"))?;

        Ok(Explanation {
            term: term.to_string(),
            sentences,
        })
    }
}
