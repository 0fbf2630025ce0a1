use std::collections::HashMap;
use wiki_core::{Article, Error, Result, Summary, SummaryModel};

/// In-process summary source with a fixed set of terms.
#[derive(Debug, Clone, Default)]
pub struct DummyModel {
    summaries: HashMap<String, Summary>,
}

impl DummyModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers for each article title with its intro followed by its body.
    pub fn from_articles<'a>(articles: impl IntoIterator<Item = &'a Article>) -> Self {
        articles.into_iter().fold(Self::new(), |model, article| {
            let extract = std::iter::once(article.intro.as_str())
                .chain(article.sentences.iter().map(String::as_str))
                .collect::<Vec<_>>()
                .join(" ");
            model.with_summary(
                article.title.clone(),
                Summary {
                    extract: Some(extract),
                    description: Some(article.intro.clone()),
                },
            )
        })
    }

    pub fn with_summary(mut self, term: impl Into<String>, summary: Summary) -> Self {
        self.summaries.insert(term.into(), summary);
        self
    }

    pub fn with_extract(self, term: impl Into<String>, extract: impl Into<String>) -> Self {
        self.with_summary(
            term,
            Summary {
                extract: Some(extract.into()),
                description: None,
            },
        )
    }
}

#[async_trait::async_trait]
impl SummaryModel for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn fetch_summary(&self, term: &str) -> Result<Summary> {
        self.summaries
            .get(term)
            .cloned()
            .ok_or_else(|| Error::not_found("Keine Zusammenfassung gefunden"))
    }
}
