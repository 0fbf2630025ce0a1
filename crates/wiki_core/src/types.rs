use serde::{Deserialize, Serialize};

/// Every article body and every explanation has exactly this many sentences.
pub const SENTENCE_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub slug: String,
    pub title: String,
    pub intro: String,
    pub sentences: [String; SENTENCE_COUNT],
    pub categories: Vec<String>,
}

impl Article {
    pub fn snippet(&self) -> ArticleSnippet {
        ArticleSnippet::from(self)
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Key used for title ordering in listings and search results.
    pub fn sort_key(&self) -> String {
        self.title.to_lowercase()
    }
}

/// An article without its sentence body, as returned by listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSnippet {
    pub slug: String,
    pub title: String,
    pub intro: String,
    pub categories: Vec<String>,
}

impl From<&Article> for ArticleSnippet {
    fn from(article: &Article) -> Self {
        Self {
            slug: article.slug.clone(),
            title: article.title.clone(),
            intro: article.intro.clone(),
            categories: article.categories.clone(),
        }
    }
}

/// Payload of the external summary service. Both fields are optional there.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(default)]
    pub extract: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Summary {
    /// The extract, or the description when the extract is missing or empty.
    pub fn text(&self) -> Option<&str> {
        [self.extract.as_deref(), self.description.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explanation {
    pub term: String,
    pub sentences: [String; SENTENCE_COUNT],
}
