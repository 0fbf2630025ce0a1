use std::collections::BTreeSet;
use wiki_core::{Article, ArticleCatalog, ArticleSnippet, Error, Result};
use crate::Dataset;

/// Upper bound on search results.
pub const SEARCH_LIMIT: usize = 20;

/// Query service over an in-memory [`Dataset`].
#[derive(Debug, Clone)]
pub struct MemoryCatalog {
    dataset: Dataset,
}

impl MemoryCatalog {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    /// Catalog over the embedded article table.
    pub fn load() -> Result<Self> {
        Ok(Self::new(Dataset::load()?))
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    fn sorted<'a>(&self, articles: impl Iterator<Item = &'a Article>) -> Vec<&'a Article> {
        let mut articles: Vec<_> = articles.map(|a| (a.sort_key(), a)).collect();
        articles.sort_by(|(a, _), (b, _)| a.cmp(b));
        articles.into_iter().map(|(_, a)| a).collect()
    }
}

impl ArticleCatalog for MemoryCatalog {
    fn list_articles(&self, category: Option<&str>) -> Vec<ArticleSnippet> {
        let matching = self
            .dataset
            .articles()
            .iter()
            .filter(|a| category.map_or(true, |c| a.has_category(c)));
        self.sorted(matching).into_iter().map(ArticleSnippet::from).collect()
    }

    fn get_article(&self, slug: &str) -> Result<Article> {
        self.dataset
            .articles()
            .iter()
            .find(|a| a.slug == slug)
            .cloned()
            .ok_or_else(|| Error::not_found("Artikel nicht gefunden"))
    }

    fn search(&self, query: &str) -> Vec<ArticleSnippet> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        let matching = self
            .dataset
            .articles()
            .iter()
            .filter(|a| a.title.to_lowercase().contains(&query));
        self.sorted(matching)
            .into_iter()
            .take(SEARCH_LIMIT)
            .map(ArticleSnippet::from)
            .collect()
    }

    fn list_categories(&self) -> Vec<String> {
        self.dataset
            .articles()
            .iter()
            .flat_map(|a| a.categories.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
