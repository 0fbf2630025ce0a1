use crate::types::{Article, ArticleSnippet};
use crate::Result;

/// Read-only queries over the article dataset.
pub trait ArticleCatalog: Send + Sync {
    /// All articles, or those tagged with `category`, ordered by title.
    fn list_articles(&self, category: Option<&str>) -> Vec<ArticleSnippet>;

    fn get_article(&self, slug: &str) -> Result<Article>;

    /// Case-insensitive title substring search, capped in size.
    fn search(&self, query: &str) -> Vec<ArticleSnippet>;

    /// Distinct categories in ascending order.
    fn list_categories(&self) -> Vec<String>;
}
