pub mod backends;
pub mod dataset;

pub use backends::memory::{MemoryCatalog, SEARCH_LIMIT};
pub use dataset::Dataset;

pub mod prelude {
    pub use super::backends::memory::MemoryCatalog;
    pub use super::dataset::Dataset;
    pub use wiki_core::{Article, ArticleCatalog, ArticleSnippet, Error, Result};
}
