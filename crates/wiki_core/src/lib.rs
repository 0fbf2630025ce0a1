pub mod error;
pub mod models;
pub mod storage;
pub mod types;

pub use error::{Error, Result};
pub use models::SummaryModel;
pub use storage::ArticleCatalog;
pub use types::{Article, ArticleSnippet, Explanation, Summary, SENTENCE_COUNT};
