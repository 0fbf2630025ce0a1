use std::sync::Arc;
use wiki_core::{Error, Result, SummaryModel};
use wiki_storage::Dataset;
use crate::Config;

pub mod dummy;
pub mod wikipedia;

pub use dummy::DummyModel;
pub use wikipedia::WikipediaModel;

/// Build the summary source named in the config.
pub fn create_model(config: &Config) -> Result<Arc<dyn SummaryModel>> {
    let model: Arc<dyn SummaryModel> = match config.model_name.as_deref().unwrap_or("wikipedia") {
        "wikipedia" => Arc::new(WikipediaModel::new(config)?),
        "dummy" => Arc::new(DummyModel::from_articles(Dataset::load()?.articles())),
        other => {
            return Err(Error::invalid_argument(format!(
                "Unknown summary source: {other}. Available sources: wikipedia, dummy"
            )))
        }
    };
    tracing::debug!("Using summary source {}", model.name());
    Ok(model)
}
