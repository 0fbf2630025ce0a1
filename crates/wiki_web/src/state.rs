use std::sync::Arc;
use wiki_core::{ArticleCatalog, Result};
use wiki_storage::MemoryCatalog;
use wiki_summary::{create_model, Config, Explainer};

pub struct AppState {
    pub catalog: Arc<dyn ArticleCatalog>,
    pub explainer: Explainer,
}

impl AppState {
    pub fn new(catalog: Arc<dyn ArticleCatalog>, explainer: Explainer) -> Self {
        Self { catalog, explainer }
    }

    /// State over the embedded dataset and the configured summary source.
    pub fn from_config(config: &Config) -> Result<Self> {
        let catalog = MemoryCatalog::load()?;
        let explainer = Explainer::new(create_model(config)?);
        tracing::info!(
            "📚 Loaded {} articles, explaining via {}",
            catalog.dataset().len(),
            explainer.model_name()
        );
        Ok(Self::new(Arc::new(catalog), explainer))
    }
}
