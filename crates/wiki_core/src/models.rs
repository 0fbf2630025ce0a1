use async_trait::async_trait;
use std::fmt;
use crate::types::Summary;
use crate::Result;

#[async_trait]
pub trait SummaryModel: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Fetch the upstream summary for a term. A term the source does not
    /// know yields `Error::NotFound`.
    async fn fetch_summary(&self, term: &str) -> Result<Summary>;
}
