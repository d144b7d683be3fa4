//! Project data loading
//!
//! Reads the project data document from disk asynchronously. The caller
//! decides what a failure means; for the gallery that is `Gallery::fail`
//! plus a static fallback render, never a crash.

use std::path::Path;

use crate::error::FolioError;
use crate::types::PortfolioData;

/// Read and parse the project data document at `path`.
///
/// IO failures and malformed payloads are both `Err`; a structurally valid
/// document with missing `projects`/`filters` keys parses as empty lists.
pub async fn load_portfolio(path: &Path) -> Result<PortfolioData, FolioError> {
    let bytes = tokio::fs::read(path).await?;
    let data: PortfolioData = serde_json::from_slice(&bytes)?;
    tracing::info!(
        path = %path.display(),
        projects = data.projects.len(),
        filters = data.filters.len(),
        "loaded portfolio data"
    );
    Ok(data)
}
