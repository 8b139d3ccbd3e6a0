use crate::domain::models::{OperationResult, Snippet, SnippetResult, TranslationMap};
use anyhow::Result;
use async_trait::async_trait;

/// Request/response boundary to the snippet backend and its host.
///
/// Every call may suspend. Failures are host-specific; callers turn them into
/// actions instead of letting them escape into the render path.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Bridge: Send + Sync {
    // An empty query returns the default listing
    async fn search_snippets(&self, query: &str) -> Result<Vec<SnippetResult>>;

    // Fire-and-forget from the controller's point of view
    async fn paste_text(&self, abbv: &str) -> Result<()>;

    async fn close_search_window(&self) -> Result<()>;

    async fn get_translations(&self) -> Result<TranslationMap>;

    // Full snapshot for the management panel
    async fn get_all_snippets(&self) -> Result<Vec<Snippet>>;

    // Creates when the abbreviation is unknown, updates otherwise
    async fn add_or_update_snippet(&self, snippet: Snippet) -> Result<OperationResult>;

    async fn delete_snippet(&self, abbv: &str) -> Result<OperationResult>;
}
