use crate::domain::models::Snippet;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Search { seq: u64, query: String },
    Paste(String),
    CloseSearchWindow,
    LoadTranslations,
    ReloadSnippets,
    UpsertSnippet(Snippet),
    DeleteSnippet(String),
    // Dispatched in order
    Batch(Vec<Command>),
}
