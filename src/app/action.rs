use crate::app::command::Command;
use crate::domain::models::{OperationResult, Snippet, SnippetResult, TranslationMap};

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Palette: navigation ---
    SelectNext, // ArrowDown
    SelectPrev, // ArrowUp

    // --- Palette: query & commit ---
    SearchInput(crossterm::event::KeyEvent), // Edit the search box
    QueryChanged(String),                    // Search box text changed
    CommitSelection,                         // Enter
    CommitAt(usize),                         // Click on a result row
    DismissPalette,                          // Escape

    // --- Panel: table ---
    TableNext,
    TablePrev,
    TableSelect(usize),
    ReloadSnippets,
    EditSelected,          // Copy the selected row into the form
    RequestDeleteSelected, // Delete key on the table
    RequestDelete(String), // Open the confirmation for an abbreviation
    ConfirmDelete(bool),   // Answer to the confirmation

    // --- Panel: form ---
    FocusTable,
    FocusForm,
    NextField,
    FormInput(crossterm::event::KeyEvent),
    SubmitForm,
    ClearForm,

    // --- Async Results (The "Callback") ---
    // Sent back by bridge tasks to the main loop
    SearchCompleted {
        seq: u64,
        results: Vec<SnippetResult>,
    },
    SearchFailed {
        seq: u64,
        error: String,
    },
    TranslationsLoaded(TranslationMap),
    TranslationsFailed(String),
    SnippetsLoaded(Vec<Snippet>),
    SnippetsLoadFailed(String),
    UpsertCompleted(Result<OperationResult, String>),
    DeleteCompleted(String, Result<OperationResult, String>),
    SurfaceClosed,
}
