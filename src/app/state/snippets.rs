use crate::domain::models::Snippet;

/// Read-through cache of the backend's snippet set. Only ever replaced
/// wholesale from a fresh fetch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SnippetTable {
    rows: Vec<Snippet>,
    selected: Option<usize>,
    pub loaded: bool,
}

impl SnippetTable {
    pub fn replace(&mut self, rows: Vec<Snippet>) {
        self.selected = match (self.selected, rows.len()) {
            (_, 0) => None,
            (Some(i), len) => Some(i.min(len - 1)),
            (None, _) => Some(0),
        };
        self.rows = rows;
        self.loaded = true;
    }

    pub fn select_next(&mut self) {
        if let Some(i) = self.selected {
            self.selected = Some((i + 1).min(self.rows.len().saturating_sub(1)));
        }
    }

    pub fn select_prev(&mut self) {
        if let Some(i) = self.selected {
            self.selected = Some(i.saturating_sub(1));
        }
    }

    pub fn select(&mut self, index: usize) {
        if !self.rows.is_empty() {
            self.selected = Some(index.min(self.rows.len() - 1));
        }
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn selected_snippet(&self) -> Option<&Snippet> {
        self.selected.and_then(|i| self.rows.get(i))
    }

    #[must_use]
    pub fn rows(&self) -> &[Snippet] {
        &self.rows
    }

    #[must_use]
    pub fn contains(&self, abbv: &str) -> bool {
        self.rows.iter().any(|s| s.abbv == abbv)
    }
}
