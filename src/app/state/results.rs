use crate::domain::models::SnippetResult;

/// Palette state derived from the result list.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PaletteMode {
    IdleWithResults,
    IdleEmpty,
}

/// Ordered search results plus the selection cursor.
///
/// `selected` is `Some` exactly when `items` is non-empty, and always points
/// inside `items`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultList {
    items: Vec<SnippetResult>,
    selected: Option<usize>,
}

impl ResultList {
    pub fn replace(&mut self, items: Vec<SnippetResult>) {
        self.selected = if items.is_empty() { None } else { Some(0) };
        self.items = items;
    }

    pub fn clear(&mut self) {
        self.replace(Vec::new());
    }

    /// Moves the cursor by `delta`, stopping at either end.
    pub fn move_selection(&mut self, delta: isize) {
        if let Some(current) = self.selected {
            let last = self.items.len() - 1;
            let target = current.saturating_add_signed(delta).min(last);
            self.selected = Some(target);
        }
    }

    pub fn select(&mut self, index: usize) {
        if !self.items.is_empty() {
            self.selected = Some(index.min(self.items.len() - 1));
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&SnippetResult> {
        self.selected.and_then(|i| self.items.get(i))
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn items(&self) -> &[SnippetResult] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn mode(&self) -> PaletteMode {
        if self.items.is_empty() {
            PaletteMode::IdleEmpty
        } else {
            PaletteMode::IdleWithResults
        }
    }
}
