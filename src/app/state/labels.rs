use crate::domain::models::TranslationMap;
use std::collections::BTreeMap;

/// Display slots whose text comes from the translation resource.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LabelSlot {
    AppTitle,
    SearchPlaceholder,
    SettingsTitle,
    ManageSnippets,
    AddNewSnippet,
    AbbreviationLabel,
    ExpansionLabel,
    SaveButton,
    DeleteButton,
}

impl LabelSlot {
    pub const PALETTE: &'static [LabelSlot] = &[LabelSlot::AppTitle, LabelSlot::SearchPlaceholder];

    pub const PANEL: &'static [LabelSlot] = &[
        LabelSlot::SettingsTitle,
        LabelSlot::ManageSnippets,
        LabelSlot::AddNewSnippet,
        LabelSlot::AbbreviationLabel,
        LabelSlot::ExpansionLabel,
        LabelSlot::SaveButton,
        LabelSlot::DeleteButton,
    ];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            LabelSlot::AppTitle => "app_title",
            LabelSlot::SearchPlaceholder => "search_placeholder",
            LabelSlot::SettingsTitle => "settings_title",
            LabelSlot::ManageSnippets => "manage_snippets",
            LabelSlot::AddNewSnippet => "add_new_snippet",
            LabelSlot::AbbreviationLabel => "abbreviation_label",
            LabelSlot::ExpansionLabel => "expansion_label",
            LabelSlot::SaveButton => "save_button",
            LabelSlot::DeleteButton => "delete_button",
        }
    }

    #[must_use]
    pub fn default_text(self) -> &'static str {
        match self {
            LabelSlot::AppTitle => "Tylex",
            LabelSlot::SearchPlaceholder => "Search snippets...",
            LabelSlot::SettingsTitle => "Tylex Settings",
            LabelSlot::ManageSnippets => "Snippets",
            LabelSlot::AddNewSnippet => "Add / Update Snippet",
            LabelSlot::AbbreviationLabel => "Abbreviation",
            LabelSlot::ExpansionLabel => "Expansion",
            LabelSlot::SaveButton => "Save",
            LabelSlot::DeleteButton => "Delete",
        }
    }
}

/// Text for the slots a surface declared at construction.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Labels {
    slots: BTreeMap<LabelSlot, String>,
}

impl Labels {
    #[must_use]
    pub fn declare(slots: &[LabelSlot]) -> Self {
        Self {
            slots: slots
                .iter()
                .map(|slot| (*slot, slot.default_text().to_string()))
                .collect(),
        }
    }

    /// Rewrites every declared slot from `translations`. Missing or blank
    /// entries fall back to the slot default.
    pub fn apply(&mut self, translations: &TranslationMap) {
        for (slot, text) in &mut self.slots {
            *text = match translations.get(slot.key()) {
                Some(t) if !t.trim().is_empty() => t.clone(),
                _ => slot.default_text().to_string(),
            };
        }
    }

    #[must_use]
    pub fn get(&self, slot: LabelSlot) -> &str {
        self.slots
            .get(&slot)
            .map_or_else(|| slot.default_text(), String::as_str)
    }
}
