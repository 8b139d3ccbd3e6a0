use super::input::AppTextArea;
use crate::domain::models::Snippet;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FormField {
    Abbreviation,
    Expansion,
}

/// Create/update form of the management panel.
#[derive(Debug, Clone, PartialEq)]
pub struct SnippetForm<'a> {
    pub abbv: AppTextArea<'a>,
    pub value: AppTextArea<'a>,
    pub focus: FormField,
    pub error: Option<String>,
    pub submitting: bool,
}

impl Default for SnippetForm<'_> {
    fn default() -> Self {
        Self {
            abbv: AppTextArea::default(),
            value: AppTextArea::default(),
            focus: FormField::Abbreviation,
            error: None,
            submitting: false,
        }
    }
}

impl<'a> SnippetForm<'a> {
    #[must_use]
    pub fn abbv_text(&self) -> String {
        self.abbv.text()
    }

    #[must_use]
    pub fn value_text(&self) -> String {
        self.value.text()
    }

    #[must_use]
    pub fn to_snippet(&self) -> Snippet {
        Snippet::new(self.abbv_text(), self.value_text())
    }

    pub fn focused_mut(&mut self) -> &mut AppTextArea<'a> {
        match self.focus {
            FormField::Abbreviation => &mut self.abbv,
            FormField::Expansion => &mut self.value,
        }
    }

    pub fn load(&mut self, snippet: &Snippet) {
        self.abbv = AppTextArea::with_text(&snippet.abbv);
        self.value = AppTextArea::with_text(&snippet.value);
        self.focus = FormField::Expansion;
        self.error = None;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
