use super::action::Action;
use super::state::{AppState, PanelFocus, SurfaceState};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Key bindings per input context. Keys with no binding fall through to the
/// focused text input, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    pub palette: HashMap<KeyEvent, Action>,
    pub table: HashMap<KeyEvent, Action>,
    pub form: HashMap<KeyEvent, Action>,
    pub confirm: HashMap<KeyEvent, Action>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut palette = HashMap::new();
        let mut table = HashMap::new();
        let mut form = HashMap::new();
        let mut confirm = HashMap::new();

        // --- Search Palette ---
        palette.insert(key(KeyCode::Down), Action::SelectNext);
        palette.insert(key(KeyCode::Up), Action::SelectPrev);
        palette.insert(key(KeyCode::Enter), Action::CommitSelection);
        palette.insert(key(KeyCode::Esc), Action::DismissPalette);
        palette.insert(ctrl('c'), Action::Quit);

        // --- Panel: table ---
        table.insert(chr('j'), Action::TableNext);
        table.insert(key(KeyCode::Down), Action::TableNext);
        table.insert(chr('k'), Action::TablePrev);
        table.insert(key(KeyCode::Up), Action::TablePrev);
        table.insert(key(KeyCode::Enter), Action::EditSelected);
        table.insert(chr('e'), Action::EditSelected);
        table.insert(chr('d'), Action::RequestDeleteSelected);
        table.insert(key(KeyCode::Delete), Action::RequestDeleteSelected);
        table.insert(chr('r'), Action::ReloadSnippets);
        table.insert(chr('a'), Action::FocusForm);
        table.insert(key(KeyCode::Tab), Action::FocusForm);
        table.insert(chr('q'), Action::Quit);
        table.insert(key(KeyCode::Esc), Action::Quit);
        table.insert(ctrl('c'), Action::Quit);

        // --- Panel: form ---
        form.insert(key(KeyCode::Esc), Action::FocusTable);
        form.insert(key(KeyCode::Tab), Action::NextField);
        form.insert(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT), Action::NextField);
        form.insert(key(KeyCode::Enter), Action::SubmitForm);
        form.insert(ctrl('s'), Action::SubmitForm);
        form.insert(ctrl('n'), Action::ClearForm);
        form.insert(ctrl('c'), Action::Quit);

        // --- Panel: delete confirmation ---
        confirm.insert(chr('y'), Action::ConfirmDelete(true));
        confirm.insert(key(KeyCode::Enter), Action::ConfirmDelete(true));
        confirm.insert(chr('n'), Action::ConfirmDelete(false));
        confirm.insert(key(KeyCode::Esc), Action::ConfirmDelete(false));

        Self {
            palette,
            table,
            form,
            confirm,
        }
    }
}

impl KeyMap {
    pub fn get_action(&self, event: KeyEvent, state: &AppState) -> Option<Action> {
        let event = normalize(event);
        let map = match &state.surface {
            SurfaceState::Palette(_) => &self.palette,
            SurfaceState::Panel(panel) if panel.confirm.is_some() => &self.confirm,
            SurfaceState::Panel(panel) => match panel.focus {
                PanelFocus::Table => &self.table,
                PanelFocus::Form => &self.form,
            },
        };
        map.get(&event).cloned()
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn chr(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

// Drops kind/state and the implicit SHIFT on upper-case letters
fn normalize(event: KeyEvent) -> KeyEvent {
    match event.code {
        KeyCode::Char(c) if event.modifiers == KeyModifiers::SHIFT => {
            KeyEvent::new(KeyCode::Char(c.to_ascii_lowercase()), KeyModifiers::empty())
        }
        KeyCode::Char(c) => KeyEvent::new(
            KeyCode::Char(c.to_ascii_lowercase()),
            event.modifiers,
        ),
        code => KeyEvent::new(code, event.modifiers),
    }
}
