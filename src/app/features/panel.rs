use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppState, AppTextArea, DeleteConfirm, FormField, PanelFocus, StatusSeverity},
};
use tracing::{debug, info, warn};

const SAVE_FAILED: &str = "The snippet could not be saved.";

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    let Some(panel) = state.panel_mut() else {
        return UpdateResult::NotHandled;
    };

    match action {
        // --- Table ---
        Action::TableNext => {
            panel.table.select_next();
            UpdateResult::Handled(None)
        }
        Action::TablePrev => {
            panel.table.select_prev();
            UpdateResult::Handled(None)
        }
        Action::TableSelect(idx) => {
            panel.table.select(*idx);
            panel.focus = PanelFocus::Table;
            UpdateResult::Handled(None)
        }
        Action::ReloadSnippets => UpdateResult::Handled(Some(Command::ReloadSnippets)),
        Action::SnippetsLoaded(rows) => {
            debug!(count = rows.len(), "snippet table reloaded");
            panel.table.replace(rows.clone());
            UpdateResult::Handled(None)
        }
        Action::SnippetsLoadFailed(error) => {
            warn!(%error, "failed to load snippets");
            state.set_status(
                StatusSeverity::Error,
                format!("Failed to load snippets: {error}"),
            );
            UpdateResult::Handled(None)
        }
        Action::EditSelected => {
            if panel.form.submitting {
                return UpdateResult::Handled(None);
            }
            if let Some(snippet) = panel.table.selected_snippet().cloned() {
                panel.form.load(&snippet);
                panel.focus = PanelFocus::Form;
            }
            UpdateResult::Handled(None)
        }

        // --- Delete confirmation ---
        Action::RequestDeleteSelected => {
            if let Some(snippet) = panel.table.selected_snippet() {
                panel.confirm = Some(DeleteConfirm {
                    abbv: snippet.abbv.clone(),
                });
            }
            UpdateResult::Handled(None)
        }
        Action::RequestDelete(abbv) => {
            panel.confirm = Some(DeleteConfirm { abbv: abbv.clone() });
            UpdateResult::Handled(None)
        }
        Action::ConfirmDelete(accepted) => {
            let Some(pending) = panel.confirm.take() else {
                return UpdateResult::Handled(None);
            };
            if *accepted {
                info!(abbv = %pending.abbv, "deleting snippet");
                UpdateResult::Handled(Some(Command::DeleteSnippet(pending.abbv)))
            } else {
                debug!(abbv = %pending.abbv, "delete declined");
                UpdateResult::Handled(None)
            }
        }
        Action::DeleteCompleted(abbv, result) => {
            match result {
                Ok(r) if r.is_success() => {
                    state.set_status(StatusSeverity::Info, format!("Deleted '{abbv}'"));
                }
                Ok(r) => {
                    let message = r.message.clone().unwrap_or_default();
                    warn!(%abbv, %message, "delete rejected");
                    state.set_status(
                        StatusSeverity::Error,
                        format!("Could not delete '{abbv}': {message}"),
                    );
                }
                Err(error) => {
                    warn!(%abbv, %error, "delete failed");
                    state.set_status(
                        StatusSeverity::Error,
                        format!("Could not delete '{abbv}': {error}"),
                    );
                }
            }
            // The table reflects the backend either way
            UpdateResult::Handled(Some(Command::ReloadSnippets))
        }

        // --- Form ---
        Action::FocusTable => {
            panel.focus = PanelFocus::Table;
            UpdateResult::Handled(None)
        }
        Action::FocusForm => {
            panel.focus = PanelFocus::Form;
            UpdateResult::Handled(None)
        }
        Action::NextField => {
            panel.form.focus = match panel.form.focus {
                FormField::Abbreviation => FormField::Expansion,
                FormField::Expansion => FormField::Abbreviation,
            };
            UpdateResult::Handled(None)
        }
        Action::FormInput(key) => {
            if panel.form.submitting {
                debug!("form input ignored while saving");
                return UpdateResult::Handled(None);
            }
            let single_line = panel.form.focus == FormField::Abbreviation;
            let field = panel.form.focused_mut();
            // Expansions may span lines, abbreviations may not
            if field.input(*key) && single_line && field.lines().len() > 1 {
                *field = AppTextArea::with_text(&field.lines().concat());
            }
            UpdateResult::Handled(None)
        }
        Action::ClearForm => {
            if !panel.form.submitting {
                panel.form.reset();
            }
            UpdateResult::Handled(None)
        }
        Action::SubmitForm => {
            if panel.form.submitting {
                debug!("submit ignored, previous submission still in flight");
                return UpdateResult::Handled(None);
            }
            panel.form.submitting = true;
            panel.form.error = None;
            let snippet = panel.form.to_snippet();
            info!(abbv = %snippet.abbv, "submitting snippet");
            UpdateResult::Handled(Some(Command::UpsertSnippet(snippet)))
        }
        Action::UpsertCompleted(result) => {
            panel.form.submitting = false;
            match result {
                Ok(r) if r.is_success() => {
                    let abbv = panel.form.abbv_text();
                    panel.form.reset();
                    state.set_status(StatusSeverity::Info, format!("Saved '{abbv}'"));
                    UpdateResult::Handled(Some(Command::ReloadSnippets))
                }
                Ok(r) => {
                    let message = r.message.clone().unwrap_or_else(|| SAVE_FAILED.to_string());
                    debug!(%message, "snippet rejected");
                    panel.form.error = Some(message);
                    UpdateResult::Handled(None)
                }
                Err(error) => {
                    warn!(%error, "saving snippet failed");
                    panel.form.error = Some(format!("{SAVE_FAILED} ({error})"));
                    UpdateResult::Handled(None)
                }
            }
        }
        _ => UpdateResult::NotHandled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::reducer;
    use crate::app::state::Surface;
    use crate::domain::models::{OperationResult, Snippet};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn panel_with(rows: Vec<Snippet>) -> AppState<'static> {
        let mut state = AppState::for_surface(Surface::Panel);
        reducer::update(&mut state, Action::SnippetsLoaded(rows));
        state
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            reducer::update(
                state,
                Action::FormInput(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)),
            );
        }
    }

    #[test]
    fn test_submit_success_resets_form_and_reloads() {
        let mut state = panel_with(Vec::new());
        reducer::update(&mut state, Action::FocusForm);
        type_text(&mut state, "omg");
        reducer::update(&mut state, Action::NextField);
        type_text(&mut state, "oh my god");

        let cmd = reducer::update(&mut state, Action::SubmitForm);
        assert_eq!(
            cmd,
            Some(Command::UpsertSnippet(Snippet::new("omg", "oh my god")))
        );

        let cmd = reducer::update(
            &mut state,
            Action::UpsertCompleted(Ok(OperationResult::success())),
        );
        assert_eq!(cmd, Some(Command::ReloadSnippets));
        assert!(state.panel().unwrap().form.abbv.is_blank());
        assert!(state.panel().unwrap().form.value.is_blank());

        reducer::update(
            &mut state,
            Action::SnippetsLoaded(vec![Snippet::new("omg", "oh my god")]),
        );
        assert!(state.panel().unwrap().table.contains("omg"));
    }

    #[test]
    fn test_submit_is_not_reentrant() {
        let mut state = panel_with(Vec::new());
        type_text(&mut state, "x");
        assert!(reducer::update(&mut state, Action::SubmitForm).is_some());
        assert_eq!(reducer::update(&mut state, Action::SubmitForm), None);

        reducer::update(
            &mut state,
            Action::UpsertCompleted(Ok(OperationResult::error("nope"))),
        );
        assert!(reducer::update(&mut state, Action::SubmitForm).is_some());
    }

    #[test]
    fn test_rejected_submit_keeps_form_and_shows_error() {
        let mut state = panel_with(Vec::new());
        type_text(&mut state, "omg");
        reducer::update(&mut state, Action::SubmitForm);

        let cmd = reducer::update(
            &mut state,
            Action::UpsertCompleted(Ok(OperationResult::error(
                "Missing abbreviation or value.",
            ))),
        );
        assert_eq!(cmd, None);
        let form = &state.panel().unwrap().form;
        assert_eq!(form.abbv_text(), "omg");
        assert_eq!(form.error.as_deref(), Some("Missing abbreviation or value."));
        assert!(!form.submitting);
    }

    #[test]
    fn test_bridge_failure_on_submit_is_inline() {
        let mut state = panel_with(Vec::new());
        type_text(&mut state, "omg");
        reducer::update(&mut state, Action::SubmitForm);
        let cmd = reducer::update(
            &mut state,
            Action::UpsertCompleted(Err("connection reset".to_string())),
        );
        assert_eq!(cmd, None);
        let form = &state.panel().unwrap().form;
        assert!(form.error.as_ref().unwrap().contains("connection reset"));
        assert_eq!(form.abbv_text(), "omg");
    }

    #[test]
    fn test_declined_delete_changes_nothing() {
        let mut state = panel_with(vec![Snippet::new("omg", "oh my god")]);
        let before = state.panel().unwrap().table.clone();

        reducer::update(&mut state, Action::RequestDelete("omg".to_string()));
        assert!(state.panel().unwrap().confirm.is_some());

        let cmd = reducer::update(&mut state, Action::ConfirmDelete(false));
        assert_eq!(cmd, None);
        assert!(state.panel().unwrap().confirm.is_none());
        assert_eq!(state.panel().unwrap().table, before);
    }

    #[test]
    fn test_confirmed_delete_calls_bridge_then_reloads() {
        let mut state = panel_with(vec![Snippet::new("omg", "oh my god")]);
        reducer::update(&mut state, Action::RequestDeleteSelected);

        let cmd = reducer::update(&mut state, Action::ConfirmDelete(true));
        assert_eq!(cmd, Some(Command::DeleteSnippet("omg".to_string())));

        let cmd = reducer::update(
            &mut state,
            Action::DeleteCompleted("omg".to_string(), Ok(OperationResult::success())),
        );
        assert_eq!(cmd, Some(Command::ReloadSnippets));
        reducer::update(&mut state, Action::SnippetsLoaded(Vec::new()));
        assert!(!state.panel().unwrap().table.contains("omg"));
    }

    #[test]
    fn test_failed_delete_still_reloads() {
        let mut state = panel_with(vec![Snippet::new("omg", "oh my god")]);
        let cmd = reducer::update(
            &mut state,
            Action::DeleteCompleted("omg".to_string(), Err("locked".to_string())),
        );
        assert_eq!(cmd, Some(Command::ReloadSnippets));
        assert!(state.status.unwrap().message.contains("locked"));
    }

    #[test]
    fn test_confirm_without_pending_is_noop() {
        let mut state = panel_with(Vec::new());
        assert_eq!(reducer::update(&mut state, Action::ConfirmDelete(true)), None);
    }

    #[test]
    fn test_edit_selected_loads_form() {
        let mut state = panel_with(vec![
            Snippet::new("btw", "by the way"),
            Snippet::new("omg", "oh my god"),
        ]);
        reducer::update(&mut state, Action::TableNext);
        reducer::update(&mut state, Action::EditSelected);

        let panel = state.panel().unwrap();
        assert_eq!(panel.focus, PanelFocus::Form);
        assert_eq!(panel.form.to_snippet(), Snippet::new("omg", "oh my god"));
    }

    #[test]
    fn test_edit_keeps_multiline_expansion() {
        let mut state = panel_with(vec![
            Snippet::new("addr", "1 Main St\n"),
            Snippet::new("sig", "Best,\nAlex"),
        ]);
        reducer::update(&mut state, Action::EditSelected);
        let cmd = reducer::update(&mut state, Action::SubmitForm);
        assert_eq!(
            cmd,
            Some(Command::UpsertSnippet(Snippet::new("addr", "1 Main St\n")))
        );
        reducer::update(
            &mut state,
            Action::UpsertCompleted(Ok(OperationResult::success())),
        );

        reducer::update(&mut state, Action::TableNext);
        reducer::update(&mut state, Action::EditSelected);
        type_text(&mut state, "!");
        let cmd = reducer::update(&mut state, Action::SubmitForm);
        assert_eq!(
            cmd,
            Some(Command::UpsertSnippet(Snippet::new("sig", "Best,\nAlex!")))
        );
    }

    #[test]
    fn test_abbreviation_stays_single_line() {
        let mut state = panel_with(Vec::new());
        reducer::update(&mut state, Action::FocusForm);
        type_text(&mut state, "om");
        reducer::update(
            &mut state,
            Action::FormInput(KeyEvent::new(KeyCode::Char('\n'), KeyModifiers::NONE)),
        );
        type_text(&mut state, "g");
        assert_eq!(state.panel().unwrap().form.abbv_text(), "omg");
    }

    #[test]
    fn test_typing_while_saving_is_ignored() {
        let mut state = panel_with(vec![Snippet::new("btw", "by the way")]);
        reducer::update(&mut state, Action::FocusForm);
        type_text(&mut state, "omg");
        reducer::update(&mut state, Action::SubmitForm);

        type_text(&mut state, "zzz");
        reducer::update(&mut state, Action::EditSelected);
        assert_eq!(state.panel().unwrap().form.abbv_text(), "omg");

        reducer::update(
            &mut state,
            Action::UpsertCompleted(Ok(OperationResult::success())),
        );
        assert_eq!(state.status.as_ref().unwrap().message, "Saved 'omg'");
    }

    #[test]
    fn test_failed_reload_keeps_table() {
        let mut state = panel_with(vec![Snippet::new("omg", "oh my god")]);
        reducer::update(&mut state, Action::SnippetsLoadFailed("timeout".to_string()));
        assert!(state.panel().unwrap().table.contains("omg"));
        assert!(state.status.is_some());
    }
}
