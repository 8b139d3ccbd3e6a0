use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppState, AppTextArea, PaletteState, StatusSeverity},
};
use tracing::{debug, info, warn};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    let Some(palette) = state.palette_mut() else {
        return UpdateResult::NotHandled;
    };

    match action {
        Action::SelectNext => {
            palette.results.move_selection(1);
            UpdateResult::Handled(None)
        }
        Action::SelectPrev => {
            palette.results.move_selection(-1);
            UpdateResult::Handled(None)
        }
        Action::SearchInput(key) => {
            if !palette.search.input(*key) {
                return UpdateResult::Handled(None);
            }
            // The search box is a single line
            if palette.search.lines().len() > 1 {
                palette.search = AppTextArea::with_text(&palette.search.lines().concat());
            }
            let query = palette.search.text();
            UpdateResult::Handled(Some(dispatch_query(palette, &query)))
        }
        Action::QueryChanged(query) => UpdateResult::Handled(Some(dispatch_query(palette, query))),
        Action::CommitSelection => UpdateResult::Handled(commit(palette)),
        Action::CommitAt(idx) => {
            if *idx >= palette.results.len() {
                return UpdateResult::Handled(None);
            }
            palette.results.select(*idx);
            UpdateResult::Handled(commit(palette))
        }
        Action::DismissPalette => UpdateResult::Handled(Some(Command::CloseSearchWindow)),
        Action::SearchCompleted { seq, results } => {
            if palette.queries.is_latest(*seq) {
                palette.results.replace(results.clone());
            } else {
                debug!(
                    seq,
                    latest = palette.queries.latest(),
                    "discarding stale search results"
                );
            }
            UpdateResult::Handled(None)
        }
        Action::SearchFailed { seq, error } => {
            warn!(seq, %error, "search failed");
            if palette.queries.is_latest(*seq) {
                state.set_status(StatusSeverity::Warning, format!("Search failed: {error}"));
            }
            UpdateResult::Handled(None)
        }
        Action::SurfaceClosed => {
            state.should_quit = true;
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Stamps `query` as the newest search and asks the bridge for it.
fn dispatch_query(palette: &mut PaletteState, query: &str) -> Command {
    let seq = palette.queries.issue();
    debug!(seq, query, "dispatching search");
    Command::Search {
        seq,
        query: query.to_string(),
    }
}

/// Pastes the selected snippet and returns the palette to its initial listing.
fn commit(palette: &mut PaletteState) -> Option<Command> {
    let abbv = palette.results.current()?.abbv.clone();
    info!(%abbv, "committing snippet");

    palette.search = AppTextArea::default();
    palette.results.clear();
    let reset = dispatch_query(palette, "");

    Some(Command::Batch(vec![Command::Paste(abbv), reset]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::reducer;
    use crate::app::state::Surface;
    use crate::domain::models::SnippetResult;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn btw() -> Vec<SnippetResult> {
        vec![SnippetResult {
            abbv: "btw".to_string(),
            value: "by the way".to_string(),
            usage_count: 5,
        }]
    }

    fn rows(abbvs: &[&str]) -> Vec<SnippetResult> {
        abbvs
            .iter()
            .map(|a| SnippetResult {
                abbv: (*a).to_string(),
                value: format!("{a} value"),
                usage_count: 0,
            })
            .collect()
    }

    fn issue(state: &mut AppState, query: &str) -> u64 {
        match reducer::update(state, Action::QueryChanged(query.to_string())) {
            Some(Command::Search { seq, .. }) => seq,
            other => panic!("Expected Command::Search, got {other:?}"),
        }
    }

    #[test]
    fn test_arrow_navigation_and_enter_pastes() {
        let mut state = AppState::for_surface(Surface::Palette);
        let seq = issue(&mut state, "");
        reducer::update(&mut state, Action::SearchCompleted { seq, results: btw() });

        reducer::update(&mut state, Action::SelectNext);
        reducer::update(&mut state, Action::SelectPrev);
        assert_eq!(state.palette().unwrap().results.selected_index(), Some(0));

        let cmd = reducer::update(&mut state, Action::CommitSelection);
        let cmds = match cmd {
            Some(Command::Batch(cmds)) => cmds,
            other => panic!("Expected Command::Batch, got {other:?}"),
        };
        assert_eq!(cmds[0], Command::Paste("btw".to_string()));
        assert!(matches!(&cmds[1], Command::Search { query, .. } if query.is_empty()));

        let palette = state.palette().unwrap();
        assert!(palette.search.is_blank());
        assert!(palette.results.is_empty());
    }

    #[test]
    fn test_enter_without_results_is_noop() {
        let mut state = AppState::for_surface(Surface::Palette);
        assert_eq!(reducer::update(&mut state, Action::CommitSelection), None);
        assert_eq!(reducer::update(&mut state, Action::CommitAt(0)), None);
    }

    #[test]
    fn test_stale_results_do_not_overwrite_newer_query() {
        let mut state = AppState::for_surface(Surface::Palette);
        let a = issue(&mut state, "b");
        let b = issue(&mut state, "bt");

        reducer::update(
            &mut state,
            Action::SearchCompleted {
                seq: b,
                results: rows(&["btw"]),
            },
        );
        reducer::update(
            &mut state,
            Action::SearchCompleted {
                seq: a,
                results: rows(&["brb", "btw", "bbl"]),
            },
        );

        let results = &state.palette().unwrap().results;
        assert_eq!(results.len(), 1);
        assert_eq!(results.current().unwrap().abbv, "btw");
    }

    #[test]
    fn test_escape_requests_close_without_touching_model() {
        let mut state = AppState::for_surface(Surface::Palette);
        let seq = issue(&mut state, "");
        reducer::update(&mut state, Action::SearchCompleted { seq, results: rows(&["a", "b"]) });
        reducer::update(&mut state, Action::SelectNext);
        let before = state.palette().unwrap().clone();

        let cmd = reducer::update(&mut state, Action::DismissPalette);
        assert_eq!(cmd, Some(Command::CloseSearchWindow));
        assert_eq!(state.palette().unwrap(), &before);
        assert!(!state.should_quit);

        reducer::update(&mut state, Action::SurfaceClosed);
        assert!(state.should_quit);
    }

    #[test]
    fn test_typing_dispatches_query() {
        let mut state = AppState::for_surface(Surface::Palette);
        let cmd = reducer::update(
            &mut state,
            Action::SearchInput(KeyEvent::new(KeyCode::Char('o'), KeyModifiers::NONE)),
        );
        assert!(matches!(cmd, Some(Command::Search { ref query, .. }) if query == "o"));

        // Cursor movement doesn't change the text and issues nothing
        let cmd = reducer::update(
            &mut state,
            Action::SearchInput(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE)),
        );
        assert_eq!(cmd, None);
    }

    #[test]
    fn test_click_commits_that_row() {
        let mut state = AppState::for_surface(Surface::Palette);
        let seq = issue(&mut state, "");
        reducer::update(&mut state, Action::SearchCompleted { seq, results: rows(&["a", "b"]) });

        let cmd = reducer::update(&mut state, Action::CommitAt(1));
        let cmds = match cmd {
            Some(Command::Batch(cmds)) => cmds,
            other => panic!("Expected Command::Batch, got {other:?}"),
        };
        assert_eq!(cmds[0], Command::Paste("b".to_string()));
        assert_eq!(reducer::update(&mut state, Action::CommitAt(7)), None);
    }

    #[test]
    fn test_failed_search_keeps_results() {
        let mut state = AppState::for_surface(Surface::Palette);
        let seq = issue(&mut state, "");
        reducer::update(&mut state, Action::SearchCompleted { seq, results: rows(&["a"]) });
        let seq = issue(&mut state, "x");
        reducer::update(
            &mut state,
            Action::SearchFailed {
                seq,
                error: "backend gone".to_string(),
            },
        );

        assert_eq!(state.palette().unwrap().results.len(), 1);
        assert!(state.status.unwrap().message.contains("backend gone"));
    }
}
