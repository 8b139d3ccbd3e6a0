use crate::app::{
    action::{Action, UpdateResult},
    state::AppState,
};
use tracing::{debug, warn};

/// Applies the translation map to the surface's declared labels.
pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::TranslationsLoaded(translations) => {
            state.labels.apply(translations);
            state.translations_settled = true;
            debug!(keys = translations.len(), "translations applied");
            UpdateResult::Handled(None)
        }
        Action::TranslationsFailed(error) => {
            // Defaults stay in place
            warn!(%error, "failed to load translations");
            state.translations_settled = true;
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}
