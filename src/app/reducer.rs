use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::AppState,
};
use tracing::trace;

type Feature = fn(&mut AppState, &Action) -> UpdateResult;

const FEATURES: [Feature; 4] = [
    features::system::update,
    features::translations::update,
    features::palette::update,
    features::panel::update,
];

/// Applies `action` to the state and returns the side effect it asks for.
pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    for feature in FEATURES {
        if let UpdateResult::Handled(command) = feature(state, &action) {
            return command;
        }
    }
    trace!(?action, "action not handled by the active surface");
    None
}
