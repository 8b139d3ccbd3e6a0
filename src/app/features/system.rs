use crate::app::{
    action::{Action, UpdateResult},
    state::AppState,
};
use std::time::Instant;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::Tick => {
            if state
                .status_clear_time
                .is_some_and(|deadline| Instant::now() >= deadline)
            {
                state.status = None;
                state.status_clear_time = None;
            }
            UpdateResult::Handled(None)
        }
        Action::Quit => {
            state.should_quit = true;
            UpdateResult::Handled(None)
        }
        Action::Resize(_, _) => UpdateResult::Handled(None),
        _ => UpdateResult::NotHandled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{StatusSeverity, Surface};
    use std::time::Duration;

    #[test]
    fn test_tick_expires_status() {
        let mut state = AppState::for_surface(Surface::Panel);
        state.status_ttl = Duration::ZERO;
        state.set_status(StatusSeverity::Info, "Saved 'omg'");
        assert!(state.status.is_some());

        update(&mut state, &Action::Tick);
        assert!(state.status.is_none());
        assert!(state.status_clear_time.is_none());
    }

    #[test]
    fn test_status_survives_until_deadline() {
        let mut state = AppState::for_surface(Surface::Panel);
        state.status_ttl = Duration::from_secs(60);
        state.set_status(StatusSeverity::Info, "Saved 'omg'");
        update(&mut state, &Action::Tick);
        assert!(state.status.is_some());
    }
}
