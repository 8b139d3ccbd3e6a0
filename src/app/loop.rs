use crate::app::{
    action::Action,
    command::Command,
    config::Config,
    features::bridge::{handle_command, CommandContext},
    input::map_event_to_action,
    reducer,
    state::{AppState, Surface},
    ui,
};
use crate::domain::bridge::Bridge;

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{interval, timeout_at, Instant};
use tracing::{debug, info, warn};

const TICK_RATE: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopSettings {
    pub search_debounce: Duration,
    pub translation_timeout: Duration,
}

impl Default for LoopSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for LoopSettings {
    fn from(config: &Config) -> Self {
        Self {
            search_debounce: Duration::from_millis(config.search_debounce_ms),
            translation_timeout: Duration::from_millis(config.translation_timeout_ms),
        }
    }
}

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'_>,
    bridge: Arc<dyn Bridge>,
    settings: LoopSettings,
) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    // Polls so the reader notices the loop has gone and the runtime can shut down
    tokio::task::spawn_blocking(move || {
        while !event_tx.is_closed() {
            match event::poll(TICK_RATE).and_then(|ready| ready.then(event::read).transpose()) {
                Ok(Some(evt)) => {
                    if event_tx.blocking_send(Ok(evt)).is_err() {
                        break;
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    let _ = event_tx.blocking_send(Err(e));
                    break;
                }
            }
        }
    });

    run_loop_with_events(terminal, app_state, bridge, settings, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'_>,
    bridge: Arc<dyn Bridge>,
    settings: LoopSettings,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let ctx = CommandContext::new(bridge, action_tx, settings.search_debounce);
    let mut interval = interval(TICK_RATE);

    // --- Startup ---
    info!(surface = ?app_state.kind(), "starting controller");
    handle_command(Command::LoadTranslations, &ctx);
    let initial = match app_state.kind() {
        Surface::Palette => Action::QueryChanged(String::new()),
        Surface::Panel => Action::ReloadSnippets,
    };
    dispatch(&mut app_state, initial, &ctx);

    // Labels must be in place before the first frame
    let deadline = Instant::now() + settings.translation_timeout;
    while !app_state.translations_settled {
        match timeout_at(deadline, action_rx.recv()).await {
            Ok(Some(action)) => dispatch(&mut app_state, action, &ctx),
            Ok(None) => break,
            Err(_) => {
                warn!(
                    timeout_ms = settings.translation_timeout.as_millis() as u64,
                    "translations not ready, rendering defaults"
                );
                break;
            }
        }
    }

    while !app_state.should_quit {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &mut app_state);
        })?;

        // --- 2. Event Handling (TEA Runtime) ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = res?;
                map_event_to_action(event, &app_state, terminal.size()?)
            },

            // Async Results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            dispatch(&mut app_state, action, &ctx);
        }
    }

    debug!("controller loop finished");
    Ok(())
}

fn dispatch(app_state: &mut AppState, action: Action, ctx: &CommandContext) {
    if let Some(command) = reducer::update(app_state, action) {
        handle_command(command, ctx);
    }
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
