use crate::app::{action::Action, command::Command};
use crate::domain::bridge::Bridge;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Latest issued search stamp, shared with in-flight search tasks so a
/// debounced search can skip its bridge call once superseded.
#[derive(Debug, Clone, Default)]
pub struct SearchGate {
    latest: Arc<AtomicU64>,
    debounce: Duration,
}

impl SearchGate {
    #[must_use]
    pub fn new(debounce: Duration) -> Self {
        Self {
            latest: Arc::new(AtomicU64::new(0)),
            debounce,
        }
    }

    pub fn issue(&self, seq: u64) {
        self.latest.fetch_max(seq, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_current(&self, seq: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == seq
    }

    /// Waits out the debounce window. Returns `false` if `seq` was superseded.
    async fn settle(&self, seq: u64) -> bool {
        if self.debounce.is_zero() {
            return true;
        }
        tokio::time::sleep(self.debounce).await;
        self.is_current(seq)
    }
}

/// Everything a command needs to run against the bridge.
#[derive(Clone)]
pub struct CommandContext {
    pub bridge: Arc<dyn Bridge>,
    pub tx: mpsc::Sender<Action>,
    pub gate: SearchGate,
}

impl CommandContext {
    pub fn new(bridge: Arc<dyn Bridge>, tx: mpsc::Sender<Action>, debounce: Duration) -> Self {
        Self {
            bridge,
            tx,
            gate: SearchGate::new(debounce),
        }
    }
}

/// Runs `command` on tokio tasks. Outcomes come back as actions; bridge
/// errors never escape.
pub fn handle_command(command: Command, ctx: &CommandContext) {
    let bridge = ctx.bridge.clone();
    let tx = ctx.tx.clone();

    match command {
        Command::Search { seq, query } => {
            ctx.gate.issue(seq);
            let gate = ctx.gate.clone();
            tokio::spawn(async move {
                if !gate.settle(seq).await {
                    debug!(seq, %query, "search superseded before dispatch");
                    return;
                }
                match bridge.search_snippets(&query).await {
                    Ok(results) => {
                        let _ = tx.send(Action::SearchCompleted { seq, results }).await;
                    }
                    Err(e) => {
                        let _ = tx
                            .send(Action::SearchFailed {
                                seq,
                                error: format!("{e:#}"),
                            })
                            .await;
                    }
                }
            });
        }
        Command::Paste(abbv) => {
            tokio::spawn(async move {
                if let Err(e) = bridge.paste_text(&abbv).await {
                    warn!(%abbv, error = %format!("{e:#}"), "paste failed");
                }
            });
        }
        Command::CloseSearchWindow => {
            tokio::spawn(async move {
                match bridge.close_search_window().await {
                    Ok(()) => {
                        let _ = tx.send(Action::SurfaceClosed).await;
                    }
                    Err(e) => warn!(error = %format!("{e:#}"), "closing the palette failed"),
                }
            });
        }
        Command::LoadTranslations => {
            tokio::spawn(async move {
                let action = match bridge.get_translations().await {
                    Ok(translations) => Action::TranslationsLoaded(translations),
                    Err(e) => Action::TranslationsFailed(format!("{e:#}")),
                };
                let _ = tx.send(action).await;
            });
        }
        Command::ReloadSnippets => {
            tokio::spawn(async move {
                let action = match bridge.get_all_snippets().await {
                    Ok(rows) => Action::SnippetsLoaded(rows),
                    Err(e) => Action::SnippetsLoadFailed(format!("{e:#}")),
                };
                let _ = tx.send(action).await;
            });
        }
        Command::UpsertSnippet(snippet) => {
            tokio::spawn(async move {
                let result = bridge
                    .add_or_update_snippet(snippet)
                    .await
                    .map_err(|e| format!("{e:#}"));
                let _ = tx.send(Action::UpsertCompleted(result)).await;
            });
        }
        Command::DeleteSnippet(abbv) => {
            tokio::spawn(async move {
                let result = bridge
                    .delete_snippet(&abbv)
                    .await
                    .map_err(|e| format!("{e:#}"));
                let _ = tx.send(Action::DeleteCompleted(abbv, result)).await;
            });
        }
        Command::Batch(commands) => {
            for command in commands {
                handle_command(command, ctx);
            }
        }
    }
}
