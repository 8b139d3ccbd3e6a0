use crate::app::config::{Config, SeedSnippet};
use crate::domain::{
    bridge::Bridge,
    models::{OperationResult, Snippet, SnippetResult, TranslationMap},
};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::path::{Path, PathBuf};
use tokio::sync::{mpsc, RwLock};

const MISSING_FIELDS: &str = "Missing abbreviation or value.";

const ENGLISH: &[(&str, &str)] = &[
    ("app_title", "Tylex Snippets"),
    ("search_placeholder", "Search snippets..."),
    ("settings_title", "Tylex Settings & Snippets"),
    ("manage_snippets", "Manage Snippets"),
    ("add_new_snippet", "Add New Snippet"),
    ("abbreviation_label", "Abbreviation:"),
    ("expansion_label", "Expansion Text:"),
    ("save_button", "Save Snippet"),
    ("delete_button", "Delete"),
];

#[derive(Debug, Clone)]
struct Entry {
    abbv: String,
    value: String,
    usage_count: u64,
}

impl From<&SeedSnippet> for Entry {
    fn from(seed: &SeedSnippet) -> Self {
        Self {
            abbv: seed.abbv.clone(),
            value: seed.value.clone(),
            usage_count: seed.usage_count,
        }
    }
}

impl From<&Entry> for SeedSnippet {
    fn from(entry: &Entry) -> Self {
        Self {
            abbv: entry.abbv.clone(),
            value: entry.value.clone(),
            usage_count: entry.usage_count,
        }
    }
}

/// On-disk layout of the store file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct SnippetStore {
    snippets: Vec<SeedSnippet>,
}

/// In-process snippet store standing in for the host backend.
///
/// Pasting cannot inject keystrokes from a terminal, so expanded values are
/// pushed onto an outbox the caller drains after the UI exits.
pub struct LocalBridge {
    store: RwLock<Vec<Entry>>,
    language: String,
    result_limit: usize,
    outbox: mpsc::UnboundedSender<String>,
    path: Option<PathBuf>,
}

impl LocalBridge {
    /// A memory-only store seeded from `config`.
    pub fn new(config: &Config) -> (Self, mpsc::UnboundedReceiver<String>) {
        Self::build(config, &config.snippets, None)
    }

    /// A store backed by `path`. The file's snippets replace the config seeds
    /// once it exists; every change is written back.
    pub fn open(
        config: &Config,
        path: PathBuf,
    ) -> Result<(Self, mpsc::UnboundedReceiver<String>)> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No snippet store yet, seeding from config");
            return Ok(Self::build(config, &config.snippets, Some(path)));
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read snippet store {}", path.display()))?;
        let saved: SnippetStore = toml::from_str(&content)
            .with_context(|| format!("Failed to parse snippet store {}", path.display()))?;
        Ok(Self::build(config, &saved.snippets, Some(path)))
    }

    fn build(
        config: &Config,
        seeds: &[SeedSnippet],
        path: Option<PathBuf>,
    ) -> (Self, mpsc::UnboundedReceiver<String>) {
        let (outbox, rx) = mpsc::unbounded_channel();
        let mut entries: Vec<Entry> = Vec::with_capacity(seeds.len());
        for seed in seeds {
            // Later seeds overwrite earlier ones, abbreviations stay unique
            match entries.iter_mut().find(|e| e.abbv == seed.abbv) {
                Some(existing) => *existing = Entry::from(seed),
                None => entries.push(Entry::from(seed)),
            }
        }
        tracing::debug!(count = entries.len(), "Seeded local snippet store");

        let bridge = Self {
            store: RwLock::new(entries),
            language: config.language.clone(),
            result_limit: config.result_limit,
            outbox,
            path,
        };
        (bridge, rx)
    }

    /// Writes `entries` to the store file, if there is one. Callers hold the
    /// write lock so saves land in the order the changes were made.
    async fn persist(&self, entries: &[Entry]) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        write_store(path, entries)
            .await
            .with_context(|| format!("Failed to save snippet store {}", path.display()))
    }

    async fn ranked(&self, query: &str) -> Vec<Entry> {
        let needle = query.to_lowercase();
        let store = self.store.read().await;
        let mut matches: Vec<Entry> = store
            .iter()
            .filter(|e| {
                needle.is_empty()
                    || e.abbv.to_lowercase().contains(&needle)
                    || e.value.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();
        matches.sort_by(|a, b| {
            (Reverse(a.usage_count), &a.abbv).cmp(&(Reverse(b.usage_count), &b.abbv))
        });
        matches
    }
}

async fn write_store(path: &Path, entries: &[Entry]) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    let store = SnippetStore {
        snippets: entries.iter().map(SeedSnippet::from).collect(),
    };
    let content = toml::to_string(&store)?;
    tokio::fs::write(path, content).await?;
    Ok(())
}

#[async_trait]
impl Bridge for LocalBridge {
    async fn search_snippets(&self, query: &str) -> Result<Vec<SnippetResult>> {
        let mut matches = self.ranked(query).await;
        matches.truncate(self.result_limit);
        Ok(matches
            .into_iter()
            .map(|e| SnippetResult {
                abbv: e.abbv,
                value: e.value,
                usage_count: e.usage_count,
            })
            .collect())
    }

    async fn paste_text(&self, abbv: &str) -> Result<()> {
        let value = {
            let mut store = self.store.write().await;
            let value = match store.iter_mut().find(|e| e.abbv == abbv) {
                Some(entry) => {
                    entry.usage_count += 1;
                    entry.value.clone()
                }
                None => {
                    tracing::debug!(abbv, "Paste requested for unknown snippet");
                    return Ok(());
                }
            };
            // A lost usage bump must not cost the paste
            if let Err(error) = self.persist(&store).await {
                tracing::warn!(error = %format!("{error:#}"), "Usage count not saved");
            }
            value
        };
        // The receiver is gone only during shutdown
        let _ = self.outbox.send(value);
        Ok(())
    }

    async fn close_search_window(&self) -> Result<()> {
        Ok(())
    }

    async fn get_translations(&self) -> Result<TranslationMap> {
        if self.language != "en" {
            return Ok(TranslationMap::new());
        }
        Ok(ENGLISH
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect())
    }

    async fn get_all_snippets(&self) -> Result<Vec<Snippet>> {
        Ok(self
            .ranked("")
            .await
            .into_iter()
            .map(|e| Snippet::new(e.abbv, e.value))
            .collect())
    }

    async fn add_or_update_snippet(&self, snippet: Snippet) -> Result<OperationResult> {
        if snippet.abbv.is_empty() || snippet.value.is_empty() {
            return Ok(OperationResult::error(MISSING_FIELDS));
        }
        let mut store = self.store.write().await;
        match store.iter_mut().find(|e| e.abbv == snippet.abbv) {
            Some(entry) => {
                entry.value = snippet.value;
                entry.usage_count += 1;
            }
            None => store.push(Entry {
                abbv: snippet.abbv.clone(),
                value: snippet.value,
                usage_count: 0,
            }),
        }
        self.persist(&store).await?;
        tracing::info!(abbv = %snippet.abbv, "Saved snippet");
        Ok(OperationResult::success())
    }

    async fn delete_snippet(&self, abbv: &str) -> Result<OperationResult> {
        let mut store = self.store.write().await;
        store.retain(|e| e.abbv != abbv);
        self.persist(&store).await?;
        tracing::info!(abbv, "Deleted snippet");
        Ok(OperationResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(abbv: &str, value: &str, usage_count: u64) -> SeedSnippet {
        SeedSnippet {
            abbv: abbv.to_string(),
            value: value.to_string(),
            usage_count,
        }
    }

    fn bridge(seeds: Vec<SeedSnippet>) -> (LocalBridge, mpsc::UnboundedReceiver<String>) {
        let config = Config {
            snippets: seeds,
            ..Config::default()
        };
        LocalBridge::new(&config)
    }

    fn abbvs(results: &[SnippetResult]) -> Vec<&str> {
        results.iter().map(|r| r.abbv.as_str()).collect()
    }

    #[tokio::test]
    async fn test_search_orders_by_usage_then_abbv() -> Result<()> {
        let (bridge, _rx) = bridge(vec![
            seed("brb", "be right back", 1),
            seed("btw", "by the way", 5),
            seed("afaik", "as far as I know", 1),
            seed("omw", "on my way", 0),
        ]);

        let all = bridge.search_snippets("").await?;
        assert_eq!(abbvs(&all), vec!["btw", "afaik", "brb", "omw"]);

        // Matches on value, case-insensitively
        let way = bridge.search_snippets("WAY").await?;
        assert_eq!(abbvs(&way), vec!["btw", "omw"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_search_respects_limit() -> Result<()> {
        let seeds = (0..30).map(|i| seed(&format!("s{i:02}"), "x", 0)).collect();
        let config = Config {
            snippets: seeds,
            result_limit: 20,
            ..Config::default()
        };
        let (bridge, _rx) = LocalBridge::new(&config);

        assert_eq!(bridge.search_snippets("").await?.len(), 20);
        assert_eq!(bridge.get_all_snippets().await?.len(), 30);
        Ok(())
    }

    #[tokio::test]
    async fn test_upsert_inserts_then_updates() -> Result<()> {
        let (bridge, _rx) = bridge(vec![]);

        let res = bridge
            .add_or_update_snippet(Snippet::new("omg", "oh my god"))
            .await?;
        assert!(res.is_success());
        let found = bridge.search_snippets("omg").await?;
        assert_eq!(found[0].usage_count, 0);

        bridge
            .add_or_update_snippet(Snippet::new("omg", "oh my gosh"))
            .await?;
        let found = bridge.search_snippets("omg").await?;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].value, "oh my gosh");
        assert_eq!(found[0].usage_count, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_upsert_rejects_missing_fields() -> Result<()> {
        let (bridge, _rx) = bridge(vec![]);

        for snippet in [Snippet::new("", "value"), Snippet::new("abbv", "")] {
            let res = bridge.add_or_update_snippet(snippet).await?;
            assert!(!res.is_success());
            assert_eq!(res.message.as_deref(), Some(MISSING_FIELDS));
        }
        assert!(bridge.get_all_snippets().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() -> Result<()> {
        let (bridge, _rx) = bridge(vec![seed("omg", "oh my god", 0)]);

        assert!(bridge.delete_snippet("omg").await?.is_success());
        assert!(bridge.delete_snippet("omg").await?.is_success());
        assert!(bridge.get_all_snippets().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_paste_bumps_usage_and_fills_outbox() -> Result<()> {
        let (bridge, mut rx) = bridge(vec![seed("btw", "by the way", 0)]);

        bridge.paste_text("btw").await?;
        bridge.paste_text("nope").await?;

        assert_eq!(rx.try_recv().ok().as_deref(), Some("by the way"));
        assert!(rx.try_recv().is_err());
        assert_eq!(bridge.search_snippets("btw").await?[0].usage_count, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_translations_by_language() -> Result<()> {
        let (english, _rx) = bridge(vec![]);
        let t = english.get_translations().await?;
        assert_eq!(t.get("app_title").map(String::as_str), Some("Tylex Snippets"));
        assert_eq!(t.len(), ENGLISH.len());

        let config = Config {
            language: "fr".to_string(),
            ..Config::default()
        };
        let (french, _rx) = LocalBridge::new(&config);
        assert!(french.get_translations().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_store_file_is_shared_between_runs() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("nested").join("snippets.toml");
        let config = Config {
            snippets: vec![seed("btw", "by the way", 0), seed("omg", "oh my god", 0)],
            ..Config::default()
        };

        let (manage, _rx) = LocalBridge::open(&config, path.clone())?;
        manage
            .add_or_update_snippet(Snippet::new("sig", "Best,\nAlex"))
            .await?;
        manage.delete_snippet("omg").await?;

        let (search, mut outbox) = LocalBridge::open(&config, path.clone())?;
        let all = search.get_all_snippets().await?;
        assert_eq!(
            all,
            vec![Snippet::new("btw", "by the way"), Snippet::new("sig", "Best,\nAlex")]
        );
        search.paste_text("sig").await?;
        assert_eq!(outbox.try_recv().ok().as_deref(), Some("Best,\nAlex"));

        let (again, _rx) = LocalBridge::open(&config, path)?;
        assert_eq!(abbvs(&again.search_snippets("").await?), vec!["sig", "btw"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_rejected_upsert_does_not_create_store() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("snippets.toml");
        let (bridge, _rx) = LocalBridge::open(&Config::default(), path.clone())?;

        bridge.add_or_update_snippet(Snippet::new("", "x")).await?;
        assert!(!path.exists());
        Ok(())
    }

    #[test]
    fn test_malformed_store_is_an_error() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("snippets.toml");
        std::fs::write(&path, "snippets = 3")?;

        let err = match LocalBridge::open(&Config::default(), path) {
            Ok(_) => panic!("malformed store accepted"),
            Err(err) => err,
        };
        assert!(format!("{err:#}").contains("Failed to parse snippet store"));
        Ok(())
    }

    #[test]
    fn test_duplicate_seeds_keep_last() {
        let (bridge, _rx) = bridge(vec![seed("x", "first", 0), seed("x", "second", 2)]);
        let store = bridge.store.try_read().unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store[0].value, "second");
    }
}
