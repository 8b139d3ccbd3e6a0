use super::config::Config;
use super::keymap::KeyMap;
use crate::theme::Theme;
use ratatui::widgets::{ListState, TableState};
use std::sync::Arc;
use std::time::{Duration, Instant};

pub mod confirm;
pub mod form;
pub mod input;
pub mod labels;
pub mod query;
pub mod results;
pub mod snippets;
pub mod status;

// Re-exports
pub use confirm::DeleteConfirm;
pub use form::{FormField, SnippetForm};
pub use input::AppTextArea;
pub use labels::{LabelSlot, Labels};
pub use query::QueryTracker;
pub use results::{PaletteMode, ResultList};
pub use snippets::SnippetTable;
pub use status::{StatusSeverity, StatusState};

/// Which controller this process is running.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Surface {
    Palette,
    Panel,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PanelFocus {
    Table,
    Form,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PaletteState<'a> {
    pub search: AppTextArea<'a>,
    pub results: ResultList,
    pub queries: QueryTracker,
    // Scroll position of the last rendered frame, used for mouse hit-testing
    pub list_state: ListState,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelState<'a> {
    pub table: SnippetTable,
    pub form: SnippetForm<'a>,
    pub confirm: Option<DeleteConfirm>,
    pub focus: PanelFocus,
    pub table_state: TableState,
}

impl Default for PanelState<'_> {
    fn default() -> Self {
        Self {
            table: SnippetTable::default(),
            form: SnippetForm::default(),
            confirm: None,
            focus: PanelFocus::Table,
            table_state: TableState::default(),
        }
    }
}

/// The model of whichever surface is active. A controller never holds both.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceState<'a> {
    Palette(PaletteState<'a>),
    Panel(PanelState<'a>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState<'a> {
    // --- Lifecycle & Status ---
    pub should_quit: bool,
    pub status: Option<StatusState>,
    pub status_clear_time: Option<Instant>,
    pub status_ttl: Duration,

    // --- Surface Model ---
    pub surface: SurfaceState<'a>,
    pub labels: Labels,
    pub translations_settled: bool,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub theme: Theme,
}

impl<'a> AppState<'a> {
    pub fn new(surface: Surface, config: &Config) -> Self {
        let mut state = Self::for_surface(surface);
        state.status_ttl = Duration::from_millis(config.status_ttl_ms);
        state
    }

    /// Constructs the controller state for `surface` with its declared label slots.
    pub fn for_surface(surface: Surface) -> Self {
        let (surface, labels) = match surface {
            Surface::Palette => (
                SurfaceState::Palette(PaletteState::default()),
                Labels::declare(LabelSlot::PALETTE),
            ),
            Surface::Panel => (
                SurfaceState::Panel(PanelState::default()),
                Labels::declare(LabelSlot::PANEL),
            ),
        };
        Self {
            should_quit: false,
            status: None,
            status_clear_time: None,
            status_ttl: Duration::from_millis(3000),
            surface,
            labels,
            translations_settled: false,
            keymap: Arc::new(KeyMap::default()),
            theme: Theme::default(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> Surface {
        match self.surface {
            SurfaceState::Palette(_) => Surface::Palette,
            SurfaceState::Panel(_) => Surface::Panel,
        }
    }

    pub fn palette(&self) -> Option<&PaletteState<'a>> {
        match &self.surface {
            SurfaceState::Palette(p) => Some(p),
            SurfaceState::Panel(_) => None,
        }
    }

    pub fn palette_mut(&mut self) -> Option<&mut PaletteState<'a>> {
        match &mut self.surface {
            SurfaceState::Palette(p) => Some(p),
            SurfaceState::Panel(_) => None,
        }
    }

    pub fn panel(&self) -> Option<&PanelState<'a>> {
        match &self.surface {
            SurfaceState::Panel(p) => Some(p),
            SurfaceState::Palette(_) => None,
        }
    }

    pub fn panel_mut(&mut self) -> Option<&mut PanelState<'a>> {
        match &mut self.surface {
            SurfaceState::Panel(p) => Some(p),
            SurfaceState::Palette(_) => None,
        }
    }

    pub fn set_status(&mut self, severity: StatusSeverity, message: impl Into<String>) {
        self.status = Some(StatusState::new(severity, message));
        self.status_clear_time = Some(Instant::now() + self.status_ttl);
    }
}
