use crate::app::state::{AppState, LabelSlot, PanelFocus, SurfaceState};
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::modals::ConfirmModal;
use crate::components::result_list::ResultListView;
use crate::components::search_box::SearchBox;
use crate::components::snippet_form::SnippetFormView;
use crate::components::snippet_table::SnippetTableView;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

pub struct PaletteLayout {
    pub title: Rect,
    pub search: Rect,
    pub results: Rect,
    pub footer: Rect,
}

pub fn palette_layout(area: Rect) -> PaletteLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Search box
            Constraint::Min(0),    // Results
            Constraint::Length(1), // Footer
        ])
        .split(area);

    PaletteLayout {
        title: main[0],
        search: main[1],
        results: main[2],
        footer: main[3],
    }
}

pub struct PanelLayout {
    pub header: Rect,
    pub table: Rect,
    pub form: Rect,
    pub footer: Rect,
}

pub fn panel_layout(area: Rect) -> PanelLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(main[1]);

    PanelLayout {
        header: main[0],
        table: body[0],
        form: body[1],
        footer: main[2],
    }
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    let area = f.area();
    if area.width == 0 || area.height == 0 {
        return;
    }

    let AppState {
        surface,
        labels,
        theme,
        status,
        ..
    } = app_state;
    let (labels, theme) = (&*labels, &*theme);

    match surface {
        SurfaceState::Palette(palette) => {
            let layout = palette_layout(area);
            let count = palette.results.len();
            f.render_widget(
                Header {
                    theme,
                    title: labels.get(LabelSlot::AppTitle),
                    stats: format!(" {count} matches "),
                },
                layout.title,
            );
            f.render_widget(
                SearchBox {
                    theme,
                    text_area: &palette.search,
                    placeholder: labels.get(LabelSlot::SearchPlaceholder),
                },
                layout.search,
            );
            f.render_stateful_widget(
                ResultListView {
                    theme,
                    results: &palette.results,
                },
                layout.results,
                &mut palette.list_state,
            );
        }
        SurfaceState::Panel(panel) => {
            let layout = panel_layout(area);
            let count = panel.table.rows().len();
            f.render_widget(
                Header {
                    theme,
                    title: labels.get(LabelSlot::SettingsTitle),
                    stats: format!(" {count} snippets "),
                },
                layout.header,
            );
            f.render_stateful_widget(
                SnippetTableView {
                    theme,
                    table: &panel.table,
                    focused: panel.focus == PanelFocus::Table,
                    title: labels.get(LabelSlot::ManageSnippets),
                    abbv_header: labels.get(LabelSlot::AbbreviationLabel),
                    value_header: labels.get(LabelSlot::ExpansionLabel),
                    delete_label: labels.get(LabelSlot::DeleteButton),
                },
                layout.table,
                &mut panel.table_state,
            );
            f.render_widget(
                SnippetFormView {
                    theme,
                    form: &panel.form,
                    focused: panel.focus == PanelFocus::Form,
                    title: labels.get(LabelSlot::AddNewSnippet),
                    abbv_label: labels.get(LabelSlot::AbbreviationLabel),
                    value_label: labels.get(LabelSlot::ExpansionLabel),
                    save_label: labels.get(LabelSlot::SaveButton),
                },
                layout.form,
            );
            if let Some(confirm) = &panel.confirm {
                f.render_widget(
                    ConfirmModal {
                        theme,
                        confirm,
                        title: labels.get(LabelSlot::DeleteButton),
                    },
                    area,
                );
            }
        }
    }

    let footer_area = Rect {
        y: area.bottom().saturating_sub(1),
        height: 1.min(area.height),
        ..area
    };
    f.render_widget(
        Footer {
            theme,
            surface,
            status: status.as_ref(),
        },
        footer_area,
    );
}
