use crate::app::{
    action::Action,
    state::{AppState, PanelFocus, SurfaceState},
    ui,
};
use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Rect, Size};

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.x + area.width && row >= area.y && row < area.y + area.height
}

/// Row index under the cursor for a bordered list whose first item sits
/// `header_rows` below the top border.
fn clicked_row(area: Rect, header_rows: u16, offset: usize, mouse: &MouseEvent) -> Option<usize> {
    let first = area.y + 1 + header_rows;
    let inner_right = area.x + area.width.saturating_sub(1);
    let inner_bottom = area.y + area.height.saturating_sub(1);
    if mouse.column <= area.x || mouse.column >= inner_right {
        return None;
    }
    if mouse.row < first || mouse.row >= inner_bottom {
        return None;
    }
    Some((mouse.row - first) as usize + offset)
}

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);

    match event {
        Event::Resize(w, h) => Some(Action::Resize(w, h)),
        Event::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return None;
            }
            if let Some(action) = app_state.keymap.get_action(key, app_state) {
                return Some(action);
            }
            match &app_state.surface {
                SurfaceState::Palette(_) => Some(Action::SearchInput(key)),
                SurfaceState::Panel(panel) => {
                    if panel.confirm.is_none() && panel.focus == PanelFocus::Form {
                        Some(Action::FormInput(key))
                    } else {
                        None
                    }
                }
            }
        }
        Event::Mouse(mouse) => match &app_state.surface {
            SurfaceState::Palette(palette) => {
                let layout = ui::palette_layout(area);
                match mouse.kind {
                    MouseEventKind::ScrollUp => Some(Action::SelectPrev),
                    MouseEventKind::ScrollDown => Some(Action::SelectNext),
                    MouseEventKind::Down(MouseButton::Left) => {
                        clicked_row(layout.results, 0, palette.list_state.offset(), &mouse)
                            .filter(|idx| *idx < palette.results.len())
                            .map(Action::CommitAt)
                    }
                    _ => None,
                }
            }
            SurfaceState::Panel(panel) => {
                // The confirmation modal swallows the mouse
                if panel.confirm.is_some() {
                    return None;
                }
                let layout = ui::panel_layout(area);
                match mouse.kind {
                    MouseEventKind::ScrollUp if contains(layout.table, mouse.column, mouse.row) => {
                        Some(Action::TablePrev)
                    }
                    MouseEventKind::ScrollDown
                        if contains(layout.table, mouse.column, mouse.row) =>
                    {
                        Some(Action::TableNext)
                    }
                    MouseEventKind::Down(MouseButton::Left) => {
                        if contains(layout.form, mouse.column, mouse.row) {
                            Some(Action::FocusForm)
                        } else {
                            clicked_row(layout.table, 1, panel.table_state.offset(), &mouse)
                                .filter(|idx| *idx < panel.table.rows().len())
                                .map(Action::TableSelect)
                        }
                    }
                    MouseEventKind::Down(MouseButton::Right) => {
                        clicked_row(layout.table, 1, panel.table_state.offset(), &mouse)
                            .and_then(|idx| panel.table.rows().get(idx))
                            .map(|row| Action::RequestDelete(row.abbv.clone()))
                    }
                    _ => None,
                }
            }
        },
        _ => None,
    }
}
