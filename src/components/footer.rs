use crate::app::state::{PanelFocus, StatusSeverity, StatusState, SurfaceState};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct FooterItem {
    pub key: &'static str,
    pub desc: &'static str,
}

/// Bottom bar. A live status message wins over the key hints.
pub struct Footer<'a> {
    pub theme: &'a Theme,
    pub surface: &'a SurfaceState<'a>,
    pub status: Option<&'a StatusState>,
}

fn items(surface: &SurfaceState<'_>) -> Vec<FooterItem> {
    let item = |key, desc| FooterItem { key, desc };
    match surface {
        SurfaceState::Palette(_) => vec![
            item("↑/↓", "move"),
            item("Enter", "paste"),
            item("Esc", "close"),
        ],
        SurfaceState::Panel(panel) if panel.confirm.is_some() => {
            vec![item("y", "confirm"), item("n", "cancel")]
        }
        SurfaceState::Panel(panel) => match panel.focus {
            PanelFocus::Table => vec![
                item("j/k", "move"),
                item("e", "edit"),
                item("d", "delete"),
                item("a", "add"),
                item("q", "quit"),
            ],
            PanelFocus::Form => vec![
                item("Tab", "field"),
                item("Enter", "save"),
                item("C-n", "clear"),
                item("Esc", "table"),
            ],
        },
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;

        if let Some(status) = self.status {
            let style = match status.severity {
                StatusSeverity::Info => theme.status_info,
                StatusSeverity::Warning => theme.status_warn,
                StatusSeverity::Error => theme.status_error,
            };
            let time = status.timestamp.format("%H:%M:%S").to_string();
            let line = Line::from(vec![
                Span::styled(format!("  {time} "), theme.dimmed),
                Span::styled(format!(" {}  ", status.message), style),
            ]);
            Paragraph::new(line).style(theme.footer).render(area, buf);
            return;
        }

        let available_width = area.width.saturating_sub(2) as usize;
        let mut spans = vec![Span::raw(" ")];
        let mut current_width = 1;
        for item in items(self.surface) {
            let key_str = format!(" {} ", item.key);
            let desc_str = format!(" {} ", item.desc);
            let item_width = key_str.chars().count() + desc_str.len();
            if current_width + item_width + 1 > available_width {
                break;
            }
            spans.push(Span::styled(key_str, theme.key_binding));
            spans.push(Span::styled(desc_str, theme.dimmed));
            spans.push(Span::raw(" "));
            current_width += item_width + 1;
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}
