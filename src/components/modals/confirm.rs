use crate::app::state::DeleteConfirm;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::helpers::{centered_rect_fixed_height, dim_area, draw_drop_shadow};

/// Yes/no prompt shown before a snippet is deleted.
pub struct ConfirmModal<'a> {
    pub theme: &'a Theme,
    pub confirm: &'a DeleteConfirm,
    pub title: &'a str,
}

impl Widget for ConfirmModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_area(buf, area);
        let modal_area = centered_rect_fixed_height(50, 7, area);
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(self.title, self.theme.status_error),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(self.theme.status_error);

        let lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::raw("Delete "),
                Span::styled(format!("'{}'", self.confirm.abbv), self.theme.abbv),
                Span::raw("?"),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("y", self.theme.key_binding),
                Span::raw(": yes   "),
                Span::styled("n", self.theme.key_binding),
                Span::raw(": no"),
            ]),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .render(modal_area, buf);
    }
}
