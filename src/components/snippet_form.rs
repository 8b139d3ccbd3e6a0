use crate::app::state::{FormField, SnippetForm};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};

pub struct SnippetFormView<'a> {
    pub theme: &'a Theme,
    pub form: &'a SnippetForm<'a>,
    pub focused: bool,
    pub title: &'a str,
    pub abbv_label: &'a str,
    pub value_label: &'a str,
    pub save_label: &'a str,
}

impl SnippetFormView<'_> {
    fn field_border(&self, field: FormField) -> Style {
        if self.focused && self.form.focus == field {
            self.theme.border_focus
        } else {
            self.theme.border
        }
    }
}

impl Widget for SnippetFormView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (border, title_style) = if self.focused {
            (self.theme.border_focus, self.theme.header_active)
        } else {
            (self.theme.border, self.theme.label)
        };
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(self.title, title_style),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Abbreviation label
                Constraint::Length(3), // Abbreviation input
                Constraint::Length(1), // Expansion label
                Constraint::Length(3), // Expansion input
                Constraint::Length(1), // Save hint
                Constraint::Min(0),    // Inline error
            ])
            .split(inner);

        let inputs = [
            (rows[0], rows[1], self.abbv_label, &self.form.abbv, FormField::Abbreviation),
            (rows[2], rows[3], self.value_label, &self.form.value, FormField::Expansion),
        ];
        for (label_area, input_area, label, text_area, field) in inputs {
            buf.set_line(
                label_area.x + 1,
                label_area.y,
                &Line::from(Span::styled(label, self.theme.label)),
                label_area.width.saturating_sub(1),
            );
            let input_block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(self.field_border(field));
            let input_inner = input_block.inner(input_area);
            input_block.render(input_area, buf);
            if input_inner.width > 0 && input_inner.height > 0 {
                Widget::render(text_area, input_inner, buf);
            }
        }

        let hint = if self.form.submitting {
            Line::from(Span::styled(" Saving...", self.theme.dimmed))
        } else {
            Line::from(vec![
                Span::raw(" "),
                Span::styled("Enter", self.theme.key_binding),
                Span::raw(format!(": {}  ", self.save_label)),
                Span::styled("Tab", self.theme.key_binding),
                Span::raw(": next field  "),
                Span::styled("Esc", self.theme.key_binding),
                Span::raw(": back"),
            ])
        };
        buf.set_line(rows[4].x, rows[4].y, &hint, rows[4].width);

        if let Some(error) = &self.form.error {
            if rows[5].height > 0 {
                let line = Line::from(Span::styled(format!(" {error}"), self.theme.status_error));
                buf.set_line(rows[5].x, rows[5].y, &line, rows[5].width);
            }
        }
    }
}
