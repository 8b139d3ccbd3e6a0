use crate::app::state::SnippetTable;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Row, StatefulWidget, Table, TableState, Widget},
};

pub struct SnippetTableView<'a> {
    pub theme: &'a Theme,
    pub table: &'a SnippetTable,
    pub focused: bool,
    pub title: &'a str,
    pub abbv_header: &'a str,
    pub value_header: &'a str,
    pub delete_label: &'a str,
}

impl StatefulWidget for SnippetTableView<'_> {
    type State = TableState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut TableState) {
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
            .title_bottom(Line::from(vec![
                Span::raw(" "),
                Span::styled("e", self.theme.key_binding),
                Span::raw(": edit "),
                Span::styled("d/right-click", self.theme.key_binding),
                Span::raw(format!(": {} ", self.delete_label)),
                Span::styled("r", self.theme.key_binding),
                Span::raw(": reload "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);

        if self.table.rows().is_empty() {
            let inner = block.inner(area);
            block.render(area, buf);
            let text = if self.table.loaded {
                "  No snippets yet."
            } else {
                "  Loading..."
            };
            if inner.height > 0 {
                let line = Line::from(Span::styled(
                    text,
                    self.theme.list_item.add_modifier(Modifier::DIM),
                ));
                buf.set_line(inner.x, inner.y, &line, inner.width);
            }
            return;
        }

        let header = Row::new(vec![
            Cell::from(Span::styled(self.abbv_header, self.theme.label)),
            Cell::from(Span::styled(self.value_header, self.theme.label)),
        ]);

        let rows: Vec<Row> = self
            .table
            .rows()
            .iter()
            .map(|snippet| {
                Row::new(vec![
                    Cell::from(Span::styled(snippet.abbv.as_str(), self.theme.abbv)),
                    Cell::from(Span::styled(
                        snippet.value.lines().next().unwrap_or_default(),
                        self.theme.value,
                    )),
                ])
            })
            .collect();

        state.select(self.table.selected_index());
        let table = Table::new(rows, [Constraint::Length(14), Constraint::Min(10)])
            .header(header)
            .block(block)
            .row_highlight_style(self.theme.list_selected);
        StatefulWidget::render(table, area, buf, state);
    }
}
