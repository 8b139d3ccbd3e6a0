use crate::app::state::ResultList;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, StatefulWidget, Widget},
};

const ABBV_WIDTH: usize = 12;

pub struct ResultListView<'a> {
    pub theme: &'a Theme,
    pub results: &'a ResultList,
}

impl StatefulWidget for ResultListView<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ListState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border);

        if self.results.is_empty() {
            let inner = block.inner(area);
            block.render(area, buf);
            if inner.height > 0 {
                let line = Line::from(Span::styled(
                    "  No snippets found.",
                    self.theme.list_item.add_modifier(Modifier::DIM),
                ));
                buf.set_line(inner.x, inner.y, &line, inner.width);
            }
            return;
        }

        let items: Vec<ListItem> = self
            .results
            .items()
            .iter()
            .map(|item| {
                let preview = item.value.lines().next().unwrap_or_default();
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:<ABBV_WIDTH$}", item.abbv), self.theme.abbv),
                    Span::styled(format!(" {preview}"), self.theme.value),
                    Span::styled(format!("  ×{}", item.usage_count), self.theme.usage),
                ]))
            })
            .collect();

        state.select(self.results.selected_index());
        let list = List::new(items)
            .block(block)
            .highlight_style(self.theme.list_selected)
            .highlight_symbol("> ");
        StatefulWidget::render(list, area, buf, state);
    }
}
