use crate::app::state::AppTextArea;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};

/// The palette's query input. Shows the translated placeholder while empty.
pub struct SearchBox<'a> {
    pub theme: &'a Theme,
    pub text_area: &'a AppTextArea<'a>,
    pub placeholder: &'a str,
}

impl Widget for SearchBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.text_area.is_blank() {
            let line = Line::from(vec![
                Span::styled(" ", self.theme.cursor),
                Span::styled(self.placeholder, self.theme.placeholder),
            ]);
            buf.set_line(inner.x, inner.y, &line, inner.width);
        } else {
            Widget::render(self.text_area, inner, buf);
        }
    }
}
