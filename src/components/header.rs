use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Single-line title bar: logo, surface title and a right-aligned counter.
pub struct Header<'a> {
    pub theme: &'a Theme,
    pub title: &'a str,
    pub stats: String,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let used = " TYLEX ".len() + self.title.chars().count() + 2 + self.stats.chars().count();
        let padding = (area.width as usize).saturating_sub(used + 1);
        let line = Line::from(vec![
            Span::styled(" TYLEX ", self.theme.header_logo),
            Span::styled(format!(" {} ", self.title), self.theme.header),
            Span::styled(" ".repeat(padding), self.theme.header),
            Span::styled(self.stats, self.theme.header),
        ]);
        Paragraph::new(line).style(self.theme.header).render(area, buf);
    }
}
