use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub header_logo: Style,
    pub header: Style,
    pub header_active: Style,

    pub abbv: Style,
    pub value: Style,
    pub usage: Style,
    pub list_item: Style,
    pub list_selected: Style,

    pub label: Style,
    pub placeholder: Style,
    pub cursor: Style,

    pub status_info: Style,
    pub status_warn: Style,
    pub status_error: Style,

    pub footer: Style,
    pub key_binding: Style,
    pub dimmed: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Style::default().fg(Color::Rgb(80, 80, 80)),
            border_focus: Style::default().fg(Color::Cyan),

            header_logo: Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            header: Style::default().bg(Color::Rgb(40, 40, 40)).fg(Color::White),
            header_active: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),

            abbv: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            value: Style::default().fg(Color::Rgb(200, 200, 200)),
            usage: Style::default().fg(Color::Rgb(130, 130, 130)),
            list_item: Style::default().fg(Color::Rgb(200, 200, 200)),
            list_selected: Style::default()
                .bg(Color::Rgb(50, 50, 50))
                .add_modifier(Modifier::BOLD),

            label: Style::default().fg(Color::Rgb(200, 150, 100)), // Warm tan/orange
            placeholder: Style::default()
                .fg(Color::Rgb(110, 110, 110))
                .add_modifier(Modifier::ITALIC),
            cursor: Style::default().add_modifier(Modifier::REVERSED),

            status_info: Style::default().fg(Color::Green),
            status_warn: Style::default().fg(Color::Yellow),
            status_error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),

            footer: Style::default()
                .bg(Color::Rgb(30, 30, 30))
                .fg(Color::Rgb(150, 150, 150)),
            key_binding: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            dimmed: Style::default().add_modifier(Modifier::DIM),
        }
    }
}
