use crate::ui::theme::{COFFEE_ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    /// Title bar for the active screen; shows the refresh indicator while a
    /// pull-to-refresh is outstanding.
    pub fn widget(&self, title: &str, refreshing: Option<&str>) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled("☕", Style::default().fg(COFFEE_ACCENT)),
            Span::styled("  ", text_style),
            Span::styled(title.to_string(), text_style),
        ];
        if let Some(indicator) = refreshing {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                indicator.to_string(),
                Style::default().fg(MUTED_TEXT),
            ));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
