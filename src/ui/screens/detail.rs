//! Detail screen: the full record, rebuilt from the navigation payload.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::catalog::Coffee;
use crate::nav::{self, Route};
use crate::strings;
use crate::ui::app::App;
use crate::ui::layout::centered_rect;
use crate::ui::theme::{COFFEE_ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Route::Detail { payload } = app.route() else {
        return;
    };

    // Absent and malformed payloads render the same guard; deep-linking
    // here without a selection must not crash.
    match nav::decode_payload(payload.as_deref()) {
        None => {
            let paragraph = Paragraph::new(Line::from(Span::styled(
                strings::NO_SELECTION,
                Style::default().fg(MUTED_TEXT),
            )))
            .alignment(Alignment::Center);
            frame.render_widget(paragraph, centered_rect(70, 20, area));
        }
        Some(coffee) => {
            let paragraph = Paragraph::new(detail_lines(&coffee))
                .wrap(Wrap { trim: false })
                .scroll((app.detail_scroll(), 0))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(GLOBAL_BORDER)),
                );
            frame.render_widget(paragraph, area);
        }
    }
}

/// Full-record lines in display order: image URI, title, description,
/// ingredient sub-section. Each optional field fails soft: absent or empty
/// means the element (and, for ingredients, its label) is omitted entirely.
pub fn detail_lines(coffee: &Coffee) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if let Some(image) = coffee.image() {
        lines.push(Line::from(Span::styled(
            image.to_string(),
            Style::default().fg(MUTED_TEXT),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        coffee.title.clone(),
        Style::default()
            .fg(COFFEE_ACCENT)
            .add_modifier(Modifier::BOLD),
    )));

    if let Some(description) = coffee.description() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            description.to_string(),
            Style::default().fg(HEADER_TEXT),
        )));
    }

    if let Some(ingredients) = coffee.ingredients() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            strings::INGREDIENTS,
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        )));
        for ingredient in ingredients {
            lines.push(Line::from(Span::styled(
                format!("• {}", ingredient),
                Style::default().fg(HEADER_TEXT),
            )));
        }
    }

    lines
}
