//! List screen: one card per record, plus the loading/error/empty notices.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::catalog::{CatalogState, Coffee};
use crate::strings;
use crate::ui::app::App;
use crate::ui::layout::centered_rect;
use crate::ui::theme::{
    COFFEE_ACCENT, ERROR_TEXT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, SELECTED_HIGHLIGHT,
};

/// Marker shown on cards that carry an image URI; the URI itself is only
/// rendered on the detail screen.
const IMAGE_MARKER: &str = "▣ ";

/// Description lines per card.
const DESCRIPTION_LINES: usize = 2;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    match app.catalog() {
        CatalogState::Loading => {
            render_notice(frame, area, strings::LOADING, MUTED_TEXT, None);
        }
        CatalogState::Error { message } => {
            render_notice(frame, area, message, ERROR_TEXT, Some(strings::RETRY_HINT));
        }
        CatalogState::Empty => {
            render_notice(frame, area, strings::EMPTY, MUTED_TEXT, Some(strings::RELOAD_HINT));
        }
        CatalogState::Ready { coffees, .. } => {
            render_cards(frame, area, coffees, app.selected());
        }
    }
}

/// Centered message for the non-list states, with the retry/reload action
/// hint underneath when there is one.
fn render_notice(frame: &mut Frame, area: Rect, message: &str, color: Color, action: Option<&str>) {
    let mut lines = vec![Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(color),
    ))];
    if let Some(action) = action {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            action.to_string(),
            Style::default().fg(COFFEE_ACCENT),
        )));
    }

    let target = centered_rect(70, 40, area);
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, target);
}

fn render_cards(frame: &mut Frame, area: Rect, coffees: &[Coffee], selected: usize) {
    let width = area.width.saturating_sub(2) as usize;
    let cards: Vec<Vec<Line>> = coffees
        .iter()
        .enumerate()
        .map(|(idx, coffee)| card_lines(coffee, width, idx == selected))
        .collect();
    let heights: Vec<usize> = cards.iter().map(Vec::len).collect();

    let viewport = area.height.saturating_sub(2) as usize;
    let offset = scroll_offset(&heights, selected, viewport);

    let lines: Vec<Line> = cards.into_iter().flatten().collect();
    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
        .scroll((offset as u16, 0));
    frame.render_widget(paragraph, area);
}

/// One card: title (with an image marker when the record has one) and the
/// description truncated to at most two display lines, then a separator.
fn card_lines(coffee: &Coffee, width: usize, selected: bool) -> Vec<Line<'static>> {
    let mut title_spans = Vec::new();
    if coffee.image().is_some() {
        title_spans.push(Span::styled(
            IMAGE_MARKER,
            Style::default().fg(COFFEE_ACCENT),
        ));
    }
    title_spans.push(Span::styled(
        coffee.title.clone(),
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    ));

    let mut lines = vec![Line::from(title_spans)];
    if let Some(description) = coffee.description() {
        for row in truncate_wrap(description, width, DESCRIPTION_LINES) {
            lines.push(Line::from(Span::styled(
                row,
                Style::default().fg(MUTED_TEXT),
            )));
        }
    }

    if selected {
        let highlight = Style::default().bg(SELECTED_HIGHLIGHT);
        lines = lines.into_iter().map(|line| line.style(highlight)).collect();
    }

    lines.push(Line::from(""));
    lines
}

/// Greedy word wrap into at most `max_lines` rows of `width` chars; the
/// last row gets an ellipsis when content is cut off.
fn truncate_wrap(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }

    let mut rows: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        // Hard-break words wider than a row.
        let pieces: Vec<String> = word
            .chars()
            .collect::<Vec<_>>()
            .chunks(width)
            .map(|chunk| chunk.iter().collect())
            .collect();

        for piece in pieces {
            let piece_len = piece.chars().count();
            let separator = usize::from(current_len > 0);
            if current_len + separator + piece_len > width && current_len > 0 {
                rows.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.push_str(&piece);
            current_len += piece_len;
        }
    }
    if current_len > 0 {
        rows.push(current);
    }

    if rows.len() > max_lines {
        rows.truncate(max_lines);
        if let Some(last) = rows.last_mut() {
            let mut truncated: String = last.chars().take(width.saturating_sub(1)).collect();
            truncated.push('…');
            *last = truncated;
        }
    }
    rows
}

/// First visible line such that the selected card stays fully in view.
fn scroll_offset(heights: &[usize], selected: usize, viewport: usize) -> usize {
    if viewport == 0 {
        return 0;
    }
    let start: usize = heights.iter().take(selected).sum();
    let end = start + heights.get(selected).copied().unwrap_or(0);
    if end <= viewport {
        0
    } else {
        end - viewport
    }
}
