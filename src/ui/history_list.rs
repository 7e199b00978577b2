//! Visited-paths list shown by the chrome layout.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::history::HistoryEntry;
use crate::ui::history_panel::HistoryPanelState;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT};

pub fn render_history_list(
    frame: &mut Frame<'_>,
    area: Rect,
    entries: &[HistoryEntry],
    panel: &HistoryPanelState,
) {
    let block = Block::default()
        .title(Span::styled(
            format!(" History ({}) ", entries.len()),
            Style::default().fg(HEADER_TEXT),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    if entries.is_empty() {
        let empty = Paragraph::new(Line::styled(
            "No pages visited yet",
            Style::default().fg(MUTED_TEXT),
        ));
        frame.render_widget(empty.block(block), area);
        return;
    }

    let number_width = entries.len().to_string().len();
    let items: Vec<ListItem> = entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>width$}. ", idx + 1, width = number_width),
                    Style::default().fg(HEADER_SEPARATOR),
                ),
                Span::styled(entry.path.as_str(), Style::default().fg(HEADER_TEXT)),
            ]))
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD),
    );
    let mut state = ListState::default().with_selected(panel.selected);
    frame.render_stateful_widget(list, area, &mut state);
}
