use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::router::{Location, Page};
use crate::ui::theme::{page_accent, MUTED_TEXT};

fn blurb(page: Page) -> &'static str {
    match page {
        Page::Home => "Welcome. Every page you visit is recorded below.",
        Page::About => "A small demo of routing with a session navigation log.",
        Page::News => "Nothing new yet. Navigate around to grow the history.",
        Page::Culture => "Paths repeat in the log only when you come back to them later.",
        Page::NotFound => "No route matches this path.",
        Page::Loading => "",
    }
}

/// Title and body text of a content page.
pub fn render_content(frame: &mut Frame<'_>, area: Rect, page: Page, location: &Location) {
    let accent = page_accent(page);
    let mut lines = vec![
        Line::styled(
            page.title(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled(blurb(page), Style::default().fg(MUTED_TEXT)),
    ];
    if page == Page::NotFound {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            format!("Requested: {}", location),
            Style::default().fg(accent),
        ));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}
