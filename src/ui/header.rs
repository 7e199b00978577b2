use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::router::Location;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, ACTIVE_LINK, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};

/// Entry of the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
    pub hotkey: char,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink {
        label: "Loading",
        path: "/",
        hotkey: '0',
    },
    NavLink {
        label: "Home",
        path: "/home",
        hotkey: '1',
    },
    NavLink {
        label: "About",
        path: "/about",
        hotkey: '2',
    },
    NavLink {
        label: "News",
        path: "/news",
        hotkey: '3',
    },
    NavLink {
        label: "Culture",
        path: "/culture",
        hotkey: '4',
    },
];

pub fn link_for_hotkey(hotkey: char) -> Option<&'static NavLink> {
    NAV_LINKS.iter().find(|link| link.hotkey == hotkey)
}

pub struct Header<'a> {
    active: &'a Location,
}

impl<'a> Header<'a> {
    pub fn new(active: &'a Location) -> Self {
        Self { active }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let active_style = Style::default()
            .fg(ACTIVE_LINK)
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD);

        let mut spans = vec![Span::styled(" ", text_style)];
        for (idx, link) in NAV_LINKS.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled("  │  ", separator_style));
            }
            let style = if self.active.pathname() == link.path {
                active_style
            } else {
                text_style
            };
            spans.push(Span::styled(format!("{} {}", link.hotkey, link.label), style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
