use std::time::Duration;

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::router::Location;
use crate::ui::redirect::{PendingRedirect, RedirectScheduler};
use crate::ui::theme::{DOT_ACTIVE, DOT_IDLE, HEADER_TEXT, LOGO_CAT, LOGO_TIGER, MUTED_TEXT};

/// Where the loading page sends the user once its timer elapses.
pub const AUTO_NAVIGATE_TARGET: &str = "/home";

const DOTS: usize = 3;

const CAT_ART: &[&str] = &[r" /\_/\ ", r"( o.o )", r" > ^ < "];

const TIGER_ART: &[&str] = &[r"  /\___/\  ", r" ( =o.o= ) ", r" /|/|\|\|\ "];

/// Logo shown while loading; picked from the build mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Logo {
    Cat,
    Tiger,
}

impl Logo {
    pub fn for_mode(is_development: bool) -> Self {
        if is_development {
            Logo::Cat
        } else {
            Logo::Tiger
        }
    }

    pub fn art(self) -> &'static [&'static str] {
        match self {
            Logo::Cat => CAT_ART,
            Logo::Tiger => TIGER_ART,
        }
    }
}

/// Loading screen state: the pending auto-navigation and the dot animation.
pub struct LoadingPage {
    logo: Logo,
    redirect: Option<PendingRedirect>,
    frame: usize,
}

impl LoadingPage {
    pub fn mount(
        is_development: bool,
        delay: Duration,
        scheduler: &mut RedirectScheduler,
    ) -> Self {
        let redirect = scheduler.schedule(delay, Location::parse(AUTO_NAVIGATE_TARGET));
        Self {
            logo: Logo::for_mode(is_development),
            redirect: Some(redirect),
            frame: 0,
        }
    }

    pub fn logo(&self) -> Logo {
        self.logo
    }

    pub fn has_pending_redirect(&self) -> bool {
        self.redirect.is_some()
    }

    /// Consume the pending redirect if `generation` belongs to it.
    ///
    /// Returns `false` for timers of earlier mounts and for a second delivery.
    pub fn take_redirect(&mut self, generation: u64) -> bool {
        match &self.redirect {
            Some(pending) if pending.generation() == generation => {
                self.redirect = None;
                true
            }
            _ => false,
        }
    }

    pub fn on_tick(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }

    pub fn active_dot(&self) -> usize {
        self.frame % DOTS
    }
}

pub fn render_loading(frame: &mut Frame<'_>, area: Rect, page: &LoadingPage) {
    let logo_color = match page.logo() {
        Logo::Cat => LOGO_CAT,
        Logo::Tiger => LOGO_TIGER,
    };

    let mut lines: Vec<Line> = page
        .logo()
        .art()
        .iter()
        .map(|row| Line::styled(*row, Style::default().fg(logo_color)))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "Loading...",
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    ));
    lines.push(Line::styled(
        "Preparing the application...",
        Style::default().fg(MUTED_TEXT),
    ));
    lines.push(Line::styled("Please wait a moment", Style::default().fg(MUTED_TEXT)));
    lines.push(Line::from(""));

    let dots: Vec<Span> = (0..DOTS)
        .map(|idx| {
            let color = if idx == page.active_dot() {
                DOT_ACTIVE
            } else {
                DOT_IDLE
            };
            Span::styled(" ● ", Style::default().fg(color))
        })
        .collect();
    lines.push(Line::from(dots));

    let height = (lines.len() as u16).min(area.height);
    let top = area.y + area.height.saturating_sub(height) / 2;
    let content = Rect {
        x: area.x,
        y: top,
        width: area.width,
        height,
    };
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), content);
}
