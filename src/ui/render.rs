use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::history_list::render_history_list;
use crate::ui::layout::{centered_rect_by_size, chrome_regions, shell_regions};
use crate::ui::pages::{render_content, render_loading};
use crate::ui::theme::{HEADER_TEXT, MUTED_TEXT, POPUP_BORDER};

const ADDRESS_BAR_WIDTH: u16 = 60;
const ADDRESS_BAR_HEIGHT: u16 = 4;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (body, footer) = shell_regions(frame.area());
    frame.render_widget(Clear, body);

    let matched = app.route_match();
    if matched.has_chrome() {
        let (header, content, history) = chrome_regions(body);
        frame.render_widget(Header::new(app.location()).widget(), header);
        render_content(frame, content, matched.page, app.location());
        app.history().with_entries(|entries| {
            render_history_list(frame, history, entries, app.history_panel())
        });
    } else if let Some(loading) = app.loading_page() {
        render_loading(frame, body, loading);
    } else {
        render_content(frame, body, matched.page, app.location());
    }

    let footer_widget = Footer::new();
    frame.render_widget(
        footer_widget.widget(footer, app.status(), app.can_go_back()),
        footer,
    );

    if let Some(buffer) = app.address_bar().buffer() {
        draw_address_bar(frame, body, buffer);
    }
}

fn draw_address_bar(frame: &mut Frame<'_>, area: Rect, buffer: &str) {
    let popup = centered_rect_by_size(area, ADDRESS_BAR_WIDTH, ADDRESS_BAR_HEIGHT);
    if popup.width < 3 || popup.height < 3 {
        return;
    }
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Go to ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let inner = block.inner(popup);

    // Keep the tail of long input visible.
    let visible_width = inner.width.saturating_sub(1) as usize;
    let skip = buffer.chars().count().saturating_sub(visible_width);
    let visible: String = buffer.chars().skip(skip).collect();

    let lines = vec![
        Line::from(Span::styled(visible.clone(), Style::default().fg(HEADER_TEXT))),
        Line::styled("Enter: go │ Esc: cancel", Style::default().fg(MUTED_TEXT)),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), popup);

    if inner.width > 0 && inner.height > 0 {
        let x = inner.x + (visible.chars().count() as u16).min(inner.width.saturating_sub(1));
        frame.set_cursor_position((x, inner.y));
    }
}
