mod common;

use common::make_app;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use routetrail::ui::app::App;
use routetrail::ui::input::handle_key;
use routetrail::ui::render::draw;

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[tokio::test]
async fn chrome_pages_show_nav_and_history() {
    let (mut app, _rx) = make_app("/");
    app.navigate("/home");
    app.navigate("/about");
    let screen = render(&app);
    assert!(screen.contains("1 Home"));
    assert!(screen.contains("4 Culture"));
    assert!(screen.contains("History (3)"));
    assert!(screen.contains("/about"));
}

#[tokio::test]
async fn loading_page_has_no_nav_bar() {
    let (app, _rx) = make_app("/");
    let screen = render(&app);
    assert!(!screen.contains("1 Home"));
    assert!(!screen.contains("History ("));
}

#[tokio::test]
async fn not_found_shows_requested_path() {
    let (mut app, _rx) = make_app("/home");
    app.navigate("/lost-and-found");
    let screen = render(&app);
    assert!(screen.contains("/lost-and-found"));
}

#[tokio::test]
async fn address_bar_overlay_shows_buffer() {
    let (mut app, _rx) = make_app("/home");
    handle_key(&mut app, KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE));
    for ch in "news".chars() {
        handle_key(&mut app, KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE));
    }
    let screen = render(&app);
    assert!(screen.contains("Go to"));
    assert!(screen.contains("/news"));
}

#[tokio::test]
async fn tiny_terminal_does_not_panic() {
    let (app, _rx) = make_app("/home");
    let mut terminal = Terminal::new(TestBackend::new(4, 2)).unwrap();
    terminal.draw(|frame| draw(frame, &app)).unwrap();
}
