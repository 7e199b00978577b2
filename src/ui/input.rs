use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::address::AddressIntent;
use crate::ui::app::App;
use crate::ui::header::link_for_hotkey;
use crate::ui::history_panel::HistoryPanelIntent;

const PAGE_SCROLL: usize = 10;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.address_bar().is_editing() {
        handle_address_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char(':') | KeyCode::Char('g') => app.dispatch_address(AddressIntent::Open),
        KeyCode::Backspace | KeyCode::Char('b') => {
            app.back();
        }
        KeyCode::Char('r') => app.reload_config(),
        KeyCode::Up | KeyCode::Char('k') => {
            app.dispatch_history_panel(HistoryPanelIntent::ScrollUp(1))
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.dispatch_history_panel(HistoryPanelIntent::ScrollDown(1))
        }
        KeyCode::PageUp => app.dispatch_history_panel(HistoryPanelIntent::ScrollUp(PAGE_SCROLL)),
        KeyCode::PageDown => {
            app.dispatch_history_panel(HistoryPanelIntent::ScrollDown(PAGE_SCROLL))
        }
        KeyCode::Home => app.dispatch_history_panel(HistoryPanelIntent::Top),
        KeyCode::End => app.dispatch_history_panel(HistoryPanelIntent::Bottom),
        KeyCode::Char(ch) => {
            if let Some(link) = link_for_hotkey(ch) {
                app.navigate(link.path);
            }
        }
        _ => {}
    }
}

fn handle_address_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.dispatch_address(AddressIntent::Cancel),
        KeyCode::Enter => {
            app.submit_address();
        }
        KeyCode::Backspace => app.dispatch_address(AddressIntent::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_address(AddressIntent::Input(ch))
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
