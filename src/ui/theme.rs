use ratatui::style::Color;

use crate::router::Page;

pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const ACTIVE_LINK: Color = Color::Rgb(0x38, 0xbd, 0xf8);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);

pub const LOGO_CAT: Color = Color::Rgb(0xf5, 0x9e, 0x0b);
pub const LOGO_TIGER: Color = Color::Rgb(0xea, 0x58, 0x0c);
pub const DOT_ACTIVE: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const DOT_IDLE: Color = Color::Rgb(0x52, 0x52, 0x52);

/// Per-page accent colour used for titles.
pub fn page_accent(page: Page) -> Color {
    match page {
        Page::Home => Color::Rgb(0x22, 0xc5, 0x5e),
        Page::About => Color::Rgb(0x60, 0xa5, 0xfa),
        Page::News => Color::Rgb(0xfa, 0xcc, 0x15),
        Page::Culture => Color::Rgb(0xc0, 0x84, 0xfc),
        Page::NotFound => STATUS_ERROR,
        Page::Loading => HEADER_TEXT,
    }
}
