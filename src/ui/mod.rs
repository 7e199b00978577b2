pub mod address;
pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod history_list;
pub mod history_panel;
pub mod input;
pub mod layout;
pub mod mount;
pub mod mvi;
pub mod navigation;
pub mod pages;
pub mod redirect;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
