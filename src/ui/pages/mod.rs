//! Page units and their mount-time state.

mod content;
mod loading;

pub use content::render_content;
pub use loading::{render_loading, LoadingPage, Logo, AUTO_NAVIGATE_TARGET};

use std::time::Duration;

use crate::router::{NodeId, Page, RouteMatch};
use crate::ui::redirect::RedirectScheduler;

/// What a page needs when it is mounted.
pub struct PageContext<'a> {
    pub scheduler: &'a mut RedirectScheduler,
    pub is_development: bool,
    pub loading_delay: Duration,
}

pub enum PageState {
    Loading(LoadingPage),
    Static,
}

/// The page instance currently on screen.
pub struct MountedPage {
    pub route_id: Option<NodeId>,
    pub page: Page,
    pub state: PageState,
}

impl MountedPage {
    pub fn mount(matched: &RouteMatch, ctx: PageContext<'_>) -> Self {
        let state = match matched.page {
            Page::Loading => PageState::Loading(LoadingPage::mount(
                ctx.is_development,
                ctx.loading_delay,
                ctx.scheduler,
            )),
            _ => PageState::Static,
        };
        tracing::debug!(page = ?matched.page, route = ?matched.route_id, "page mounted");
        Self {
            route_id: matched.route_id,
            page: matched.page,
            state,
        }
    }

    pub fn loading(&self) -> Option<&LoadingPage> {
        match &self.state {
            PageState::Loading(loading) => Some(loading),
            PageState::Static => None,
        }
    }

    pub fn loading_mut(&mut self) -> Option<&mut LoadingPage> {
        match &mut self.state {
            PageState::Loading(loading) => Some(loading),
            PageState::Static => None,
        }
    }
}

impl Drop for MountedPage {
    fn drop(&mut self) {
        tracing::debug!(page = ?self.page, "page unmounted");
    }
}
