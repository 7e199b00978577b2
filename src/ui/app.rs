use crate::config::{AppConfig, ConfigStore};
use crate::history::{HistoryStore, HistoryWatcher};
use crate::router::{Location, RouteMatch, RouteTable};
use crate::ui::address::{AddressBarState, AddressIntent, AddressReducer};
use crate::ui::history_panel::{HistoryPanelIntent, HistoryPanelReducer, HistoryPanelState};
use crate::ui::mount::MountedTree;
use crate::ui::mvi::Reducer;
use crate::ui::navigation::{NavigationIntent, NavigationReducer, NavigationState};
use crate::ui::pages::{LoadingPage, MountedPage, PageContext};
use crate::ui::redirect::RedirectScheduler;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Footer message after a user-triggered action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Info(String),
    Error(String),
}

/// One application session.
///
/// Owns the history log for its whole lifetime: the log is created empty
/// here and dropped with the session.
pub struct App {
    should_quit: bool,
    config: ConfigStore,
    settings: AppConfig,
    routes: RouteTable,
    /// Current location and back stack (MVI pattern).
    navigation: NavigationState,
    route_match: RouteMatch,
    tree: MountedTree,
    history: HistoryStore,
    history_watcher: HistoryWatcher,
    /// Scroll state of the visited-paths list (MVI pattern).
    history_panel: HistoryPanelState,
    /// Go-to-path bar (MVI pattern).
    address_bar: AddressBarState,
    redirects: RedirectScheduler,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(config: ConfigStore, routes: RouteTable, redirects: RedirectScheduler) -> Self {
        let settings = config.get().app;
        let start = Location::parse(&settings.initial_path);
        let route_match = routes.resolve(&start);
        let history = HistoryStore::new();
        let history_watcher = history.subscribe();

        let mut app = Self {
            should_quit: false,
            config,
            settings,
            routes,
            navigation: NavigationState::starting_at(start),
            route_match,
            tree: MountedTree::default(),
            history,
            history_watcher,
            history_panel: HistoryPanelState::default(),
            address_bar: AddressBarState::default(),
            redirects,
            status: None,
        };
        app.sync_route();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn location(&self) -> &Location {
        &self.navigation.current
    }

    pub fn route_match(&self) -> &RouteMatch {
        &self.route_match
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn settings(&self) -> &AppConfig {
        &self.settings
    }

    pub fn can_go_back(&self) -> bool {
        self.navigation.can_go_back()
    }

    /// Number of history trackers currently mounted.
    pub fn mounted_trackers(&self) -> usize {
        self.tree.tracker_count()
    }

    pub fn loading_page(&self) -> Option<&LoadingPage> {
        self.tree.page().and_then(MountedPage::loading)
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    // ========================================================================
    // Navigation (MVI pattern)
    // ========================================================================

    /// Navigate to a user-supplied path. Returns whether the location changed.
    pub fn navigate(&mut self, target: &str) -> bool {
        self.navigate_to(Location::parse(target))
    }

    pub fn navigate_to(&mut self, location: Location) -> bool {
        self.dispatch_navigation(NavigationIntent::Push(location))
    }

    pub fn back(&mut self) -> bool {
        self.dispatch_navigation(NavigationIntent::Back)
    }

    /// Called when a loading page timer fires.
    ///
    /// Only the timer of the loading page mounted right now may navigate,
    /// and only once.
    pub fn on_auto_navigate(&mut self, generation: u64, target: Location) -> bool {
        let accepted = self
            .tree
            .page_mut()
            .and_then(MountedPage::loading_mut)
            .is_some_and(|loading| loading.take_redirect(generation));
        if !accepted {
            tracing::debug!(generation, "stale auto-navigation ignored");
            return false;
        }
        tracing::info!(path = %target, "auto-navigating");
        self.navigate_to(target)
    }

    fn dispatch_navigation(&mut self, intent: NavigationIntent) -> bool {
        let before = self.navigation.current.clone();
        dispatch_mvi!(self, navigation, NavigationReducer, intent);
        if self.navigation.current == before {
            return false;
        }
        tracing::debug!(from = %before, to = %self.navigation.current, "navigation");
        self.sync_route();
        true
    }

    /// Resolve the current location and remount whatever changed.
    fn sync_route(&mut self) {
        let location = self.navigation.current.clone();
        self.route_match = self.routes.resolve(&location);
        let ctx = PageContext {
            scheduler: &mut self.redirects,
            is_development: self.settings.is_development(),
            loading_delay: self.settings.loading_delay(),
        };
        let report = self
            .tree
            .reconcile(&self.route_match, &location, &self.history, ctx);
        tracing::info!(
            path = %location,
            page = ?self.route_match.page,
            remounted = report.page_remounted,
            appended = report.tracker_appends,
            "route resolved"
        );
        self.sync_history_panel();
    }

    // ========================================================================
    // History panel (MVI pattern)
    // ========================================================================

    pub fn history_panel(&self) -> &HistoryPanelState {
        &self.history_panel
    }

    pub fn dispatch_history_panel(&mut self, intent: HistoryPanelIntent) {
        dispatch_mvi!(self, history_panel, HistoryPanelReducer, intent);
    }

    fn sync_history_panel(&mut self) {
        if !self.history_watcher.has_changed() {
            return;
        }
        let len = self.history_watcher.mark_seen();
        self.dispatch_history_panel(HistoryPanelIntent::Sync { len });
    }

    // ========================================================================
    // Address bar (MVI pattern)
    // ========================================================================

    pub fn address_bar(&self) -> &AddressBarState {
        &self.address_bar
    }

    pub fn dispatch_address(&mut self, intent: AddressIntent) {
        dispatch_mvi!(self, address_bar, AddressReducer, intent);
    }

    /// Close the address bar and navigate to what was typed.
    pub fn submit_address(&mut self) -> bool {
        // Extract the buffer before the state transition drops it.
        let Some(input) = self.address_bar.buffer().map(str::to_string) else {
            return false;
        };
        self.dispatch_address(AddressIntent::Submit);
        if input.trim().is_empty() {
            return false;
        }
        self.navigate(&input)
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    pub fn on_tick(&mut self) {
        if let Some(loading) = self.tree.page_mut().and_then(MountedPage::loading_mut) {
            loading.on_tick();
        }
    }

    /// Re-read the config file. Applies to pages mounted afterwards.
    pub fn reload_config(&mut self) {
        match self.config.reload() {
            Ok(()) => {
                self.settings = self.config.get().app;
                self.status = Some(StatusMessage::Info(format!(
                    "Config reloaded from {}",
                    self.config.path().display()
                )));
            }
            Err(err) => {
                tracing::warn!(error = %err, "config reload failed");
                self.status = Some(StatusMessage::Error(err.to_string()));
            }
        }
    }

    /// End the session: unmount everything, cancelling pending timers.
    pub fn shutdown(&mut self) {
        self.tree.unmount();
        tracing::info!(visited = self.history.len(), "session ended");
    }
}
