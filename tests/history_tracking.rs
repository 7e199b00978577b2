mod common;

use common::make_app;
use routetrail::history::{HistoryStore, Tracker};
use routetrail::router::{LayoutKind, Page, RouteDef, RouteError, RouteTable};

#[test]
fn append_skips_consecutive_duplicates() {
    let store = HistoryStore::new();
    for path in ["/a", "/a", "/b", "/a"] {
        store.append(path);
    }
    assert_eq!(store.get_history(), vec!["/a", "/b", "/a"]);
}

#[test]
fn get_history_returns_a_snapshot() {
    let store = HistoryStore::new();
    store.append("/home");
    let mut snapshot = store.get_history();
    snapshot.push("/tampered".to_string());
    assert_eq!(store.get_history(), vec!["/home"]);
}

#[test]
fn tracker_ignores_rerender_at_same_path() {
    let store = HistoryStore::new();
    let mut tracker = Tracker::new();
    assert!(tracker.observe("/news", &store));
    assert!(!tracker.observe("/news", &store));
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn startup_records_the_initial_path() {
    let (app, _rx) = make_app("/");
    assert_eq!(app.history().get_history(), vec!["/"]);
    assert_eq!(app.mounted_trackers(), 1);
}

#[tokio::test]
async fn loading_then_home_then_about() {
    let (mut app, _rx) = make_app("/");
    assert!(app.navigate("/home"));
    assert!(app.navigate("/about"));
    assert_eq!(app.history().get_history(), vec!["/", "/home", "/about"]);
}

#[tokio::test]
async fn each_navigation_appends_exactly_once() {
    let (mut app, _rx) = make_app("/home");
    let route = ["/about", "/news", "/culture", "/home", "/news"];
    for (idx, path) in route.iter().enumerate() {
        app.navigate(path);
        assert_eq!(app.history().len(), idx + 2);
        assert_eq!(app.history().get_history().last().map(String::as_str), Some(*path));
        assert_eq!(app.mounted_trackers(), 1);
    }
}

#[tokio::test]
async fn navigating_to_current_path_is_not_recorded() {
    let (mut app, _rx) = make_app("/news");
    assert!(!app.navigate("/news"));
    assert!(!app.navigate("/news/"));
    assert_eq!(app.history().get_history(), vec!["/news"]);
}

#[tokio::test]
async fn back_navigation_is_recorded_as_a_visit() {
    let (mut app, _rx) = make_app("/home");
    app.navigate("/about");
    assert!(app.back());
    assert_eq!(app.location().pathname(), "/home");
    assert_eq!(app.history().get_history(), vec!["/home", "/about", "/home"]);
    assert!(!app.back());
}

#[tokio::test]
async fn unknown_path_shows_not_found_and_is_recorded() {
    let (mut app, _rx) = make_app("/home");
    app.navigate("/nowhere?x=1");
    assert_eq!(app.route_match().page, Page::NotFound);
    assert!(app.route_match().has_chrome());
    assert_eq!(
        app.history().get_history().last().map(String::as_str),
        Some("/nowhere")
    );
}

#[tokio::test]
async fn loading_page_has_no_chrome() {
    let (app, _rx) = make_app("/");
    assert_eq!(app.route_match().page, Page::Loading);
    assert!(!app.route_match().has_chrome());
    assert!(app.loading_page().is_some());
}

#[test]
fn nested_tracking_layouts_are_rejected() {
    let defs = vec![RouteDef::layout(
        LayoutKind::Tracking,
        vec![RouteDef::layout(
            LayoutKind::Tracking,
            vec![RouteDef::page("/home", Page::Home)],
        )],
    )];
    assert_eq!(RouteTable::new(defs).err(), Some(RouteError::NestedTracker));
}

#[tokio::test]
async fn path_containing_scheme_marker_is_not_treated_as_url() {
    let (mut app, _rx) = make_app("/home");
    assert!(app.navigate("/docs/see:http://x"));
    assert_eq!(app.route_match().page, Page::NotFound);
    assert!(app.loading_page().is_none());
    assert_eq!(
        app.history().get_history(),
        vec!["/home", "/docs/see:http://x"]
    );
}
