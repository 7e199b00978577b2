//! Static route table.
//!
//! Routes are declared as a tree of [`RouteDef`]s, the way the app composes
//! its screens: layouts wrap groups of pages, pages sit at the leaves. The
//! table is validated once at startup and never changes afterwards.

use std::collections::HashSet;

use thiserror::Error;

use crate::router::Location;

/// Pattern of the catch-all route.
pub const FALLBACK_PATTERN: &str = "*";

/// Position of a node in the validated table (depth-first declaration order).
pub type NodeId = usize;

/// Page units the router can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Loading,
    Home,
    About,
    News,
    Culture,
    NotFound,
}

impl Page {
    pub fn title(self) -> &'static str {
        match self {
            Page::Loading => "loading",
            Page::Home => "home",
            Page::About => "about",
            Page::News => "news",
            Page::Culture => "culture",
            Page::NotFound => "not found",
        }
    }
}

/// Shared layouts a group of routes can be nested under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    /// Mounts the history tracker and renders the matched child.
    Tracking,
    /// Renders the header, page title and history list around the child.
    Chrome,
}

impl LayoutKind {
    pub fn mounts_tracker(self) -> bool {
        matches!(self, LayoutKind::Tracking)
    }
}

/// Declarative route entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDef {
    Page { pattern: String, page: Page },
    Layout { kind: LayoutKind, children: Vec<RouteDef> },
}

impl RouteDef {
    pub fn page(pattern: impl Into<String>, page: Page) -> Self {
        RouteDef::Page {
            pattern: pattern.into(),
            page,
        }
    }

    /// Catch-all route used when no exact pattern matches.
    pub fn fallback(page: Page) -> Self {
        Self::page(FALLBACK_PATTERN, page)
    }

    pub fn layout(kind: LayoutKind, children: Vec<RouteDef>) -> Self {
        RouteDef::Layout { kind, children }
    }
}

/// Errors raised while validating a route table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("Invalid route pattern '{pattern}': {reason}")]
    InvalidPattern {
        pattern: String,
        reason: &'static str,
    },

    #[error("Route pattern '{pattern}' is declared more than once")]
    DuplicatePath { pattern: String },

    #[error("More than one fallback route declared in the same layout")]
    DuplicateFallback,

    /// A tracking layout inside another one would record every navigation twice.
    #[error("Tracking layout nested inside another tracking layout")]
    NestedTracker,
}

/// Layout on the path from the table root to a matched page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchedLayout {
    pub id: NodeId,
    pub kind: LayoutKind,
}

/// Result of resolving a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// Id of the matched page route; `None` when the table had no fallback.
    pub route_id: Option<NodeId>,
    /// Enclosing layouts, outermost first.
    pub layouts: Vec<MatchedLayout>,
    pub page: Page,
}

impl RouteMatch {
    fn unmatched() -> Self {
        Self {
            route_id: None,
            layouts: Vec::new(),
            page: Page::NotFound,
        }
    }

    pub fn has_chrome(&self) -> bool {
        self.layouts
            .iter()
            .any(|layout| layout.kind == LayoutKind::Chrome)
    }
}

#[derive(Debug)]
enum Pattern {
    Exact(String),
    Fallback,
}

#[derive(Debug)]
enum Node {
    Page {
        id: NodeId,
        pattern: Pattern,
        page: Page,
    },
    Layout {
        id: NodeId,
        kind: LayoutKind,
        children: Vec<Node>,
    },
}

/// Validated, immutable route table.
#[derive(Debug)]
pub struct RouteTable {
    nodes: Vec<Node>,
}

impl RouteTable {
    pub fn new(defs: Vec<RouteDef>) -> Result<Self, RouteError> {
        let mut validator = Validator::default();
        let nodes = validator.level(defs, false)?;
        tracing::debug!(nodes = validator.next_id, "route table validated");
        Ok(Self { nodes })
    }

    /// Resolve a location to its page and layout chain.
    ///
    /// Exact patterns win over the fallback regardless of declaration order.
    /// Without a fallback route an unknown path resolves to
    /// [`Page::NotFound`] with no layouts.
    pub fn resolve(&self, location: &Location) -> RouteMatch {
        let path = location.pathname();
        let mut chain = Vec::new();
        find(&self.nodes, &mut chain, &|pattern| {
            matches!(pattern, Pattern::Exact(exact) if exact == path)
        })
        .or_else(|| {
            chain.clear();
            find(&self.nodes, &mut chain, &|pattern| {
                matches!(pattern, Pattern::Fallback)
            })
        })
        .unwrap_or_else(RouteMatch::unmatched)
    }
}

fn find(
    nodes: &[Node],
    chain: &mut Vec<MatchedLayout>,
    accept: &dyn Fn(&Pattern) -> bool,
) -> Option<RouteMatch> {
    for node in nodes {
        match node {
            Node::Page { id, pattern, page } if accept(pattern) => {
                return Some(RouteMatch {
                    route_id: Some(*id),
                    layouts: chain.clone(),
                    page: *page,
                });
            }
            Node::Page { .. } => {}
            Node::Layout { id, kind, children } => {
                chain.push(MatchedLayout {
                    id: *id,
                    kind: *kind,
                });
                if let Some(found) = find(children, chain, accept) {
                    return Some(found);
                }
                chain.pop();
            }
        }
    }
    None
}

#[derive(Default)]
struct Validator {
    next_id: NodeId,
    patterns: HashSet<String>,
}

impl Validator {
    fn level(&mut self, defs: Vec<RouteDef>, tracked: bool) -> Result<Vec<Node>, RouteError> {
        let mut has_fallback = false;
        let mut nodes = Vec::with_capacity(defs.len());

        for def in defs {
            let id = self.next_id;
            self.next_id += 1;

            match def {
                RouteDef::Page { pattern, page } => {
                    let pattern = if pattern == FALLBACK_PATTERN {
                        if has_fallback {
                            return Err(RouteError::DuplicateFallback);
                        }
                        has_fallback = true;
                        Pattern::Fallback
                    } else {
                        validate_pattern(&pattern)?;
                        if !self.patterns.insert(pattern.clone()) {
                            return Err(RouteError::DuplicatePath { pattern });
                        }
                        Pattern::Exact(pattern)
                    };
                    nodes.push(Node::Page { id, pattern, page });
                }
                RouteDef::Layout { kind, children } => {
                    if tracked && kind.mounts_tracker() {
                        return Err(RouteError::NestedTracker);
                    }
                    let children = self.level(children, tracked || kind.mounts_tracker())?;
                    nodes.push(Node::Layout { id, kind, children });
                }
            }
        }

        Ok(nodes)
    }
}

fn validate_pattern(pattern: &str) -> Result<(), RouteError> {
    if !pattern.starts_with('/') {
        return Err(RouteError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: "must start with '/' or be '*'",
        });
    }
    if Location::parse(pattern).pathname() != pattern {
        return Err(RouteError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: "must be a normalized path without query, fragment or trailing '/'",
        });
    }
    Ok(())
}

/// The application's routes.
///
/// ```text
/// Tracking
/// ├── /          Loading
/// └── Chrome
///     ├── /home     Home
///     ├── /about    About
///     ├── /news     News
///     ├── /culture  Culture
///     └── *         NotFound
/// ```
pub fn app_routes() -> Vec<RouteDef> {
    vec![RouteDef::layout(
        LayoutKind::Tracking,
        vec![
            RouteDef::page("/", Page::Loading),
            RouteDef::layout(
                LayoutKind::Chrome,
                vec![
                    RouteDef::page("/home", Page::Home),
                    RouteDef::page("/about", Page::About),
                    RouteDef::page("/news", Page::News),
                    RouteDef::page("/culture", Page::Culture),
                    RouteDef::fallback(Page::NotFound),
                ],
            ),
        ],
    )]
}
