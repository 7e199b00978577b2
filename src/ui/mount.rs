//! Mounted layout tree.
//!
//! Between navigations the tree keeps every layout the old and new routes
//! share, so state owned by a layout (the history tracker) survives moves
//! between its children. Layouts and pages that are no longer matched are
//! dropped, which is what cancels a pending auto-navigation.

use crate::history::{HistoryStore, Tracker};
use crate::router::{LayoutKind, Location, MatchedLayout, NodeId, RouteMatch};
use crate::ui::pages::{MountedPage, PageContext};

struct MountedLayout {
    id: NodeId,
    kind: LayoutKind,
    tracker: Option<Tracker>,
}

impl MountedLayout {
    fn mount(layout: &MatchedLayout) -> Self {
        tracing::debug!(layout = ?layout.kind, id = layout.id, "layout mounted");
        Self {
            id: layout.id,
            kind: layout.kind,
            tracker: layout.kind.mounts_tracker().then(Tracker::new),
        }
    }
}

/// Summary of one reconcile pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reconciled {
    pub layouts_mounted: usize,
    pub layouts_unmounted: usize,
    pub page_remounted: bool,
    /// Trackers that called `append` during this pass.
    pub tracker_appends: usize,
}

#[derive(Default)]
pub struct MountedTree {
    layouts: Vec<MountedLayout>,
    page: Option<MountedPage>,
}

impl MountedTree {
    /// Bring the tree in line with `matched`, then run the trackers.
    pub fn reconcile(
        &mut self,
        matched: &RouteMatch,
        location: &Location,
        history: &HistoryStore,
        ctx: PageContext<'_>,
    ) -> Reconciled {
        let kept = self
            .layouts
            .iter()
            .zip(&matched.layouts)
            .take_while(|(mounted, wanted)| mounted.id == wanted.id)
            .count();
        let layouts_unmounted = self.layouts.len() - kept;
        let layouts_mounted = matched.layouts.len() - kept;

        let page_remounted = layouts_unmounted > 0
            || layouts_mounted > 0
            || self.page.as_ref().map(|page| page.route_id) != Some(matched.route_id);

        // Unmount before mounting, innermost first.
        if page_remounted {
            self.page = None;
        }
        while self.layouts.len() > kept {
            if let Some(layout) = self.layouts.pop() {
                tracing::debug!(layout = ?layout.kind, id = layout.id, "layout unmounted");
            }
        }

        self.layouts
            .extend(matched.layouts[kept..].iter().map(MountedLayout::mount));
        if page_remounted {
            self.page = Some(MountedPage::mount(matched, ctx));
        }

        let mut tracker_appends = 0;
        for tracker in self.layouts.iter_mut().filter_map(|layout| layout.tracker.as_mut()) {
            if tracker.observe(location.pathname(), history) {
                tracker_appends += 1;
            }
        }

        Reconciled {
            layouts_mounted,
            layouts_unmounted,
            page_remounted,
            tracker_appends,
        }
    }

    pub fn page(&self) -> Option<&MountedPage> {
        self.page.as_ref()
    }

    pub fn page_mut(&mut self) -> Option<&mut MountedPage> {
        self.page.as_mut()
    }

    /// Trackers alive in the tree right now.
    pub fn tracker_count(&self) -> usize {
        self.layouts
            .iter()
            .filter(|layout| layout.tracker.is_some())
            .count()
    }

    /// Tear everything down (session end).
    pub fn unmount(&mut self) {
        self.page = None;
        self.layouts.clear();
    }
}
