//! The view controller: page scaffold, bootstrap, and the refresh cycle.

use std::sync::Arc;

use crewfeed_api::FeedSource;
use crewfeed_page::{NodeId, Page, Tag};
use crewfeed_types::{Employee, EmployeeId, Post, PostId};

use crate::build::{self, DEFAULT_TEXT_CLASS, NO_SELECTION_TEXT};
use crate::fetch;
use crate::registry::ListenerRegistry;
use crate::toggle::{self, POST_ID_ATTR, ToggleOutcome};

/// Element id of the employee selector.
pub const SELECT_MENU_ID: &str = "selectMenu";

/// Fallback when a change event carries no usable value.
const DEFAULT_EMPLOYEE: EmployeeId = EmployeeId(1);

/// Where the controller is in the refresh cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    Loading,
}

/// One refresh cycle's identity.
///
/// Minted by [`ViewController::begin_refresh`]. A cycle whose sequence no
/// longer matches the controller's latest one has been superseded; its
/// results are discarded before they can touch the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshCycle {
    pub seq: u64,
    pub employee: EmployeeId,
}

/// How a refresh cycle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The region was rebuilt, with this many post articles (zero means the
    /// placeholder was rendered).
    Applied { articles: usize },
    /// A newer cycle started first; the page was left alone.
    Superseded,
}

/// Owns the page, the feed source handle, and the per-render listener
/// bindings; runs the fetch/render/refresh pipeline.
///
/// Refreshes are full discard-and-rebuild: there is no partial update path,
/// so the rendered region always reflects exactly one completed cycle.
pub struct ViewController {
    page: Page,
    source: Arc<dyn FeedSource>,
    selector: NodeId,
    region: NodeId,
    employees: Vec<Employee>,
    listeners: ListenerRegistry,
    state: ControllerState,
    refresh_seq: u64,
}

impl ViewController {
    /// Build the page scaffold: the employee selector and the main region
    /// holding the no-selection placeholder.
    pub fn new(source: Arc<dyn FeedSource>) -> Self {
        let mut page = Page::new();
        let root = page.root();

        let selector = page.create(Tag::Select);
        page.set_element_id(selector, SELECT_MENU_ID);
        page.append_child(root, selector);

        let region = page.create(Tag::Main);
        page.append_child(root, region);
        let placeholder = build::labeled_element(
            &mut page,
            Tag::Paragraph,
            NO_SELECTION_TEXT,
            Some(DEFAULT_TEXT_CLASS),
        );
        page.append_child(region, placeholder);

        Self {
            page,
            source,
            selector,
            region,
            employees: Vec::new(),
            listeners: ListenerRegistry::new(),
            state: ControllerState::Idle,
            refresh_seq: 0,
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn selector(&self) -> NodeId {
        self.selector
    }

    pub fn region(&self) -> NodeId {
        self.region
    }

    /// Employees currently backing the selector, in option order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Sequence of the most recently begun cycle.
    pub fn refresh_seq(&self) -> u64 {
        self.refresh_seq
    }

    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    /// Bootstrap: fetch the employee directory and populate the selector.
    ///
    /// A failed fetch leaves the selector empty. No posts are rendered here;
    /// the region stays on the placeholder until the first selection change.
    pub async fn init(&mut self) -> usize {
        let employees = fetch::employees(self.source.as_ref()).await;
        if let Some(fragment) = build::option_list(&mut self.page, employees.as_deref()) {
            self.page.append_child(self.selector, fragment);
        }
        self.employees = employees.unwrap_or_default();
        self.employees.len()
    }

    /// Phase one of a refresh: claim the next sequence slot, lock the
    /// selector, resolve the employee. A missing value falls back to
    /// employee 1.
    pub fn begin_refresh(&mut self, selected: Option<EmployeeId>) -> RefreshCycle {
        self.refresh_seq += 1;
        self.state = ControllerState::Loading;
        self.page.set_disabled(self.selector, true);
        RefreshCycle {
            seq: self.refresh_seq,
            employee: selected.unwrap_or(DEFAULT_EMPLOYEE),
        }
    }

    /// Phase two: fetch this cycle's posts and apply them.
    pub async fn complete_refresh(&mut self, cycle: RefreshCycle) -> RefreshOutcome {
        let source = Arc::clone(&self.source);
        let posts = fetch::posts_for_employee(source.as_ref(), Some(cycle.employee)).await;
        self.apply_refresh(cycle, posts).await
    }

    /// Apply fetched posts for a cycle, unless a newer cycle superseded it.
    ///
    /// On apply: listener bindings are cleared, the region is rebuilt from
    /// scratch (absent or empty posts render the placeholder), buttons are
    /// re-bound, and the selector is re-enabled whether or not the fetch
    /// succeeded. A superseded cycle leaves everything to its successor,
    /// the selector lock included.
    pub async fn apply_refresh(
        &mut self,
        cycle: RefreshCycle,
        posts: Option<Vec<Post>>,
    ) -> RefreshOutcome {
        if cycle.seq != self.refresh_seq {
            return RefreshOutcome::Superseded;
        }

        self.listeners.clear();
        self.page.clear_children(self.region);

        let source = Arc::clone(&self.source);
        let articles = match posts {
            Some(posts) if !posts.is_empty() => {
                let count = posts.len();
                if let Some(fragment) =
                    build::post_fragment(&mut self.page, source.as_ref(), Some(&posts)).await
                {
                    self.page.append_child(self.region, fragment);
                }
                count
            }
            _ => {
                let placeholder = build::labeled_element(
                    &mut self.page,
                    Tag::Paragraph,
                    NO_SELECTION_TEXT,
                    Some(DEFAULT_TEXT_CLASS),
                );
                self.page.append_child(self.region, placeholder);
                0
            }
        };

        self.bind_buttons();
        self.page.set_disabled(self.selector, false);
        self.state = ControllerState::Idle;
        RefreshOutcome::Applied { articles }
    }

    /// The whole cycle in one call, for callers with nothing to interleave.
    pub async fn handle_selection_change(
        &mut self,
        selected: Option<EmployeeId>,
    ) -> RefreshOutcome {
        let cycle = self.begin_refresh(selected);
        self.complete_refresh(cycle).await
    }

    /// Dispatch a click on one post's toggle button.
    ///
    /// Only registered post ids reach the toggle; anything else is ignored.
    pub fn handle_click(&mut self, post: PostId) -> Option<ToggleOutcome> {
        if !self.listeners.contains(post) {
            return None;
        }
        Some(toggle::toggle(&mut self.page, post))
    }

    /// Register a listener for every post button currently under the region.
    fn bind_buttons(&mut self) -> usize {
        let mut bound = 0;
        for button in self.page.find_all(self.region, Tag::Button) {
            if let Some(value) = self.page.attribute(button, POST_ID_ATTR) {
                if let Ok(raw) = value.parse::<u64>() {
                    self.listeners.register(PostId::new(raw), button);
                    bound += 1;
                }
            }
        }
        bound
    }
}
