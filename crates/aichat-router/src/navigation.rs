//! Navigation
//!
//! Ties a `RouteTable` to a history provider. The browser build lets the
//! frontend router own `window.history`; `MemoryHistory` covers everything
//! else (tests, host-side checks).

use crate::error::Result;
use crate::location::{Base, Location};
use crate::route::AppRoute;
use crate::table::RouteTable;

/// History provider: current location plus push/replace primitives
pub trait History {
    /// Current location, including base, query and hash
    fn current(&self) -> String;

    /// Add a new entry and make it current
    fn push(&mut self, href: &str);

    /// Overwrite the current entry
    fn replace(&mut self, href: &str);
}

/// In-memory history stack
#[derive(Clone, Debug)]
pub struct MemoryHistory {
    entries: Vec<String>,
    position: usize,
}

impl MemoryHistory {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            position: 0,
        }
    }

    /// Step back one entry. Returns false at the start of the stack.
    pub fn back(&mut self) -> bool {
        if self.position == 0 {
            return false;
        }
        self.position -= 1;
        true
    }

    /// Step forward one entry. Returns false at the end of the stack.
    pub fn forward(&mut self) -> bool {
        if self.position + 1 >= self.entries.len() {
            return false;
        }
        self.position += 1;
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History for MemoryHistory {
    fn current(&self) -> String {
        self.entries[self.position].clone()
    }

    fn push(&mut self, href: &str) {
        // Pushing drops any forward entries
        self.entries.truncate(self.position + 1);
        self.entries.push(href.to_string());
        self.position = self.entries.len() - 1;
    }

    fn replace(&mut self, href: &str) {
        self.entries[self.position] = href.to_string();
    }
}

/// What the rendering layer should show
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActiveRoute {
    /// A route matched; mount its view
    Matched(AppRoute),
    /// No route matched the path
    NotFound(String),
}

impl ActiveRoute {
    pub const fn route(&self) -> Option<AppRoute> {
        match self {
            Self::Matched(route) => Some(*route),
            Self::NotFound(_) => None,
        }
    }
}

/// Handle for a navigation that has started but not yet committed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Resolves the history's location against the route table
pub struct Navigator<H: History> {
    table: RouteTable,
    base: Base,
    history: H,
    active: ActiveRoute,
    next_ticket: u64,
    pending: Option<(Ticket, String)>,
}

impl<H: History> Navigator<H> {
    pub fn new(table: RouteTable, base: Base, history: H) -> Self {
        let mut navigator = Self {
            table,
            base,
            history,
            active: ActiveRoute::NotFound(String::new()),
            next_ticket: 0,
            pending: None,
        };
        navigator.start();
        navigator
    }

    /// Resolve the history's current location. Called on load and after the
    /// history moves on its own (back/forward).
    pub fn start(&mut self) -> ActiveRoute {
        let href = self.history.current();
        let active = match self.table.resolve_location(&href, &self.base) {
            Some(entry) => ActiveRoute::Matched(entry.route),
            None => {
                tracing::warn!(%href, "no route matches location");
                ActiveRoute::NotFound(Location::parse(&href).path)
            }
        };

        tracing::debug!(%href, ?active, "navigation settled");
        self.active = active.clone();
        active
    }

    /// Navigate to a route path (base is added here)
    pub fn push_path(&mut self, path: &str) -> ActiveRoute {
        let href = self.base.join(path);
        self.history.push(&href);
        self.pending = None;
        self.start()
    }

    /// Navigate by route name. Unknown names fail without touching history.
    pub fn push_name(&mut self, name: &str, params: &[(&str, &str)]) -> Result<ActiveRoute> {
        let path = self.table.navigate_by_name(name, params)?;
        Ok(self.push_path(&path))
    }

    /// Navigate to a typed route
    pub fn push_route(&mut self, route: AppRoute) -> ActiveRoute {
        let path = self.table.path_for(route);
        self.push_path(path)
    }

    /// Start a navigation whose view may take a while to mount. A later
    /// `begin` supersedes it.
    pub fn begin(&mut self, path: &str) -> Ticket {
        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        self.pending = Some((ticket, self.base.join(path)));
        tracing::debug!(?ticket, path, "navigation started");
        ticket
    }

    /// Commit a started navigation. Returns `None` if it was superseded.
    pub fn commit(&mut self, ticket: Ticket) -> Option<ActiveRoute> {
        if self.pending.as_ref().is_some_and(|(latest, _)| *latest == ticket) {
            if let Some((_, href)) = self.pending.take() {
                self.history.push(&href);
                return Some(self.start());
            }
        }

        tracing::debug!(?ticket, "discarding superseded navigation");
        None
    }

    pub const fn active(&self) -> &ActiveRoute {
        &self.active
    }

    pub const fn table(&self) -> &RouteTable {
        &self.table
    }

    pub const fn base(&self) -> &Base {
        &self.base
    }

    pub const fn history(&self) -> &H {
        &self.history
    }

    pub const fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }
}
