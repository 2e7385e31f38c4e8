//! Client-side router
//!
//! Owns the session history and maps its current entry to a [`Route`].
//! Every navigation is local: nothing is reloaded, the shell just observes
//! the new location.

mod history;
mod route;

pub use history::{History, MemoryHistory};
pub use route::{Route, ROUTE_PATTERNS};

/// Router over a history stack
#[derive(Debug)]
pub struct Router {
    history: Box<dyn History>,
}

impl Router {
    /// Create a router; the current history entry is made canonical in place
    pub fn new(mut history: Box<dyn History>) -> Self {
        let normalized = Route::canonical(history.location());
        if normalized != history.location() {
            history.replace(&normalized);
        }
        Self { history }
    }

    /// Router over a fresh in-memory history starting at `initial`
    pub fn memory(initial: &str) -> Self {
        Self::new(Box::new(MemoryHistory::new(initial)))
    }

    /// Current path
    pub fn location(&self) -> &str {
        self.history.location()
    }

    /// Route of the current path
    pub fn route(&self) -> Route {
        Route::recognize(self.location())
    }

    /// Navigate to `path`, adding a history entry
    ///
    /// Returns `false` (and adds nothing) when `path` names the current
    /// location, in whatever spelling.
    pub fn push(&mut self, path: &str) -> bool {
        let path = Route::canonical(path);
        if path == self.location() {
            return false;
        }
        tracing::debug!("history push {}", path);
        self.history.push(&path);
        true
    }

    /// Navigate to `path` without adding a history entry
    pub fn replace(&mut self, path: &str) {
        let path = Route::canonical(path);
        tracing::debug!("history replace {} -> {}", self.location(), path);
        self.history.replace(&path);
    }

    pub fn back(&mut self) -> bool {
        self.history.back()
    }

    pub fn forward(&mut self) -> bool {
        self.history.forward()
    }

    /// History entries, oldest first
    pub fn entries(&self) -> Vec<String> {
        self.history.entries()
    }
}
