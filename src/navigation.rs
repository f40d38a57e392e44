//! Navigation stack.
//!
//! Screens never switch screens themselves; they return a
//! [`ScreenAction`](crate::screens::ScreenAction) and the app applies it to
//! the [`Navigator`]. The stack always holds the language list at its root.

use crate::catalog::LanguageRecord;

/// A destination in the app
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The grouped language list
    List,
    /// Details for one language
    Detail(LanguageRecord),
}

impl Route {
    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Route::List => "list",
            Route::Detail(_) => "detail",
        }
    }
}

/// Push/pop stack of routes with a fixed root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// A navigator showing the language list
    pub fn new() -> Self {
        Self {
            stack: vec![Route::List],
        }
    }

    /// The route currently on screen
    pub fn current(&self) -> &Route {
        // The root is never popped
        &self.stack[self.stack.len() - 1]
    }

    /// Show a new route on top of the current one
    pub fn push(&mut self, route: Route) {
        tracing::info!("Navigating {} -> {}", self.current().name(), route.name());
        self.stack.push(route);
    }

    /// Return to the previous route. Returns `None` at the root.
    pub fn pop(&mut self) -> Option<Route> {
        if self.stack.len() <= 1 {
            return None;
        }
        let popped = self.stack.pop();
        tracing::info!("Navigating back to {}", self.current().name());
        popped
    }

    /// Number of routes on the stack, including the root
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_at_root(&self) -> bool {
        self.depth() == 1
    }
}
