//! Navigation side effects

use std::cell::RefCell;
use std::rc::Rc;

/// Performs a full navigation to a path, discarding in-page state
pub trait Navigator {
    fn navigate(&self, path: &str);
}

impl<T: Navigator + ?Sized> Navigator for Rc<T> {
    fn navigate(&self, path: &str) {
        (**self).navigate(path);
    }
}

/// Navigator that only records requested paths
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    visited: Rc<RefCell<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every path navigated to, oldest first
    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.visited.borrow().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        tracing::debug!(path, "Navigation requested");
        self.visited.borrow_mut().push(path.to_string());
    }
}
