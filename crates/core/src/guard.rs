//! Role-based navigation guard

use crate::role::Role;
use crate::routes::{RouteName, PUBLIC_PATHS};
use crate::store::AuthStore;
use thiserror::Error;

/// Upper bound on chained redirects followed by [`NavigationGuard::settle`]
pub const MAX_REDIRECTS: usize = 8;

/// Outcome of a guarded navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDecision {
    Proceed,
    Redirect(RouteName),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GuardError {
    #[error("Navigation to {path} exceeded {} redirects", MAX_REDIRECTS)]
    RedirectLoop { path: String },
}

/// Decide a navigation to `to` for a session holding `role`
///
/// Rules apply in order: unauthenticated access to a non-public path goes to
/// login; a signed-in visit to login or register goes to the role's
/// dashboard; each role subtree is closed to every other role. Subtrees are
/// matched by plain string prefix, so `/administrator` falls under `/admin`.
pub fn evaluate(role: Option<&Role>, to: &str) -> NavigationDecision {
    let Some(role) = role else {
        if PUBLIC_PATHS.contains(&to) {
            return NavigationDecision::Proceed;
        }
        return NavigationDecision::Redirect(RouteName::Login);
    };

    if to == RouteName::Login.path() || to == RouteName::Register.path() {
        return NavigationDecision::Redirect(role.dashboard().unwrap_or(RouteName::Landing));
    }

    for owner in &Role::KNOWN {
        let Some(prefix) = owner.path_prefix() else {
            continue;
        };
        if to.starts_with(prefix) && role != owner {
            return NavigationDecision::Redirect(RouteName::Login);
        }
    }

    NavigationDecision::Proceed
}

/// Runs [`evaluate`] against the live session before each navigation
#[derive(Debug, Clone)]
pub struct NavigationGuard {
    store: AuthStore,
}

impl NavigationGuard {
    pub const fn new(store: AuthStore) -> Self {
        Self { store }
    }

    pub fn before_each(&self, from: &str, to: &str) -> NavigationDecision {
        let decision = evaluate(self.store.role().as_ref(), to);
        if let NavigationDecision::Redirect(target) = decision {
            tracing::debug!(from, to, redirect = target.path(), "Navigation redirected");
        }
        decision
    }

    /// Follow redirects from `to` until a path the guard lets through
    pub fn settle(&self, from: &str, to: &str) -> Result<String, GuardError> {
        let mut current = to;
        let mut previous = from;

        for _ in 0..=MAX_REDIRECTS {
            match self.before_each(previous, current) {
                NavigationDecision::Proceed => {
                    return Ok(current.to_string());
                }
                NavigationDecision::Redirect(target) => {
                    previous = current;
                    current = target.path();
                }
            }
        }

        Err(GuardError::RedirectLoop {
            path: to.to_string(),
        })
    }
}
