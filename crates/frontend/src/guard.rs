//! Route switch behind the navigation guard

use crate::auth::use_auth;
use crate::routes::Route;
use crate::views::switch;
use clinic_core::{NavigationDecision, NavigationGuard};
use yew::prelude::*;
use yew_router::prelude::*;

/// Renders the matched route once the guard lets the navigation through
///
/// Re-evaluated on every location change and every session change.
#[function_component(GuardedSwitch)]
pub fn guarded_switch() -> Html {
    let auth = use_auth();
    let location = use_location();
    let previous = use_mut_ref(|| String::from("/"));

    let to = location.map_or_else(|| String::from("/"), |l| l.path().to_string());
    let guard = NavigationGuard::new(auth.store.clone());
    let decision = guard.before_each(&previous.borrow(), &to);

    match decision {
        NavigationDecision::Proceed => {
            *previous.borrow_mut() = to;
            html! { <Switch<Route> render={switch} /> }
        }
        NavigationDecision::Redirect(target) => {
            let target = Route::from_name(target).unwrap_or(Route::Landing);
            html! { <Redirect<Route> to={target} /> }
        }
    }
}
