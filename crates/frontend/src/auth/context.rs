//! Global authentication context and provider

use crate::config::AppConfig;
use crate::navigator::BrowserNavigator;
use crate::storage::browser_persistence;
use clinic_core::{AuthStore, Session};
use clinic_http::{ClientError, ClinicClient, SessionService};
use std::rc::Rc;
use yew::prelude::*;

/// Authentication context
///
/// Carries a snapshot of the session so consumers re-render whenever the
/// store changes.
#[derive(Clone)]
pub struct AuthContext {
    pub store: AuthStore,
    pub sessions: SessionService,
    pub session: Option<Session>,
}

impl PartialEq for AuthContext {
    fn eq(&self, other: &Self) -> bool {
        self.session == other.session
    }
}

struct Services {
    store: AuthStore,
    sessions: SessionService,
}

fn build_services() -> Result<Services, ClientError> {
    let store = AuthStore::hydrate(browser_persistence());
    let client = ClinicClient::with_session(
        &AppConfig::client_config(),
        &store,
        Rc::new(BrowserNavigator),
    )?;

    Ok(Services {
        sessions: SessionService::new(client, store.clone()),
        store,
    })
}

/// Auth provider props
#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

/// Auth provider component
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let services = use_memo((), |_| build_services());
    let session = {
        let services = services.clone();
        use_state(move || services.as_ref().as_ref().ok().and_then(|s| s.store.read()))
    };

    // Mirror store mutations into component state
    {
        let services = services.clone();
        let session = session.clone();
        use_effect_with((), move |_| {
            let subscription = services.as_ref().as_ref().ok().map(|services| {
                services
                    .store
                    .subscribe(move |current| session.set(current.cloned()))
            });

            move || drop(subscription)
        });
    }

    match services.as_ref() {
        Ok(services) => {
            let context = AuthContext {
                store: services.store.clone(),
                sessions: services.sessions.clone(),
                session: (*session).clone(),
            };

            html! {
                <ContextProvider<AuthContext> context={context}>
                    {props.children.clone()}
                </ContextProvider<AuthContext>>
            }
        }
        Err(error) => {
            tracing::error!(%error, "Failed to create API client");
            html! {
                <div class="min-h-screen flex items-center justify-center">
                    <p class="text-red-600">{format!("Unable to start: {error}")}</p>
                </div>
            }
        }
    }
}

/// Hook to use auth context
#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .expect("AuthContext not found. Make sure to wrap your component with AuthProvider")
}

/// Hook to get the current session
#[hook]
pub fn use_session() -> Option<Session> {
    let auth = use_auth();
    auth.session
}
