//! Request and response interceptors
//!
//! Interceptors run synchronously around every dispatch: request interceptors
//! after the request is built and before it is sent, response interceptors
//! once the outcome is known. Neither kind can swallow an error.

use super::ClientError;
use clinic_core::{AuthStore, Navigator, RouteName};
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::{Request, Response};
use std::rc::Rc;

/// Decorates an outgoing request
pub trait RequestInterceptor {
    fn on_request(&self, request: &mut Request) -> Result<(), ClientError>;
}

/// Observes the outcome of a request
pub trait ResponseInterceptor {
    fn on_response(&self, _response: &Response) {}

    fn on_error(&self, error: &ClientError);
}

/// Attaches `Authorization: Bearer <token>` while a session is active
#[derive(Debug, Clone)]
pub struct BearerAuth {
    store: AuthStore,
}

impl BearerAuth {
    pub const fn new(store: AuthStore) -> Self {
        Self { store }
    }
}

impl RequestInterceptor for BearerAuth {
    fn on_request(&self, request: &mut Request) -> Result<(), ClientError> {
        let Some(token) = self.store.token() else {
            return Ok(());
        };

        let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| ClientError::InvalidHeader("authorization"))?;
        value.set_sensitive(true);
        request.headers_mut().insert(AUTHORIZATION, value);
        Ok(())
    }
}

/// Ends the session and reloads the login page when the server answers 401
pub struct UnauthorizedRedirect {
    store: AuthStore,
    navigator: Rc<dyn Navigator>,
}

impl UnauthorizedRedirect {
    pub fn new(store: AuthStore, navigator: Rc<dyn Navigator>) -> Self {
        Self { store, navigator }
    }
}

impl ResponseInterceptor for UnauthorizedRedirect {
    fn on_error(&self, error: &ClientError) {
        if !error.is_unauthorized() {
            return;
        }

        tracing::info!("Server rejected credentials, signing out");
        self.store.clear();
        self.navigator.navigate(RouteName::Login.path());
    }
}
