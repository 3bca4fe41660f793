//! Sign-in and sign-out against the auth store

use crate::client::ClinicClient;
use crate::client::error::ClientError;
use crate::types::{CurrentUser, LoginRequest, MessageResponse, RegisterRequest};
use clinic_core::{AuthStore, Role};

/// Connects the auth endpoints to an [`AuthStore`]
#[derive(Clone)]
pub struct SessionService {
    client: ClinicClient,
    store: AuthStore,
}

impl SessionService {
    pub const fn new(client: ClinicClient, store: AuthStore) -> Self {
        Self { client, store }
    }

    /// Log in and store the issued token with its role
    pub async fn sign_in(&self, username: &str, password: &str) -> Result<Role, ClientError> {
        let request = LoginRequest {
            username: username.trim().to_string(),
            password: password.to_string(),
        };
        let response = self.client.login(&request).await?;

        tracing::info!(username = %response.username, role = %response.role, "Signed in");
        self.store
            .set_auth(response.access_token, response.role.clone());
        Ok(response.role)
    }

    /// Register a patient account; does not sign in
    pub async fn register(&self, request: &RegisterRequest) -> Result<MessageResponse, ClientError> {
        self.client.register(request).await
    }

    pub async fn current_user(&self) -> Result<CurrentUser, ClientError> {
        self.client.me().await
    }

    pub fn sign_out(&self) {
        tracing::info!("Signed out");
        self.store.clear();
    }
}
