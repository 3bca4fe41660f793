//! Authentication API client methods

use super::{ClientError, ClinicClient};
use crate::types::{CurrentUser, LoginRequest, LoginResponse, MessageResponse, RegisterRequest};
use reqwest::Method;

impl ClinicClient {
    /// Exchange credentials for an access token
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ClientError> {
        let req = self.request(Method::POST, "/auth/login").json(request);
        self.execute(req).await
    }

    /// Self-register a patient account
    pub async fn register(&self, request: &RegisterRequest) -> Result<MessageResponse, ClientError> {
        let req = self.request(Method::POST, "/auth/register").json(request);
        self.execute(req).await
    }

    /// Profile of the signed-in user
    pub async fn me(&self) -> Result<CurrentUser, ClientError> {
        let req = self.request(Method::GET, "/auth/me");
        self.execute(req).await
    }
}
