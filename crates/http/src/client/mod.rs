//! Clinic HTTP client

pub mod auth;
pub mod error;
pub mod interceptor;

use crate::config::ClientConfig;
use clinic_core::{AuthStore, Navigator};
use error::ClientError;
use interceptor::{BearerAuth, RequestInterceptor, ResponseInterceptor, UnauthorizedRedirect};
use reqwest::{Client, ClientBuilder, RequestBuilder, Response};
use std::rc::Rc;
use std::time::Duration;

/// Default user agent sent with every request
pub const DEFAULT_USER_AGENT: &str = concat!("clinic-client/", env!("CARGO_PKG_VERSION"));

/// Clinic API client
///
/// Every request sent through [`ClinicClient::send`] passes the installed
/// request interceptors before dispatch and the response interceptors after.
#[derive(Clone)]
pub struct ClinicClient {
    client: Client,
    base_url: String,
    request_interceptors: Vec<Rc<dyn RequestInterceptor>>,
    response_interceptors: Vec<Rc<dyn ResponseInterceptor>>,
}

impl ClinicClient {
    /// Create a client without interceptors
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a client bound to a session: bearer tokens come from `store`,
    /// and a 401 clears it and sends `navigator` to the login page.
    pub fn with_session(
        config: &ClientConfig,
        store: &AuthStore,
        navigator: Rc<dyn Navigator>,
    ) -> Result<Self, ClientError> {
        Self::builder()
            .config(config)
            .request_interceptor(BearerAuth::new(store.clone()))
            .response_interceptor(UnauthorizedRedirect::new(store.clone(), navigator))
            .build()
    }

    /// Create a new client builder
    pub fn builder() -> ClinicClientBuilder {
        ClinicClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder for a path under the base URL
    pub fn request(&self, method: reqwest::Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Build, intercept and dispatch a request
    ///
    /// Non-success statuses are returned as errors. Whatever the outcome, it
    /// reaches the caller unchanged after the response interceptors ran.
    pub async fn send(&self, request: RequestBuilder) -> Result<Response, ClientError> {
        let mut request = request.build()?;
        for interceptor in &self.request_interceptors {
            interceptor.on_request(&mut request)?;
        }

        tracing::debug!(method = %request.method(), url = %request.url(), "Sending request");

        let result = match self.client.execute(request).await {
            Ok(response) if response.status().is_success() => Ok(response),
            Ok(response) => {
                let status = response.status();
                let message = response.text().await.unwrap_or_else(|_| status.to_string());
                Err(ClientError::from_status(status, message))
            }
            Err(error) => Err(ClientError::Request(error)),
        };

        match &result {
            Ok(response) => {
                for interceptor in &self.response_interceptors {
                    interceptor.on_response(response);
                }
            }
            Err(error) => {
                tracing::debug!(%error, "Request failed");
                for interceptor in &self.response_interceptors {
                    interceptor.on_error(error);
                }
            }
        }

        result
    }

    /// Send a request and decode its JSON body
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = self.send(request).await?;
        Ok(response.json().await?)
    }
}

/// Builder for ClinicClient
#[derive(Default)]
pub struct ClinicClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    request_interceptors: Vec<Rc<dyn RequestInterceptor>>,
    response_interceptors: Vec<Rc<dyn ResponseInterceptor>>,
}

impl ClinicClientBuilder {
    /// Apply every option of a [`ClientConfig`]
    pub fn config(mut self, config: &ClientConfig) -> Self {
        self.base_url = Some(config.base_url.clone());
        self.timeout = config.timeout();
        self.user_agent.clone_from(&config.user_agent);
        self
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout (ignored in the browser)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Append a request interceptor; interceptors run in insertion order
    pub fn request_interceptor(mut self, interceptor: impl RequestInterceptor + 'static) -> Self {
        self.request_interceptors.push(Rc::new(interceptor));
        self
    }

    /// Append a response interceptor; interceptors run in insertion order
    pub fn response_interceptor(
        mut self,
        interceptor: impl ResponseInterceptor + 'static,
    ) -> Self {
        self.response_interceptors.push(Rc::new(interceptor));
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ClinicClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut client_builder = ClientBuilder::new();

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        #[cfg(target_arch = "wasm32")]
        let _ = self.timeout; // Timeouts not supported on WASM

        client_builder = client_builder.user_agent(
            self.user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        );

        let client = client_builder.build()?;

        Ok(ClinicClient {
            client,
            base_url,
            request_interceptors: self.request_interceptors,
            response_interceptors: self.response_interceptors,
        })
    }
}
