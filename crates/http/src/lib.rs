//! Clinic HTTP client with session-aware interceptors

pub mod client;
pub mod config;
pub mod session;
pub mod types;

pub use client::error::ClientError;
pub use client::interceptor::{
    BearerAuth, RequestInterceptor, ResponseInterceptor, UnauthorizedRedirect,
};
pub use client::{ClinicClient, ClinicClientBuilder};
pub use config::ClientConfig;
pub use session::SessionService;
