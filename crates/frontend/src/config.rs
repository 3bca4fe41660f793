//! Frontend configuration

use clinic_http::ClientConfig;

/// Application configuration
pub struct AppConfig;

impl AppConfig {
    /// API base address, overridable at build time through `CLINIC_API_URL`
    pub const API_BASE_URL: &'static str = match option_env!("CLINIC_API_URL") {
        Some(url) => url,
        None => clinic_http::config::DEFAULT_BASE_URL,
    };

    pub fn client_config() -> ClientConfig {
        ClientConfig::new(Self::API_BASE_URL)
    }
}
