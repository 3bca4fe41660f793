//! Full-page navigation

use clinic_core::Navigator;

/// Navigates by assigning `window.location`, reloading the application
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, path: &str) {
        if let Err(error) = gloo::utils::window().location().set_href(path) {
            tracing::error!(path, ?error, "Failed to navigate");
        }
    }
}
