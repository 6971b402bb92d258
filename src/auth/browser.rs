use url::Url;

use crate::error::Error;

/// The parts of the browser window the auth flows touch.
pub trait Browser {
    /// Origin of the current page, e.g. `https://gathering.example`
    fn origin(&self) -> String;
    /// Full-page navigation to `url`
    fn navigate(&self, url: &str);
    /// Blocking, user-visible error notification
    fn alert(&self, message: &str);
}

/// Resolve a server-provided redirect against the page origin.
pub fn resolve_redirect(origin: &str, redirect_url: &str) -> Result<String, Error> {
    let target = Url::parse(origin)?.join(redirect_url)?;

    Ok(target.to_string())
}

#[cfg(feature = "web")]
pub use web::WebBrowser;

#[cfg(feature = "web")]
mod web {
    use dioxus_logger::tracing;

    use super::Browser;

    /// [`Browser`] backed by `window`.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct WebBrowser;

    impl Browser for WebBrowser {
        fn origin(&self) -> String {
            web_sys::window()
                .and_then(|window| window.location().origin().ok())
                .unwrap_or_default()
        }

        fn navigate(&self, url: &str) {
            let Some(window) = web_sys::window() else {
                tracing::error!("No window available to navigate to {}", url);
                return;
            };

            if let Err(e) = window.location().set_href(url) {
                tracing::error!("Failed to navigate to {}: {:?}", url, e);
            }
        }

        fn alert(&self, message: &str) {
            let Some(window) = web_sys::window() else {
                tracing::error!("No window available to show alert: {}", message);
                return;
            };

            if let Err(e) = window.alert_with_message(message) {
                tracing::error!("Failed to show alert {:?}: {:?}", message, e);
            }
        }
    }
}
