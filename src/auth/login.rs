use dioxus_logger::tracing;

use crate::auth::{AuthApi, Browser};

pub const KAKAO_URL_ERROR_MESSAGE: &str = "There was a problem loading the Kakao login URL.";

/// Kakao consent page URL handed out by the backend.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthorizationUrl(String);

impl AuthorizationUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// The URL exactly as the backend returned it.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Send the browser to the consent page, exactly as received.
    pub fn open(&self, browser: &impl Browser) {
        tracing::info!("Redirecting to Kakao login");

        browser.navigate(&self.0);
    }
}

pub struct LoginService<'a, A: AuthApi, B: Browser> {
    api: &'a A,
    browser: &'a B,
}

impl<'a, A: AuthApi, B: Browser> LoginService<'a, A, B> {
    pub fn new(api: &'a A, browser: &'a B) -> Self {
        Self { api, browser }
    }

    /// Fetch the authorization URL the login button should open.
    ///
    /// On failure the user is alerted and `None` is returned, leaving the button unbound.
    pub async fn init(&self) -> Option<AuthorizationUrl> {
        match self.api.kakao_url().await {
            Ok(url) => Some(AuthorizationUrl::new(url)),
            Err(err) => {
                tracing::warn!("Failed to fetch Kakao authorization URL: {}", err);

                self.browser.alert(KAKAO_URL_ERROR_MESSAGE);

                None
            }
        }
    }
}
