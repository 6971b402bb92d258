use dioxus_logger::tracing;

use crate::{
    auth::{browser::resolve_redirect, AuthApi, BearerToken, Browser, SessionStore},
    error::Error,
};

pub const MISSING_REDIRECT_MESSAGE: &str = "No redirect URL was returned.";
pub const KAKAO_LOGIN_ERROR_MESSAGE: &str = "An error occurred during Kakao login.";

/// Lifetime of the tokens the backend issues, used when the client stores one itself.
pub const TOKEN_MAX_AGE_SECS: u64 = 60 * 60;

pub struct CallbackService<'a, A: AuthApi, B: Browser, S: SessionStore> {
    api: &'a A,
    browser: &'a B,
    store: &'a S,
}

impl<'a, A: AuthApi, B: Browser, S: SessionStore> CallbackService<'a, A, B, S> {
    pub fn new(api: &'a A, browser: &'a B, store: &'a S) -> Self {
        Self {
            api,
            browser,
            store,
        }
    }

    /// Exchange a Kakao authorization code and follow the backend's redirect.
    ///
    /// A bearer token in the response is stored before navigating. Any failure, including a
    /// response without a redirect, is alerted and nothing is navigated to.
    ///
    /// # Returns
    /// - `Ok(String)` - Absolute URL the browser was sent to
    /// - `Err(Error)` - The exchange failed or gave no usable redirect
    pub async fn handle_callback(&self, code: &str) -> Result<String, Error> {
        match self.exchange(code).await {
            Ok(target) => {
                tracing::info!("Kakao login succeeded, redirecting to {}", target);

                self.browser.navigate(&target);

                Ok(target)
            }
            Err(err) => {
                tracing::warn!("Kakao login failed: {}", err);

                let message = match err {
                    Error::MissingRedirectUrl => MISSING_REDIRECT_MESSAGE,
                    _ => KAKAO_LOGIN_ERROR_MESSAGE,
                };
                self.browser.alert(message);

                Err(err)
            }
        }
    }

    async fn exchange(&self, code: &str) -> Result<String, Error> {
        let response = self.api.kakao_callback(code).await?;

        if let Some(token) = response.bearer_token.as_deref().and_then(BearerToken::from_raw) {
            self.store.set(token.raw(), Some(TOKEN_MAX_AGE_SECS));
        }

        let redirect_url = response
            .redirect_url
            .filter(|url| !url.is_empty())
            .ok_or(Error::MissingRedirectUrl)?;

        resolve_redirect(&self.browser.origin(), &redirect_url)
    }
}
