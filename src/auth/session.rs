//! My page guard and logout.
//!
//! The my page has exactly two states per load: a stored token whose user info could be
//! fetched, or anything else, which sends the browser back to the login page.

use dioxus_logger::tracing;

use crate::{
    auth::{AuthApi, BearerToken, Browser, SessionStore},
    config::ClientConfig,
    error::Error,
    model::user::UserInfoDto,
};

pub struct SessionService<'a, A: AuthApi, B: Browser, S: SessionStore> {
    api: &'a A,
    browser: &'a B,
    store: &'a S,
    config: &'a ClientConfig,
}

impl<'a, A: AuthApi, B: Browser, S: SessionStore> SessionService<'a, A, B, S> {
    pub fn new(api: &'a A, browser: &'a B, store: &'a S, config: &'a ClientConfig) -> Self {
        Self {
            api,
            browser,
            store,
            config,
        }
    }

    /// Resolve the user shown on the my page.
    ///
    /// Without a stored token the browser is sent to the login page and no request is made.
    /// With one, user info is fetched using it as a bearer credential; if that fails for any
    /// reason the user is logged out.
    ///
    /// # Returns
    /// - `Ok(UserInfoDto)` - Authenticated user to render
    /// - `Err(Error::Unauthenticated)` - No token stored, redirected to login
    /// - `Err(Error)` - User info request failed, logged out
    pub async fn guard_my_page(&self) -> Result<UserInfoDto, Error> {
        let Some(token) = BearerToken::from_store(self.store) else {
            tracing::debug!("No session token, redirecting to login");

            self.browser.navigate(&self.config.login_path);

            return Err(Error::Unauthenticated);
        };

        match self.api.user_info(&token).await {
            Ok(user_info) => Ok(user_info),
            Err(err) => {
                tracing::warn!("Failed to fetch user info, logging out: {}", err);

                self.logout();

                Err(err)
            }
        }
    }

    /// Remove the session token and return to the login page.
    pub fn logout(&self) {
        tracing::info!("Logging out");

        self.store.clear();
        self.browser.navigate(&self.config.login_path);
    }
}
