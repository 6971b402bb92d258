use dioxus_logger::tracing;

use crate::{
    auth::{CookieSessionStore, HttpAuthApi, WebBrowser},
    config::ClientConfig,
    error::Error,
};

/// Browser implementations of every auth seam, built fresh for each page load.
pub struct WebPlatform {
    pub config: ClientConfig,
    pub api: HttpAuthApi,
    pub browser: WebBrowser,
    pub store: CookieSessionStore,
}

impl WebPlatform {
    pub fn new() -> Result<Self, Error> {
        let config = ClientConfig::from_env()?;

        Ok(Self {
            api: HttpAuthApi::new(config.clone()),
            browser: WebBrowser,
            store: CookieSessionStore::new(&config),
            config,
        })
    }

    /// [`WebPlatform::new`], logging a misconfigured build instead of returning the error.
    pub fn load() -> Option<Self> {
        match Self::new() {
            Ok(platform) => Some(platform),
            Err(err) => {
                tracing::error!("Failed to load client configuration: {}", err);

                None
            }
        }
    }
}
