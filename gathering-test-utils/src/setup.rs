use gathering::{
    auth::{CallbackService, LoginService, MemorySessionStore, SessionService},
    config::ClientConfig,
};

use crate::{MockAuthApi, RecordingBrowser};

/// Doubles for every auth seam, wired to the real services.
pub struct TestSetup {
    pub api: MockAuthApi,
    pub browser: RecordingBrowser,
    pub store: MemorySessionStore,
    pub config: ClientConfig,
}

impl TestSetup {
    pub fn login_service(&self) -> LoginService<'_, MockAuthApi, RecordingBrowser> {
        LoginService::new(&self.api, &self.browser)
    }

    pub fn callback_service(
        &self,
    ) -> CallbackService<'_, MockAuthApi, RecordingBrowser, MemorySessionStore> {
        CallbackService::new(&self.api, &self.browser, &self.store)
    }

    pub fn session_service(
        &self,
    ) -> SessionService<'_, MockAuthApi, RecordingBrowser, MemorySessionStore> {
        SessionService::new(&self.api, &self.browser, &self.store, &self.config)
    }
}
