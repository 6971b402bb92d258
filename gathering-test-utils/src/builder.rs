//! Declarative setup for auth flow tests.

use gathering::{
    auth::MemorySessionStore,
    config::ClientConfig,
    model::{api::LoginResponseDto, user::UserInfoDto},
};

use crate::{constant::TEST_ORIGIN, MockAuthApi, MockResponse, RecordingBrowser, TestSetup};

/// Builder for a [`TestSetup`].
///
/// Every endpoint answers `500` unless configured otherwise, and the session store starts
/// empty.
pub struct TestBuilder {
    origin: String,
    session_token: Option<String>,
    api: MockAuthApi,
    config: ClientConfig,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            origin: TEST_ORIGIN.to_string(),
            session_token: None,
            api: MockAuthApi::new(),
            config: ClientConfig::default(),
        }
    }

    pub fn with_origin(mut self, origin: &str) -> Self {
        self.origin = origin.to_string();
        self
    }

    /// Start with a token in the session store, as if the cookie were set.
    pub fn with_session_token(mut self, token: &str) -> Self {
        self.session_token = Some(token.to_string());
        self
    }

    pub fn with_kakao_url(mut self, url: &str) -> Self {
        self.api.kakao_url = MockResponse::Ok(url.to_string());
        self
    }

    pub fn with_kakao_url_response(mut self, response: MockResponse<String>) -> Self {
        self.api.kakao_url = response;
        self
    }

    pub fn with_callback_response(mut self, response: MockResponse<LoginResponseDto>) -> Self {
        self.api.kakao_callback = response;
        self
    }

    /// Callback exchange answering with only a redirect URL.
    pub fn with_callback_redirect(self, redirect_url: &str) -> Self {
        self.with_callback_response(MockResponse::Ok(LoginResponseDto {
            redirect_url: Some(redirect_url.to_string()),
            ..Default::default()
        }))
    }

    pub fn with_user_info(mut self, username: &str) -> Self {
        self.api.user_info = MockResponse::Ok(UserInfoDto {
            username: username.to_string(),
            email: None,
            nickname: None,
        });
        self
    }

    pub fn with_user_info_response(mut self, response: MockResponse<UserInfoDto>) -> Self {
        self.api.user_info = response;
        self
    }

    pub fn build(self) -> TestSetup {
        let store = match self.session_token {
            Some(token) => MemorySessionStore::with_token(&token),
            None => MemorySessionStore::new(),
        };

        TestSetup {
            api: self.api,
            browser: RecordingBrowser::new(&self.origin),
            store,
            config: self.config,
        }
    }
}
