//! Scripted [`AuthApi`] for flow tests.
//!
//! Each endpoint answers with whatever the test configured, and every call is recorded so
//! tests can assert on which requests were (or were not) made.

use std::cell::RefCell;

use async_trait::async_trait;
use gathering::{
    auth::{AuthApi, BearerToken},
    error::Error,
    model::{api::LoginResponseDto, user::UserInfoDto},
};

/// A request received by [`MockAuthApi`].
#[derive(Clone, Debug, PartialEq)]
pub enum ApiCall {
    KakaoUrl,
    KakaoCallback(String),
    /// Carries the `Authorization` header value that would have been sent
    UserInfo(String),
}

/// Scripted outcome of a single endpoint.
#[derive(Clone, Debug)]
pub enum MockResponse<T> {
    Ok(T),
    /// Non-success status code
    Status(u16),
    /// Transport failure
    Network,
}

impl<T: Clone> MockResponse<T> {
    fn respond(&self) -> Result<T, Error> {
        match self {
            Self::Ok(value) => Ok(value.clone()),
            Self::Status(status) => Err(Error::StatusError {
                status: *status,
                message: "Mock error".to_string(),
            }),
            Self::Network => Err(Error::RequestError("Connection refused".to_string())),
        }
    }
}

pub struct MockAuthApi {
    pub kakao_url: MockResponse<String>,
    pub kakao_callback: MockResponse<LoginResponseDto>,
    pub user_info: MockResponse<UserInfoDto>,
    calls: RefCell<Vec<ApiCall>>,
}

impl Default for MockAuthApi {
    fn default() -> Self {
        Self {
            kakao_url: MockResponse::Status(500),
            kakao_callback: MockResponse::Status(500),
            user_info: MockResponse::Status(500),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl MockAuthApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls received so far, in order.
    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }

    pub fn user_info_requests(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, ApiCall::UserInfo(_)))
            .count()
    }

    fn record(&self, call: ApiCall) {
        self.calls.borrow_mut().push(call);
    }
}

#[async_trait(?Send)]
impl AuthApi for MockAuthApi {
    async fn kakao_url(&self) -> Result<String, Error> {
        self.record(ApiCall::KakaoUrl);
        self.kakao_url.respond()
    }

    async fn kakao_callback(&self, code: &str) -> Result<LoginResponseDto, Error> {
        self.record(ApiCall::KakaoCallback(code.to_string()));
        self.kakao_callback.respond()
    }

    async fn user_info(&self, token: &BearerToken) -> Result<UserInfoDto, Error> {
        self.record(ApiCall::UserInfo(token.header_value()));
        self.user_info.respond()
    }
}
