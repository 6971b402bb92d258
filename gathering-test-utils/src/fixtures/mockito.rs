//! Mock Gathering backend endpoints for [`HttpAuthApi`] tests.

use gathering::{auth::HttpAuthApi, config::ClientConfig};
use mockito::{Matcher, Mock, Server, ServerGuard};

/// A mock backend and an [`HttpAuthApi`] pointed at it.
pub struct HttpTestSetup {
    pub server: ServerGuard,
    pub config: ClientConfig,
    pub api: HttpAuthApi,
}

impl HttpTestSetup {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let config = ClientConfig::default().with_api_base_url(&server.url());
        let api = HttpAuthApi::new(config.clone());

        Self {
            server,
            config,
            api,
        }
    }

    /// Mock `GET /api/v1/auth/kakao-url`, expected to be called once.
    pub async fn mock_kakao_url(&mut self, status: usize, body: &str) -> Mock {
        self.server
            .mock("GET", self.config.kakao_url_endpoint.as_str())
            .with_status(status)
            .with_body(body)
            .expect(1)
            .create_async()
            .await
    }

    /// Mock `GET /api/v1/users/kakao/callback?code={code}`, expected to be called once.
    pub async fn mock_kakao_callback(
        &mut self,
        code: &str,
        status: usize,
        body: serde_json::Value,
    ) -> Mock {
        self.server
            .mock("GET", self.config.kakao_callback_endpoint.as_str())
            .match_query(Matcher::UrlEncoded("code".into(), code.into()))
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(1)
            .create_async()
            .await
    }

    /// Mock `GET /api/user-info` requiring `Authorization: Bearer {token}`.
    pub async fn mock_user_info(
        &mut self,
        token: &str,
        status: usize,
        body: serde_json::Value,
    ) -> Mock {
        self.server
            .mock("GET", self.config.user_info_endpoint.as_str())
            .match_header("authorization", format!("Bearer {}", token).as_str())
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(1)
            .create_async()
            .await
    }
}
