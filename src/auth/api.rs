use async_trait::async_trait;
use dioxus_logger::tracing;

use crate::{
    auth::BearerToken,
    config::ClientConfig,
    error::Error,
    model::{
        api::{check_status, decode_authorization_url, decode_enveloped, LoginResponseDto},
        user::UserInfoDto,
    },
};

/// Backend endpoints used by the login and my page flows.
#[async_trait(?Send)]
pub trait AuthApi {
    /// `GET /api/v1/auth/kakao-url`
    async fn kakao_url(&self) -> Result<String, Error>;
    /// `GET /api/v1/users/kakao/callback?code={code}`
    async fn kakao_callback(&self, code: &str) -> Result<LoginResponseDto, Error>;
    /// `GET /api/user-info` with `Authorization: Bearer {token}`
    async fn user_info(&self, token: &BearerToken) -> Result<UserInfoDto, Error>;
}

/// [`AuthApi`] over HTTP.
///
/// Uses `reqwasm` in the browser and `reqwest` everywhere else; both only fetch the status
/// and body, decoding is shared.
pub struct HttpAuthApi {
    config: ClientConfig,
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl HttpAuthApi {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            #[cfg(not(target_arch = "wasm32"))]
            client: reqwest::Client::new(),
        }
    }

    /// Send a GET request and check its status, returning the body.
    async fn get(&self, url: &str, authorization: Option<&str>) -> Result<String, Error> {
        tracing::debug!("GET {}", url);

        let (status, body) = self.send(url, authorization).await?;
        check_status(status, &body)?;

        Ok(body)
    }

    #[cfg(target_arch = "wasm32")]
    async fn send(&self, url: &str, authorization: Option<&str>) -> Result<(u16, String), Error> {
        use reqwasm::http::Request;

        let mut request = Request::get(url);
        if let Some(authorization) = authorization {
            request = request.header("Authorization", authorization);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::RequestError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::RequestError(e.to_string()))?;

        Ok((status, body))
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn send(&self, url: &str, authorization: Option<&str>) -> Result<(u16, String), Error> {
        let mut request = self.client.get(url);
        if let Some(authorization) = authorization {
            request = request.header(reqwest::header::AUTHORIZATION, authorization);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::RequestError(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Error::RequestError(e.to_string()))?;

        Ok((status, body))
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn kakao_url(&self) -> Result<String, Error> {
        let url = self.config.endpoint(&self.config.kakao_url_endpoint);
        let body = self.get(&url, None).await?;

        decode_authorization_url(&body)
    }

    async fn kakao_callback(&self, code: &str) -> Result<LoginResponseDto, Error> {
        let url = format!(
            "{}?code={}",
            self.config.endpoint(&self.config.kakao_callback_endpoint),
            urlencoding::encode(code)
        );
        let body = self.get(&url, None).await?;

        // `data: null` is a successful exchange without a redirect
        let response: Option<LoginResponseDto> = decode_enveloped(&body)?;

        Ok(response.unwrap_or_default())
    }

    async fn user_info(&self, token: &BearerToken) -> Result<UserInfoDto, Error> {
        let url = self.config.endpoint(&self.config.user_info_endpoint);
        let body = self.get(&url, Some(&token.header_value())).await?;

        decode_enveloped(&body)
    }
}
