use crate::error::config::ConfigError;

/// Build-time environment variable overriding the backend base URL.
pub const API_BASE_URL_VAR: &str = "GATHERING_API_BASE_URL";

/// Client configuration shared by every page.
///
/// The defaults match the Gathering backend: an empty `api_base_url` makes every request
/// relative to the page origin, which is what the browser build wants.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub kakao_url_endpoint: String,
    pub kakao_callback_endpoint: String,
    pub user_info_endpoint: String,
    pub login_path: String,
    pub my_page_path: String,
    pub cookie_name: String,
    pub cookie_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            kakao_url_endpoint: "/api/v1/auth/kakao-url".to_string(),
            kakao_callback_endpoint: "/api/v1/users/kakao/callback".to_string(),
            user_info_endpoint: "/api/user-info".to_string(),
            login_path: "/login.html".to_string(),
            my_page_path: "/mypage.html".to_string(),
            cookie_name: "Authorization".to_string(),
            cookie_path: "/".to_string(),
        }
    }
}

impl ClientConfig {
    /// Build the configuration from the build environment.
    ///
    /// `GATHERING_API_BASE_URL` is read when the crate is compiled, so it also reaches the
    /// wasm bundle. It is optional; when set it must be an absolute URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_base_url(option_env!("GATHERING_API_BASE_URL"))
    }

    /// Default configuration with an optional, validated base URL override.
    pub fn from_base_url(base_url: Option<&str>) -> Result<Self, ConfigError> {
        let Some(base_url) = base_url.filter(|url| !url.is_empty()) else {
            return Ok(Self::default());
        };

        url::Url::parse(base_url).map_err(|e| ConfigError::InvalidEnvValue {
            var: API_BASE_URL_VAR.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self::default().with_api_base_url(base_url))
    }

    pub fn with_api_base_url(mut self, base_url: &str) -> Self {
        self.api_base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Absolute (or origin-relative) URL for an API path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}
