use serde::{Deserialize, Serialize};

/// User information shown on the my page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfoDto {
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
}
