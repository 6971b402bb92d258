use std::fmt;

use crate::auth::SessionStore;

pub const BEARER_PREFIX: &str = "Bearer ";

/// Raw session token as stored in the `Authorization` cookie.
///
/// Never empty. The `Bearer ` prefix is only added when building the header value.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Wrap a raw token, stripping a `Bearer ` prefix the backend may have included.
    pub fn from_raw(raw: &str) -> Option<Self> {
        let raw = raw.trim_start();
        let raw = raw.strip_prefix(BEARER_PREFIX).unwrap_or(raw).trim();

        if raw.is_empty() {
            None
        } else {
            Some(Self(raw.to_string()))
        }
    }

    pub fn from_store(store: &impl SessionStore) -> Option<Self> {
        store.get().as_deref().and_then(Self::from_raw)
    }

    pub fn raw(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` request header.
    pub fn header_value(&self) -> String {
        format!("{}{}", BEARER_PREFIX, self.0)
    }
}

// Keep tokens out of logs
impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(..)")
    }
}

/// Bearer credential for the stored token, or an empty string when there is none.
pub fn get_token(store: &impl SessionStore) -> String {
    BearerToken::from_store(store)
        .map(|token| token.header_value())
        .unwrap_or_default()
}
