//! The `Authorization` cookie as a [`SessionStore`](crate::auth::SessionStore).
//!
//! Values are percent-encoded on write and decoded on read, so a token written by another
//! cookie library reads back the same.

/// Look up a cookie by name in a `document.cookie` style string.
pub fn read_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| match urlencoding::decode(value) {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => value.to_string(),
        })
        .filter(|value| !value.is_empty())
}

/// Cookie assignment string storing `value` under `name`.
pub fn write_cookie(name: &str, value: &str, path: &str, max_age: Option<u64>) -> String {
    let mut cookie = format!("{}={}; path={}", name, urlencoding::encode(value), path);

    if let Some(max_age) = max_age {
        cookie.push_str(&format!("; max-age={}", max_age));
    }

    cookie
}

/// Cookie assignment string expiring `name` on `path`.
pub fn remove_cookie(name: &str, path: &str) -> String {
    format!(
        "{}=; path={}; max-age=0; expires=Thu, 01 Jan 1970 00:00:00 GMT",
        name, path
    )
}

#[cfg(feature = "web")]
pub use web::CookieSessionStore;

#[cfg(feature = "web")]
mod web {
    use dioxus_logger::tracing;
    use wasm_bindgen::JsCast;
    use web_sys::HtmlDocument;

    use super::{read_cookie, remove_cookie, write_cookie};
    use crate::{auth::SessionStore, config::ClientConfig};

    /// [`SessionStore`] backed by `document.cookie`.
    pub struct CookieSessionStore {
        name: String,
        path: String,
    }

    impl CookieSessionStore {
        pub fn new(config: &ClientConfig) -> Self {
            Self {
                name: config.cookie_name.clone(),
                path: config.cookie_path.clone(),
            }
        }

        fn document() -> Option<HtmlDocument> {
            web_sys::window()?
                .document()?
                .dyn_into::<HtmlDocument>()
                .ok()
        }

        fn assign(&self, cookie: &str) {
            let Some(document) = Self::document() else {
                tracing::warn!("No document available to write cookie {}", self.name);
                return;
            };

            if let Err(e) = document.set_cookie(cookie) {
                tracing::error!("Failed to write cookie {}: {:?}", self.name, e);
            }
        }
    }

    impl SessionStore for CookieSessionStore {
        fn get(&self) -> Option<String> {
            let cookies = Self::document()?.cookie().ok()?;

            read_cookie(&cookies, &self.name)
        }

        fn set(&self, token: &str, max_age: Option<u64>) {
            self.assign(&write_cookie(&self.name, token, &self.path, max_age));
        }

        fn clear(&self) {
            self.assign(&remove_cookie(&self.name, &self.path));
        }
    }
}
