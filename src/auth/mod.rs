//! Login, OAuth callback and my page flows.
//!
//! The flows are plain services over three seams: [`AuthApi`] for the backend, [`Browser`]
//! for navigation and alerts, and [`SessionStore`] for the token cookie. The Dioxus pages in
//! [`crate::client`] wire them to the real browser; tests wire them to in-memory doubles.

pub mod api;
pub mod browser;
pub mod callback;
pub mod cookie;
pub mod login;
pub mod session;
pub mod store;
pub mod token;

pub use api::{AuthApi, HttpAuthApi};
pub use browser::Browser;
pub use callback::CallbackService;
pub use login::{AuthorizationUrl, LoginService};
pub use session::SessionService;
pub use store::{MemorySessionStore, SessionStore};
pub use token::{get_token, BearerToken};

#[cfg(feature = "web")]
pub use browser::WebBrowser;
#[cfg(feature = "web")]
pub use cookie::CookieSessionStore;
