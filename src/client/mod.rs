pub mod app;
pub mod components;
#[cfg(feature = "web")]
pub mod platform;
pub mod router;
pub mod routes;

pub use app::App;
