pub mod navbar;
pub mod username;

pub use navbar::AuthNavbar;
pub use username::Username;
