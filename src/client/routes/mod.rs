pub mod auth;
pub mod kakao_callback;
pub mod login;
pub mod not_found;

pub use kakao_callback::KakaoCallback;
pub use login::Login;
pub use not_found::NotFound;
