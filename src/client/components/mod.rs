pub mod auth;
pub mod gathering_title;
pub mod kakao_login;
pub mod navbar;
pub mod page;

pub use gathering_title::GatheringTitleButton;
pub use kakao_login::KakaoLogin;
pub use navbar::Navbar;
pub use page::Page;
