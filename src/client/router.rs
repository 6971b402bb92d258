use dioxus::prelude::*;

use crate::client::{
    components::{auth::AuthNavbar, Navbar},
    routes::{auth::MyPage, KakaoCallback, Login, NotFound},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::MyPage {})]

    #[layout(AuthNavbar)]

    #[route("/mypage.html")]
    MyPage {},

    #[end_layout]

    #[layout(Navbar)]

    #[route("/login.html")]
    Login {},

    #[route("/kakao/callback?:code")]
    KakaoCallback { code: String },

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
